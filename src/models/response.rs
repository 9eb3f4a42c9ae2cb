use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExplainResponse {
    pub success: bool,
    pub explanation: String,
    pub model: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub details: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
    pub env: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EndpointMap {
    pub health: String,
    pub explain: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: EndpointMap,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NotFoundResponse {
    pub error: String,
    pub path: String,
    pub method: String,
}
