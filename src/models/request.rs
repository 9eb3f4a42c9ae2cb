use serde::{Deserialize, Serialize};

/// Inbound payload of `POST /api/explain`. `language` is free text chosen by
/// the client UI; the server tolerates any tag or its absence. `code`
/// defaults to empty when absent so the missing-field case reaches
/// validation and gets the same error body as blank code.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExplainRequest {
    #[serde(default)]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub language: Option<String>,
}
