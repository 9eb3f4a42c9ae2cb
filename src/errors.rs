use std::fmt;

#[derive(Debug, Clone)]
pub enum ExplainerError {
    ValidationError(String),
    UpstreamError(String),
    ParseError(String),
    ConfigError(String),
    NetworkError(String),
    RateLimitError(String),
}

impl fmt::Display for ExplainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplainerError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ExplainerError::UpstreamError(msg) => write!(f, "Upstream error: {}", msg),
            ExplainerError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ExplainerError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            ExplainerError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ExplainerError::RateLimitError(msg) => write!(f, "Rate limit error: {}", msg),
        }
    }
}

impl std::error::Error for ExplainerError {}

impl From<String> for ExplainerError {
    fn from(msg: String) -> Self {
        ExplainerError::ValidationError(msg)
    }
}

impl From<&str> for ExplainerError {
    fn from(msg: &str) -> Self {
        ExplainerError::ValidationError(msg.to_string())
    }
}

impl From<reqwest::Error> for ExplainerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            ExplainerError::NetworkError(err.to_string())
        } else {
            ExplainerError::UpstreamError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ExplainerError {
    fn from(err: serde_json::Error) -> Self {
        ExplainerError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for ExplainerError {
    fn from(err: std::io::Error) -> Self {
        ExplainerError::ConfigError(err.to_string())
    }
}
