use serde::{Deserialize, Serialize};

use crate::consts;
use crate::errors::ExplainerError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_url: String,
    pub port: u16,
    pub environment: Environment,
}

impl Config {
    /// Origins allowed to call this API cross-origin, selected by the
    /// environment tag.
    pub fn allowed_origins(&self) -> Vec<&'static str> {
        match self.environment {
            Environment::Production => vec!["https://ai-code-explainer-pi.vercel.app"],
            Environment::Development => vec!["http://localhost:3000"],
        }
    }
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, ExplainerError>;
}

/// Reads configuration from the process environment. `dotenv` is expected to
/// have been applied before this runs.
pub struct EnvConfigLoader;

impl EnvConfigLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for EnvConfigLoader {
    fn load_config(&self) -> Result<Config, ExplainerError> {
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| ExplainerError::ConfigError("GEMINI_API_KEY is not set".to_string()))?;

        let gemini_api_url = std::env::var("GEMINI_API_URL")
            .unwrap_or_else(|_| consts::DEFAULT_GEMINI_API_URL.to_string());

        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|e| {
                ExplainerError::ConfigError(format!("invalid PORT {:?}: {}", value, e))
            })?,
            Err(_) => consts::DEFAULT_PORT,
        };

        let environment = match std::env::var("APP_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        };

        Ok(Config {
            gemini_api_key,
            gemini_api_url,
            port,
            environment,
        })
    }
}

pub fn load_config() -> Result<Config, ExplainerError> {
    let loader = EnvConfigLoader::new();
    loader.load_config()
}
