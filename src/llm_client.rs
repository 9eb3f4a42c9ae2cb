use async_trait::async_trait;

use crate::errors::ExplainerError;
use crate::models::gemini::{GenerateContentRequest, GenerateContentResponse};

/// Upstream generative model: prompt in, completion text out, may fail.
/// Behind a trait so tests substitute a deterministic stub and never touch
/// the live service.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ExplainerError>;
}

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ExplainerError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ExplainerError::UpstreamError(format!(
                "error: status {status}, text {text}"
            )));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            ExplainerError::ParseError(format!("invalid generateContent response: {e}"))
        })?;

        body.completion_text().ok_or_else(|| {
            ExplainerError::UpstreamError("response contained no completion text".to_string())
        })
    }
}
