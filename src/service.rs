use std::sync::Arc;

use crate::cleaner::clean_explanation;
use crate::config::Config;
use crate::consts;
use crate::errors::ExplainerError;
use crate::languages;
use crate::llm_client::{CompletionClient, GeminiClient};
use crate::models::request::ExplainRequest;

/// Result of one explain call, owned by the handler for the duration of the
/// request.
#[derive(Debug, Clone)]
pub struct ExplainResult {
    pub explanation: String,
    pub model: String,
}

/// Returns the trimmed code or a validation error. Runs before any upstream
/// call is made.
pub fn validate_explain_request(request: &ExplainRequest) -> Result<&str, ExplainerError> {
    let code = request.code.trim();
    if code.is_empty() {
        return Err(ExplainerError::ValidationError(
            "Code snippet is required".to_string(),
        ));
    }
    Ok(code)
}

/// The instruction text is the only steering mechanism for output format;
/// the cleaner handles whatever markdown the model emits anyway.
pub fn build_prompt(code: &str, language: Option<&str>) -> String {
    let label = languages::display_label(language);
    format!(
        "Explain this {label} clearly and concisely along with bullet points \
         and without using any markdown formatting like asterisks, bold text, \
         or special characters. Use plain text only:\n\n{code}"
    )
}

pub struct ExplainService {
    client: Arc<dyn CompletionClient>,
    model: String,
}

impl ExplainService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            model: consts::MODEL_ID.to_string(),
        }
    }

    pub fn with_gemini(http_client: reqwest::Client, config: &Config) -> Self {
        let client = GeminiClient::new(
            http_client,
            &config.gemini_api_url,
            &config.gemini_api_key,
            consts::MODEL_ID,
        );
        Self::new(Arc::new(client))
    }

    /// Validate, build the prompt, call the upstream model (the single
    /// suspension point), clean the completion.
    pub async fn explain(&self, request: ExplainRequest) -> Result<ExplainResult, ExplainerError> {
        let code = validate_explain_request(&request)?;
        let prompt = build_prompt(code, request.language.as_deref());

        let completion = self.client.generate(&prompt).await?;

        Ok(ExplainResult {
            explanation: clean_explanation(&completion),
            model: self.model.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubClient {
        reply: Result<String, ExplainerError>,
        prompts: Mutex<Vec<String>>,
    }

    impl StubClient {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(vec![]),
            }
        }

        fn failing(error: ExplainerError) -> Self {
            Self {
                reply: Err(error),
                prompts: Mutex::new(vec![]),
            }
        }

        fn call_count(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CompletionClient for StubClient {
        async fn generate(&self, prompt: &str) -> Result<String, ExplainerError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone()
        }
    }

    #[test]
    fn test_validate_rejects_empty_code() {
        let request = ExplainRequest {
            code: "".to_string(),
            language: None,
        };
        assert!(matches!(
            validate_explain_request(&request),
            Err(ExplainerError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_whitespace_code() {
        let request = ExplainRequest {
            code: "   \n\t ".to_string(),
            language: Some("python".to_string()),
        };
        assert!(validate_explain_request(&request).is_err());
    }

    #[test]
    fn test_validate_trims_code() {
        let request = ExplainRequest {
            code: "  print('hi')  ".to_string(),
            language: None,
        };
        assert_eq!(validate_explain_request(&request).unwrap(), "print('hi')");
    }

    #[test]
    fn test_build_prompt_embeds_language_and_code() {
        let prompt = build_prompt("print('hi')", Some("python"));
        assert!(prompt.contains("Explain this Python"));
        assert!(prompt.ends_with("print('hi')"));
        assert!(prompt.contains("plain text only"));
    }

    #[test]
    fn test_build_prompt_defaults_language() {
        let prompt = build_prompt("x = 1", None);
        assert!(prompt.contains("Explain this code"));
    }

    #[tokio::test]
    async fn test_explain_success_cleans_completion() {
        let stub = Arc::new(StubClient::replying("*This* prints hi"));
        let service = ExplainService::new(stub.clone());

        let result = service
            .explain(ExplainRequest {
                code: "print('hi')".to_string(),
                language: Some("python".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.explanation, "This prints hi");
        assert_eq!(result.model, "gemini-1.5-flash");
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_explain_validation_failure_skips_upstream() {
        let stub = Arc::new(StubClient::replying("unused"));
        let service = ExplainService::new(stub.clone());

        let result = service
            .explain(ExplainRequest {
                code: "   ".to_string(),
                language: None,
            })
            .await;

        assert!(matches!(result, Err(ExplainerError::ValidationError(_))));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_explain_propagates_upstream_failure() {
        let stub = Arc::new(StubClient::failing(ExplainerError::UpstreamError(
            "quota exceeded".to_string(),
        )));
        let service = ExplainService::new(stub);

        let result = service
            .explain(ExplainRequest {
                code: "x".to_string(),
                language: None,
            })
            .await;

        match result {
            Err(ExplainerError::UpstreamError(msg)) => assert!(msg.contains("quota exceeded")),
            other => panic!("Expected UpstreamError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_explain_collapses_multiline_completion() {
        let stub = Arc::new(StubClient::replying(
            "This function:\n* prints hi\n* returns nothing",
        ));
        let service = ExplainService::new(stub);

        let result = service
            .explain(ExplainRequest {
                code: "print('hi')".to_string(),
                language: Some("python".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.explanation, "This function: prints hi returns nothing");
    }
}
