use serde_json::{Value, json};

use code_explainer::config::{Config, Environment};

pub fn test_config(base_url: &str) -> Config {
    Config {
        gemini_api_key: "test-key".to_string(),
        gemini_api_url: base_url.to_string(),
        port: 5000,
        environment: Environment::Development,
    }
}

pub fn gemini_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{"text": text}],
                "role": "model"
            },
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 10,
            "candidatesTokenCount": 50,
            "totalTokenCount": 60
        }
    })
}

pub fn gemini_multipart_response(parts: &[&str]) -> Value {
    let parts: Vec<Value> = parts.iter().map(|text| json!({"text": text})).collect();
    json!({
        "candidates": [{
            "content": {"parts": parts, "role": "model"},
            "finishReason": "STOP"
        }]
    })
}

pub fn gemini_empty_response() -> Value {
    json!({"candidates": []})
}

pub fn gemini_error_body() -> Value {
    json!({
        "error": {
            "code": 500,
            "message": "Internal error encountered.",
            "status": "INTERNAL"
        }
    })
}
