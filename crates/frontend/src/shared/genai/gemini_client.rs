//! Browser HTTP adapter for the generation service

use crate::shared::config::GenAiConfig;
use async_trait::async_trait;
use contracts::shared::genai::gemini::{api_error, GenerateContentRequest, GenerateContentResponse};
use contracts::shared::genai::{GenerationError, GenerationRequest, GenerativeClient};
use gloo_net::http::Request;

pub struct GeminiClient {
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(endpoint: String, model: String, api_key: String) -> Self {
        Self {
            endpoint,
            model,
            api_key,
        }
    }

    pub fn from_config(config: &GenAiConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            config.model.clone(),
            config.api_key.clone(),
        )
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait(?Send)]
impl GenerativeClient for GeminiClient {
    async fn complete(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        if self.api_key.is_empty() {
            return Err(GenerationError::Configuration(
                "API key is not set (build with API_KEY)".to_string(),
            ));
        }

        let structured = request.is_structured();
        let body = GenerateContentRequest::from(request);

        log::debug!("genai: POST {} (structured: {})", self.url(), structured);
        let response = Request::post(&self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .map_err(|e| GenerationError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| GenerationError::Network(format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(api_error(status, &text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        parsed.into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_endpoint_and_model() {
        let client = GeminiClient::new(
            "https://example.test/v1beta/".into(),
            "gemini-2.5-flash".into(),
            "k".into(),
        );
        assert_eq!(
            client.url(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
