//! Transport seam between the assistant service and a generative model.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::AiConfig;
use crate::error::{AiError, AiResult};
use crate::types::{ErrorEnvelope, GenerateRequest, GenerateResponse};

/// Header carrying the Gemini API key.
pub const HEADER_API_KEY: &str = "x-goog-api-key";

/// Anything that can answer a `generateContent` request.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait GenerativeProvider {
    /// Run `request` against `model`.
    async fn generate(&self, model: &str, request: &GenerateRequest)
    -> AiResult<GenerateResponse>;
}

/// Gemini REST provider.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiProvider {
    /// Build a provider from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Transport`] when the HTTP client cannot be constructed.
    pub fn new(config: &AiConfig) -> AiResult<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.timeout_secs {
            Some(secs) => builder.timeout(std::time::Duration::from_secs(secs)),
            None => builder,
        };
        let client = builder.build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl GenerativeProvider for GeminiProvider {
    async fn generate(
        &self,
        model: &str,
        request: &GenerateRequest,
    ) -> AiResult<GenerateResponse> {
        let api_key = self.api_key.as_deref().ok_or(AiError::MissingApiKey)?;

        let response = self
            .client
            .post(self.endpoint(model))
            .header(HEADER_API_KEY, api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(model, status = status.as_u16(), "generateContent completed");

        if !status.is_success() {
            return Err(AiError::Provider {
                status: status.as_u16(),
                message: provider_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn provider_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => match (envelope.error.status, envelope.error.message) {
            (Some(status), Some(message)) => format!("{status}: {message}"),
            (None, Some(message)) => message,
            (Some(status), None) => status,
            (None, None) => "unknown provider error".to_string(),
        },
        Err(_) if body.trim().is_empty() => "empty error body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_model() {
        let config = AiConfig {
            base_url: "http://localhost:8080/".into(),
            ..AiConfig::default()
        };
        let provider = GeminiProvider::new(&config).unwrap();
        assert_eq!(
            provider.endpoint("gemini-2.5-flash"),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn provider_message_prefers_structured_error() {
        let body =
            r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#;
        assert_eq!(
            provider_message(body),
            "PERMISSION_DENIED: API key not valid"
        );
        assert_eq!(provider_message("upstream exploded\n"), "upstream exploded");
        assert_eq!(provider_message(""), "empty error body");
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let config = AiConfig {
            base_url: "http://127.0.0.1:1".into(),
            ..AiConfig::default()
        };
        let provider = GeminiProvider::new(&config).unwrap();
        let err = provider
            .generate("m", &GenerateRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::MissingApiKey));
    }
}
