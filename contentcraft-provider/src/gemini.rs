//! Gemini provider implementation over the public REST API.
//!
//! Only the single-shot `generateContent` call is used: one user turn in,
//! the first candidate's text out.

use async_trait::async_trait;
use contentcraft_core::error::CraftError;
use contentcraft_core::provider::Provider;
use contentcraft_core::types::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Public endpoint of the Generative Language API
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-04-17";

const PROVIDER_NAME: &str = "Gemini";

/// Gemini provider using reqwest
#[derive(Clone)]
pub struct GeminiProvider {
    client: reqwest::Client,
    api_base: String,
    info: Arc<ProviderInfo>,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("info", &self.info)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Default for GeminiProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiProvider {
    /// Create a provider against the public endpoint
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            info: Self::provider_info(DEFAULT_MODEL),
        }
    }

    /// Create a builder for more configuration options
    pub fn builder() -> GeminiBuilder {
        GeminiBuilder::default()
    }

    fn provider_info(default_model: impl Into<String>) -> Arc<ProviderInfo> {
        Arc::new(ProviderInfo {
            id: "gemini".to_string(),
            name: PROVIDER_NAME.to_string(),
            default_model: default_model.into(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            model
        )
    }

    fn build_body(req: &GenerateRequest) -> WireRequest<'_> {
        WireRequest {
            contents: vec![WireContent {
                role: "user",
                parts: vec![WirePart { text: &req.prompt }],
            }],
            generation_config: WireGenerationConfig {
                temperature: req.config.temperature,
                top_p: req.config.top_p,
                top_k: req.config.top_k,
                response_mime_type: req.config.response_format.mime_type(),
                max_output_tokens: req.config.max_output_tokens,
            },
        }
    }

    /// Pull the human-readable message out of an error body
    fn error_message(status: reqwest::StatusCode, body: &str) -> String {
        match serde_json::from_str::<WireErrorEnvelope>(body) {
            Ok(envelope) if !envelope.error.message.trim().is_empty() => envelope.error.message,
            _ if !body.trim().is_empty() => body.trim().to_string(),
            _ => status
                .canonical_reason()
                .unwrap_or("An unknown error occurred")
                .to_string(),
        }
    }

    fn convert_response(model: String, reply: WireResponse) -> Result<GenerateResponse, CraftError> {
        let candidate = reply.candidates.into_iter().next().ok_or_else(|| {
            let reason = reply
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            CraftError::provider(PROVIDER_NAME, reason)
        })?;

        let text = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        let finish_reason = match candidate.finish_reason.as_deref() {
            None | Some("STOP") => FinishReason::Stop,
            Some("MAX_TOKENS") => FinishReason::Length,
            Some("SAFETY") | Some("RECITATION") | Some("BLOCKLIST") | Some("PROHIBITED_CONTENT") => {
                FinishReason::Safety
            }
            Some(other) => FinishReason::Other(other.to_string()),
        };

        let usage = reply.usage_metadata.map_or(Usage::default(), |u| Usage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        Ok(GenerateResponse {
            text,
            model: reply.model_version.unwrap_or(model),
            finish_reason,
            usage,
        })
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn info(&self) -> Arc<ProviderInfo> {
        self.info.clone()
    }

    async fn generate_content(&self, req: GenerateRequest) -> Result<GenerateResponse, CraftError> {
        let url = self.endpoint(&req.model);
        let body = Self::build_body(&req);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", req.credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| CraftError::classify(PROVIDER_NAME, e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CraftError::classify(PROVIDER_NAME, e.to_string()))?;

        if !status.is_success() {
            let message = Self::error_message(status, &text);
            tracing::debug!("Gemini returned {}: {}", status, message);
            return Err(CraftError::classify(PROVIDER_NAME, message));
        }

        let reply: WireResponse = serde_json::from_str(&text).map_err(|e| {
            CraftError::provider(PROVIDER_NAME, format!("Unexpected response body: {}", e))
        })?;

        Self::convert_response(req.model, reply)
    }
}

/// Builder for Gemini provider with custom configuration
#[derive(Default)]
pub struct GeminiBuilder {
    api_base: Option<String>,
    default_model: Option<String>,
    timeout: Option<Duration>,
}

impl GeminiBuilder {
    /// Set API base URL (a mock server in tests, or a proxy)
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Set the model used when the executor does not pick one
    pub fn default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = Some(model.into());
        self
    }

    /// Set a whole-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the provider
    pub fn build(self) -> Result<GeminiProvider, CraftError> {
        let mut client = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            client = client.timeout(timeout);
        }

        Ok(GeminiProvider {
            client: client.build()?,
            api_base: self.api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            info: GeminiProvider::provider_info(
                self.default_model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            ),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest<'a> {
    contents: Vec<WireContent<'a>>,
    generation_config: WireGenerationConfig,
}

#[derive(Debug, Serialize)]
struct WireContent<'a> {
    role: &'static str,
    parts: Vec<WirePart<'a>>,
}

#[derive(Debug, Serialize)]
struct WirePart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    response_mime_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireResponse {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
    usage_metadata: Option<WireUsage>,
    prompt_feedback: Option<WirePromptFeedback>,
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCandidate {
    content: Option<WireCandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireCandidateContent {
    #[serde(default)]
    parts: Vec<WireReplyPart>,
}

#[derive(Debug, Deserialize)]
struct WireReplyPart {
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct WireUsage {
    prompt_token_count: u32,
    candidates_token_count: u32,
    total_token_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireErrorEnvelope {
    error: WireError,
}

#[derive(Debug, Deserialize)]
struct WireError {
    #[serde(default)]
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use contentcraft_core::credential::ApiKey;
    use httpmock::prelude::*;
    use serde_json::json;

    fn request(prompt: &str) -> GenerateRequest {
        GenerateRequest::new("test-model", prompt, ApiKey::new("test-key").unwrap())
    }

    fn provider_for(server: &MockServer) -> GeminiProvider {
        GeminiProvider::builder()
            .api_base(server.base_url())
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_endpoint() {
        let provider = GeminiProvider::new();
        assert_eq!(provider.info().default_model, DEFAULT_MODEL);
        assert_eq!(
            provider.endpoint("gemini-pro"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let req = request("Write a tagline").with_config(GenerationConfig::default());
        let body = serde_json::to_value(GeminiProvider::build_body(&req)).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Write a tagline");
        assert_eq!(body["generationConfig"]["topK"], 64);
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert!(body["generationConfig"].get("maxOutputTokens").is_none());
    }

    #[tokio::test]
    async fn test_generate_content_success() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1beta/models/test-model:generateContent")
                .header("x-goog-api-key", "test-key")
                .json_body_partial(
                    r#"{"generationConfig": {"responseMimeType": "application/json"}}"#,
                );
            then.status(200).json_body(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "{\"metaTitle\": "}, {"text": "\"Hi\"}"}]},
                    "finishReason": "STOP"
                }],
                "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 5, "totalTokenCount": 17}
            }));
        });

        let response = provider_for(&server)
            .generate_content(request("prompt"))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(response.text, "{\"metaTitle\": \"Hi\"}");
        assert_eq!(response.model, "test-model");
        assert_eq!(response.finish_reason, FinishReason::Stop);
        assert_eq!(response.usage.total_tokens, 17);
    }

    #[tokio::test]
    async fn test_fenced_text_is_passed_through() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1beta/models/test-model:generateContent");
            then.status(200).json_body(json!({
                "candidates": [{
                    "content": {"parts": [{"text": "```json\n{\"a\": 1}\n```"}]},
                    "finishReason": "MAX_TOKENS"
                }]
            }));
        });

        let response = provider_for(&server)
            .generate_content(request("prompt"))
            .await
            .unwrap();
        assert!(response.text.starts_with("```json"));
        assert_eq!(response.finish_reason, FinishReason::Length);
        assert_eq!(response.usage, Usage::default());
    }

    #[tokio::test]
    async fn test_invalid_key_is_classified() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1beta/models/test-model:generateContent");
            then.status(400).json_body(json!({
                "error": {
                    "code": 400,
                    "message": "API key not valid. Please pass a valid API key.",
                    "status": "INVALID_ARGUMENT"
                }
            }));
        });

        let err = provider_for(&server)
            .generate_content(request("prompt"))
            .await
            .unwrap_err();
        assert!(matches!(err, CraftError::InvalidCredential { .. }));
        assert!(err.is_credential_error());
    }

    #[tokio::test]
    async fn test_quota_is_classified() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1beta/models/test-model:generateContent");
            then.status(429).json_body(json!({
                "error": {
                    "code": 429,
                    "message": "You exceeded your current quota, please check your plan and billing details.",
                    "status": "RESOURCE_EXHAUSTED"
                }
            }));
        });

        let err = provider_for(&server)
            .generate_content(request("prompt"))
            .await
            .unwrap_err();
        assert!(matches!(err, CraftError::QuotaExceeded { .. }));
    }

    #[tokio::test]
    async fn test_other_errors_keep_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1beta/models/test-model:generateContent");
            then.status(500).body("backend unavailable");
        });

        let err = provider_for(&server)
            .generate_content(request("prompt"))
            .await
            .unwrap_err();
        match err {
            CraftError::Provider { provider, message } => {
                assert_eq!(provider, "Gemini");
                assert_eq!(message, "backend unavailable");
            }
            other => panic!("Expected Provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blocked_prompt_has_no_candidates() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1beta/models/test-model:generateContent");
            then.status(200)
                .json_body(json!({"promptFeedback": {"blockReason": "SAFETY"}}));
        });

        let err = provider_for(&server)
            .generate_content(request("prompt"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }
}
