//! Core types for generation requests.

use crate::credential::ApiKey;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Default temperature sent with every request
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default nucleus-sampling threshold
pub const DEFAULT_TOP_P: f32 = 0.95;

/// Default top-k
pub const DEFAULT_TOP_K: u32 = 64;

/// Requested output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Plain text response
    Text,
    /// JSON document response
    #[default]
    Json,
}

impl ResponseFormat {
    /// MIME type understood by the hosted API
    pub fn mime_type(&self) -> &'static str {
        match self {
            ResponseFormat::Text => "text/plain",
            ResponseFormat::Json => "application/json",
        }
    }
}

/// Generation parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationConfig {
    /// Temperature (0.0 - 2.0)
    pub temperature: f32,

    /// Top-p sampling
    pub top_p: f32,

    /// Top-k sampling
    pub top_k: u32,

    /// Requested output format
    #[serde(default)]
    pub response_format: ResponseFormat,

    /// Maximum number of tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            top_k: DEFAULT_TOP_K,
            response_format: ResponseFormat::Json,
            max_output_tokens: None,
        }
    }
}

impl GenerationConfig {
    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set top-p
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    /// Set top-k
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set response format
    pub fn with_response_format(mut self, response_format: ResponseFormat) -> Self {
        self.response_format = response_format;
        self
    }

    /// Set max output tokens
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }
}

/// A single prompt submission
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub config: GenerationConfig,
    pub credential: ApiKey,
}

impl GenerateRequest {
    /// Create a new request with default generation parameters
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, credential: ApiKey) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            config: GenerationConfig::default(),
            credential,
        }
    }

    /// Set generation parameters
    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }
}

/// Usage statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Finish reason
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    Safety,
    Other(String),
}

/// Raw provider reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub text: String,
    pub model: String,
    pub finish_reason: FinishReason,
    pub usage: Usage,
}

/// Provider information
#[derive(Debug, Clone)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    /// Model used when the caller does not pick one
    pub default_model: String,
}

/// Per-request context used for tracing
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub tool: String,
    pub provider_id: String,
    pub model: String,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(
        tool: impl Into<String>,
        provider: &Arc<ProviderInfo>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            tool: tool.into(),
            provider_id: provider.id.clone(),
            model: model.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_generation_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.top_p, 0.95);
        assert_eq!(config.top_k, 64);
        assert_eq!(config.response_format.mime_type(), "application/json");
    }

    #[test]
    fn test_request_context_ids_are_unique() {
        let info = Arc::new(ProviderInfo {
            id: "gemini".to_string(),
            name: "Gemini".to_string(),
            default_model: "m".to_string(),
        });
        let a = RequestContext::new("meta tags", &info, "m");
        let b = RequestContext::new("meta tags", &info, "m");
        assert_ne!(a.request_id, b.request_id);
        assert_eq!(a.provider_id, "gemini");
    }
}
