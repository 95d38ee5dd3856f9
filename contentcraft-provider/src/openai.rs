//! OpenAI-compatible provider implementation using async-openai crate.
//!
//! The credential travels with each request, so a client is assembled per
//! call from the shared endpoint settings. Rate-limited and server-error
//! replies are returned as-is; the client never retries.

use async_openai::config::OpenAIConfig;
use async_openai::error::OpenAIError;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequest, CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
    ResponseFormat as OpenAIResponseFormat,
};
use async_openai::Client;
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use contentcraft_core::error::CraftError;
use contentcraft_core::provider::Provider;
use contentcraft_core::types::*;
use std::sync::Arc;
use std::time::Duration;

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI provider using async-openai
#[derive(Clone)]
pub struct OpenAiProvider {
    api_base: Option<String>,
    org_id: Option<String>,
    info: Arc<ProviderInfo>,
}

impl std::fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("info", &self.info)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Default for OpenAiProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenAiProvider {
    /// Create a new OpenAI provider with default configuration
    pub fn new() -> Self {
        OpenAiBuilder::default().build()
    }

    /// Create a builder for more configuration options
    pub fn builder() -> OpenAiBuilder {
        OpenAiBuilder::default()
    }

    fn client(&self, api_key: &str) -> Client<OpenAIConfig> {
        let mut config = OpenAIConfig::new().with_api_key(api_key);

        if let Some(api_base) = &self.api_base {
            config = config.with_api_base(api_base);
        }

        if let Some(org_id) = &self.org_id {
            config = config.with_org_id(org_id);
        }

        Client::with_config(config).with_backoff(
            ExponentialBackoffBuilder::new()
                .with_max_elapsed_time(Some(Duration::ZERO))
                .build(),
        )
    }

    fn convert_response_format(format: ResponseFormat) -> OpenAIResponseFormat {
        match format {
            ResponseFormat::Text => OpenAIResponseFormat::Text,
            ResponseFormat::Json => OpenAIResponseFormat::JsonObject,
        }
    }

    /// Build CreateChatCompletionRequest from a single prompt
    fn build_request(&self, req: &GenerateRequest) -> Result<CreateChatCompletionRequest, CraftError> {
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(req.prompt.as_str())
            .build()
            .map_err(|e| self.error(format!("Failed to build user message: {}", e)))?;

        let mut builder = CreateChatCompletionRequestArgs::default();
        builder
            .model(&req.model)
            .messages(vec![ChatCompletionRequestMessage::User(message)])
            .temperature(req.config.temperature)
            .top_p(req.config.top_p)
            .response_format(Self::convert_response_format(req.config.response_format));

        if let Some(max_tokens) = req.config.max_output_tokens {
            builder.max_completion_tokens(max_tokens);
        }

        builder
            .build()
            .map_err(|e| self.error(format!("Failed to build request: {}", e)))
    }

    fn error(&self, message: impl Into<String>) -> CraftError {
        CraftError::provider(self.info.name.clone(), message)
    }

    fn convert_error(&self, err: OpenAIError) -> CraftError {
        match err {
            OpenAIError::ApiError(api) => match api.code.as_deref() {
                Some("invalid_api_key") => CraftError::InvalidCredential {
                    provider: self.info.name.clone(),
                },
                Some("insufficient_quota") => CraftError::QuotaExceeded {
                    provider: self.info.name.clone(),
                },
                _ => CraftError::classify(self.info.name.clone(), api.message),
            },
            other => CraftError::classify(self.info.name.clone(), other.to_string()),
        }
    }

    fn convert_response(
        &self,
        model: String,
        response: CreateChatCompletionResponse,
    ) -> Result<GenerateResponse, CraftError> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| self.error("no choices returned"))?;

        let finish_reason = choice
            .finish_reason
            .map_or(FinishReason::Stop, |r| match r {
                async_openai::types::FinishReason::Stop => FinishReason::Stop,
                async_openai::types::FinishReason::Length => FinishReason::Length,
                async_openai::types::FinishReason::ContentFilter => FinishReason::Safety,
                other => FinishReason::Other(format!("{:?}", other)),
            });

        let usage = response.usage.map_or(Usage::default(), |u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(GenerateResponse {
            text: choice.message.content.unwrap_or_default(),
            model: if response.model.is_empty() {
                model
            } else {
                response.model
            },
            finish_reason,
            usage,
        })
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn info(&self) -> Arc<ProviderInfo> {
        self.info.clone()
    }

    async fn generate_content(&self, req: GenerateRequest) -> Result<GenerateResponse, CraftError> {
        let openai_req = self.build_request(&req)?;

        let response = self
            .client(req.credential.expose())
            .chat()
            .create(openai_req)
            .await
            .map_err(|e| self.convert_error(e))?;

        self.convert_response(req.model, response)
    }
}

/// Builder for OpenAI provider with custom configuration
#[derive(Default)]
pub struct OpenAiBuilder {
    api_base: Option<String>,
    org_id: Option<String>,
    default_model: Option<String>,
}

impl OpenAiBuilder {
    /// Set API base URL (for OpenAI-compatible APIs like DeepSeek)
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Set organization ID
    pub fn organization(mut self, org_id: impl Into<String>) -> Self {
        self.org_id = Some(org_id.into());
        self
    }

    /// Set the model used when the executor does not pick one
    pub fn default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = Some(model.into());
        self
    }

    /// Build the provider
    pub fn build(self) -> OpenAiProvider {
        self.build_with_id("openai", "OpenAI")
    }

    /// Build a provider with a custom provider ID and name
    ///
    /// This is useful for OpenAI-compatible APIs like DeepSeek that use
    /// the same protocol but different endpoints.
    pub fn build_with_id(
        self,
        provider_id: impl Into<String>,
        provider_name: impl Into<String>,
    ) -> OpenAiProvider {
        OpenAiProvider {
            api_base: self.api_base,
            org_id: self.org_id,
            info: Arc::new(ProviderInfo {
                id: provider_id.into(),
                name: provider_name.into(),
                default_model: self
                    .default_model
                    .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            }),
        }
    }
}
