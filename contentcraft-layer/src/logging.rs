//! Logging layer for provider calls.

use async_trait::async_trait;
use contentcraft_core::error::CraftError;
use contentcraft_core::layer::{Layer, LayeredProvider};
use contentcraft_core::provider::Provider;
use contentcraft_core::types::*;
use std::sync::Arc;

/// Logging layer that records each generation call.
#[derive(Debug, Clone)]
pub struct LoggingLayer {
    prefix: String,
}

impl LoggingLayer {
    /// Create a new logging layer
    pub fn new() -> Self {
        Self {
            prefix: "[ContentCraft]".to_string(),
        }
    }

    /// Create a logging layer with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for LoggingLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Provider> Layer<P> for LoggingLayer {
    type LayeredProvider = LoggingProvider<P>;

    fn layer(&self, inner: P) -> Self::LayeredProvider {
        LoggingProvider {
            inner,
            prefix: self.prefix.clone(),
        }
    }
}

/// Provider wrapped with logging
#[derive(Debug)]
pub struct LoggingProvider<P> {
    inner: P,
    prefix: String,
}

#[async_trait]
impl<P: Provider> LayeredProvider for LoggingProvider<P> {
    type Inner = P;

    fn inner(&self) -> &Self::Inner {
        &self.inner
    }

    async fn layered_generate_content(
        &self,
        req: GenerateRequest,
    ) -> Result<GenerateResponse, CraftError> {
        tracing::debug!(
            "{} generate_content request: model={}, prompt_chars={}, format={}",
            self.prefix,
            req.model,
            req.prompt.chars().count(),
            req.config.response_format.mime_type()
        );

        let start = std::time::Instant::now();
        let result = self.inner.generate_content(req).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(response) => {
                tracing::debug!(
                    "{} generate_content success: model={}, tokens={}, finish={:?}, elapsed={:?}",
                    self.prefix,
                    response.model,
                    response.usage.total_tokens,
                    response.finish_reason,
                    elapsed
                );
            }
            Err(e) => {
                tracing::error!(
                    "{} generate_content error: {}, elapsed={:?}",
                    self.prefix,
                    e,
                    elapsed
                );
            }
        }

        result
    }
}

#[async_trait]
impl<P: Provider> Provider for LoggingProvider<P> {
    fn info(&self) -> Arc<ProviderInfo> {
        LayeredProvider::layered_info(self)
    }

    async fn generate_content(&self, req: GenerateRequest) -> Result<GenerateResponse, CraftError> {
        LayeredProvider::layered_generate_content(self, req).await
    }
}
