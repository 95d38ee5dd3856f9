//! Provider trait and core abstractions.

use crate::error::CraftError;
use crate::types::*;
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

/// Core provider trait for hosted text-generation services.
///
/// A provider accepts one prompt and returns the raw text the model produced.
/// Parsing that text into a structured result is the runtime's job.
#[async_trait]
pub trait Provider: Send + Sync + Debug + 'static {
    /// Get provider information
    fn info(&self) -> Arc<ProviderInfo>;

    /// Submit a prompt and wait for the complete reply
    async fn generate_content(&self, req: GenerateRequest)
        -> Result<GenerateResponse, CraftError>;
}

#[async_trait]
impl<P: Provider + ?Sized> Provider for Arc<P> {
    fn info(&self) -> Arc<ProviderInfo> {
        (**self).info()
    }

    async fn generate_content(
        &self,
        req: GenerateRequest,
    ) -> Result<GenerateResponse, CraftError> {
        (**self).generate_content(req).await
    }
}
