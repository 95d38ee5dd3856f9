//! Layer trait and abstractions.
//!
//! Layers wrap a provider with cross-cutting concerns such as logging.
//! Composition is static: each layer produces a new concrete provider type.

use crate::error::CraftError;
use crate::provider::Provider;
use crate::types::*;
use async_trait::async_trait;
use std::sync::Arc;

/// Layer trait for wrapping providers.
pub trait Layer<P: Provider> {
    /// The type of the layered provider
    type LayeredProvider: Provider;

    /// Wrap the inner provider with this layer
    fn layer(&self, inner: P) -> Self::LayeredProvider;
}

/// Helper trait for layered providers.
///
/// Default methods forward to the inner provider; implementers override only
/// what they intercept.
#[async_trait]
pub trait LayeredProvider: Sized + Provider {
    /// The inner provider type
    type Inner: Provider;

    /// Get a reference to the inner provider
    fn inner(&self) -> &Self::Inner;

    /// Default implementation for info - forwards to inner
    fn layered_info(&self) -> Arc<ProviderInfo> {
        self.inner().info()
    }

    /// Default implementation for generate_content - forwards to inner
    async fn layered_generate_content(
        &self,
        req: GenerateRequest,
    ) -> Result<GenerateResponse, CraftError> {
        self.inner().generate_content(req).await
    }
}

/// Implement `Provider` for a type by forwarding to its `LayeredProvider` methods.
#[macro_export]
macro_rules! impl_layered_provider {
    ($type:ty) => {
        #[async_trait::async_trait]
        impl $crate::provider::Provider for $type {
            fn info(&self) -> std::sync::Arc<$crate::types::ProviderInfo> {
                $crate::layer::LayeredProvider::layered_info(self)
            }

            async fn generate_content(
                &self,
                req: $crate::types::GenerateRequest,
            ) -> Result<$crate::types::GenerateResponse, $crate::error::CraftError> {
                $crate::layer::LayeredProvider::layered_generate_content(self, req).await
            }
        }
    };
}
