//! ContentCraft executor implementation.
//!
//! The executor is the single path from a filled-in tool form to a
//! structured result: credential check, validation, prompt rendering, one
//! provider call, then parsing.

use crate::brand::BrandProfile;
use crate::credential::CredentialSlot;
use crate::error::CraftError;
use crate::layer::Layer;
use crate::provider::Provider;
use crate::response::parse_structured;
use crate::tools::Tool;
use crate::types::*;
use std::sync::Arc;

/// Type-erased provider that can be shared across threads
type BoxedProvider = Arc<dyn Provider>;

/// Builder for composing a provider with layers and app settings.
///
/// # Example
///
/// ```ignore
/// let craft = ContentCraft::builder(GeminiProvider::new())
///     .layer(LoggingLayer::new())
///     .credentials(CredentialSlot::from_env("API_KEY"))
///     .finish();
/// ```
pub struct ContentCraftBuilder<P> {
    provider: P,
    model: Option<String>,
    generation: GenerationConfig,
    credentials: CredentialSlot,
    brand: BrandProfile,
}

impl<P: Provider> ContentCraftBuilder<P> {
    /// Create a new builder with a provider
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            model: None,
            generation: GenerationConfig::default(),
            credentials: CredentialSlot::empty(),
            brand: BrandProfile::default(),
        }
    }

    /// Add a layer to wrap the provider
    ///
    /// Each call creates a new concrete provider type by wrapping the
    /// previous one.
    pub fn layer<L>(self, layer: L) -> ContentCraftBuilder<L::LayeredProvider>
    where
        L: Layer<P>,
    {
        ContentCraftBuilder {
            provider: layer.layer(self.provider),
            model: self.model,
            generation: self.generation,
            credentials: self.credentials,
            brand: self.brand,
        }
    }

    /// Override the provider's default model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set generation parameters
    pub fn generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation = config;
        self
    }

    /// Share a credential slot with the executor
    pub fn credentials(mut self, credentials: CredentialSlot) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set the brand injected into prompts
    pub fn brand(mut self, brand: BrandProfile) -> Self {
        self.brand = brand;
        self
    }

    /// Finish building and create the executor
    pub fn finish(self) -> ContentCraft {
        let provider = Arc::new(self.provider);
        let model = self
            .model
            .unwrap_or_else(|| provider.info().default_model.clone());

        ContentCraft {
            provider,
            model,
            generation: self.generation,
            credentials: self.credentials,
            brand: Arc::new(self.brand),
        }
    }
}

/// Runs tools against a provider.
///
/// Cheap to clone; clones share the provider and the credential slot.
#[derive(Clone)]
pub struct ContentCraft {
    provider: BoxedProvider,
    model: String,
    generation: GenerationConfig,
    credentials: CredentialSlot,
    brand: Arc<BrandProfile>,
}

impl std::fmt::Debug for ContentCraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentCraft")
            .field("provider", &self.provider.info().id)
            .field("model", &self.model)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl ContentCraft {
    /// Create a new builder
    pub fn builder<P: Provider>(provider: P) -> ContentCraftBuilder<P> {
        ContentCraftBuilder::new(provider)
    }

    /// Get provider information
    pub fn info(&self) -> Arc<ProviderInfo> {
        self.provider.info()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn brand(&self) -> &BrandProfile {
        &self.brand
    }

    pub fn generation_config(&self) -> &GenerationConfig {
        &self.generation
    }

    /// The shared credential slot
    pub fn credentials(&self) -> &CredentialSlot {
        &self.credentials
    }

    /// Whether AI actions are enabled right now
    pub fn can_submit(&self) -> bool {
        self.credentials.is_available()
    }

    /// Run a tool end to end.
    ///
    /// Nothing is retried: a failed call or an unusable reply is returned as
    /// an error and the caller may simply submit again.
    pub async fn run<T: Tool>(&self, tool: &T) -> Result<T::Output, CraftError> {
        let credential = self
            .credentials
            .current()
            .ok_or(CraftError::MissingCredential)?;

        tool.validate()?;

        let ctx = RequestContext::new(T::CONTEXT, &self.provider.info(), self.model.clone());
        let prompt = tool.prompt(&self.brand);

        tracing::debug!(
            request_id = %ctx.request_id,
            tool = %ctx.tool,
            route = tool.route().path(),
            "submitting prompt ({} chars) to {}/{}",
            prompt.len(),
            ctx.provider_id,
            ctx.model
        );

        let request = GenerateRequest::new(self.model.clone(), prompt, credential)
            .with_config(self.generation.clone());

        let response = match self.provider.generate_content(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(
                    request_id = %ctx.request_id,
                    "error generating {}: {}",
                    ctx.tool,
                    err
                );
                return Err(err);
            }
        };

        let output = parse_structured::<T::Output>(&response.text, T::CONTEXT, T::SNIPPET_CHARS)?;

        tracing::debug!(
            request_id = %ctx.request_id,
            tokens = response.usage.total_tokens,
            "{} ready",
            ctx.tool
        );

        Ok(output)
    }
}
