//! Application configuration.
//!
//! Everything is optional: an absent file, section or field falls back to
//! the built-in defaults. The credential itself never lives in the file,
//! only the name of the environment variable it is read from.

use crate::layer::LoggingLayer;
use crate::provider::{deepseek, GeminiProvider, OpenAiProvider};
use contentcraft_core::credential::{CredentialSlot, DEFAULT_API_KEY_ENV, FALLBACK_API_KEY_ENVS};
use contentcraft_core::{BrandProfile, ContentCraft, CraftError, GenerationConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "contentcraft.toml";

/// Which hosted model backend to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Gemini,
    Openai,
    Deepseek,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::Openai => "openai",
            ProviderKind::Deepseek => "deepseek",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = CraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "openai" => Ok(ProviderKind::Openai),
            "deepseek" => Ok(ProviderKind::Deepseek),
            other => Err(CraftError::configuration(format!(
                "unknown provider '{}', expected gemini, openai or deepseek",
                other
            ))),
        }
    }
}

/// `[provider]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    pub model: Option<String>,
    pub api_base: Option<String>,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            kind: ProviderKind::Gemini,
            model: None,
            api_base: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

/// `[generation]` section; unset fields keep the request defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub top_k: Option<u32>,
    pub max_output_tokens: Option<u32>,
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub provider: ProviderSettings,
    pub generation: GenerationSettings,
    pub brand: BrandProfile,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CraftError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CraftError::configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, CraftError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| CraftError::configuration(format!("TOML parsing error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the explicit file if given, otherwise `contentcraft.toml` in the
    /// working directory if present, otherwise the defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, CraftError> {
        match explicit {
            Some(path) => {
                tracing::debug!("loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    tracing::debug!("loading configuration from {}", fallback.display());
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn validate(&self) -> Result<(), CraftError> {
        if self.provider.api_key_env.trim().is_empty() {
            return Err(CraftError::configuration("provider.api_key_env must not be empty"));
        }
        if let Some(t) = self.generation.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(CraftError::configuration(format!(
                    "generation.temperature must be between 0.0 and 2.0, got {}",
                    t
                )));
            }
        }
        if let Some(p) = self.generation.top_p {
            if !(0.0..=1.0).contains(&p) {
                return Err(CraftError::configuration(format!(
                    "generation.top_p must be between 0.0 and 1.0, got {}",
                    p
                )));
            }
        }
        Ok(())
    }

    /// Environment variables consulted for the key, in order
    pub fn api_key_envs(&self) -> Vec<&str> {
        let mut vars = vec![self.provider.api_key_env.as_str()];
        for &fallback in FALLBACK_API_KEY_ENVS {
            if !vars.contains(&fallback) {
                vars.push(fallback);
            }
        }
        vars
    }

    /// Read the credential from the environment
    pub fn credentials(&self) -> CredentialSlot {
        CredentialSlot::from_env_any(&self.api_key_envs())
    }

    pub fn generation_config(&self) -> GenerationConfig {
        let mut config = GenerationConfig::default();
        if let Some(t) = self.generation.temperature {
            config = config.with_temperature(t);
        }
        if let Some(p) = self.generation.top_p {
            config = config.with_top_p(p);
        }
        if let Some(k) = self.generation.top_k {
            config = config.with_top_k(k);
        }
        if let Some(max) = self.generation.max_output_tokens {
            config = config.with_max_output_tokens(max);
        }
        config
    }

    /// Assemble the executor described by this configuration
    pub fn build_craft(&self, credentials: CredentialSlot) -> Result<ContentCraft, CraftError> {
        let craft = match self.provider.kind {
            ProviderKind::Gemini => {
                let mut builder = GeminiProvider::builder();
                if let Some(api_base) = &self.provider.api_base {
                    builder = builder.api_base(api_base);
                }
                self.finish(ContentCraft::builder(builder.build()?), credentials)
            }
            ProviderKind::Openai => {
                let mut builder = OpenAiProvider::builder();
                if let Some(api_base) = &self.provider.api_base {
                    builder = builder.api_base(api_base);
                }
                self.finish(ContentCraft::builder(builder.build()), credentials)
            }
            ProviderKind::Deepseek => match &self.provider.api_base {
                Some(api_base) => self.finish(
                    ContentCraft::builder(
                        OpenAiProvider::builder()
                            .api_base(api_base)
                            .default_model("deepseek-chat")
                            .build_with_id("deepseek", "DeepSeek"),
                    ),
                    credentials,
                ),
                None => self.finish(ContentCraft::builder(deepseek()), credentials),
            },
        };

        tracing::debug!(
            "using provider {} with model {}",
            craft.info().name,
            craft.model()
        );
        Ok(craft)
    }

    fn finish<P: contentcraft_core::Provider>(
        &self,
        builder: contentcraft_core::ContentCraftBuilder<P>,
        credentials: CredentialSlot,
    ) -> ContentCraft {
        let mut builder = builder
            .generation_config(self.generation_config())
            .credentials(credentials)
            .brand(self.brand.clone());
        if let Some(model) = &self.provider.model {
            builder = builder.model(model);
        }
        builder.layer(LoggingLayer::new()).finish()
    }
}
