//! API credential handling.
//!
//! The credential lives in a shared [`CredentialSlot`] so that every executor
//! and form session observes a key being set or cleared immediately.

use crate::error::CraftError;
use arc_swap::ArcSwapOption;
use std::fmt;
use std::sync::Arc;

/// Environment variable consulted first for the credential
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Fallback environment variables, in lookup order
pub const FALLBACK_API_KEY_ENVS: &[&str] = &["GEMINI_API_KEY"];

/// A non-blank API key. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    /// Create a key, rejecting blank input
    pub fn new(key: impl Into<String>) -> Result<Self, CraftError> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(CraftError::configuration("API key must not be blank"));
        }
        Ok(Self(Arc::from(trimmed)))
    }

    /// Borrow the raw secret for placing it on the wire
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Shared, swappable holder for the current credential.
///
/// Cloning is cheap and every clone points at the same slot.
#[derive(Clone, Default)]
pub struct CredentialSlot {
    inner: Arc<ArcSwapOption<ApiKey>>,
}

impl CredentialSlot {
    /// A slot with no credential
    pub fn empty() -> Self {
        Self::default()
    }

    /// A slot pre-filled with a key
    pub fn with_key(key: ApiKey) -> Self {
        let slot = Self::empty();
        slot.set(key);
        slot
    }

    /// Read the key from a single environment variable. Unset or blank
    /// values yield an empty slot.
    pub fn from_env(var: &str) -> Self {
        Self::from_env_any(&[var])
    }

    /// Read the key from the first environment variable that holds a
    /// non-blank value
    pub fn from_env_any(vars: &[&str]) -> Self {
        let found = vars.iter().find_map(|var| {
            std::env::var(var)
                .ok()
                .and_then(|value| ApiKey::new(value).ok())
                .map(|key| (*var, key))
        });

        match found {
            Some((var, key)) => {
                tracing::debug!("credential loaded from ${}", var);
                Self::with_key(key)
            }
            None => {
                tracing::debug!("no credential found in {:?}", vars);
                Self::empty()
            }
        }
    }

    /// Install or replace the key
    pub fn set(&self, key: ApiKey) {
        self.inner.store(Some(Arc::new(key)));
    }

    /// Remove the key
    pub fn clear(&self) {
        self.inner.store(None);
    }

    /// Snapshot of the current key
    pub fn current(&self) -> Option<ApiKey> {
        self.inner.load_full().map(|key| (*key).clone())
    }

    /// Whether AI actions are currently possible
    pub fn is_available(&self) -> bool {
        self.inner.load().is_some()
    }
}

impl fmt::Debug for CredentialSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialSlot")
            .field("available", &self.is_available())
            .finish()
    }
}
