//! Error types for ContentCraft operations.
//!
//! Every variant renders as the message shown to the user, so callers can
//! surface `err.to_string()` directly in an error panel.

use crate::response::truncate_chars;

/// The main error type for ContentCraft operations.
#[derive(Debug, thiserror::Error)]
pub enum CraftError {
    /// No API credential is available
    #[error("API Key is not configured. Please ensure the API_KEY environment variable is set.")]
    MissingCredential,

    /// A required form field is empty
    #[error("{message}")]
    Validation { field: String, message: String },

    /// The provider rejected the credential
    #[error("{provider} API Error: The provided API key is not valid. Please check your API_KEY environment variable.")]
    InvalidCredential { provider: String },

    /// The provider reported quota exhaustion
    #[error("{provider} API Error: You have exceeded your API quota. Please check your Google Cloud Console.")]
    QuotaExceeded { provider: String },

    /// Any other provider-side failure
    #[error("{provider} API Error: {message}")]
    Provider { provider: String, message: String },

    /// The model replied, but not with the expected JSON document
    #[error("Failed to parse AI response for {context}. Raw response snippet: {snippet}...")]
    MalformedResponse {
        context: String,
        snippet: String,
        reason: String,
        /// The complete reply, untruncated
        raw: String,
    },

    /// A call for this form is already outstanding
    #[error("A request is already in progress.")]
    Busy,

    /// Network-related errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors
    #[error("Error: {0}")]
    Other(String),
}

impl CraftError {
    /// Create a validation error for a required field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a provider error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Provider {
            provider: provider.into(),
            message: if message.trim().is_empty() {
                "An unknown error occurred".to_string()
            } else {
                message
            },
        }
    }

    /// Create a malformed response error quoting the first `snippet_chars`
    /// characters of `raw`
    pub fn malformed(
        context: impl Into<String>,
        raw: impl Into<String>,
        snippet_chars: usize,
        reason: impl Into<String>,
    ) -> Self {
        let raw = raw.into();
        Self::MalformedResponse {
            context: context.into(),
            snippet: truncate_chars(&raw, snippet_chars).to_string(),
            reason: reason.into(),
            raw,
        }
    }

    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Rewrite a raw vendor failure message into the friendliest matching variant.
    ///
    /// Known substrings map to dedicated variants; anything else is kept
    /// verbatim under [`CraftError::Provider`].
    pub fn classify(provider: impl Into<String>, message: impl Into<String>) -> Self {
        let provider = provider.into();
        let message = message.into();

        if message.contains("API key not valid") {
            Self::InvalidCredential { provider }
        } else if message.contains("quota") {
            Self::QuotaExceeded { provider }
        } else {
            Self::provider(provider, message)
        }
    }

    /// The full model reply behind a parse failure
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            CraftError::MalformedResponse { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// True for errors caused by a missing or rejected credential
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            CraftError::MissingCredential | CraftError::InvalidCredential { .. }
        )
    }

    /// True when the user can fix the problem by changing inputs or environment
    pub fn is_user_correctable(&self) -> bool {
        self.is_credential_error() || matches!(self, CraftError::Validation { .. })
    }
}

impl From<String> for CraftError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for CraftError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}
