//! # ContentCraft
//!
//! Brand-aware marketing content tools on top of a hosted large language
//! model.
//!
//! Every tool follows the same path: fill in a form, render a prompt that
//! carries the brand profile, send it to the model once, and parse the JSON
//! document it returns into a typed result.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! contentcraft = { version = "0.1", features = ["providers", "layers"] }
//! ```
//!
//! ```ignore
//! use contentcraft::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let craft = ContentCraft::builder(GeminiProvider::new())
//!     .layer(LoggingLayer::new())
//!     .credentials(CredentialSlot::from_env("API_KEY"))
//!     .finish();
//!
//! let tags = craft
//!     .run(&MetaTagRequest::new("Our new AI writing assistant...", "ai, marketing"))
//!     .await?;
//! println!("{}", tags.meta_title);
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `providers`: Gemini and OpenAI-compatible providers
//! - `layers`: Built-in layers (logging)
//! - `config`: TOML configuration loading
//! - `cli`: The `contentcraft` command line binary
//! - `full`: All features enabled

// Re-export core types and traits
pub use contentcraft_core::*;

// Re-export providers under `provider` module
#[cfg(feature = "providers")]
pub mod provider {
    //! Hosted model providers.
    pub use contentcraft_provider::*;
}

// Re-export layers under `layer` module
#[cfg(feature = "layers")]
pub mod layer {
    //! Built-in provider layers.
    pub use contentcraft_layer::*;
}

#[cfg(feature = "config")]
pub mod config;

/// Prelude module for convenient imports
pub mod prelude {
    //! Prelude module containing the most commonly used types and traits.
    //!
    //! ```
    //! use contentcraft::prelude::*;
    //! ```

    pub use crate::{
        BrandProfile, ContentCraft, CraftError, CredentialSlot, FormSession, FormStatus,
        GenerationConfig, Layer, Provider, Result, Route, Tool,
    };

    pub use crate::tools::*;

    #[cfg(feature = "providers")]
    pub use crate::provider::{deepseek, GeminiProvider, OpenAiProvider};

    #[cfg(feature = "layers")]
    pub use crate::layer::LoggingLayer;
}
