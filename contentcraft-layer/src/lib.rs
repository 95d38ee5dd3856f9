//! # ContentCraft Layers
//!
//! Built-in layers for ContentCraft AI.
//!
//! Currently implemented layers:
//! - `LoggingLayer`: Logs every provider call with timing and token usage
//!
//! Nothing here retries: a failed generation surfaces to the form as-is.
//!
//! ## Usage
//!
//! ```ignore
//! use contentcraft_core::ContentCraft;
//! use contentcraft_layer::LoggingLayer;
//!
//! let craft = ContentCraft::builder(provider)
//!     .layer(LoggingLayer::new())
//!     .finish();
//! ```

pub mod logging;

// Re-exports
pub use logging::{LoggingLayer, LoggingProvider};
