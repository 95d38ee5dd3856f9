//! Runtime layer for ContentCraft.
//!
//! The executor sits between the tool forms and the provider interface:
//! - Gating every request on the shared credential
//! - Validating inputs and rendering prompts
//! - Composing layers around the provider
//! - Parsing replies into structured results
//!
//! Sessions add per-form state on top of the executor.

pub mod executor;
pub mod session;

pub use executor::{ContentCraft, ContentCraftBuilder};
pub use session::{FormSession, FormStatus};
