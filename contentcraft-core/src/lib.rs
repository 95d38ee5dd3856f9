//! # ContentCraft Core
//!
//! Core abstractions and runtime for ContentCraft AI.
//!
//! This crate holds everything that does not depend on a particular hosted
//! model: the brand profile injected into prompts, the tool forms and their
//! structured outputs, reply parsing, the credential slot and the executor
//! that ties one form submission to one provider call.

pub mod brand;
pub mod credential;
pub mod error;
pub mod layer;
pub mod nav;
pub mod provider;
pub mod response;
pub mod runtime;
pub mod tools;
pub mod types;

#[cfg(test)]
mod testing;

// Re-exports
pub use brand::BrandProfile;
pub use credential::{ApiKey, CredentialSlot, DEFAULT_API_KEY_ENV};
pub use error::CraftError;
pub use layer::{Layer, LayeredProvider};
pub use nav::Route;
pub use provider::Provider;
pub use response::{parse_structured, strip_json_fence, ExpectedShape};
pub use runtime::{ContentCraft, ContentCraftBuilder, FormSession, FormStatus};
pub use tools::{
    ContentBrief, ContentType, DemographicAdaptation, DemographicAdaptationRequest,
    GeneratedContent, HeaderAnalysis, HeaderAnalysisRequest, MetaTagRequest, ReadabilityRequest,
    ReadabilityScores, SeoMetaTags, SloganCheck, SloganCheckRequest, ToneAnalysis,
    ToneAnalysisRequest, Tool,
};
pub use types::*;

/// Result type alias for ContentCraft operations
pub type Result<T> = std::result::Result<T, CraftError>;
