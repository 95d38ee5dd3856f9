//! The AI-backed tools.
//!
//! Each tool is a plain input record that knows how to validate itself and
//! render its prompt, paired with the structured output it expects back.

pub mod audience;
pub mod brand;
pub mod content;
pub mod seo;

pub use audience::{DemographicAdaptation, DemographicAdaptationRequest};
pub use brand::{SloganCheck, SloganCheckRequest, ToneAnalysis, ToneAnalysisRequest};
pub use content::{
    AbTestingVariation, ContentBrief, ContentType, GeneratedContent, HashtagStrategies,
    SeoMetadata, SocialMediaVariant,
};
pub use seo::{
    HeaderAnalysis, HeaderAnalysisRequest, LengthReport, LengthStatus, MetaTagRequest,
    ReadabilityRequest, ReadabilityScores, SeoMetaTags,
};

use crate::brand::BrandProfile;
use crate::error::CraftError;
use crate::nav::Route;
use crate::response::{ExpectedShape, DEFAULT_SNIPPET_CHARS};
use serde::de::DeserializeOwned;

/// A form that turns user input into one prompt and one structured result.
pub trait Tool: Send + Sync {
    /// Structured result the model is asked to return
    type Output: DeserializeOwned + ExpectedShape + Send + Sync + 'static;

    /// Human-readable name of the result, used in logs and parse errors
    const CONTEXT: &'static str;

    /// How much of a bad reply to quote back in errors
    const SNIPPET_CHARS: usize = DEFAULT_SNIPPET_CHARS;

    /// The page this tool lives on
    fn route(&self) -> Route;

    /// Reject the submission if a required field is empty
    fn validate(&self) -> Result<(), CraftError>;

    /// Render the prompt for the given brand
    fn prompt(&self, brand: &BrandProfile) -> String;
}

/// Fail with `message` when `value` is empty or whitespace.
pub(crate) fn require(field: &str, value: &str, message: &str) -> Result<(), CraftError> {
    if value.trim().is_empty() {
        return Err(CraftError::validation(field, message));
    }
    Ok(())
}

/// Use `value` unless it is blank
pub(crate) fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
