//! Brand consistency: tone of voice and slogan usage.

use super::{require, Tool};
use crate::brand::BrandProfile;
use crate::error::CraftError;
use crate::nav::Route;
use crate::response::{lenient, ExpectedShape};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToneAnalysisRequest {
    pub text: String,
}

impl ToneAnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Tool for ToneAnalysisRequest {
    type Output = ToneAnalysis;

    const CONTEXT: &'static str = "tone analysis";

    fn route(&self) -> Route {
        Route::BrandConsistency
    }

    fn validate(&self) -> Result<(), CraftError> {
        require(
            "text",
            &self.text,
            "Please provide text content for tone analysis.",
        )
    }

    fn prompt(&self, brand: &BrandProfile) -> String {
        format!(
            r#"
You are an expert Brand Analyst for {short_name}.
Our brand voice is defined as: "{voice}".

Analyze the following text content for its tone of voice:
"""
{text}
"""

Provide the following:
1.  **identifiedTone**: A concise description of the dominant tone(s) you identify in the text (e.g., "Formal and academic", "Friendly and conversational", "Enthusiastic and persuasive").
2.  **alignmentFeedback**: Your assessment of how well the identified tone aligns with our brand voice ("{voice}"). Be specific.
3.  **suggestions**: A list of actionable suggestions (2-3) to better align the text with our brand voice, if necessary. If it's well-aligned, suggest ways to maintain or enhance it.

Output the result as a JSON object with the exact structure:
{{
  "identifiedTone": "Your identified tone(s)",
  "alignmentFeedback": "Your detailed feedback on alignment with '{voice}'.",
  "suggestions": ["Suggestion 1", "Suggestion 2"]
}}
Ensure the JSON is valid.
"#,
            short_name = brand.short_name,
            voice = brand.voice,
            text = self.text,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToneAnalysis {
    pub identified_tone: String,
    pub alignment_feedback: String,
    #[serde(deserialize_with = "lenient::list")]
    pub suggestions: Vec<String>,
}

impl ExpectedShape for ToneAnalysis {}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SloganCheckRequest {
    pub text: String,
}

impl SloganCheckRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Tool for SloganCheckRequest {
    type Output = SloganCheck;

    const CONTEXT: &'static str = "slogan check";

    fn route(&self) -> Route {
        Route::BrandConsistency
    }

    fn validate(&self) -> Result<(), CraftError> {
        require(
            "text",
            &self.text,
            "Please provide text content for slogan checking.",
        )
    }

    fn prompt(&self, brand: &BrandProfile) -> String {
        format!(
            r#"
You are a Brand Compliance Checker for {short_name}.
Our company slogan is: "{slogan}".

Analyze the following text content to determine if the slogan is present and used appropriately.
"""
{text}
"""

Provide the following:
1.  **isSloganPresent**: A boolean value (true or false) indicating if the exact slogan is found.
2.  **sloganFoundText** (optional): If present, the exact text snippet where the slogan was identified.
3.  **usageContext** (optional): If present, briefly describe the context of its use (e.g., "Found in the concluding paragraph", "Used as a tagline under a heading").
4.  **suggestions**: A list of actionable suggestions (1-2) regarding the slogan's use. If not present, suggest if and where it might be appropriate. If present, comment on its effectiveness.

Output the result as a JSON object with the exact structure:
{{
  "isSloganPresent": true/false,
  "sloganFoundText": "The exact slogan text if found",
  "usageContext": "Context of slogan usage if found",
  "suggestions": ["Suggestion 1", "Suggestion 2"]
}}
Ensure the JSON is valid.
"#,
            short_name = brand.short_name,
            slogan = brand.slogan,
            text = self.text,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SloganCheck {
    pub is_slogan_present: bool,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub slogan_found_text: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub usage_context: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub suggestions: Vec<String>,
}

impl ExpectedShape for SloganCheck {}
