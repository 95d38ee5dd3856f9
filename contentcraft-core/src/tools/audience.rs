//! Audience targeting: demographic-based content adaptation.

use super::Tool;
use crate::brand::BrandProfile;
use crate::error::CraftError;
use crate::nav::Route;
use crate::response::{lenient, ExpectedShape};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DemographicAdaptationRequest {
    pub content: String,
    pub demographics: String,
}

impl DemographicAdaptationRequest {
    pub fn new(content: impl Into<String>, demographics: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            demographics: demographics.into(),
        }
    }
}

impl Tool for DemographicAdaptationRequest {
    type Output = DemographicAdaptation;

    const CONTEXT: &'static str = "demographic adaptation";

    fn route(&self) -> Route {
        Route::AudienceTargeting
    }

    fn validate(&self) -> Result<(), CraftError> {
        // Both fields share one message.
        let field = if self.content.trim().is_empty() {
            "content"
        } else if self.demographics.trim().is_empty() {
            "demographics"
        } else {
            return Ok(());
        };
        Err(CraftError::validation(
            field,
            "Please provide both original content and target demographics.",
        ))
    }

    fn prompt(&self, brand: &BrandProfile) -> String {
        format!(
            r#"
You are an expert Content Personalization Strategist for {short_name}.
Our brand voice is "{voice}".
Our slogan is "{slogan}".

Analyze the following 'Original Content' and adapt a key snippet of it (or provide specific actionable suggestions) to better resonate with the 'Target Demographic' provided.
The goal is to make the content more engaging and relevant to this specific group without losing the core message or violating the brand voice.

Original Content:
"""
{content}
"""

Target Demographic:
"{demographics}"

Provide the following in your analysis and recommendations:
1.  **targetDemographic**: Confirm the target demographic you are addressing.
2.  **adaptedContentSnippet**: Provide an example of how a key part of the original content could be rewritten or adapted. This could be a direct rewrite of a sentence or paragraph, or specific examples of phrasing changes. If a direct rewrite isn't feasible for a snippet, provide highly concrete examples of changes.
3.  **adaptationRationale**: A list of 2-4 bullet points explaining why these specific adaptations (language, tone, examples, references, etc.) would appeal to the target demographic.
4.  **overallSuggestions**: A list of 2-3 broader suggestions for adapting the *entire* piece of content for this demographic, beyond the snippet.

Output the result as a JSON object with the exact structure:
{{
  "targetDemographic": "The specified target demographic",
  "adaptedContentSnippet": "The adapted content snippet or highly specific examples of changes.",
  "adaptationRationale": ["Rationale point 1...", "Rationale point 2..."],
  "overallSuggestions": ["Overall suggestion 1...", "Overall suggestion 2..."]
}}
Ensure the JSON is valid. Focus on actionable advice.
"#,
            short_name = brand.short_name,
            voice = brand.voice,
            slogan = brand.slogan,
            content = self.content,
            demographics = self.demographics,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DemographicAdaptation {
    pub target_demographic: String,
    pub adapted_content_snippet: String,
    #[serde(deserialize_with = "lenient::list")]
    pub adaptation_rationale: Vec<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub overall_suggestions: Vec<String>,
}

impl ExpectedShape for DemographicAdaptation {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::parse_structured;

    #[test]
    fn test_both_fields_required() {
        let message = "Please provide both original content and target demographics.";

        for (content, demographics, field) in [
            ("", "Gen Z", "content"),
            ("Our new app", "  ", "demographics"),
            ("", "", "content"),
        ] {
            match DemographicAdaptationRequest::new(content, demographics).validate() {
                Err(CraftError::Validation { field: f, message: m }) => {
                    assert_eq!(f, field);
                    assert_eq!(m, message);
                }
                other => panic!("Expected Validation error, got {:?}", other),
            }
        }

        assert!(DemographicAdaptationRequest::new("Our new app", "Gen Z")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_prompt_quotes_demographic() {
        let prompt = DemographicAdaptationRequest::new("Launch post", "Retirees in Kerala")
            .prompt(&BrandProfile::default());
        assert!(prompt.contains("Target Demographic:\n\"Retirees in Kerala\""));
        assert!(prompt.contains("Our slogan is \"designed with passion for innovation\"."));
    }

    #[test]
    fn test_output_shape() {
        let raw = r#"{"targetDemographic": "Gen Z", "adaptedContentSnippet": "yo", "adaptationRationale": ["short"], "overallSuggestions": []}"#;
        let parsed: DemographicAdaptation = parse_structured(raw, "demographic adaptation", 300).unwrap();
        assert_eq!(parsed.target_demographic, "Gen Z");

        let missing = r#"{"targetDemographic": "Gen Z", "adaptedContentSnippet": "yo", "adaptationRationale": ["short"]}"#;
        assert!(parse_structured::<DemographicAdaptation>(missing, "demographic adaptation", 300).is_err());
    }

    #[test]
    fn test_list_items_of_any_kind() {
        let raw = r#"{
            "targetDemographic": "Gen Z",
            "adaptedContentSnippet": "yo",
            "adaptationRationale": [{"change": "slang", "why": "relatable"}, "shorter"],
            "overallSuggestions": [3]
        }"#;
        let parsed: DemographicAdaptation = parse_structured(raw, "demographic adaptation", 300).unwrap();
        assert_eq!(
            parsed.adaptation_rationale,
            vec![r#"{"change":"slang","why":"relatable"}"#, "shorter"]
        );
        assert_eq!(parsed.overall_suggestions, vec!["3"]);

        let not_a_list = r#"{"targetDemographic": "Gen Z", "adaptedContentSnippet": "yo", "adaptationRationale": "short", "overallSuggestions": []}"#;
        assert!(parse_structured::<DemographicAdaptation>(not_a_list, "demographic adaptation", 300).is_err());
    }
}
