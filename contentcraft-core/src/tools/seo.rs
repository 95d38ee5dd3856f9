//! SEO suite: meta tags, heading structure and readability.

use super::{require, Tool};
use crate::brand::BrandProfile;
use crate::error::CraftError;
use crate::nav::Route;
use crate::response::{lenient, ExpectedShape};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Ideal meta title length in characters
pub const META_TITLE_RANGE: RangeInclusive<usize> = 50..=60;

/// Ideal meta description length in characters
pub const META_DESCRIPTION_RANGE: RangeInclusive<usize> = 150..=160;

/// Where a length falls relative to its ideal range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthStatus {
    Ideal,
    TooShort,
    TooLong,
}

/// Character count of a generated field against its ideal range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthReport {
    pub chars: usize,
    pub status: LengthStatus,
}

impl LengthReport {
    pub fn evaluate(text: &str, ideal: &RangeInclusive<usize>) -> Self {
        let chars = text.chars().count();
        let status = if chars > *ideal.end() {
            LengthStatus::TooLong
        } else if chars < *ideal.start() {
            LengthStatus::TooShort
        } else {
            LengthStatus::Ideal
        };
        Self { chars, status }
    }
}

/// Meta title and description generator input
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MetaTagRequest {
    /// Topic, existing content, or a URL
    pub text: String,
    /// Optional target keywords
    pub keywords: String,
}

impl MetaTagRequest {
    pub fn new(text: impl Into<String>, keywords: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keywords: keywords.into(),
        }
    }
}

impl Tool for MetaTagRequest {
    type Output = SeoMetaTags;

    const CONTEXT: &'static str = "meta tags";

    fn route(&self) -> Route {
        Route::SeoSuite
    }

    fn validate(&self) -> Result<(), CraftError> {
        require(
            "text",
            &self.text,
            "Please provide some input text (topic, content, or URL).",
        )
    }

    fn prompt(&self, brand: &BrandProfile) -> String {
        format!(
            r#"
You are an expert SEO copywriter for {short_name} ({website}).
Our slogan is "{slogan}".
Based on the following input text (which could be a topic, existing content, or a URL that you should conceptually understand) and optional target keywords, generate an SEO-optimized meta title and meta description.

Input Text:
"""
{text}
"""

Target Keywords (optional): "{keywords}"

Constraints for the output:
- Meta Title: Must be compelling, click-worthy, and strictly between {title_min}-{title_max} characters.
- Meta Description: Must be engaging, informative, encourage clicks, and strictly between {desc_min}-{desc_max} characters.
- Incorporate target keywords naturally if provided and relevant.
- Reflect the brand's innovative and professional tone.

Output the result as a JSON object with the following exact structure:
{{
  "metaTitle": "Your generated meta title",
  "metaDescription": "Your generated meta description"
}}
Ensure the JSON is valid.
"#,
            short_name = brand.short_name,
            website = brand.website,
            slogan = brand.slogan,
            text = self.text,
            keywords = self.keywords,
            title_min = META_TITLE_RANGE.start(),
            title_max = META_TITLE_RANGE.end(),
            desc_min = META_DESCRIPTION_RANGE.start(),
            desc_max = META_DESCRIPTION_RANGE.end(),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetaTags {
    pub meta_title: String,
    pub meta_description: String,
}

impl SeoMetaTags {
    pub fn title_report(&self) -> LengthReport {
        LengthReport::evaluate(&self.meta_title, &META_TITLE_RANGE)
    }

    pub fn description_report(&self) -> LengthReport {
        LengthReport::evaluate(&self.meta_description, &META_DESCRIPTION_RANGE)
    }
}

impl ExpectedShape for SeoMetaTags {}

/// Heading structure analysis input
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HeaderAnalysisRequest {
    /// Plain text, Markdown, or HTML
    pub text: String,
}

impl HeaderAnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Tool for HeaderAnalysisRequest {
    type Output = HeaderAnalysis;

    const CONTEXT: &'static str = "header analysis";

    fn route(&self) -> Route {
        Route::SeoSuite
    }

    fn validate(&self) -> Result<(), CraftError> {
        require(
            "text",
            &self.text,
            "Please provide text content for header analysis.",
        )
    }

    fn prompt(&self, brand: &BrandProfile) -> String {
        format!(
            r#"
You are an SEO expert for {short_name}.
Analyze the heading structure (H1-H6) of the following text content.
The input might be plain text, Markdown, or HTML. Identify headings based on common conventions (e.g., '# Title' in Markdown, '<h1>Title</h1>' in HTML, or lines that appear to be titles in plain text).

Input Text:
"""
{text}
"""

Provide the following:
1.  Count of H1 headings.
2.  A list of structural issues (e.g., "Multiple H1 tags found", "Skipped heading level from H2 to H4", "No H1 tag found", "H1 tag is not the first heading").
3.  A list of actionable suggestions for improvement (e.g., "Ensure there is only one H1 tag per page", "Use headings in sequential order").
4.  A brief text summary of the heading structure found (e.g., "H1: Main Title, H2: Section A, H3: Subsection A.1...").

Output the result as a JSON object with the following exact structure:
{{
  "h1Count": 0,
  "issues": ["Issue 1", "Issue 2"],
  "suggestions": ["Suggestion 1", "Suggestion 2"],
  "structureSummary": "H1: Example Title, H2: Example Section..."
}}
Ensure the JSON is valid. If no headings are identifiable, report that in the structureSummary and h1Count as 0.
"#,
            short_name = brand.short_name,
            text = self.text,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeaderAnalysis {
    /// Any number the model reports, fractional or negative included
    pub h1_count: f64,
    #[serde(deserialize_with = "lenient::list")]
    pub issues: Vec<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub suggestions: Vec<String>,
    pub structure_summary: String,
}

impl ExpectedShape for HeaderAnalysis {}

/// Readability scoring input
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReadabilityRequest {
    pub text: String,
}

impl ReadabilityRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Tool for ReadabilityRequest {
    type Output = ReadabilityScores;

    const CONTEXT: &'static str = "readability scores";

    fn route(&self) -> Route {
        Route::SeoSuite
    }

    fn validate(&self) -> Result<(), CraftError> {
        require(
            "text",
            &self.text,
            "Please provide text content for readability analysis.",
        )
    }

    fn prompt(&self, brand: &BrandProfile) -> String {
        format!(
            r#"
You are an SEO and content expert for {short_name}.
Calculate the Flesch Reading Ease score and Flesch-Kincaid Grade Level for the following text.
Provide a brief, helpful interpretation of these scores in the context of web content readability.

Input Text:
"""
{text}
"""

Output the result as a JSON object with the following exact structure:
{{
  "fleschReadingEase": 0.0,
  "fleschKincaidGradeLevel": 0.0,
  "interpretation": "Brief interpretation of the scores and what they mean for general web audience."
}}
Ensure the JSON is valid. If the text is too short to calculate meaningful scores, indicate this in the interpretation.
"#,
            short_name = brand.short_name,
            text = self.text,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityScores {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade_level: f64,
    pub interpretation: String,
}

impl ExpectedShape for ReadabilityScores {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::parse_structured;

    #[test]
    fn test_required_text_messages() {
        let err = MetaTagRequest::new("  ", "ai").validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please provide some input text (topic, content, or URL)."
        );

        let err = HeaderAnalysisRequest::default().validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please provide text content for header analysis."
        );

        let err = ReadabilityRequest::new("").validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please provide text content for readability analysis."
        );

        assert!(MetaTagRequest::new("AI marketing", "").validate().is_ok());
    }

    #[test]
    fn test_meta_prompt_includes_inputs() {
        let prompt = MetaTagRequest::new("AI content tools", "seo, ai").prompt(&BrandProfile::default());
        assert!(prompt.contains("expert SEO copywriter for HERE AND NOW AI (https://hereandnowai.com)"));
        assert!(prompt.contains("\"\"\"\nAI content tools\n\"\"\""));
        assert!(prompt.contains("Target Keywords (optional): \"seo, ai\""));
        assert!(prompt.contains("strictly between 50-60 characters"));
        assert!(prompt.contains("strictly between 150-160 characters"));
    }

    #[test]
    fn test_length_report() {
        let report = LengthReport::evaluate(&"a".repeat(55), &META_TITLE_RANGE);
        assert_eq!(report, LengthReport { chars: 55, status: LengthStatus::Ideal });
        assert_eq!(
            LengthReport::evaluate("short", &META_TITLE_RANGE).status,
            LengthStatus::TooShort
        );
        assert_eq!(
            LengthReport::evaluate(&"é".repeat(161), &META_DESCRIPTION_RANGE).status,
            LengthStatus::TooLong
        );
    }

    #[test]
    fn test_header_analysis_shape() {
        let ok = r#"{"h1Count": 1, "issues": [], "suggestions": ["Keep it"], "structureSummary": "H1: Title"}"#;
        let parsed: HeaderAnalysis = parse_structured(ok, "header analysis", 300).unwrap();
        assert_eq!(parsed.h1_count, 1.0);

        let bad = r#"{"h1Count": "one", "issues": [], "suggestions": [], "structureSummary": ""}"#;
        assert!(parse_structured::<HeaderAnalysis>(bad, "header analysis", 300).is_err());

        let missing = r#"{"h1Count": 1, "issues": [], "structureSummary": ""}"#;
        assert!(parse_structured::<HeaderAnalysis>(missing, "header analysis", 300).is_err());

        let not_a_list = r#"{"h1Count": 1, "issues": "none", "suggestions": [], "structureSummary": ""}"#;
        assert!(parse_structured::<HeaderAnalysis>(not_a_list, "header analysis", 300).is_err());
    }

    #[test]
    fn test_header_count_accepts_any_number() {
        for (count, expected) in [("1.0", 1.0), ("-1", -1.0), ("2.5", 2.5)] {
            let raw = format!(
                r#"{{"h1Count": {}, "issues": [{{"level": "h2"}}], "suggestions": [], "structureSummary": "s"}}"#,
                count
            );
            let parsed: HeaderAnalysis = parse_structured(&raw, "header analysis", 300).unwrap();
            assert_eq!(parsed.h1_count, expected);
            assert_eq!(parsed.issues, vec![r#"{"level":"h2"}"#]);
        }
    }

    #[test]
    fn test_readability_accepts_integers() {
        let raw = "```json\n{\"fleschReadingEase\": 62, \"fleschKincaidGradeLevel\": 8.4, \"interpretation\": \"Plain English.\"}\n```";
        let parsed: ReadabilityScores = parse_structured(raw, "readability scores", 300).unwrap();
        assert_eq!(parsed.flesch_reading_ease, 62.0);
    }
}
