//! Plain-text rendering of pages and results.

use contentcraft::tools::{
    DemographicAdaptation, GeneratedContent, HeaderAnalysis, LengthReport, LengthStatus,
    ReadabilityScores, SeoMetaTags, SloganCheck, ToneAnalysis,
};
use contentcraft::{BrandProfile, Route};
use std::fmt::Write;

pub const CREDENTIAL_BANNER: &str = "Important: For AI features to function correctly, please ensure the API_KEY environment variable is set. AI actions are disabled until a key is available.";

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}\n{}", title, "-".repeat(title.chars().count()));
}

fn bullets(out: &mut String, items: &[String]) {
    if items.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for item in items {
        let _ = writeln!(out, "  - {}", item);
    }
}

fn length_note(report: LengthReport, ideal: &str) -> String {
    let verdict = match report.status {
        LengthStatus::Ideal => "ideal",
        LengthStatus::TooShort => "too short",
        LengthStatus::TooLong => "too long",
    };
    format!("{} chars, {} (ideal {})", report.chars, verdict, ideal)
}

pub fn dashboard(brand: &BrandProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Welcome to ContentCraft AI");
    let _ = writeln!(out, "{}", brand.long_name);
    let _ = writeln!(out, "\"{}\"", brand.slogan);

    heading(&mut out, "Our Core Functionalities");
    for route in Route::features() {
        let _ = writeln!(out, "  {} ({})", route.name(), route.path());
        let _ = writeln!(out, "    {}", route.summary());
        let _ = writeln!(out, "    {}", route.call_to_action());
    }

    heading(&mut out, "About ContentCraft AI");
    let _ = writeln!(
        out,
        "ContentCraft AI is the flagship content creation engine for {}. It generates \
         brand-consistent content, from SEO-optimized blog posts to social media updates \
         and email campaigns.",
        brand.long_name
    );

    heading(&mut out, "Contact");
    let _ = writeln!(out, "  Website: {}", brand.website);
    let _ = writeln!(out, "  Email:   {}", brand.email);
    let _ = writeln!(out, "  Mobile:  {}", brand.mobile);
    for (label, url) in brand.social_media.entries() {
        let _ = writeln!(out, "  {}: {}", label, url);
    }
    out
}

pub fn routes() -> String {
    let mut out = String::new();
    for route in Route::ALL {
        let _ = writeln!(out, "{:<12} {}", route.path(), route.name());
    }
    out
}

pub fn meta_tags(tags: &SeoMetaTags) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Meta Title: {}", tags.meta_title);
    let _ = writeln!(out, "  {}", length_note(tags.title_report(), "50-60"));
    let _ = writeln!(out, "Meta Description: {}", tags.meta_description);
    let _ = writeln!(out, "  {}", length_note(tags.description_report(), "150-160"));
    out
}

pub fn header_analysis(analysis: &HeaderAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "H1 Count: {}", analysis.h1_count);
    let _ = writeln!(out, "Summary: {}", analysis.structure_summary);
    heading(&mut out, "Issues");
    bullets(&mut out, &analysis.issues);
    heading(&mut out, "Suggestions");
    bullets(&mut out, &analysis.suggestions);
    out
}

pub fn readability(scores: &ReadabilityScores) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Flesch Reading Ease: {:.1}", scores.flesch_reading_ease);
    let _ = writeln!(
        out,
        "Flesch-Kincaid Grade Level: {:.1}",
        scores.flesch_kincaid_grade_level
    );
    let _ = writeln!(out, "Interpretation: {}", scores.interpretation);
    out
}

pub fn tone(analysis: &ToneAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Identified Tone: {}", analysis.identified_tone);
    let _ = writeln!(out, "Alignment: {}", analysis.alignment_feedback);
    heading(&mut out, "Suggestions");
    bullets(&mut out, &analysis.suggestions);
    out
}

pub fn slogan(check: &SloganCheck) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Slogan Present: {}",
        if check.is_slogan_present { "Yes" } else { "No" }
    );
    if let Some(found) = &check.slogan_found_text {
        let _ = writeln!(out, "Found Text: \"{}\"", found);
    }
    if let Some(context) = &check.usage_context {
        let _ = writeln!(out, "Context: {}", context);
    }
    heading(&mut out, "Suggestions");
    bullets(&mut out, &check.suggestions);
    out
}

pub fn adaptation(result: &DemographicAdaptation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Target Demographic: {}", result.target_demographic);
    heading(&mut out, "Adapted Snippet");
    let _ = writeln!(out, "{}", result.adapted_content_snippet);
    heading(&mut out, "Rationale");
    bullets(&mut out, &result.adaptation_rationale);
    heading(&mut out, "Overall Suggestions");
    bullets(&mut out, &result.overall_suggestions);
    out
}

pub fn generated_content(content: &GeneratedContent) -> String {
    let mut out = String::new();
    heading(&mut out, "Primary Content");
    let _ = writeln!(out, "{}", content.primary_content);

    heading(&mut out, "SEO Metadata");
    let seo = &content.seo_metadata;
    let _ = writeln!(out, "  Title: {}", seo.title);
    let _ = writeln!(out, "  Description: {}", seo.description);
    let _ = writeln!(out, "  Keywords: {}", seo.keywords.join(", "));
    if let Some(alt) = &seo.alt_text {
        let _ = writeln!(out, "  Alt Text: {}", alt);
    }

    if !content.social_media_variants.is_empty() {
        heading(&mut out, "Social Media Variants");
        for variant in &content.social_media_variants {
            let _ = writeln!(out, "  [{}]\n  {}\n", variant.platform, variant.content);
        }
    }

    let tags = &content.hashtag_strategies;
    if !tags.trending.is_empty() || !tags.niche.is_empty() {
        heading(&mut out, "Hashtag Strategies");
        let _ = writeln!(out, "  Trending: {}", tags.trending.join(" "));
        let _ = writeln!(out, "  Niche: {}", tags.niche.join(" "));
    }

    if !content.ab_testing_variations.is_empty() {
        heading(&mut out, "A/B Testing Variations");
        for variation in &content.ab_testing_variations {
            let _ = writeln!(out, "  A: {}", variation.variation_a);
            let _ = writeln!(out, "  B: {}", variation.variation_b);
            if let Some(notes) = &variation.notes {
                let _ = writeln!(out, "  Notes: {}", notes);
            }
        }
    }

    let lists = [
        ("Visual Content Descriptions", &content.visual_content_descriptions),
        ("Performance Optimization Tips", &content.performance_optimization_tips),
        (
            "Content Calendar Placement",
            &content.content_calendar_placement_suggestions,
        ),
        (
            "Cross-Platform Repurposing Ideas",
            &content.cross_platform_repurposing_ideas,
        ),
        (
            "Engagement Enhancement Strategies",
            &content.engagement_enhancement_strategies,
        ),
    ];
    for (title, items) in lists {
        if !items.is_empty() {
            heading(&mut out, title);
            bullets(&mut out, items);
        }
    }

    out
}

/// The unparsed content package, shown in full so nothing generated is lost
pub fn raw_reply(raw: &str) -> String {
    let mut out = String::new();
    heading(&mut out, "Primary Content");
    let _ = writeln!(out, "Error: Could not parse AI response. Raw output:\n{}", raw);
    out
}

pub fn raw_reply_json(raw: &str) -> serde_json::Value {
    serde_json::json!({ "rawResponse": raw })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_lists_feature_cards() {
        let text = dashboard(&BrandProfile::default());
        assert!(text.starts_with("Welcome to ContentCraft AI"));
        assert!(text.contains("\"designed with passion for innovation\""));
        assert!(text.contains("Access powerful tools for audience targeting."));
        assert!(text.contains("Go to Content"));
        assert!(!text.contains("Access powerful tools for dashboard."));
    }

    #[test]
    fn test_routes_table() {
        let text = routes();
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().next().unwrap().starts_with("/ "));
    }

    #[test]
    fn test_meta_tags_show_length_status() {
        let text = meta_tags(&SeoMetaTags {
            meta_title: "x".repeat(55),
            meta_description: "y".repeat(170),
        });
        assert!(text.contains("55 chars, ideal (ideal 50-60)"));
        assert!(text.contains("170 chars, too long (ideal 150-160)"));
    }

    #[test]
    fn test_raw_reply_is_kept_whole() {
        let raw = format!("{}END", "x".repeat(700));
        let text = raw_reply(&raw);
        assert!(text.contains("Error: Could not parse AI response. Raw output:\n"));
        assert!(text.trim_end().ends_with(&raw));
        assert_eq!(raw_reply_json(&raw)["rawResponse"], raw.as_str());
    }

    #[test]
    fn test_slogan_optional_fields() {
        let text = slogan(&SloganCheck {
            is_slogan_present: false,
            slogan_found_text: None,
            usage_context: None,
            suggestions: vec![],
        });
        assert!(text.contains("Slogan Present: No"));
        assert!(!text.contains("Found Text"));
        assert!(text.contains("(none)"));
    }
}
