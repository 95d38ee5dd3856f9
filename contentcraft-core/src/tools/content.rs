//! Content generation: one brief in, a full content package out.

use super::{or_fallback, require, Tool};
use crate::brand::BrandProfile;
use crate::error::CraftError;
use crate::nav::Route;
use crate::response::{lenient, ExpectedShape};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of content to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    #[default]
    BlogPost,
    MarketingCopy,
    SocialMedia,
    EmailMarketing,
    AdCopy,
    VideoScript,
    PodcastScript,
    PressRelease,
    WebsiteCopy,
    LeadMagnet,
}

impl ContentType {
    pub const ALL: [ContentType; 10] = [
        ContentType::BlogPost,
        ContentType::MarketingCopy,
        ContentType::SocialMedia,
        ContentType::EmailMarketing,
        ContentType::AdCopy,
        ContentType::VideoScript,
        ContentType::PodcastScript,
        ContentType::PressRelease,
        ContentType::WebsiteCopy,
        ContentType::LeadMagnet,
    ];

    /// Descriptive label, also used verbatim in the prompt
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::BlogPost => "Blog Post (SEO-optimized, 800-3000 words)",
            ContentType::MarketingCopy => {
                "Marketing Copy (sales pages, landing pages, product descriptions)"
            }
            ContentType::SocialMedia => "Social Media Content (platform-specific optimization)",
            ContentType::EmailMarketing => {
                "Email Marketing Campaigns (sequences, newsletters, promotions)"
            }
            ContentType::AdCopy => "Ad Copy & Headlines (Google Ads, Facebook Ads, display ads)",
            ContentType::VideoScript => "Video Scripts (YouTube, TikTok, Instagram Reels)",
            ContentType::PodcastScript => "Podcast Scripts & Show Notes",
            ContentType::PressRelease => "Press Releases & Media Kits",
            ContentType::WebsiteCopy => "Website Copy (About pages, service descriptions)",
            ContentType::LeadMagnet => "Lead Magnets (eBooks, whitepapers, checklists)",
        }
    }

    /// Short identifier accepted on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            ContentType::BlogPost => "blog-post",
            ContentType::MarketingCopy => "marketing-copy",
            ContentType::SocialMedia => "social-media",
            ContentType::EmailMarketing => "email-marketing",
            ContentType::AdCopy => "ad-copy",
            ContentType::VideoScript => "video-script",
            ContentType::PodcastScript => "podcast-script",
            ContentType::PressRelease => "press-release",
            ContentType::WebsiteCopy => "website-copy",
            ContentType::LeadMagnet => "lead-magnet",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContentType {
    type Err = CraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ContentType::ALL
            .into_iter()
            .find(|ct| ct.slug().eq_ignore_ascii_case(needle) || ct.label() == needle)
            .ok_or_else(|| {
                let known: Vec<_> = ContentType::ALL.iter().map(|ct| ct.slug()).collect();
                CraftError::validation(
                    "content_type",
                    format!(
                        "Unknown content type '{}'. Expected one of: {}",
                        needle,
                        known.join(", ")
                    ),
                )
            })
    }
}

/// Inputs of the content generation form.
///
/// Blank optional fields are replaced by sensible instructions in the prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContentBrief {
    pub content_type: ContentType,
    pub target_audience: String,
    pub business_objective: String,
    pub content_goals: String,
    pub word_count: String,
    pub tone: String,
    pub keywords: String,
    pub ctas: String,
    pub visual_elements: String,
    pub format_requirements: String,
    pub engagement_tactics: String,
    pub algorithm_considerations: String,
    pub cross_platform_adaptation: String,
}

impl Default for ContentBrief {
    fn default() -> Self {
        Self {
            content_type: ContentType::BlogPost,
            target_audience: String::new(),
            business_objective: String::new(),
            content_goals: String::new(),
            word_count: "800-1200 words".to_string(),
            tone: "Professional yet approachable, innovation-focused".to_string(),
            keywords: String::new(),
            ctas: String::new(),
            visual_elements: String::new(),
            format_requirements: String::new(),
            engagement_tactics: String::new(),
            algorithm_considerations: String::new(),
            cross_platform_adaptation: String::new(),
        }
    }
}

impl ContentBrief {
    /// Create a brief with the three required fields filled in
    pub fn new(
        content_type: ContentType,
        target_audience: impl Into<String>,
        business_objective: impl Into<String>,
        content_goals: impl Into<String>,
    ) -> Self {
        Self {
            content_type,
            target_audience: target_audience.into(),
            business_objective: business_objective.into(),
            content_goals: content_goals.into(),
            ..Self::default()
        }
    }
}

const OUTPUT_KEYS: &str = r#""primaryContent", "seoMetadata", "socialMediaVariants", "hashtagStrategies", "visualContentDescriptions", "performanceOptimizationTips", "abTestingVariations", "contentCalendarPlacementSuggestions", "crossPlatformRepurposingIdeas", "engagementEnhancementStrategies""#;

const OUTPUT_EXAMPLE_TAIL: &str = r##"  "seoMetadata": {
    "title": "SEO-optimized Title (approx 50-60 chars)",
    "description": "Compelling meta description (approx 150-160 chars)",
    "keywords": ["primary_keyword", "secondary_keyword", "long_tail_keyword"],
    "altText": "Descriptive alt text for a representative image, if applicable."
  },
  "socialMediaVariants": [
    { "platform": "Instagram Post", "content": "Short, engaging Instagram caption with relevant emojis and call to action. Max 2200 chars." },
    { "platform": "LinkedIn Post", "content": "Professional LinkedIn post focusing on value and insights. Include relevant hashtags. Max 3000 chars." },
    { "platform": "X (Twitter) Thread (3 Tweets)", "content": "Tweet 1: Hook...\nTweet 2: Main point...\nTweet 3: CTA/Link... (each tweet max 280 chars)" }
  ],
  "hashtagStrategies": {
    "trending": ["#relevantTrendingHashtag1", "#relevantTrendingHashtag2"],
    "niche": ["#nicheSpecificHashtag1", "#nicheSpecificHashtag2", "#brandHashtag"]
  },
  "visualContentDescriptions": [
    "Description for a hero image: A vibrant image representing [topic], conveying [emotion/concept].",
    "Concept for a short video: A quick tutorial demonstrating [key point], ending with a call to action."
  ],
  "performanceOptimizationTips": [
    "Tip 1: Ensure fast page load speed for better user experience and SEO.",
    "Tip 2: Use clear and compelling CTAs to guide user actions."
  ],
  "abTestingVariations": [
    { "variationA": "Headline Option A for A/B testing.", "variationB": "Headline Option B for A/B testing.", "notes": "Test which headline gets more clicks." },
    { "variationA": "CTA Option A for A/B testing.", "variationB": "CTA Option B for A/B testing.", "notes": "Test which CTA converts better." }
  ],
  "contentCalendarPlacementSuggestions": [
    "Suggestion 1: Publish this blog post on a Tuesday morning for optimal B2B reach.",
    "Suggestion 2: Schedule social media promotion throughout the week following publication."
  ],
  "crossPlatformRepurposingIdeas": [
    "Idea 1: Turn key points from this blog post into an infographic.",
    "Idea 2: Create a short video summarizing the main content for TikTok or Instagram Reels."
  ],
  "engagementEnhancementStrategies": [
    "Strategy 1: Ask open-ended questions in social media posts to encourage comments.",
    "Strategy 2: Run a poll related to the content topic to boost interaction."
  ]
}"##;

impl Tool for ContentBrief {
    type Output = GeneratedContent;

    const CONTEXT: &'static str = "generated content";
    const SNIPPET_CHARS: usize = 500;

    fn route(&self) -> Route {
        Route::ContentGenerator
    }

    fn validate(&self) -> Result<(), CraftError> {
        require(
            "target_audience",
            &self.target_audience,
            "Please provide the target audience.",
        )?;
        require(
            "business_objective",
            &self.business_objective,
            "Please provide the business objective.",
        )?;
        require(
            "content_goals",
            &self.content_goals,
            "Please provide the content goals.",
        )
    }

    fn prompt(&self, brand: &BrandProfile) -> String {
        let default_tone = format!(
            "Align with {} brand personality (Professional, innovative, approachable)",
            brand.short_name
        );

        format!(
            r#"You are ContentCraft AI, the flagship content creation engine for {long_name}.
Slogan: "{slogan}"
Brand Colors: Primary {primary}, Secondary {secondary}
Brand Voice: {voice}.

CONTEXT ANALYSIS:
- Content Type: {content_type}
- Target Audience: {audience}
- Business Objective: {objective}
- Brand Voice: {voice} ({short_name})
- Content Goals: {goals}

CONTENT SPECIFICATIONS:
- Word Count: {word_count}
- Tone: {tone}
- Keywords: {keywords}
- CTAs: {ctas}
- Visual Elements: {visuals}

PLATFORM OPTIMIZATION:
- Format Requirements: {format}
- Engagement Tactics: {engagement}
- Algorithm Considerations: {algorithm}
- Cross-Platform Adaptation: {cross_platform}

OUTPUT DELIVERY:
Please provide a JSON response object with the following 10 keys. Ensure the content for each key is comprehensive and directly usable.
The JSON object should have exactly these keys: {keys}.

Example structure for the JSON response (fill with actual generated content):
```json
{{
  "primaryContent": "The main generated content for {content_type}. Should be well-formatted, potentially with Markdown if appropriate (e.g., for blog posts).",
{example_tail}
```

Adhere to all Quality Assurance Protocols: fact-checking, originality, brand compliance, SEO best practices (Flesch score 60+), conversion optimization, legal compliance (if applicable, e.g., disclaimers for ad copy), and accessibility.
The content MUST reflect {short_name}'s commitment to innovation and embody the spirit of "{slogan}". Prioritize user experience, engagement, and conversion.
Generate the JSON output now.
"#,
            long_name = brand.long_name,
            short_name = brand.short_name,
            slogan = brand.slogan,
            primary = brand.colors.primary,
            secondary = brand.colors.secondary,
            voice = brand.voice,
            content_type = self.content_type.label(),
            audience = or_fallback(&self.target_audience, "Not specified"),
            objective = or_fallback(&self.business_objective, "Not specified"),
            goals = or_fallback(&self.content_goals, "Not specified"),
            word_count = or_fallback(&self.word_count, "Platform appropriate"),
            tone = or_fallback(&self.tone, &default_tone),
            keywords = or_fallback(&self.keywords, "Not specified, use general best practices"),
            ctas = or_fallback(&self.ctas, "Suggest relevant CTAs"),
            visuals = or_fallback(&self.visual_elements, "Suggest relevant visual elements"),
            format = or_fallback(
                &self.format_requirements,
                "Standard for the specified content type/platform"
            ),
            engagement = or_fallback(
                &self.engagement_tactics,
                "Suggest relevant engagement tactics"
            ),
            algorithm = or_fallback(
                &self.algorithm_considerations,
                "General best practices for visibility"
            ),
            cross_platform = or_fallback(
                &self.cross_platform_adaptation,
                "Consider how this content could be adapted"
            ),
            keys = OUTPUT_KEYS,
            example_tail = OUTPUT_EXAMPLE_TAIL,
        )
    }
}

/// SEO metadata for the primary content
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub keywords: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub alt_text: Option<String>,
}

/// One platform-specific rendition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SocialMediaVariant {
    #[serde(default, deserialize_with = "lenient::string")]
    pub platform: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HashtagStrategies {
    #[serde(default, deserialize_with = "lenient::strings")]
    pub trending: Vec<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub niche: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AbTestingVariation {
    #[serde(default, deserialize_with = "lenient::string")]
    pub variation_a: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub variation_b: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
}

/// The complete content package.
///
/// `primaryContent` and `seoMetadata` are mandatory. Every other section is
/// best effort: missing, null or oddly shaped sections come back empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    #[serde(deserialize_with = "lenient::string")]
    pub primary_content: String,
    pub seo_metadata: SeoMetadata,
    #[serde(default, deserialize_with = "lenient::records")]
    pub social_media_variants: Vec<SocialMediaVariant>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub hashtag_strategies: HashtagStrategies,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub visual_content_descriptions: Vec<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub performance_optimization_tips: Vec<String>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub ab_testing_variations: Vec<AbTestingVariation>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub content_calendar_placement_suggestions: Vec<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub cross_platform_repurposing_ideas: Vec<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub engagement_enhancement_strategies: Vec<String>,
}

impl ExpectedShape for GeneratedContent {
    fn check_shape(&self) -> Result<(), String> {
        if self.primary_content.trim().is_empty() {
            return Err("primaryContent is empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::parse_structured;

    fn complete_brief() -> ContentBrief {
        ContentBrief::new(
            ContentType::AdCopy,
            "Small business owners",
            "Increase website traffic by 20%",
            "Educate users about new features",
        )
    }

    #[test]
    fn test_each_required_field_blocks_submission() {
        assert!(complete_brief().validate().is_ok());

        let cases: [(fn(&mut ContentBrief), &str); 3] = [
            (|b| b.target_audience.clear(), "target_audience"),
            (|b| b.business_objective = "   ".to_string(), "business_objective"),
            (|b| b.content_goals.clear(), "content_goals"),
        ];

        for (blank, expected_field) in cases {
            let mut brief = complete_brief();
            blank(&mut brief);
            match brief.validate() {
                Err(CraftError::Validation { field, message }) => {
                    assert_eq!(field, expected_field);
                    assert!(message.starts_with("Please provide"));
                }
                other => panic!("Expected Validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_default_form_values() {
        let brief = ContentBrief::default();
        assert_eq!(brief.content_type, ContentType::BlogPost);
        assert_eq!(brief.word_count, "800-1200 words");
        assert!(brief.validate().is_err());
    }

    #[test]
    fn test_prompt_uses_fallbacks_and_brand() {
        let mut brief = complete_brief();
        brief.tone.clear();
        brief.word_count.clear();
        let brand = BrandProfile::default();
        let prompt = brief.prompt(&brand);

        assert!(prompt.starts_with("You are ContentCraft AI, the flagship content creation engine for HERE AND NOW AI - Artificial Intelligence Research Institute."));
        assert!(prompt.contains("- Content Type: Ad Copy & Headlines (Google Ads, Facebook Ads, display ads)"));
        assert!(prompt.contains("- Target Audience: Small business owners"));
        assert!(prompt.contains("- Word Count: Platform appropriate"));
        assert!(prompt.contains("- Tone: Align with HERE AND NOW AI brand personality"));
        assert!(prompt.contains("- Keywords: Not specified, use general best practices"));
        assert!(prompt.contains("\"primaryContent\": \"The main generated content for Ad Copy"));
        assert!(prompt.contains("embody the spirit of \"designed with passion for innovation\""));
        assert!(prompt.trim_end().ends_with("Generate the JSON output now."));
    }

    #[test]
    fn test_content_type_parsing() {
        assert_eq!("blog-post".parse::<ContentType>().unwrap(), ContentType::BlogPost);
        assert_eq!("LEAD-MAGNET".parse::<ContentType>().unwrap(), ContentType::LeadMagnet);
        assert_eq!(
            "Podcast Scripts & Show Notes".parse::<ContentType>().unwrap(),
            ContentType::PodcastScript
        );
        assert!("poem".parse::<ContentType>().is_err());
    }

    #[test]
    fn test_output_requires_primary_content_and_seo() {
        let ok = r##"{"primaryContent": "Hello", "seoMetadata": {"title": "t", "description": "d"}, "hashtagStrategies": {"trending": ["#a"]}}"##;
        let parsed: GeneratedContent = parse_structured(ok, "generated content", 500).unwrap();
        assert_eq!(parsed.primary_content, "Hello");
        assert!(parsed.social_media_variants.is_empty());
        assert_eq!(parsed.hashtag_strategies.trending, vec!["#a"]);
        assert!(parsed.hashtag_strategies.niche.is_empty());

        let missing_seo = r#"{"primaryContent": "Hello"}"#;
        assert!(parse_structured::<GeneratedContent>(missing_seo, "generated content", 500).is_err());

        let empty_primary = r#"{"primaryContent": "", "seoMetadata": {"title": "t", "description": "d"}}"#;
        assert!(parse_structured::<GeneratedContent>(empty_primary, "generated content", 500).is_err());

        let null_seo = r#"{"primaryContent": "Hello", "seoMetadata": null}"#;
        assert!(parse_structured::<GeneratedContent>(null_seo, "generated content", 500).is_err());
    }

    #[test]
    fn test_null_sections_come_back_empty() {
        let raw = r#"{
            "primaryContent": "Hello",
            "seoMetadata": {"title": "t", "description": "d", "keywords": null},
            "socialMediaVariants": null,
            "hashtagStrategies": null,
            "abTestingVariations": null,
            "visualContentDescriptions": null
        }"#;
        let parsed: GeneratedContent = parse_structured(raw, "generated content", 500).unwrap();

        assert!(parsed.seo_metadata.keywords.is_empty());
        assert!(parsed.social_media_variants.is_empty());
        assert_eq!(parsed.hashtag_strategies, HashtagStrategies::default());
        assert!(parsed.ab_testing_variations.is_empty());
        assert!(parsed.visual_content_descriptions.is_empty());
    }

    #[test]
    fn test_mistyped_sections_are_tolerated() {
        let raw = r##"{
            "primaryContent": "Hello",
            "seoMetadata": {"title": "t", "description": "d", "keywords": "ai, marketing"},
            "socialMediaVariants": [{"platform": "X", "content": "Short post"}, "stray"],
            "hashtagStrategies": "#ai #growth",
            "performanceOptimizationTips": "Post in the morning",
            "abTestingVariations": {"variationA": "a"},
            "engagementEnhancementStrategies": [{"tactic": "polls"}]
        }"##;
        let parsed: GeneratedContent = parse_structured(raw, "generated content", 500).unwrap();

        assert_eq!(parsed.seo_metadata.keywords, vec!["ai", "marketing"]);
        assert_eq!(
            parsed.social_media_variants,
            vec![SocialMediaVariant {
                platform: "X".to_string(),
                content: "Short post".to_string(),
            }]
        );
        assert_eq!(parsed.hashtag_strategies, HashtagStrategies::default());
        assert_eq!(parsed.performance_optimization_tips, vec!["Post in the morning"]);
        assert!(parsed.ab_testing_variations.is_empty());
        assert_eq!(
            parsed.engagement_enhancement_strategies,
            vec![r#"{"tactic":"polls"}"#]
        );
    }
}
