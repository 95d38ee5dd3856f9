//! Brand identity used when building prompts.

use serde::{Deserialize, Serialize};

/// Brand colors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BrandColors {
    pub primary: String,
    pub secondary: String,
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            primary: "#FFDF00".to_string(),
            secondary: "#004040".to_string(),
        }
    }
}

/// Logo assets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BrandLogo {
    pub title: String,
    pub favicon: String,
}

impl Default for BrandLogo {
    fn default() -> Self {
        Self {
            title: "https://raw.githubusercontent.com/hereandnowai/images/refs/heads/main/logos/HNAI%20Title%20-Teal%20%26%20Golden%20Logo%20-%20DESIGN%203%20-%20Raj-07.png".to_string(),
            favicon: "https://raw.githubusercontent.com/hereandnowai/images/refs/heads/main/favicon-logo-with-name.png".to_string(),
        }
    }
}

/// Chatbot avatar assets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BrandChatbot {
    pub avatar: String,
    pub face: String,
}

impl Default for BrandChatbot {
    fn default() -> Self {
        Self {
            avatar: "https://raw.githubusercontent.com/hereandnowai/images/refs/heads/main/logos/caramel.jpeg".to_string(),
            face: "https://raw.githubusercontent.com/hereandnowai/images/refs/heads/main/logos/caramel-face.jpeg".to_string(),
        }
    }
}

/// Social media links
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SocialLinks {
    pub blog: String,
    pub linkedin: String,
    pub instagram: String,
    pub github: String,
    pub x: String,
    pub youtube: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            blog: "https://hereandnowai.com/blog".to_string(),
            linkedin: "https://www.linkedin.com/company/hereandnowai/".to_string(),
            instagram: "https://instagram.com/hereandnow_ai".to_string(),
            github: "https://github.com/hereandnowai".to_string(),
            x: "https://x.com/hereandnow_ai".to_string(),
            youtube: "https://youtube.com/@hereandnow_ai".to_string(),
        }
    }
}

impl SocialLinks {
    /// Labelled links in display order
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("Blog", self.blog.as_str()),
            ("LinkedIn", self.linkedin.as_str()),
            ("Instagram", self.instagram.as_str()),
            ("GitHub", self.github.as_str()),
            ("X", self.x.as_str()),
            ("YouTube", self.youtube.as_str()),
        ]
    }
}

/// Brand profile injected into every prompt.
///
/// Every field has a built-in default, so a configuration file only needs to
/// name the fields it overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BrandProfile {
    pub short_name: String,
    pub long_name: String,
    pub website: String,
    pub email: String,
    pub mobile: String,
    pub slogan: String,
    /// Brand voice the tone tools measure against
    pub voice: String,
    pub colors: BrandColors,
    pub logo: BrandLogo,
    pub chatbot: BrandChatbot,
    pub social_media: SocialLinks,
}

impl Default for BrandProfile {
    fn default() -> Self {
        Self {
            short_name: "HERE AND NOW AI".to_string(),
            long_name: "HERE AND NOW AI - Artificial Intelligence Research Institute".to_string(),
            website: "https://hereandnowai.com".to_string(),
            email: "info@hereandnowai.com".to_string(),
            mobile: "+91 996 296 1000".to_string(),
            slogan: "designed with passion for innovation".to_string(),
            voice: "Professional yet approachable, innovation-focused".to_string(),
            colors: BrandColors::default(),
            logo: BrandLogo::default(),
            chatbot: BrandChatbot::default(),
            social_media: SocialLinks::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let brand: BrandProfile = serde_json::from_value(serde_json::json!({
            "short_name": "ACME",
            "colors": { "primary": "#000000" }
        }))
        .unwrap();

        assert_eq!(brand.short_name, "ACME");
        assert_eq!(brand.slogan, "designed with passion for innovation");
        assert_eq!(brand.colors.primary, "#000000");
        assert_eq!(brand.colors.secondary, "#004040");
    }
}
