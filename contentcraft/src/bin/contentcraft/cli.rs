use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use contentcraft::config::ProviderKind;
use contentcraft::tools::{ContentBrief, ContentType};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contentcraft")]
#[command(version, about = "Brand-aware marketing content tools powered by a hosted LLM")]
pub struct Cli {
    /// Path to TOML configuration file (defaults to ./contentcraft.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the provider from the configuration file
    #[arg(long, global = true)]
    pub provider: Option<ProviderKind>,

    /// Override the model from the configuration file
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Print the structured result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the welcome page and feature overview
    Dashboard,
    /// List every page and its path
    Routes,
    /// Show provider, model and credential status
    Status,
    /// Generate a complete content package
    Generate(GenerateArgs),
    /// SEO tools
    #[command(subcommand)]
    Seo(SeoCommand),
    /// Brand consistency tools
    #[command(subcommand)]
    Brand(BrandCommand),
    /// Audience targeting tools
    #[command(subcommand)]
    Audience(AudienceCommand),
}

/// Text to analyze, inline or from a file
#[derive(Args, Debug, Clone, Default)]
pub struct TextInput {
    /// Inline text
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl TextInput {
    /// The supplied text; empty when neither flag is given so that the
    /// form's own required-field message is reported
    pub fn read(&self) -> anyhow::Result<String> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file '{}'", path.display())),
            (None, None) => Ok(String::new()),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Content type slug (e.g. blog-post, ad-copy, email-marketing)
    #[arg(long = "type", default_value = "blog-post")]
    pub content_type: ContentType,

    /// Who the content is for
    #[arg(long, default_value = "")]
    pub audience: String,

    /// What the business wants to achieve
    #[arg(long, default_value = "")]
    pub objective: String,

    /// What the content itself should accomplish
    #[arg(long, default_value = "")]
    pub goals: String,

    #[arg(long)]
    pub word_count: Option<String>,

    #[arg(long)]
    pub tone: Option<String>,

    /// Comma-separated keywords
    #[arg(long)]
    pub keywords: Option<String>,

    /// Calls to action
    #[arg(long)]
    pub ctas: Option<String>,

    #[arg(long)]
    pub visual_elements: Option<String>,

    #[arg(long)]
    pub format_requirements: Option<String>,

    #[arg(long)]
    pub engagement_tactics: Option<String>,

    #[arg(long)]
    pub algorithm_considerations: Option<String>,

    #[arg(long)]
    pub cross_platform_adaptation: Option<String>,
}

impl GenerateArgs {
    pub fn into_brief(self) -> ContentBrief {
        let mut brief = ContentBrief::new(
            self.content_type,
            self.audience,
            self.objective,
            self.goals,
        );

        let optional = [
            (self.word_count, &mut brief.word_count),
            (self.tone, &mut brief.tone),
            (self.keywords, &mut brief.keywords),
            (self.ctas, &mut brief.ctas),
            (self.visual_elements, &mut brief.visual_elements),
            (self.format_requirements, &mut brief.format_requirements),
            (self.engagement_tactics, &mut brief.engagement_tactics),
            (self.algorithm_considerations, &mut brief.algorithm_considerations),
            (self.cross_platform_adaptation, &mut brief.cross_platform_adaptation),
        ];
        for (value, slot) in optional {
            if let Some(value) = value {
                *slot = value;
            }
        }

        brief
    }
}

#[derive(Subcommand, Debug)]
pub enum SeoCommand {
    /// Generate a meta title and description
    Meta {
        #[command(flatten)]
        input: TextInput,

        /// Optional target keywords
        #[arg(long, default_value = "")]
        keywords: String,
    },
    /// Review the heading structure of a document
    Headers {
        #[command(flatten)]
        input: TextInput,
    },
    /// Estimate readability scores
    Readability {
        #[command(flatten)]
        input: TextInput,
    },
}

#[derive(Subcommand, Debug)]
pub enum BrandCommand {
    /// Compare the tone of a text with the brand voice
    Tone {
        #[command(flatten)]
        input: TextInput,
    },
    /// Check whether the brand slogan is used
    Slogan {
        #[command(flatten)]
        input: TextInput,
    },
}

#[derive(Subcommand, Debug)]
pub enum AudienceCommand {
    /// Adapt content for a target demographic
    Adapt {
        #[command(flatten)]
        input: TextInput,

        /// Target demographic description
        #[arg(long, default_value = "")]
        demographics: String,
    },
}
