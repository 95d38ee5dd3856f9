//! # ContentCraft Providers
//!
//! Hosted model backends for ContentCraft AI.

pub mod gemini;
pub mod openai;

// Re-exports
pub use gemini::{GeminiBuilder, GeminiProvider};
pub use openai::{OpenAiBuilder, OpenAiProvider};

/// DeepSeek's OpenAI-compatible endpoint
pub const DEEPSEEK_API_BASE: &str = "https://api.deepseek.com/v1";

/// Create a DeepSeek provider (OpenAI-compatible)
///
/// DeepSeek uses the OpenAI API protocol but with a different endpoint.
///
/// # Example
///
/// ```ignore
/// use contentcraft_provider::deepseek;
///
/// let provider = deepseek();
/// ```
pub fn deepseek() -> OpenAiProvider {
    OpenAiProvider::builder()
        .api_base(DEEPSEEK_API_BASE)
        .default_model("deepseek-chat")
        .build_with_id("deepseek", "DeepSeek")
}
