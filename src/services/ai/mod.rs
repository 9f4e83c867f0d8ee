pub mod gemini;
pub mod ollama;
pub mod slots;

use async_trait::async_trait;

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Single-shot completion of a fully built prompt.
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}
