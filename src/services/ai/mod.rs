pub mod extract;
pub mod watsonx;

use async_trait::async_trait;

use crate::errors::AppError;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run a single completion over the prompt and return the raw
    /// generated text.
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}
