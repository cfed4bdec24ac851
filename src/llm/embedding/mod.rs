pub mod ollama;
pub mod openai;
pub mod gemini;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use super::{ LlmConfig, LlmType };
use self::ollama::OllamaEmbeddingClient;
use self::openai::OpenAIEmbeddingClient;
use self::gemini::GoogleEmbeddingClient as GeminiEmbeddingClient;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding provider error: {0}")]
    Provider(String),
    #[error("{0} embedding generation returned no results")]
    Empty(&'static str),
    #[error("invalid embedding client configuration: {0}")]
    Config(String),
}

#[derive(Debug, Clone)]
pub struct EmbeddingResponse {
    pub embedding: Vec<f32>,
}

#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    async fn embed(&self, text: &str) -> Result<EmbeddingResponse, EmbeddingError>;
}

pub fn new_client(config: &LlmConfig) -> Result<Arc<dyn EmbeddingClient>, EmbeddingError> {
    let client: Arc<dyn EmbeddingClient> = match config.llm_type {
        LlmType::Ollama => {
            let specific_client = OllamaEmbeddingClient::from_config(config)?;
            Arc::new(specific_client)
        }
        LlmType::OpenAI => {
            let specific_client = OpenAIEmbeddingClient::from_config(config)?;
            Arc::new(specific_client)
        }
        LlmType::Gemini => {
            let specific_client = GeminiEmbeddingClient::from_config(config)?;
            Arc::new(specific_client)
        }
    };
    Ok(client)
}
