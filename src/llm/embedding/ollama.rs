use async_trait::async_trait;
use super::{ EmbeddingClient, EmbeddingError, EmbeddingResponse };
use super::super::LlmConfig;
use rllm::{ builder::{ LLMBackend, LLMBuilder }, LLMProvider };

pub struct OllamaEmbeddingClient {
    llm: Box<dyn LLMProvider + Send + Sync>,
}

impl OllamaEmbeddingClient {
    pub fn new(base_url: Option<String>, model: Option<String>) -> Result<Self, EmbeddingError> {
        let url = base_url.unwrap_or_else(|| "http://localhost:11434".to_string());
        let embed_model = model.unwrap_or_else(|| "nomic-embed-text".to_string());

        let builder = LLMBuilder::new()
            .backend(LLMBackend::Ollama)
            .base_url(url)
            .model(embed_model)
            .stream(false);

        let llm_provider = builder.build().map_err(|e| EmbeddingError::Config(e.to_string()))?;

        Ok(Self {
            llm: llm_provider,
        })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, EmbeddingError> {
        Self::new(config.base_url.clone(), config.embedding_model.clone())
    }
}

#[async_trait]
impl EmbeddingClient for OllamaEmbeddingClient {
    async fn embed(&self, text: &str) -> Result<EmbeddingResponse, EmbeddingError> {
        let mut embeddings = self.llm
            .embed(vec![text.to_string()]).await
            .map_err(|e| EmbeddingError::Provider(e.to_string()))?;
        let embedding = embeddings.pop().ok_or(EmbeddingError::Empty("Ollama"))?;

        Ok(EmbeddingResponse { embedding })
    }
}
