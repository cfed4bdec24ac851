use async_trait::async_trait;
use super::{ EmbeddingClient, EmbeddingError, EmbeddingResponse };
use super::super::LlmConfig;
use rllm::{ builder::{ LLMBackend, LLMBuilder }, LLMProvider };

pub struct GoogleEmbeddingClient {
    llm: Box<dyn LLMProvider + Send + Sync>,
}

impl GoogleEmbeddingClient {
    pub fn new(api_key: String, model: Option<String>) -> Result<Self, EmbeddingError> {
        let embed_model = model.unwrap_or_else(|| "text-embedding-004".to_string());

        let builder = LLMBuilder::new()
            .backend(LLMBackend::Google)
            .api_key(api_key)
            .model(embed_model)
            .stream(false);

        let llm_provider = builder.build().map_err(|e| EmbeddingError::Config(e.to_string()))?;

        Ok(Self {
            llm: llm_provider,
        })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, EmbeddingError> {
        let api_key = config.api_key
            .clone()
            .ok_or_else(||
                EmbeddingError::Config("Google API key is required for GoogleEmbeddingClient".into())
            )?;
        Self::new(api_key, config.embedding_model.clone())
    }
}

#[async_trait]
impl EmbeddingClient for GoogleEmbeddingClient {
    async fn embed(&self, text: &str) -> Result<EmbeddingResponse, EmbeddingError> {
        let mut embeddings = self.llm
            .embed(vec![text.to_string()]).await
            .map_err(|e| EmbeddingError::Provider(e.to_string()))?;
        let embedding = embeddings.pop().ok_or(EmbeddingError::Empty("Google"))?;

        Ok(EmbeddingResponse { embedding })
    }
}
