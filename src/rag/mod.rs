pub mod qdrant;

use async_trait::async_trait;
use log::{ debug, warn };
use serde_json::Value as JsonValue;
use std::sync::Arc;
use thiserror::Error;

use crate::llm::embedding::{ EmbeddingClient, EmbeddingError };
use crate::models::knowledge::{ KnowledgeDocument, KnowledgeSnippet };

pub use self::qdrant::QdrantIndex;

pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.3;
pub const DEFAULT_MATCH_COUNT: usize = 5;
pub const DEFAULT_LIST_LIMIT: usize = 100;

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),
    #[error("vector index error: {0}")]
    Index(String),
    #[error("metadata serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Nearest documents scoring at least `threshold`, best first.
    async fn search(
        &self,
        vector: Vec<f32>,
        threshold: f32,
        limit: usize
    ) -> Result<Vec<KnowledgeSnippet>, KnowledgeError>;

    async fn insert(
        &self,
        source: &str,
        content: &str,
        metadata: &JsonValue,
        vector: Vec<f32>
    ) -> Result<String, KnowledgeError>;

    async fn list(&self, limit: usize) -> Result<Vec<KnowledgeDocument>, KnowledgeError>;
}

/// Retrieval as seen by the chat pipeline: failures yield no snippets.
#[async_trait]
pub trait KnowledgeSource: Send + Sync {
    async fn retrieve(&self, query: &str) -> Vec<KnowledgeSnippet>;
}

pub struct KnowledgeBase {
    embedding: Arc<dyn EmbeddingClient>,
    index: Arc<dyn VectorIndex>,
    threshold: f32,
    limit: usize,
}

impl KnowledgeBase {
    pub fn new(embedding: Arc<dyn EmbeddingClient>, index: Arc<dyn VectorIndex>) -> Self {
        Self {
            embedding,
            index,
            threshold: DEFAULT_MATCH_THRESHOLD,
            limit: DEFAULT_MATCH_COUNT,
        }
    }

    pub fn with_matching(mut self, threshold: f32, limit: usize) -> Self {
        self.threshold = threshold;
        self.limit = limit;
        self
    }

    pub async fn search(&self, query: &str) -> Result<Vec<KnowledgeSnippet>, KnowledgeError> {
        let embedding = self.embedding.embed(query).await?.embedding;
        self.index.search(embedding, self.threshold, self.limit).await
    }

    /// Embeds `content` and stores it. Returns the new document id.
    pub async fn add_document(
        &self,
        source: &str,
        content: &str,
        metadata: Option<JsonValue>
    ) -> Result<String, KnowledgeError> {
        if source.trim().is_empty() {
            return Err(KnowledgeError::MissingField("source"));
        }
        if content.trim().is_empty() {
            return Err(KnowledgeError::MissingField("content"));
        }
        let embedding = self.embedding.embed(content).await?.embedding;
        let metadata = metadata.unwrap_or_else(|| JsonValue::Object(Default::default()));
        self.index.insert(source, content, &metadata, embedding).await
    }

    /// Stored documents, newest first.
    pub async fn list_documents(&self) -> Result<Vec<KnowledgeDocument>, KnowledgeError> {
        let mut documents = self.index.list(DEFAULT_LIST_LIMIT).await?;
        documents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(documents)
    }
}

#[async_trait]
impl KnowledgeSource for KnowledgeBase {
    async fn retrieve(&self, query: &str) -> Vec<KnowledgeSnippet> {
        match self.search(query).await {
            Ok(snippets) => {
                debug!("Knowledge base returned {} snippets", snippets.len());
                snippets
            }
            Err(e) => {
                warn!("Knowledge retrieval failed, continuing without it: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ MockEmbeddingClient, MockVectorIndex };
    use serde_json::json;

    fn snippet(source: &str, similarity: f32) -> KnowledgeSnippet {
        KnowledgeSnippet {
            source: source.to_string(),
            content: format!("{} content", source),
            similarity,
        }
    }

    #[tokio::test]
    async fn retrieve_passes_threshold_and_limit() {
        let embedding = Arc::new(MockEmbeddingClient::returning(vec![0.1, 0.2]));
        let index = Arc::new(MockVectorIndex::with_hits(vec![snippet("a", 0.9), snippet("b", 0.5)]));
        let kb = KnowledgeBase::new(embedding.clone(), index.clone());

        let snippets = kb.retrieve("What is a RePL?").await;

        assert_eq!(snippets.len(), 2);
        assert_eq!(snippets[0].source, "a");
        assert_eq!(embedding.calls(), 1);
        assert_eq!(index.last_search(), Some((vec![0.1, 0.2], DEFAULT_MATCH_THRESHOLD, DEFAULT_MATCH_COUNT)));
    }

    #[tokio::test]
    async fn embedding_failure_yields_no_snippets() {
        let index = Arc::new(MockVectorIndex::with_hits(vec![snippet("a", 0.9)]));
        let kb = KnowledgeBase::new(Arc::new(MockEmbeddingClient::failing()), index.clone());

        assert!(kb.retrieve("q").await.is_empty());
        assert_eq!(index.search_calls(), 0);
    }

    #[tokio::test]
    async fn search_failure_yields_no_snippets() {
        let kb = KnowledgeBase::new(
            Arc::new(MockEmbeddingClient::returning(vec![0.3])),
            Arc::new(MockVectorIndex::failing())
        );
        assert!(kb.retrieve("q").await.is_empty());
        assert!(matches!(kb.search("q").await, Err(KnowledgeError::Index(_))));
    }

    #[tokio::test]
    async fn custom_matching_is_forwarded() {
        let index = Arc::new(MockVectorIndex::with_hits(Vec::new()));
        let kb = KnowledgeBase::new(
            Arc::new(MockEmbeddingClient::returning(vec![1.0])),
            index.clone()
        ).with_matching(0.75, 2);

        assert!(kb.retrieve("q").await.is_empty());
        assert_eq!(index.last_search(), Some((vec![1.0], 0.75, 2)));
    }

    #[tokio::test]
    async fn add_document_embeds_content_and_defaults_metadata() {
        let index = Arc::new(MockVectorIndex::with_hits(Vec::new()));
        let kb = KnowledgeBase::new(Arc::new(MockEmbeddingClient::returning(vec![0.5])), index.clone());

        let id = kb.add_document("casa-faq", "Keep your drone in sight.", None).await.unwrap();

        assert!(!id.is_empty());
        let inserted = index.inserted();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].source, "casa-faq");
        assert_eq!(inserted[0].metadata, json!({}));
    }

    #[tokio::test]
    async fn add_document_rejects_blank_fields() {
        let embedding = Arc::new(MockEmbeddingClient::returning(vec![0.5]));
        let kb = KnowledgeBase::new(
            embedding.clone(),
            Arc::new(MockVectorIndex::with_hits(Vec::new()))
        );

        let err = kb.add_document(" ", "content", None).await.unwrap_err();
        assert!(matches!(err, KnowledgeError::MissingField("source")));
        let err = kb.add_document("src", "", None).await.unwrap_err();
        assert!(matches!(err, KnowledgeError::MissingField("content")));
        assert_eq!(embedding.calls(), 0);
    }
}
