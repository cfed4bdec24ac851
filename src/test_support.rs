//! Hand-written collaborator mocks shared by the unit tests.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value as JsonValue;
use std::sync::atomic::{ AtomicUsize, Ordering };
use std::sync::Mutex;

use crate::leads::{ LeadStore, LeadStoreError };
use crate::live::{ LiveSite, LiveSnapshot, LiveSource, LiveSourceResult };
use crate::llm::chat::{ ChatClient, CompletionOptions, LlmError };
use crate::llm::embedding::{ EmbeddingClient, EmbeddingError, EmbeddingResponse };
use crate::models::chat::ChatMessage;
use crate::models::knowledge::{ KnowledgeDocument, KnowledgeSnippet };
use crate::models::lead::Lead;
use crate::rag::{ KnowledgeError, KnowledgeSource, VectorIndex };

pub struct MockChatClient {
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_messages: Mutex<Option<Vec<ChatMessage>>>,
}

impl MockChatClient {
    pub fn replying(text: &str) -> Self {
        Self::with(Ok(text.to_string()))
    }

    pub fn failing(error: &str) -> Self {
        Self::with(Err(error.to_string()))
    }

    fn with(reply: Result<String, String>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_messages(&self) -> Option<Vec<ChatMessage>> {
        self.last_messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _options: &CompletionOptions
    ) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_messages.lock().unwrap() = Some(messages.to_vec());
        self.reply.clone().map_err(LlmError::Provider)
    }

    fn get_model(&self) -> String {
        "mock-model".to_string()
    }
}

pub struct MockEmbeddingClient {
    vector: Option<Vec<f32>>,
    calls: AtomicUsize,
}

impl MockEmbeddingClient {
    pub fn returning(vector: Vec<f32>) -> Self {
        Self { vector: Some(vector), calls: AtomicUsize::new(0) }
    }

    pub fn failing() -> Self {
        Self { vector: None, calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingClient for MockEmbeddingClient {
    async fn embed(&self, _text: &str) -> Result<EmbeddingResponse, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.vector {
            Some(v) => Ok(EmbeddingResponse { embedding: v.clone() }),
            None => Err(EmbeddingError::Provider("quota exceeded".to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InsertedDocument {
    pub source: String,
    pub content: String,
    pub metadata: JsonValue,
}

pub struct MockVectorIndex {
    hits: Option<Vec<KnowledgeSnippet>>,
    search_calls: AtomicUsize,
    last_search: Mutex<Option<(Vec<f32>, f32, usize)>>,
    inserted: Mutex<Vec<InsertedDocument>>,
}

impl MockVectorIndex {
    pub fn with_hits(hits: Vec<KnowledgeSnippet>) -> Self {
        Self::with(Some(hits))
    }

    pub fn failing() -> Self {
        Self::with(None)
    }

    fn with(hits: Option<Vec<KnowledgeSnippet>>) -> Self {
        Self {
            hits,
            search_calls: AtomicUsize::new(0),
            last_search: Mutex::new(None),
            inserted: Mutex::new(Vec::new()),
        }
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn last_search(&self) -> Option<(Vec<f32>, f32, usize)> {
        self.last_search.lock().unwrap().clone()
    }

    pub fn inserted(&self) -> Vec<InsertedDocument> {
        self.inserted.lock().unwrap().clone()
    }

    fn unavailable() -> KnowledgeError {
        KnowledgeError::Index("connection refused".to_string())
    }
}

#[async_trait]
impl VectorIndex for MockVectorIndex {
    async fn search(
        &self,
        vector: Vec<f32>,
        threshold: f32,
        limit: usize
    ) -> Result<Vec<KnowledgeSnippet>, KnowledgeError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_search.lock().unwrap() = Some((vector, threshold, limit));
        self.hits.clone().ok_or_else(Self::unavailable)
    }

    async fn insert(
        &self,
        source: &str,
        content: &str,
        metadata: &JsonValue,
        _vector: Vec<f32>
    ) -> Result<String, KnowledgeError> {
        if self.hits.is_none() {
            return Err(Self::unavailable());
        }
        let mut inserted = self.inserted.lock().unwrap();
        inserted.push(InsertedDocument {
            source: source.to_string(),
            content: content.to_string(),
            metadata: metadata.clone(),
        });
        Ok(format!("doc-{}", inserted.len()))
    }

    async fn list(&self, limit: usize) -> Result<Vec<KnowledgeDocument>, KnowledgeError> {
        if self.hits.is_none() {
            return Err(Self::unavailable());
        }
        Ok(
            self.inserted
                .lock()
                .unwrap()
                .iter()
                .take(limit)
                .enumerate()
                .map(|(i, d)| KnowledgeDocument {
                    id: format!("doc-{}", i + 1),
                    source: d.source.clone(),
                    content: d.content.clone(),
                    metadata: d.metadata.clone(),
                    created_at: None,
                })
                .collect()
        )
    }
}

pub struct MockKnowledgeSource {
    snippets: Vec<KnowledgeSnippet>,
    calls: AtomicUsize,
}

impl MockKnowledgeSource {
    pub fn returning(snippets: Vec<KnowledgeSnippet>) -> Self {
        Self { snippets, calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KnowledgeSource for MockKnowledgeSource {
    async fn retrieve(&self, _query: &str) -> Vec<KnowledgeSnippet> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.snippets.clone()
    }
}

pub struct MockLiveSource {
    results: Vec<LiveSourceResult>,
    calls: AtomicUsize,
}

impl MockLiveSource {
    pub fn returning(results: Vec<LiveSourceResult>) -> Self {
        Self { results, calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LiveSource for MockLiveSource {
    async fn fetch_all(&self) -> LiveSnapshot {
        self.calls.fetch_add(1, Ordering::SeqCst);
        LiveSnapshot {
            results: self.results.clone(),
            timestamp: Utc::now(),
        }
    }
}

pub fn live_result(site: LiveSite, source: &str, content: &str) -> LiveSourceResult {
    LiveSourceResult {
        site,
        source: source.to_string(),
        url: format!("https://{}.example", source.to_lowercase().replace(' ', "-")),
        content: content.to_string(),
        success: true,
        error: None,
    }
}

pub fn snippet(source: &str, content: &str, similarity: f32) -> KnowledgeSnippet {
    KnowledgeSnippet {
        source: source.to_string(),
        content: content.to_string(),
        similarity,
    }
}

pub struct MockLeadStore {
    fail: bool,
    stored: Mutex<Vec<Lead>>,
}

impl MockLeadStore {
    pub fn accepting() -> Self {
        Self { fail: false, stored: Mutex::new(Vec::new()) }
    }

    pub fn failing() -> Self {
        Self { fail: true, stored: Mutex::new(Vec::new()) }
    }

    pub fn stored(&self) -> Vec<Lead> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl LeadStore for MockLeadStore {
    async fn insert(&self, lead: Lead) -> Result<String, LeadStoreError> {
        if self.fail {
            return Err(
                LeadStoreError::Redis(
                    redis::RedisError::from((redis::ErrorKind::IoError, "connection refused"))
                )
            );
        }
        let mut stored = self.stored.lock().unwrap();
        stored.push(lead);
        Ok(format!("lead-{}", stored.len()))
    }
}
