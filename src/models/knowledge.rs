use serde::{ Deserialize, Serialize };
use serde_json::Value as JsonValue;

/// A knowledge base hit. Snippets arrive ordered by descending similarity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeSnippet {
    pub source: String,
    pub content: String,
    pub similarity: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeDocument {
    pub id: String,
    pub source: String,
    pub content: String,
    pub metadata: JsonValue,
    pub created_at: Option<String>,
}

/// Body of `POST /api/rag`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AddDocumentRequest {
    pub source: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub metadata: Option<JsonValue>,
}
