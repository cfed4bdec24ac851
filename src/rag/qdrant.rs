use async_trait::async_trait;
use chrono::Utc;
use log::{ info, warn };
use qdrant_client::Qdrant;
use qdrant_client::qdrant::{
    point_id::PointIdOptions,
    value::Kind,
    vectors_config::Config as VectorsConfig,
    CreateCollectionBuilder,
    Distance,
    PointId,
    PointStruct,
    ScrollPointsBuilder,
    SearchPointsBuilder,
    UpsertPointsBuilder,
    Value as QdrantValue,
    VectorParams,
};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use uuid::Uuid;

use super::{ KnowledgeError, VectorIndex };
use crate::models::knowledge::{ KnowledgeDocument, KnowledgeSnippet };

const FIELD_SOURCE: &str = "source";
const FIELD_CONTENT: &str = "content";
const FIELD_METADATA: &str = "metadata";
const FIELD_CREATED_AT: &str = "created_at";

/// Knowledge base documents stored in a Qdrant collection with cosine distance.
pub struct QdrantIndex {
    client: Qdrant,
    collection: String,
}

impl QdrantIndex {
    pub fn connect(url: &str, api_key: Option<String>, collection: &str) -> Result<Self, KnowledgeError> {
        let client = Qdrant::from_url(url)
            .api_key(api_key)
            .build()
            .map_err(|e| KnowledgeError::Index(e.to_string()))?;
        Ok(Self {
            client,
            collection: collection.to_string(),
        })
    }

    /// Creates the collection when missing. Failures are logged so the
    /// service can still start and answer from other sources.
    pub async fn ensure_collection(&self, dimension: usize) {
        if self.client.collection_info(&self.collection).await.is_ok() {
            return;
        }
        let cfg = CreateCollectionBuilder::new(self.collection.clone())
            .vectors_config(VectorsConfig::Params(VectorParams {
                size: dimension as u64,
                distance: Distance::Cosine.into(),
                ..Default::default()
            }))
            .build();
        match self.client.create_collection(cfg).await {
            Ok(_) => info!("Created knowledge collection '{}' ({} dims)", self.collection, dimension),
            Err(e) => warn!("Could not create knowledge collection '{}': {}", self.collection, e),
        }
    }
}

fn string_value(text: impl Into<String>) -> QdrantValue {
    QdrantValue {
        kind: Some(Kind::StringValue(text.into())),
    }
}

fn payload_str(payload: &HashMap<String, QdrantValue>, key: &str) -> Option<String> {
    match payload.get(key).and_then(|v| v.kind.as_ref()) {
        Some(Kind::StringValue(s)) => Some(s.clone()),
        _ => None,
    }
}

fn point_id_string(id: Option<&PointId>) -> String {
    match id.and_then(|p| p.point_id_options.as_ref()) {
        Some(PointIdOptions::Uuid(uuid)) => uuid.clone(),
        Some(PointIdOptions::Num(num)) => num.to_string(),
        None => String::new(),
    }
}

fn document_from_payload(id: String, payload: &HashMap<String, QdrantValue>) -> KnowledgeDocument {
    let metadata = payload_str(payload, FIELD_METADATA)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_else(|| JsonValue::Object(Default::default()));
    KnowledgeDocument {
        id,
        source: payload_str(payload, FIELD_SOURCE).unwrap_or_default(),
        content: payload_str(payload, FIELD_CONTENT).unwrap_or_default(),
        metadata,
        created_at: payload_str(payload, FIELD_CREATED_AT),
    }
}

#[async_trait]
impl VectorIndex for QdrantIndex {
    async fn search(
        &self,
        vector: Vec<f32>,
        threshold: f32,
        limit: usize
    ) -> Result<Vec<KnowledgeSnippet>, KnowledgeError> {
        let resp = self.client
            .search_points(
                SearchPointsBuilder::new(&self.collection, vector, limit as u64)
                    .score_threshold(threshold)
                    .with_payload(true)
                    .build()
            ).await
            .map_err(|e| KnowledgeError::Index(e.to_string()))?;

        Ok(
            resp.result
                .iter()
                .map(|pt| KnowledgeSnippet {
                    source: payload_str(&pt.payload, FIELD_SOURCE).unwrap_or_default(),
                    content: payload_str(&pt.payload, FIELD_CONTENT).unwrap_or_default(),
                    similarity: pt.score,
                })
                .filter(|s| !s.content.is_empty())
                .collect()
        )
    }

    async fn insert(
        &self,
        source: &str,
        content: &str,
        metadata: &JsonValue,
        vector: Vec<f32>
    ) -> Result<String, KnowledgeError> {
        let id = Uuid::new_v4().to_string();
        let mut payload = HashMap::new();
        payload.insert(FIELD_SOURCE.to_string(), string_value(source));
        payload.insert(FIELD_CONTENT.to_string(), string_value(content));
        payload.insert(FIELD_METADATA.to_string(), string_value(serde_json::to_string(metadata)?));
        payload.insert(FIELD_CREATED_AT.to_string(), string_value(Utc::now().to_rfc3339()));

        let pt = PointStruct::new(id.clone(), vector, payload);
        let op = UpsertPointsBuilder::new(&self.collection, vec![pt]).wait(true).build();
        self.client.upsert_points(op).await.map_err(|e| KnowledgeError::Index(e.to_string()))?;
        Ok(id)
    }

    async fn list(&self, limit: usize) -> Result<Vec<KnowledgeDocument>, KnowledgeError> {
        let resp = self.client
            .scroll(
                ScrollPointsBuilder::new(&self.collection)
                    .limit(limit as u32)
                    .with_payload(true)
                    .build()
            ).await
            .map_err(|e| KnowledgeError::Index(e.to_string()))?;

        Ok(
            resp.result
                .iter()
                .map(|pt| document_from_payload(point_id_string(pt.id.as_ref()), &pt.payload))
                .collect()
        )
    }
}
