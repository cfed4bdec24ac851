use async_trait::async_trait;
use log::info;
use redis::{ AsyncCommands, Client };
use thiserror::Error;
use uuid::Uuid;

use crate::models::lead::Lead;

#[derive(Debug, Error)]
pub enum LeadStoreError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("lead serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Append-only storage for captured contact requests.
#[async_trait]
pub trait LeadStore: Send + Sync {
    async fn insert(&self, lead: Lead) -> Result<String, LeadStoreError>;
}

pub struct RedisLeadStore {
    client: Client,
    key_prefix: String,
}

impl RedisLeadStore {
    pub fn new(redis_url: &str, key_prefix: &str) -> Result<Self, LeadStoreError> {
        Ok(Self {
            client: Client::open(redis_url)?,
            key_prefix: key_prefix.to_string(),
        })
    }

    fn lead_key(&self, id: &str) -> String {
        format!("{}{}", self.key_prefix, id)
    }

    fn index_key(&self) -> String {
        format!("{}index", self.key_prefix)
    }
}

#[async_trait]
impl LeadStore for RedisLeadStore {
    async fn insert(&self, lead: Lead) -> Result<String, LeadStoreError> {
        let id = Uuid::new_v4().to_string();
        let body = serde_json::to_string(&lead)?;

        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(self.lead_key(&id), body).await?;
        conn.rpush::<_, _, ()>(self.index_key(), &id).await?;

        info!("Stored lead {} ({})", id, lead.email);
        Ok(id)
    }
}
