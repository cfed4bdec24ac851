pub mod api;

use crate::agent::DroneEduAgent;
use crate::cli::Args;
use crate::leads::LeadStore;
use crate::rag::KnowledgeBase;
use std::error::Error;
use std::sync::Arc;

pub use self::api::{ router, AppState };

pub struct Server {
    args: Args,
    state: AppState,
}

impl Server {
    pub fn new(
        args: Args,
        agent: Arc<DroneEduAgent>,
        knowledge: Arc<KnowledgeBase>,
        leads: Arc<dyn LeadStore>
    ) -> Self {
        Self {
            args,
            state: AppState { agent, knowledge, leads },
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        api::start_http_server(&self.args, self.state).await
    }
}
