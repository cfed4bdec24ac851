pub mod agent;
pub mod cli;
pub mod config;
pub mod fallback;
pub mod history;
pub mod leads;
pub mod live;
pub mod llm;
pub mod models;
pub mod rag;
pub mod server;

#[cfg(test)]
mod test_support;

use agent::DroneEduAgent;
use cli::Args;
use leads::{ LeadStore, RedisLeadStore };
use log::info;
use rag::{ KnowledgeBase, KnowledgeSource, QdrantIndex };
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("TLS Enabled: {}", args.enable_tls);
    info!("Chat LLM Type: {}", args.chat_llm_type);
    info!("Chat Temperature: {}", args.chat_temperature);
    info!("Chat Max Tokens: {}", args.chat_max_tokens);
    info!("Embedding LLM Type: {}", args.embedding_llm_type);
    info!("Vector Store Host: {}", args.vector_host);
    info!("Vector Collection: {} ({} dims)", args.vector_collection, args.dimension);
    info!("Match Threshold: {} (top {})", args.match_threshold, args.match_count);
    info!("Context Mode: {}", args.context_mode);
    info!("Live Sources: {}, {} (timeout {}s)", args.casa_url, args.gdrone_url, args.live_fetch_timeout);
    info!("History Window: {}", args.history_window);
    info!("Prompts Path: {}", args.prompts_path.as_deref().unwrap_or("built-in"));
    info!("Leads Redis URL: {}", args.leads_redis_url);
    info!("-------------------------");

    let (chat_client, embedding_client) = agent::initialize_llm_clients(&args)?;

    let index = QdrantIndex::connect(
        &args.vector_host,
        args.vector_secret.clone(),
        &args.vector_collection
    )?;
    index.ensure_collection(args.dimension).await;
    let knowledge = Arc::new(
        KnowledgeBase::new(embedding_client, Arc::new(index)).with_matching(
            args.match_threshold,
            args.match_count
        )
    );

    let agent = DroneEduAgent::from_args(
        &args,
        chat_client,
        knowledge.clone() as Arc<dyn KnowledgeSource>
    )?;
    let leads: Arc<dyn LeadStore> = Arc::new(
        RedisLeadStore::new(&args.leads_redis_url, &args.leads_key_prefix)?
    );

    let server = Server::new(args, Arc::new(agent), knowledge, leads);
    server.run().await?;

    Ok(())
}
