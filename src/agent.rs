use chrono::Utc;
use log::{ debug, info, warn };
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

use crate::cli::Args;
use crate::config::prompt::{ self, assemble_prompt, PromptConfig };
use crate::fallback;
use crate::history::bound_history;
use crate::live::{ LiveSource, LiveSourceAdapter, LiveSourceResult };
use crate::llm::LlmConfig;
use crate::llm::chat::{ complete_prompt, new_client as new_chat_client, ChatClient, CompletionOptions, CompletionResult };
use crate::llm::embedding::{ new_client as new_embedding_client, EmbeddingClient };
use crate::models::chat::{ ChatRequest, ChatResponse };
use crate::models::knowledge::KnowledgeSnippet;
use crate::rag::KnowledgeSource;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("Message is required")]
    EmptyMessage,
}

/// Which context providers feed the system message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMode {
    Knowledge,
    Live,
    Both,
}

impl ContextMode {
    pub fn uses_knowledge(self) -> bool {
        matches!(self, ContextMode::Knowledge | ContextMode::Both)
    }

    pub fn uses_live(self) -> bool {
        matches!(self, ContextMode::Live | ContextMode::Both)
    }
}

impl fmt::Display for ContextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContextMode::Knowledge => "knowledge",
            ContextMode::Live => "live",
            ContextMode::Both => "both",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid context mode: '{0}'")]
pub struct ParseContextModeError(String);

impl FromStr for ContextMode {
    type Err = ParseContextModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "knowledge" | "rag" => Ok(ContextMode::Knowledge),
            "live" => Ok(ContextMode::Live),
            "both" => Ok(ContextMode::Both),
            _ => Err(ParseContextModeError(s.to_string())),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_string()) }
}

/// Builds the completion and embedding clients described by `args`.
pub fn initialize_llm_clients(
    args: &Args
) -> Result<(Arc<dyn ChatClient>, Arc<dyn EmbeddingClient>), Box<dyn Error + Send + Sync>> {
    let chat_config = LlmConfig {
        llm_type: args.chat_llm_type.parse()?,
        base_url: args.chat_base_url.clone(),
        api_key: non_empty(&args.chat_api_key),
        completion_model: args.chat_model.clone(),
        ..Default::default()
    };
    let chat_client = new_chat_client(&chat_config)?;
    info!(
        "Chat client configured: Type={}, Model={}, BaseURL={}",
        chat_config.llm_type,
        chat_client.get_model(),
        chat_config.base_url.as_deref().unwrap_or("adapter default")
    );

    let embedding_config = LlmConfig {
        llm_type: args.embedding_llm_type.parse()?,
        base_url: args.embedding_base_url.clone(),
        api_key: non_empty(&args.embedding_api_key),
        embedding_model: args.embedding_model.clone(),
        embedding_dimensions: Some(args.dimension as u32),
        ..Default::default()
    };
    let embedding_client = new_embedding_client(&embedding_config)?;
    info!(
        "Embedding client configured: Type={}, Model={}, BaseURL={}",
        embedding_config.llm_type,
        embedding_config.embedding_model.as_deref().unwrap_or("adapter default"),
        embedding_config.base_url.as_deref().unwrap_or("adapter default")
    );

    Ok((chat_client, embedding_client))
}

pub fn new_session_id() -> String {
    format!("session_{}", Utc::now().timestamp_millis())
}

/// Provider labels whose content reached the prompt, first occurrence wins.
fn collect_sources(knowledge: &[KnowledgeSnippet], live: &[LiveSourceResult]) -> Vec<String> {
    let mut sources: Vec<String> = Vec::new();
    let labels = knowledge
        .iter()
        .filter(|s| !s.content.trim().is_empty())
        .map(|s| &s.source)
        .chain(live.iter().filter(|r| !r.content.trim().is_empty()).map(|r| &r.source));
    for label in labels {
        if !sources.contains(label) {
            sources.push(label.clone());
        }
    }
    sources
}

/// Answers one chat turn: gathers context, asks the model, and falls back to
/// a canned answer when the model is unavailable.
#[derive(Clone)]
pub struct DroneEduAgent {
    chat_client: Arc<dyn ChatClient>,
    knowledge: Option<Arc<dyn KnowledgeSource>>,
    live: Option<Arc<dyn LiveSource>>,
    prompt_config: Arc<PromptConfig>,
    options: CompletionOptions,
    history_window: usize,
}

impl DroneEduAgent {
    pub fn new(chat_client: Arc<dyn ChatClient>, prompt_config: Arc<PromptConfig>) -> Self {
        Self {
            chat_client,
            knowledge: None,
            live: None,
            prompt_config,
            options: CompletionOptions::default(),
            history_window: crate::history::HISTORY_FOR_PROMPT_LEN,
        }
    }

    pub fn with_knowledge(mut self, knowledge: Arc<dyn KnowledgeSource>) -> Self {
        self.knowledge = Some(knowledge);
        self
    }

    pub fn with_live(mut self, live: Arc<dyn LiveSource>) -> Self {
        self.live = Some(live);
        self
    }

    pub fn with_options(mut self, options: CompletionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    pub fn from_args(
        args: &Args,
        chat_client: Arc<dyn ChatClient>,
        knowledge: Arc<dyn KnowledgeSource>
    ) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let mode: ContextMode = args.context_mode.parse()?;
        let prompt_config = match &args.prompts_path {
            Some(path) => prompt::load_prompts(path)?,
            None => Arc::new(PromptConfig::default()),
        };

        let mut agent = Self::new(chat_client, prompt_config)
            .with_options(CompletionOptions {
                temperature: args.chat_temperature,
                max_output_tokens: args.chat_max_tokens,
            })
            .with_history_window(args.history_window);
        if mode.uses_knowledge() {
            agent = agent.with_knowledge(knowledge);
        }
        if mode.uses_live() {
            agent = agent.with_live(Arc::new(LiveSourceAdapter::from_args(args)?));
        }
        info!("Chat agent ready: context mode={}, history window={}", mode, args.history_window);
        Ok(agent)
    }

    async fn retrieve_knowledge(&self, query: &str) -> Vec<KnowledgeSnippet> {
        match &self.knowledge {
            Some(source) => source.retrieve(query).await,
            None => Vec::new(),
        }
    }

    async fn fetch_live(&self) -> Vec<LiveSourceResult> {
        match &self.live {
            Some(source) => {
                let snapshot = source.fetch_all().await;
                debug!("Live snapshot taken at {}", snapshot.timestamp.to_rfc3339());
                snapshot.results
            }
            None => Vec::new(),
        }
    }

    pub async fn process_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        let message = request.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .ok_or(ChatError::EmptyMessage)?;
        let session_id = request.session_id
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(new_session_id);

        let (knowledge, live) = tokio::join!(self.retrieve_knowledge(message), self.fetch_live());
        let history = bound_history(&request.conversation_history, self.history_window);
        let prompt = assemble_prompt(
            &self.prompt_config,
            message,
            &knowledge,
            Some(live.as_slice()),
            &history
        );
        info!(
            "Session {}: {} knowledge snippets, {} live sources, {} history turns",
            session_id,
            knowledge.len(),
            live.len(),
            history.len()
        );

        let response = match
            complete_prompt(self.chat_client.as_ref(), prompt.messages(), &self.options).await
        {
            CompletionResult::Success { text } => text,
            CompletionResult::Failure { error } => {
                let topic = fallback::classify(message);
                warn!("Session {}: answering from {} template after: {}", session_id, topic, error);
                fallback::respond(message, Some(prompt.context()))
            }
        };

        let sources = collect_sources(&knowledge, &live);
        Ok(ChatResponse {
            response,
            session_id,
            context_used: !sources.is_empty(),
            sources,
        })
    }
}
