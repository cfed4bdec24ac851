pub mod ollama;
pub mod openai;
pub mod gemini;

use async_trait::async_trait;
use log::{ info, warn };
use std::sync::Arc;
use thiserror::Error;
use super::{ LlmConfig, LlmType };
use self::ollama::OllamaClient;
use self::openai::OpenAIChatClient;
use self::gemini::GeminiChatClient;
use crate::models::chat::ChatMessage;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1000;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0} returned no completion")]
    EmptyResponse(&'static str),
    #[error("provider error: {0}")]
    Provider(String),
    #[error("invalid chat client configuration: {0}")]
    Config(String),
}

/// Decoding parameters sent with every completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions
    ) -> Result<String, LlmError>;

    fn get_model(&self) -> String;
}

/// Outcome of a completion call. A failure always carries a description and
/// never any text.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionResult {
    Success { text: String },
    Failure { error: String },
}

impl CompletionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, CompletionResult::Success { .. })
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            CompletionResult::Success { text } => Some(text),
            CompletionResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CompletionResult::Success { .. } => None,
            CompletionResult::Failure { error } => Some(error),
        }
    }
}

/// Sends the assembled messages once. Provider errors are folded into
/// `CompletionResult::Failure`; the text of a success is returned untouched.
pub async fn complete_prompt(
    client: &dyn ChatClient,
    messages: &[ChatMessage],
    options: &CompletionOptions
) -> CompletionResult {
    info!(
        "Requesting completion: model={} messages={} temperature={} max_tokens={}",
        client.get_model(),
        messages.len(),
        options.temperature,
        options.max_output_tokens
    );
    match client.complete(messages, options).await {
        Ok(text) => CompletionResult::Success { text },
        Err(e) => {
            warn!("Completion failed: {}", e);
            CompletionResult::Failure { error: e.to_string() }
        }
    }
}

pub fn new_client(config: &LlmConfig) -> Result<Arc<dyn ChatClient>, LlmError> {
    let client: Arc<dyn ChatClient> = match config.llm_type {
        LlmType::Ollama => {
            let specific_client = OllamaClient::from_config(config)?;
            Arc::new(specific_client)
        }
        LlmType::OpenAI => {
            let specific_client = OpenAIChatClient::from_config(config)?;
            Arc::new(specific_client)
        }
        LlmType::Gemini => {
            let specific_client = GeminiChatClient::from_config(config)?;
            Arc::new(specific_client)
        }
    };
    Ok(client)
}
