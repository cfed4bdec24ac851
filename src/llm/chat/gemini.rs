use async_trait::async_trait;
use log::info;

use super::{ ChatClient, CompletionOptions, LlmError };
use crate::llm::LlmConfig;
use crate::models::chat::{ ChatMessage as WidgetMessage, Role };
use rllm::chat::{ ChatMessage, ChatRole, MessageType };
use rllm::builder::{ LLMBackend, LLMBuilder };

/// Gemini completions through `rllm`. The provider takes the system prompt on
/// the builder, so a provider is built per request.
pub struct GeminiChatClient {
    api_key: String,
    model: String,
    base_url: Option<String>,
}

impl GeminiChatClient {
    pub fn new(api_key: String, model: Option<String>, base_url: Option<String>) -> Self {
        let chat_model = model.unwrap_or_else(|| "gemini-1.5-flash-latest".to_string());
        Self { api_key, model: chat_model, base_url }
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let api_key = config.api_key
            .clone()
            .ok_or_else(|| LlmError::Config("Google API key is required for GeminiChatClient".into()))?;
        Ok(Self::new(api_key, config.completion_model.clone(), config.base_url.clone()))
    }
}

fn split_system(messages: &[WidgetMessage]) -> (Option<String>, Vec<ChatMessage>) {
    let mut system = None;
    let mut turns = Vec::with_capacity(messages.len());
    for msg in messages {
        let role = match msg.role {
            Role::System => {
                system = Some(msg.content.clone());
                continue;
            }
            Role::User => ChatRole::User,
            Role::Assistant => ChatRole::Assistant,
        };
        turns.push(ChatMessage {
            role,
            content: msg.content.clone(),
            message_type: MessageType::Text,
        });
    }
    (system, turns)
}

#[async_trait]
impl ChatClient for GeminiChatClient {
    async fn complete(
        &self,
        messages: &[WidgetMessage],
        options: &CompletionOptions
    ) -> Result<String, LlmError> {
        let (system, turns) = split_system(messages);
        info!("GeminiChatClient::complete() → model={} base_url={:?}", self.model, self.base_url);

        let mut builder = LLMBuilder::new()
            .backend(LLMBackend::Google)
            .api_key(self.api_key.clone())
            .model(&self.model)
            .temperature(options.temperature)
            .max_tokens(options.max_output_tokens)
            .stream(false);

        if let Some(url) = &self.base_url {
            builder = builder.base_url(url);
        }
        if let Some(system) = system {
            builder = builder.system(system);
        }

        let provider = builder.build().map_err(|e| LlmError::Provider(e.to_string()))?;
        let resp = provider.chat(&turns).await.map_err(|e| LlmError::Provider(e.to_string()))?;
        let text = resp
            .text()
            .map(|s| s.to_string())
            .unwrap_or_else(|| resp.to_string());
        if text.is_empty() {
            return Err(LlmError::EmptyResponse("Gemini"));
        }
        Ok(text)
    }

    fn get_model(&self) -> String {
        self.model.clone()
    }
}
