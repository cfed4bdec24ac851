use serde::Deserialize;
use std::fs;
use std::sync::Arc;
use thiserror::Error;
use log::info;

use crate::live::LiveSourceResult;
use crate::models::chat::{ ChatMessage, Role };
use crate::models::knowledge::KnowledgeSnippet;

/// Per-site cap on scraped text placed in the system message.
pub const LIVE_CONTENT_LIMIT: usize = 2000;

const DEFAULT_PERSONA: &str = "You are DroneEdu Expert, an AI assistant for DroneCareerPro.com helping users understand CASA drone regulations, RePL/ReOC licensing, training options, and career pathways in Australia.

Your responses should be:
- Professional yet friendly
- Clear and concise (use short paragraphs)
- Formatted with emojis for better readability
- Always include relevant links when available
- End with a helpful invitation to connect for more details

Response format:
✅ [Concise answer]
🧠 [Expert insight/tip]
🌐 [Relevant link]
🤝 [Invitation to connect]

Key topics you help with:
- CASA drone regulations in Australia
- RePL (Remote Pilot License) requirements and training
- ReOC (Remote Operator's Certificate) for drone businesses
- Drone training providers and pricing
- Career pathways and salary expectations
- Safety rules and insurance requirements
- Course comparisons (DroneCareerPro, GDroneSolutions, etc.)

Always include the CASA website link when relevant: https://www.casa.gov.au/drones

If you don't have specific information, politely apologize and recommend connecting with an expert.";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt file IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Prompt JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PromptConfig {
    pub persona: String,
    pub knowledge_heading: String,
    pub live_heading: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            persona: DEFAULT_PERSONA.to_string(),
            knowledge_heading: "Relevant information from knowledge base:".to_string(),
            live_heading: "Current information from official sources:".to_string(),
        }
    }
}

/// Reads a prompts JSON file. Fields missing from the file keep their
/// built-in values.
pub fn load_prompts(path: &str) -> Result<Arc<PromptConfig>, PromptError> {
    let file_content = fs::read_to_string(path)?;
    let config: PromptConfig = serde_json::from_str(&file_content)?;
    info!("Loaded prompt configuration from {}", path);
    Ok(Arc::new(config))
}

/// Messages handed to the completion provider: `[system, ...history, user]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledPrompt {
    messages: Vec<ChatMessage>,
    context: String,
}

impl AssembledPrompt {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn system_message(&self) -> &ChatMessage {
        &self.messages[0]
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.messages[1..self.messages.len() - 1]
    }

    /// Context text appended after the persona, empty when none was used.
    pub fn context(&self) -> &str {
        &self.context
    }
}

fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn format_knowledge_block(heading: &str, snippets: &[KnowledgeSnippet]) -> Option<String> {
    if snippets.is_empty() {
        return None;
    }
    let mut block = format!("\n\n{}\n", heading);
    for (idx, doc) in snippets.iter().enumerate() {
        block.push_str(&format!("\n[{}] From {}:\n{}\n", idx + 1, doc.source, doc.content));
    }
    Some(block)
}

pub fn format_live_block(heading: &str, results: &[LiveSourceResult]) -> Option<String> {
    let sections: Vec<String> = results
        .iter()
        .filter(|r| !r.content.trim().is_empty())
        .map(|r| format!("=== {} ===\n{}", r.source, truncate_chars(&r.content, LIVE_CONTENT_LIMIT)))
        .collect();
    if sections.is_empty() {
        return None;
    }
    Some(format!("\n\n{}\n{}", heading, sections.join("\n\n")))
}

/// Builds the single system message (persona plus any context) followed by
/// the bounded history and the new user message.
pub fn assemble_prompt(
    config: &PromptConfig,
    user_message: &str,
    knowledge: &[KnowledgeSnippet],
    live: Option<&[LiveSourceResult]>,
    history: &[ChatMessage]
) -> AssembledPrompt {
    let mut context = String::new();
    if let Some(block) = format_knowledge_block(&config.knowledge_heading, knowledge) {
        context.push_str(&block);
    }
    if let Some(block) = live.and_then(|results| format_live_block(&config.live_heading, results)) {
        context.push_str(&block);
    }

    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(format!("{}{}", config.persona, context)));
    messages.extend(history.iter().filter(|m| m.role != Role::System).cloned());
    messages.push(ChatMessage::user(user_message));

    AssembledPrompt { messages, context }
}
