use crate::models::chat::{ ChatMessage, Role };

pub const HISTORY_FOR_PROMPT_LEN: usize = 5;

/// Returns the last `window` turns that precede the in-flight user message.
///
/// `full_history` is the widget's message list with the question being
/// answered as its final entry; that entry is dropped. System messages never
/// come from the client, so any that do are ignored.
pub fn bound_history(full_history: &[ChatMessage], window: usize) -> Vec<ChatMessage> {
    let answered = match full_history.split_last() {
        Some((_, earlier)) => earlier,
        None => return Vec::new(),
    };

    let turns: Vec<&ChatMessage> = answered
        .iter()
        .filter(|m| m.role != Role::System)
        .collect();

    let start = turns.len().saturating_sub(window);
    turns[start..].iter().map(|m| (*m).clone()).collect()
}
