use serde::Serialize;

use crate::domain::chat::entities::ChatMessage;

/// Body forwarded to the LLM service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatInput {
    pub message: String,
    pub conversation_history: Vec<ChatMessage>,
}

impl ChatInput {
    /// Keeps only the most recent `max_history` messages.
    pub fn truncate_history(&mut self, max_history: usize) {
        let len = self.conversation_history.len();
        if len > max_history {
            self.conversation_history.drain(..len - max_history);
        }
    }
}
