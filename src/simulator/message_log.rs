use crate::common::ChatMessage;

/// Ordered, append-only sequence of chat messages.
#[derive(Debug, Default, Clone)]
pub struct MessageLog {
    messages: Vec<ChatMessage>,
}

impl MessageLog {
    pub fn with_history(history: Vec<ChatMessage>) -> Self {
        Self { messages: history }
    }

    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}
