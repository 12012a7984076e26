use chrono::Local;

use crate::common::{ChatMessage, DeliveryState, Sender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Read-receipt ticks drawn under the user's own messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receipt {
    /// One grey tick.
    Sent,
    /// Two grey ticks.
    Delivered,
    /// Two blue ticks.
    Read,
}

impl Receipt {
    pub fn ticks(self) -> &'static str {
        match self {
            Receipt::Sent => "✓",
            Receipt::Delivered | Receipt::Read => "✓✓",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
    pub id: String,
    pub text: String,
    pub time_label: String,
    pub alignment: Alignment,
    pub receipt: Option<Receipt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatView {
    pub rows: Vec<MessageRow>,
    pub composing: bool,
}

pub fn render(messages: &[ChatMessage], composing: bool) -> ChatView {
    let rows = messages
        .iter()
        .map(|message| MessageRow {
            id: message.id.clone(),
            text: message.text.clone(),
            time_label: message
                .timestamp
                .with_timezone(&Local)
                .format("%H:%M")
                .to_string(),
            alignment: match message.sender {
                Sender::Me => Alignment::Right,
                Sender::Contact => Alignment::Left,
            },
            receipt: message.is_mine().then(|| match message.delivery {
                DeliveryState::Sent => Receipt::Sent,
                DeliveryState::Delivered => Receipt::Delivered,
                DeliveryState::Read => Receipt::Read,
            }),
        })
        .collect();

    ChatView { rows, composing }
}
