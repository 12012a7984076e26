use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message in the chat log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Me,
    Contact,
}

/// Delivery progress of a message. Ordered: `Sent < Delivered < Read`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryState {
    Sent,
    Delivered,
    Read,
}

/// Domain model for one chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub delivery: DeliveryState,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>, delivery: DeliveryState) -> Self {
        Self::at(sender, text, delivery, Utc::now())
    }

    pub fn at(
        sender: Sender,
        text: impl Into<String>,
        delivery: DeliveryState,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender,
            text: text.into(),
            timestamp,
            delivery,
        }
    }

    pub fn is_mine(&self) -> bool {
        self.sender == Sender::Me
    }
}
