use chrono::{DateTime, Duration, Utc};

use crate::common::{ChatMessage, DeliveryState, Sender, SimulatorEvent};
use crate::simulator::ChatSession;

const MAX_ACTIVITY_EVENTS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Chat,
    Architecture,
    Infrastructure,
    Monitoring,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::Chat,
        Tab::Architecture,
        Tab::Infrastructure,
        Tab::Monitoring,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Chat => "Chat Interface",
            Tab::Architecture => "Arquitetura",
            Tab::Infrastructure => "Infraestrutura",
            Tab::Monitoring => "Monitoramento",
        }
    }
}

/// Entry of the activity side panel.
#[derive(Debug, Clone)]
pub struct ActivityEvent {
    pub timestamp: DateTime<Utc>,
    pub event_type: String,
    pub message: String,
}

/// Local UI state.
pub struct AppState {
    pub session: ChatSession,
    pub input_text: String,
    pub active_tab: Tab,
    pub activity: Vec<ActivityEvent>,
}

impl AppState {
    pub fn new(session: ChatSession) -> Self {
        Self {
            session,
            input_text: String::new(),
            active_tab: Tab::Chat,
            activity: Vec::new(),
        }
    }

    pub fn submit(&mut self, text: String) {
        if self.session.submit(&text) {
            self.add_activity("MESSAGE_SENT", format!("You: {text}"));
        }
    }

    /// Applies finished reply stages and records them as activity.
    pub fn pump_session(&mut self) {
        for event in self.session.pump_events() {
            match event {
                SimulatorEvent::ComposingStarted => {
                    self.add_activity("COMPOSING_STARTED", "Contact is typing...".to_string());
                }
                SimulatorEvent::ReplyReady(reply) => {
                    self.add_activity("REPLY_RECEIVED", format!("Contact: {}", reply.text));
                }
            }
        }
    }

    pub fn add_activity(&mut self, event_type: &str, message: String) {
        self.activity.push(ActivityEvent {
            timestamp: Utc::now(),
            event_type: event_type.to_string(),
            message,
        });

        if self.activity.len() > MAX_ACTIVITY_EVENTS {
            self.activity.remove(0);
        }
    }

    /// (sent by me, sent by the contact)
    pub fn message_counts(&self) -> (usize, usize) {
        let mine = self
            .session
            .messages()
            .iter()
            .filter(|message| message.is_mine())
            .count();
        (mine, self.session.messages().len() - mine)
    }
}

/// The demo conversation shown when the dashboard opens.
pub fn seed_conversation(now: DateTime<Utc>) -> Vec<ChatMessage> {
    vec![
        ChatMessage::at(
            Sender::Contact,
            "Olá! Como está funcionando o sistema?",
            DeliveryState::Read,
            now - Duration::minutes(5),
        ),
        ChatMessage::at(
            Sender::Me,
            "O sistema está operando perfeitamente! Latência < 50ms",
            DeliveryState::Delivered,
            now - Duration::minutes(4),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::time::Duration as StdDuration;

    use tokio::runtime::Handle;

    use super::*;
    use crate::simulator::SimulatorSettings;

    fn fast_state() -> AppState {
        let settings = SimulatorSettings {
            compose_delay: StdDuration::from_millis(5),
            reply_delay: StdDuration::from_millis(5),
            ..SimulatorSettings::default()
        };
        AppState::new(ChatSession::new(Handle::current(), &settings))
    }

    #[test]
    fn seed_conversation_is_chronological() {
        let now = Utc::now();
        let seed = seed_conversation(now);
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0].sender, Sender::Contact);
        assert_eq!(seed[1].delivery, DeliveryState::Delivered);
        assert!(seed[0].timestamp < seed[1].timestamp);
        assert!(seed[1].timestamp < now);
    }

    #[tokio::test]
    async fn submit_records_activity_only_when_accepted() {
        let mut state = fast_state();
        state.submit("   ".to_string());
        assert!(state.activity.is_empty());

        state.submit("oi".to_string());
        assert_eq!(state.activity.len(), 1);
        assert_eq!(state.activity[0].event_type, "MESSAGE_SENT");
        assert_eq!(state.message_counts(), (1, 0));
    }

    #[tokio::test]
    async fn pump_session_logs_both_stages() {
        let mut state = fast_state();
        state.submit("oi".to_string());
        tokio::time::sleep(StdDuration::from_millis(150)).await;
        state.pump_session();

        let kinds: Vec<_> = state.activity.iter().map(|e| e.event_type.as_str()).collect();
        assert_eq!(kinds, ["MESSAGE_SENT", "COMPOSING_STARTED", "REPLY_RECEIVED"]);
        assert_eq!(state.message_counts(), (1, 1));
    }

    #[tokio::test]
    async fn activity_is_bounded() {
        let mut state = fast_state();
        for i in 0..(MAX_ACTIVITY_EVENTS + 10) {
            state.add_activity("TEST", format!("event {i}"));
        }
        assert_eq!(state.activity.len(), MAX_ACTIVITY_EVENTS);
        assert_eq!(state.activity[0].message, "event 10");
    }

    #[test]
    fn tabs_have_labels() {
        assert_eq!(Tab::ALL.len(), 4);
        assert_eq!(Tab::Chat.label(), "Chat Interface");
    }
}
