use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::common::{ChatMessage, DeliveryState, Sender, SimulatorEvent};

use super::SimulatorSettings;
use super::message_log::MessageLog;
use super::responder::{AutoResponder, ComposeStage};
use super::view::{self, ChatView};

/// One chat conversation: owns the message log and the composing flag.
///
/// Scheduled reply stages report back through a channel; nothing changes
/// until the owner drains it with [`ChatSession::pump_events`] or
/// [`ChatSession::next_event`]. Dropping the session abandons any pending
/// replies.
pub struct ChatSession {
    log: MessageLog,
    composing: bool,
    pending_replies: usize,
    responder: AutoResponder,
    event_receiver: mpsc::Receiver<SimulatorEvent>,
}

impl ChatSession {
    pub fn new(runtime: Handle, settings: &SimulatorSettings) -> Self {
        Self::with_history(runtime, settings, Vec::new())
    }

    pub fn with_history(
        runtime: Handle,
        settings: &SimulatorSettings,
        history: Vec<ChatMessage>,
    ) -> Self {
        let (event_sender, event_receiver) = mpsc::channel(100);
        Self {
            log: MessageLog::with_history(history),
            composing: false,
            pending_replies: 0,
            responder: AutoResponder::new(runtime, event_sender, settings),
            event_receiver,
        }
    }

    /// Appends `text` as a user message and schedules the simulated reply.
    ///
    /// Blank input is ignored and returns `false`.
    pub fn submit(&mut self, text: &str) -> bool {
        self.schedule_submission(text).is_some()
    }

    fn schedule_submission(&mut self, text: &str) -> Option<ComposeStage> {
        if text.trim().is_empty() {
            return None;
        }

        self.log
            .append(ChatMessage::new(Sender::Me, text, DeliveryState::Sent));
        self.pending_replies += 1;
        Some(self.responder.schedule())
    }

    /// Applies every event that is already waiting, without blocking.
    pub fn pump_events(&mut self) -> Vec<SimulatorEvent> {
        let mut applied = Vec::new();
        while let Ok(event) = self.event_receiver.try_recv() {
            self.apply(&event);
            applied.push(event);
        }
        applied
    }

    /// Waits for the next scheduled stage and applies it.
    ///
    /// The session keeps a sender of its own, so this never yields `None`
    /// while the session is alive and waits indefinitely when no reply is
    /// pending. Check [`ChatSession::has_pending_replies`] first.
    pub async fn next_event(&mut self) -> Option<SimulatorEvent> {
        let event = self.event_receiver.recv().await?;
        self.apply(&event);
        Some(event)
    }

    fn apply(&mut self, event: &SimulatorEvent) {
        match event {
            SimulatorEvent::ComposingStarted => self.composing = true,
            SimulatorEvent::ReplyReady(reply) => {
                self.composing = false;
                self.pending_replies = self.pending_replies.saturating_sub(1);
                self.log.append(reply.clone());
            }
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.log.messages()
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn has_pending_replies(&self) -> bool {
        self.pending_replies > 0
    }

    pub fn canned_replies(&self) -> &[String] {
        self.responder.replies()
    }

    pub fn view(&self) -> ChatView {
        view::render(self.log.messages(), self.composing)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn fast_session() -> ChatSession {
        let settings = SimulatorSettings {
            compose_delay: Duration::from_millis(10),
            reply_delay: Duration::from_millis(20),
            ..SimulatorSettings::default()
        };
        ChatSession::new(Handle::current(), &settings)
    }

    async fn next(session: &mut ChatSession) -> SimulatorEvent {
        tokio::time::timeout(Duration::from_secs(2), session.next_event())
            .await
            .expect("stage did not fire in time")
            .expect("event channel closed")
    }

    async fn drain_replies(session: &mut ChatSession) {
        while session.has_pending_replies() {
            next(session).await;
        }
    }

    #[tokio::test]
    async fn submit_appends_user_message() {
        let mut session = fast_session();
        assert!(session.submit("Olá! Como está funcionando o sistema?"));

        assert_eq!(session.messages().len(), 1);
        let message = &session.messages()[0];
        assert_eq!(message.sender, Sender::Me);
        assert_eq!(message.delivery, DeliveryState::Sent);
        assert_eq!(message.text, "Olá! Como está funcionando o sistema?");
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let mut session = fast_session();
        for blank in ["", " ", "\t\n", "   \r\n  "] {
            assert!(!session.submit(blank));
        }
        assert!(session.messages().is_empty());
        assert!(!session.has_pending_replies());

        let waited = tokio::time::timeout(Duration::from_millis(100), session.next_event()).await;
        assert!(waited.is_err(), "no stage should be scheduled for blank input");
        assert!(session.messages().is_empty());
    }

    #[tokio::test]
    async fn reply_follows_composing_stage() {
        let mut session = fast_session();
        session.submit("teste");
        assert!(!session.is_composing());

        assert!(matches!(next(&mut session).await, SimulatorEvent::ComposingStarted));
        assert!(session.is_composing());
        assert_eq!(session.messages().len(), 1);

        assert!(matches!(next(&mut session).await, SimulatorEvent::ReplyReady(_)));
        assert!(!session.is_composing());
        assert_eq!(session.messages().len(), 2);

        let reply = &session.messages()[1];
        assert_eq!(reply.sender, Sender::Contact);
        assert_eq!(reply.delivery, DeliveryState::Read);
        assert!(session.canned_replies().contains(&reply.text));
    }

    #[tokio::test]
    async fn log_length_counts_non_blank_submissions() {
        let mut session = fast_session();
        let inputs = ["um", "", "dois", "   ", "três"];
        let mut expected = 0;
        for input in inputs {
            if session.submit(input) {
                expected += 1;
            }
            assert_eq!(session.messages().len(), expected);
        }
        assert_eq!(expected, 3);

        drain_replies(&mut session).await;
        assert_eq!(session.messages().len(), 6);
    }

    #[tokio::test]
    async fn user_message_precedes_its_reply() {
        let mut session = fast_session();
        session.submit("primeira");
        drain_replies(&mut session).await;
        session.submit("segunda");
        drain_replies(&mut session).await;

        let senders: Vec<_> = session.messages().iter().map(|m| m.sender).collect();
        assert_eq!(
            senders,
            [Sender::Me, Sender::Contact, Sender::Me, Sender::Contact]
        );
        assert_eq!(session.messages()[0].text, "primeira");
        assert_eq!(session.messages()[2].text, "segunda");
    }

    #[tokio::test]
    async fn every_reply_comes_from_canned_set() {
        let mut session = fast_session();
        for i in 0..5 {
            session.submit(&format!("mensagem {i}"));
        }
        drain_replies(&mut session).await;

        let replies: Vec<_> = session
            .messages()
            .iter()
            .filter(|m| m.sender == Sender::Contact)
            .collect();
        assert_eq!(replies.len(), 5);
        for reply in replies {
            assert!(session.canned_replies().contains(&reply.text));
        }
    }

    #[tokio::test]
    async fn pump_events_applies_ready_stages() {
        let mut session = fast_session();
        assert!(session.pump_events().is_empty());

        session.submit("teste");
        tokio::time::sleep(Duration::from_millis(200)).await;

        let events = session.pump_events();
        assert_eq!(events.len(), 2);
        assert_eq!(session.messages().len(), 2);
        assert!(!session.is_composing());
        assert!(!session.has_pending_replies());
    }

    #[tokio::test]
    async fn history_is_kept_ahead_of_new_messages() {
        let history = vec![ChatMessage::new(
            Sender::Contact,
            "Olá!",
            DeliveryState::Read,
        )];
        let mut session = ChatSession::with_history(
            Handle::current(),
            &SimulatorSettings::default(),
            history,
        );
        session.submit("oi");

        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[0].text, "Olá!");
        assert_eq!(session.messages()[1].sender, Sender::Me);
    }

    #[tokio::test]
    async fn dropped_session_abandons_pending_reply() {
        let mut session = fast_session();
        let stage = session
            .schedule_submission("adeus")
            .expect("non-blank input is scheduled");
        drop(session);

        let reply_stage = tokio::time::timeout(Duration::from_secs(2), stage)
            .await
            .expect("composing stage did not finish")
            .expect("composing stage panicked");
        assert!(reply_stage.is_none(), "no reply after the session is gone");
    }

    #[tokio::test]
    async fn session_dropped_while_composing_ends_reply_stage() {
        let mut session = fast_session();
        let stage = session
            .schedule_submission("adeus")
            .expect("non-blank input is scheduled");
        assert!(matches!(next(&mut session).await, SimulatorEvent::ComposingStarted));
        drop(session);

        let reply_stage = tokio::time::timeout(Duration::from_secs(2), stage)
            .await
            .expect("composing stage did not finish")
            .expect("composing stage panicked")
            .expect("contact started typing, so the reply was scheduled");
        tokio::time::timeout(Duration::from_secs(2), reply_stage)
            .await
            .expect("reply stage did not finish")
            .expect("reply stage panicked");
    }

    #[tokio::test]
    async fn blank_input_schedules_no_stage() {
        let mut session = fast_session();
        assert!(session.schedule_submission(" \t ").is_none());
        assert!(!session.has_pending_replies());
    }
}
