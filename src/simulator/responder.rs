use std::sync::Arc;
use std::time::Duration;

use rand::seq::IndexedRandom;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::common::{ChatMessage, DeliveryState, Sender, SimulatorEvent};

use super::{DEFAULT_CANNED_REPLIES, SimulatorSettings};

/// Handle of the composing stage. It resolves to the reply stage's handle,
/// or `None` when the session was gone before the contact started typing.
pub type ComposeStage = JoinHandle<Option<JoinHandle<()>>>;

/// Schedules the two-stage fake reaction to a user submission.
///
/// Stage one waits `compose_delay` and reports that the contact is typing,
/// then schedules stage two, which waits `reply_delay` and delivers a canned
/// reply. Stages never touch session state; they only send events. Once the
/// session is gone the channel is closed and the pending stage gives up.
#[derive(Clone)]
pub struct AutoResponder {
    runtime: Handle,
    event_sender: mpsc::Sender<SimulatorEvent>,
    compose_delay: Duration,
    reply_delay: Duration,
    replies: Arc<[String]>,
}

impl AutoResponder {
    pub fn new(
        runtime: Handle,
        event_sender: mpsc::Sender<SimulatorEvent>,
        settings: &SimulatorSettings,
    ) -> Self {
        let replies: Arc<[String]> = if settings.canned_replies.is_empty() {
            DEFAULT_CANNED_REPLIES
                .iter()
                .map(|reply| reply.to_string())
                .collect()
        } else {
            settings.canned_replies.iter().cloned().collect()
        };

        Self {
            runtime,
            event_sender,
            compose_delay: settings.compose_delay,
            reply_delay: settings.reply_delay,
            replies,
        }
    }

    pub fn replies(&self) -> &[String] {
        &self.replies
    }

    pub fn schedule(&self) -> ComposeStage {
        let responder = self.clone();
        let stage = self.runtime.spawn(async move {
            tokio::time::sleep(responder.compose_delay).await;

            if responder
                .event_sender
                .send(SimulatorEvent::ComposingStarted)
                .await
                .is_err()
            {
                log::debug!("Chat session closed before the contact started typing");
                return None;
            }

            Some(responder.schedule_reply())
        });
        log::debug!(
            "Reply scheduled (compose in {:?}, reply {:?} later)",
            self.compose_delay,
            self.reply_delay
        );
        stage
    }

    fn schedule_reply(self) -> JoinHandle<()> {
        let runtime = self.runtime.clone();
        runtime.spawn(async move {
            tokio::time::sleep(self.reply_delay).await;

            let reply = ChatMessage::new(
                Sender::Contact,
                pick_reply(&self.replies),
                DeliveryState::Read,
            );
            if let Err(err) = self
                .event_sender
                .send(SimulatorEvent::ReplyReady(reply))
                .await
            {
                log::debug!("Chat session closed; dropping reply: {err}");
            }
        })
    }
}

/// Uniform pick from the canned set.
pub fn pick_reply(replies: &[String]) -> String {
    replies
        .choose(&mut rand::rng())
        .cloned()
        .unwrap_or_else(|| DEFAULT_CANNED_REPLIES[0].to_string())
}
