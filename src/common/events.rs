use super::types::ChatMessage;

/// Events sent from the scheduled reply stages back to the owning session.
#[derive(Debug, Clone)]
pub enum SimulatorEvent {
    /// First stage fired: the contact started typing.
    ComposingStarted,
    /// Second stage fired: typing stopped and the reply is ready to append.
    ReplyReady(ChatMessage),
}
