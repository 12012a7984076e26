//! Local chat simulation: an append-only message log plus a timer-driven
//! counterparty that answers every submission with a canned reply.

pub mod message_log;
pub mod responder;
pub mod session;
pub mod view;

use std::time::Duration;

pub use session::ChatSession;
pub use view::{Alignment, ChatView, MessageRow, Receipt};

pub const DEFAULT_CANNED_REPLIES: [&str; 4] = [
    "Mensagem recebida com sucesso!",
    "Sistema funcionando perfeitamente",
    "Infraestrutura escalando automaticamente",
    "Todos os serviços operacionais",
];

/// Timing and content of the simulated replies.
#[derive(Debug, Clone)]
pub struct SimulatorSettings {
    /// Delay between a submission and the composing indicator turning on.
    pub compose_delay: Duration,
    /// Delay between the composing indicator and the reply.
    pub reply_delay: Duration,
    pub canned_replies: Vec<String>,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            compose_delay: Duration::from_secs(1),
            reply_delay: Duration::from_secs(2),
            canned_replies: DEFAULT_CANNED_REPLIES
                .iter()
                .map(|reply| reply.to_string())
                .collect(),
        }
    }
}
