pub mod events;
pub mod types;

pub use events::SimulatorEvent;
pub use types::{ChatMessage, DeliveryState, Sender};
