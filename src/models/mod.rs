mod message;
mod severity;

pub use message::{Message, MessageFilter, MessageKind};
pub use severity::Severity;
