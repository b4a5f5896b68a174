pub mod alert;
pub mod interpreter;

pub use alert::{SignalError, WebhookAlert};
pub use interpreter::{classify, interpret};
