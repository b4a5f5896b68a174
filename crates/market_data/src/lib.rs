pub mod error;
pub mod remote;

pub use error::{ExchangeError, ExchangeResult, report};
pub use remote::KucoinClient;
