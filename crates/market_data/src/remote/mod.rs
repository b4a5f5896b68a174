pub mod account_response;
pub mod kucoin_client;
pub mod order_request;
pub mod order_response;
pub mod signing;

pub use account_response::{Account, AccountType, Accounts, ApiEnvelope};
pub use kucoin_client::KucoinClient;
pub use order_request::OrderRequest;
pub use order_response::OrderAck;
pub use signing::SignedRequest;
