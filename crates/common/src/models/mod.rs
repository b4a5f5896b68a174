pub mod order;
pub mod signal;

pub use order::{OrderType, Side};
pub use signal::{Recommendation, TradeSignal};
