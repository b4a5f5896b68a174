use common::models::{Recommendation, TradeSignal};

/// RSI strictly below this is oversold.
pub const BUY_BELOW: f64 = 35.0;
/// RSI strictly above this is overbought.
pub const SELL_ABOVE: f64 = 65.0;

pub fn classify(indicator_value: f64) -> Recommendation {
    if indicator_value < BUY_BELOW {
        Recommendation::Buy
    } else if indicator_value > SELL_ABOVE {
        Recommendation::Sell
    } else {
        Recommendation::Hold
    }
}

pub fn interpret(signal: &TradeSignal) -> Recommendation {
    classify(signal.indicator_value)
}
