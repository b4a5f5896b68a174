use common::models::TradeSignal;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// RSI assumed when an alert omits it; classifies as HOLD.
pub const DEFAULT_RSI: f64 = 50.0;
pub const DEFAULT_PRICE: f64 = 0.0;

#[derive(Error, Debug)]
pub enum SignalError {
    #[error("Malformed alert payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Alert is missing a symbol")]
    MissingSymbol,
    #[error("Field '{field}' is not a number: {value}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Raw alert as posted by TradingView. Numbers may arrive as JSON strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookAlert {
    pub symbol: Option<String>,
    pub price: Option<Value>,
    pub rsi: Option<Value>,
}

impl WebhookAlert {
    /// Raw request bytes; invalid UTF-8 is reported as malformed JSON.
    pub fn from_slice(raw: &[u8]) -> Result<Self, SignalError> {
        Ok(serde_json::from_slice(raw)?)
    }

    pub fn into_signal(self) -> Result<TradeSignal, SignalError> {
        let symbol = self
            .symbol
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(SignalError::MissingSymbol)?;

        let price = number("price", self.price.as_ref())?.unwrap_or(DEFAULT_PRICE);
        let indicator_value = number("rsi", self.rsi.as_ref())?.unwrap_or(DEFAULT_RSI);

        debug!("Decoded alert {} price={} rsi={}", symbol, price, indicator_value);

        Ok(TradeSignal {
            symbol,
            price,
            indicator_value,
        })
    }
}

fn number(field: &'static str, value: Option<&Value>) -> Result<Option<f64>, SignalError> {
    let invalid = |v: &Value| SignalError::InvalidNumber {
        field,
        value: v.to_string(),
    };

    let v = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(v) => v,
    };
    let parsed = match v {
        Value::Number(n) => n.as_f64().ok_or_else(|| invalid(v))?,
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| invalid(v))?,
        _ => return Err(invalid(v)),
    };

    if parsed.is_finite() {
        Ok(Some(parsed))
    } else {
        Err(SignalError::InvalidNumber {
            field,
            value: parsed.to_string(),
        })
    }
}
