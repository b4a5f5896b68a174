use std::sync::Arc;

use common::models::{OrderType, Recommendation, Side, TradeSignal};
use market_data::{ExchangeError, KucoinClient, report};
use serde_json::Value;
use tracing::{info, warn};

use crate::services::messages;
use crate::services::telegram_service::Notifier;

/// Runs one exchange operation per call and relays the outcome.
pub struct ExecutionService {
    client: KucoinClient,
    notifier: Arc<dyn Notifier>,
}

impl ExecutionService {
    pub fn new(client: KucoinClient, notifier: Arc<dyn Notifier>) -> Self {
        Self { client, notifier }
    }

    pub async fn send_test(&self) -> bool {
        self.notifier.send(messages::TEST_MESSAGE).await
    }

    pub async fn report_balance(&self) -> bool {
        let result = self.client.fetch_balances().await;
        if let Ok(accounts) = &result {
            info!("Fetched {} KuCoin accounts", accounts.len());
        }
        self.notifier.send(&messages::balance_message(&result)).await
    }

    /// Market buy; the quantity must be a positive number.
    pub async fn buy(&self, symbol: &str, quantity: &str) -> bool {
        let result = match validate_quantity(quantity) {
            Ok(()) => {
                self.client
                    .place_order(symbol, Side::Buy, quantity.trim(), OrderType::Market, None)
                    .await
            }
            Err(e) => {
                warn!("Rejected buy {} {}: {}", symbol, quantity, e);
                Err(e)
            }
        };

        if let Ok(ack) = &result {
            info!("ORDER EXECUTED: ID={} {} {}", ack.order_id, symbol, quantity);
        }
        self.notifier
            .send(&messages::order_message(symbol, quantity, &result))
            .await
    }

    pub async fn relay_signal(&self, signal: &TradeSignal, recommendation: Recommendation) -> bool {
        info!("RECEIVED SIGNAL: {} rsi={} -> {}", signal.symbol, signal.indicator_value, recommendation);
        self.notifier
            .send(&messages::signal_message(signal, recommendation))
            .await
    }

    /// Live balance call rendered as `{success, data | error, details}`.
    pub async fn balance_snapshot(&self) -> Value {
        report(&self.client.fetch_balances().await)
    }
}

fn validate_quantity(quantity: &str) -> Result<(), ExchangeError> {
    match quantity.trim().parse::<f64>() {
        Ok(q) if q.is_finite() && q > 0.0 => Ok(()),
        _ => Err(ExchangeError::InvalidOrder(format!("invalid quantity '{}'", quantity))),
    }
}
