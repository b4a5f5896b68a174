use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    response::Html,
    routing::get,
};
use common::config::KeysLoaded;
use serde::Serialize;
use serde_json::json;
use strategy::{WebhookAlert, interpret};
use tracing::{error, warn};

use crate::services::execution_service::ExecutionService;
use crate::services::messages::escape_html;

const HOME: &str = "✅ <b>KuCoin trading relay is up</b>\n\n\
    <b>Routes:</b>\n\
    /test - Telegram check\n\
    /balance - KuCoin balance\n\
    /buy/BTC-USDT/0.001 - Market buy\n\
    /debug - Diagnostics\n\n\
    <b>Flow:</b> TradingView → Telegram → KuCoin";

#[derive(Clone)]
pub struct AppState {
    pub execution: Arc<ExecutionService>,
    pub keys_loaded: KeysLoaded,
}

#[derive(Debug, Serialize)]
pub struct WebhookStatus {
    pub status: &'static str,
    pub message: String,
}

impl WebhookStatus {
    fn success(message: impl Into<String>) -> Self {
        Self { status: "success", message: message.into() }
    }

    fn error(message: impl Into<String>) -> Self {
        Self { status: "error", message: message.into() }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/test", get(test_notification))
        .route("/balance", get(balance))
        .route("/buy/:symbol/:quantity", get(buy))
        .route("/debug", get(debug))
        .route("/webhook/tradingview", get(webhook_ready).post(webhook))
        .with_state(state)
}

async fn home() -> Html<&'static str> {
    Html(HOME)
}

async fn test_notification(State(state): State<AppState>) -> &'static str {
    if state.execution.send_test().await {
        "✅ Message sent to Telegram"
    } else {
        "❌ Failed to send Telegram message"
    }
}

async fn balance(State(state): State<AppState>) -> &'static str {
    if state.execution.report_balance().await {
        "✅ Balance report sent to Telegram"
    } else {
        "❌ Balance report could not be delivered"
    }
}

async fn buy(State(state): State<AppState>, Path((symbol, quantity)): Path<(String, String)>) -> &'static str {
    if state.execution.buy(&symbol, &quantity).await {
        "✅ Buy request processed"
    } else {
        "❌ Buy request processed, but the report could not be delivered"
    }
}

async fn debug(State(state): State<AppState>) -> Html<String> {
    let info = json!({
        "keys_loaded": state.keys_loaded,
        "kucoin_balance": state.execution.balance_snapshot().await,
    });
    let pretty = serde_json::to_string_pretty(&info).unwrap_or_else(|e| e.to_string());
    Html(format!("<pre>{}</pre>", escape_html(&pretty)))
}

async fn webhook_ready() -> &'static str {
    "✅ Webhook is ready for TradingView alerts"
}

async fn webhook(State(state): State<AppState>, body: Bytes) -> Json<WebhookStatus> {
    let signal = match WebhookAlert::from_slice(&body).and_then(WebhookAlert::into_signal) {
        Ok(signal) => signal,
        Err(e) => {
            warn!("Rejected webhook payload: {}", e);
            return Json(WebhookStatus::error(e.to_string()));
        }
    };

    let recommendation = interpret(&signal);
    if state.execution.relay_signal(&signal, recommendation).await {
        Json(WebhookStatus::success(format!("Signal processed: {}", recommendation)))
    } else {
        error!("Signal for {} could not be relayed", signal.symbol);
        Json(WebhookStatus::error("Signal processed but notification delivery failed"))
    }
}
