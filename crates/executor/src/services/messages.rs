//! Telegram-facing text. All dynamic values are HTML-escaped.

use common::models::{Recommendation, TradeSignal};
use market_data::remote::{AccountType, Accounts, OrderAck};
use market_data::{ExchangeError, ExchangeResult};

pub const DETAILS_PREVIEW_CHARS: usize = 100;

pub const TEST_MESSAGE: &str = "🚀 <b>Relay is running</b>\n\n\
    📊 <b>Status:</b> ✅ Online\n\
    💰 <b>Exchange:</b> KuCoin\n\
    🔗 <b>API:</b> Ready\n\n\
    🎯 Trading relay check";

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shortens exchange details for display only.
pub fn preview(details: &str) -> String {
    if details.chars().count() <= DETAILS_PREVIEW_CHARS {
        return details.to_string();
    }
    let head: String = details.chars().take(DETAILS_PREVIEW_CHARS).collect();
    format!("{}...", head)
}

fn failure(title: &str, err: &ExchangeError) -> String {
    let mut msg = format!("❌ <b>{}:</b>\n{}", title, escape_html(&err.to_string()));
    if let Some(details) = err.details().filter(|d| !d.is_empty() && *d != err.to_string()) {
        msg.push_str(&format!("\n📋 {}", escape_html(&preview(&details))));
    }
    msg
}

pub fn balance_message(result: &ExchangeResult<Accounts>) -> String {
    match result {
        Ok(accounts) => {
            let mut msg = String::from("💰 <b>KuCoin balance:</b>\n\n✅ API connected\n");
            match accounts.find("USDT", AccountType::Trade) {
                Some(account) => match account.balance_value() {
                    Some(balance) => msg.push_str(&format!("💵 USDT: {:.2}", balance)),
                    None => msg.push_str(&format!(
                        "🔍 Could not parse USDT balance: {}",
                        escape_html(&account.balance)
                    )),
                },
                None => msg.push_str("🔍 USDT trade balance not found"),
            }
            msg
        }
        Err(e) => failure("Balance error", e),
    }
}

pub fn order_message(symbol: &str, quantity: &str, result: &ExchangeResult<OrderAck>) -> String {
    match result {
        Ok(ack) => format!(
            "✅ <b>Order placed!</b>\n\nSymbol: {}\nQuantity: {}\nType: market\nOrder ID: {}",
            escape_html(symbol),
            escape_html(quantity),
            escape_html(&ack.order_id)
        ),
        Err(e) => failure("Order error", e),
    }
}

pub fn signal_message(signal: &TradeSignal, recommendation: Recommendation) -> String {
    format!(
        "📊 <b>TRADINGVIEW SIGNAL</b>\n\n\
         🎯 <b>Instrument:</b> {}\n\
         💰 <b>Price:</b> ${}\n\
         📈 <b>RSI:</b> {}\n\n\
         ⚡ <b>Recommendation:</b> {}",
        escape_html(&signal.symbol),
        signal.price,
        signal.indicator_value,
        recommendation
    )
}
