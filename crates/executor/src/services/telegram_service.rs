use async_trait::async_trait;
use common::config::TelegramConfig;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ParseMode, Recipient};
use tracing::{error, info, warn};

#[cfg(test)]
use mockall::automock;

/// Fire-and-forget delivery of an HTML message. Returns whether it was accepted.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> bool;
}

pub struct TelegramService {
    bot: Option<Bot>,
    chat_id: Option<Recipient>,
}

impl TelegramService {
    pub fn new(config: &TelegramConfig) -> Self {
        if config.bot_token.is_none() || config.chat_id.is_none() {
            warn!("Telegram is not fully configured; notifications will be dropped");
        }

        Self {
            bot: config.bot_token.as_deref().map(Bot::new),
            chat_id: config.chat_id.as_deref().map(parse_recipient),
        }
    }
}

fn parse_recipient(raw: &str) -> Recipient {
    match raw.trim().parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(raw.trim().to_string()),
    }
}

#[async_trait]
impl Notifier for TelegramService {
    async fn send(&self, text: &str) -> bool {
        let (Some(bot), Some(chat_id)) = (&self.bot, &self.chat_id) else {
            warn!("Dropping Telegram message: bot token or chat id missing");
            return false;
        };

        match bot
            .send_message(chat_id.clone(), text)
            .parse_mode(ParseMode::Html)
            .await
        {
            Ok(_) => {
                info!("Telegram message delivered");
                true
            }
            Err(e) => {
                // Send failures are reported to the caller, never raised.
                error!("Failed to send Telegram message: {}", e);
                false
            }
        }
    }
}
