use std::env;
use std::fmt;
use std::time::Duration;

use serde::Serialize;
use tracing::warn;

pub const DEFAULT_KUCOIN_BASE_URL: &str = "https://api.kucoin.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PORT: u16 = 5000;

/// Exchange API secrets. Immutable once loaded.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub secret_key: String,
    pub passphrase: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .field("passphrase", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub credentials: Option<Credentials>,
}

#[derive(Debug, Clone, Default)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
}

/// Presence flags reported by the diagnostics endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeysLoaded {
    pub telegram: bool,
    pub telegram_chat_id: bool,
    pub kucoin_api: bool,
    pub kucoin_secret: bool,
    pub kucoin_passphrase: bool,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub telegram: TelegramConfig,
    pub exchange: ExchangeConfig,
    keys_loaded: KeysLoaded,
}

impl Settings {
    /// Reads the process environment. Missing secrets never fail here.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bot_token = secret("TELEGRAM_BOT_TOKEN");
        let chat_id = secret("TELEGRAM_CHAT_ID");
        let api_key = secret("KUCOIN_API_KEY");
        let secret_key = secret("KUCOIN_SECRET_KEY");
        let passphrase = secret("KUCOIN_PASSPHRASE");

        let keys_loaded = KeysLoaded {
            telegram: bot_token.is_some(),
            telegram_chat_id: chat_id.is_some(),
            kucoin_api: api_key.is_some(),
            kucoin_secret: secret_key.is_some(),
            kucoin_passphrase: passphrase.is_some(),
        };

        let credentials = match (api_key, secret_key, passphrase) {
            (Some(api_key), Some(secret_key), Some(passphrase)) => Some(Credentials {
                api_key,
                secret_key,
                passphrase,
            }),
            _ => None,
        };

        let base_url = secret("KUCOIN_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_KUCOIN_BASE_URL.to_string());

        Self {
            port: parse_or(secret("PORT"), "PORT", DEFAULT_PORT),
            telegram: TelegramConfig { bot_token, chat_id },
            exchange: ExchangeConfig {
                base_url,
                timeout: Duration::from_secs(parse_or(
                    secret("KUCOIN_TIMEOUT_SECS"),
                    "KUCOIN_TIMEOUT_SECS",
                    DEFAULT_TIMEOUT_SECS,
                )),
                credentials,
            },
            keys_loaded,
        }
    }

    pub fn keys_loaded(&self) -> KeysLoaded {
        self.keys_loaded
    }
}

fn parse_or<T: std::str::FromStr + Copy + fmt::Display>(raw: Option<String>, key: &str, default: T) -> T {
    match raw {
        Some(v) => v.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using {}", key, v, default);
            default
        }),
        None => default,
    }
}
