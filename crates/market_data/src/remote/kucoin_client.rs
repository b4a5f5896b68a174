use common::config::{Credentials, ExchangeConfig};
use common::models::{OrderType, Side};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{error, info};

use crate::error::{ExchangeError, ExchangeResult};
use crate::remote::account_response::{Accounts, ApiEnvelope};
use crate::remote::order_request::OrderRequest;
use crate::remote::order_response::OrderAck;
use crate::remote::signing::SignedRequest;

pub const ACCOUNTS_PATH: &str = "/api/v1/accounts";
pub const ORDERS_PATH: &str = "/api/v1/orders";

/// Single-attempt KuCoin REST client. Every call ends in an `ExchangeResult`.
#[derive(Clone)]
pub struct KucoinClient {
    client: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl KucoinClient {
    pub fn new(config: &ExchangeConfig) -> ExchangeResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials: config.credentials.clone(),
        })
    }

    pub async fn fetch_balances(&self) -> ExchangeResult<Accounts> {
        self.send_signed(Method::GET, ACCOUNTS_PATH, String::new()).await
    }

    pub async fn place_order(
        &self,
        symbol: &str,
        side: Side,
        size: &str,
        order_type: OrderType,
        price: Option<&str>,
    ) -> ExchangeResult<OrderAck> {
        if order_type == OrderType::Limit && price.is_none() {
            return Err(ExchangeError::InvalidOrder("limit order requires a price".to_string()));
        }

        let order = OrderRequest::new(symbol, side, size, order_type, price);
        let body = order.to_body()?;

        info!("Placing Order: {} {} {} ({}) clientOid={}", side, size, symbol, order_type, order.client_oid);

        self.send_signed(Method::POST, ORDERS_PATH, body).await
    }

    async fn send_signed<T: DeserializeOwned>(&self, method: Method, path: &str, body: String) -> ExchangeResult<T> {
        let credentials = self.credentials.as_ref().ok_or(ExchangeError::MissingCredentials)?;

        let signed = SignedRequest::new(credentials, method, path, body);
        let url = format!("{}{}", self.base_url, signed.path);

        let mut request = self.client.request(signed.method.clone(), &url);
        for (name, value) in signed.auth_headers(&credentials.api_key) {
            request = request.header(name, value);
        }
        if !signed.body.is_empty() {
            request = request.body(signed.body.clone());
        }

        let resp = request.send().await.map_err(|e| {
            error!("KuCoin {} {} failed: {}", signed.method, path, e);
            ExchangeError::Transport(e)
        })?;

        let status = resp.status();
        info!("KuCoin {} {} Status: {}", signed.method, path, status.as_u16());

        let text = resp.text().await?;

        if status != StatusCode::OK {
            error!("KuCoin {} {} Failed: {}", signed.method, path, text);
            return Err(ExchangeError::HttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let envelope: ApiEnvelope<T> = serde_json::from_str(&text)?;
        envelope.into_data()
    }
}
