use common::models::{OrderType, Side};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    #[serde(rename = "clientOid")]
    pub client_oid: String,
    pub side: Side,
    pub symbol: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl OrderRequest {
    /// Builds an order with a fresh client id. `price` is dropped unless the
    /// order is a limit order.
    pub fn new(symbol: &str, side: Side, size: &str, order_type: OrderType, price: Option<&str>) -> Self {
        let price = match order_type {
            OrderType::Limit => price.map(str::to_string),
            OrderType::Market => None,
        };

        Self {
            client_oid: new_client_oid(),
            side,
            symbol: symbol.to_string(),
            order_type,
            size: size.to_string(),
            price,
        }
    }

    pub fn to_body(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

pub fn new_client_oid() -> String {
    Uuid::new_v4().simple().to_string()
}
