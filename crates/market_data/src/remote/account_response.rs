use serde::{Deserialize, Serialize};

use crate::error::{ExchangeError, ExchangeResult};

pub const SUCCESS_CODE: &str = "200000";

/// The `{code, msg, data}` wrapper KuCoin puts around every payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: String,
    pub msg: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn into_data(self) -> ExchangeResult<T> {
        if self.code != SUCCESS_CODE {
            return Err(ExchangeError::Api {
                code: self.code,
                msg: self.msg.unwrap_or_default(),
            });
        }
        self.data.ok_or_else(|| ExchangeError::Api {
            code: self.code,
            msg: "response carried no data".to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Main,
    Trade,
    Margin,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub id: String,
    pub currency: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub balance: String,
    #[serde(default)]
    pub available: String,
    #[serde(default)]
    pub holds: String,
}

impl Account {
    pub fn balance_value(&self) -> Option<f64> {
        self.balance.parse::<f64>().ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Accounts(pub Vec<Account>);

impl Accounts {
    pub fn find(&self, currency: &str, account_type: AccountType) -> Option<&Account> {
        self.0
            .iter()
            .find(|a| a.currency == currency && a.account_type == account_type)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
