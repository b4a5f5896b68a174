use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

pub type ExchangeResult<T> = Result<T, ExchangeError>;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Exchange credentials are not configured")]
    MissingCredentials,
    #[error("Invalid order: {0}")]
    InvalidOrder(String),
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {status}")]
    HttpStatus { status: u16, body: String },
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("KuCoin error {code}: {msg}")]
    Api { code: String, msg: String },
}

impl ExchangeError {
    /// Short machine-readable classification.
    pub fn code(&self) -> String {
        match self {
            Self::MissingCredentials => "CONFIGURATION".to_string(),
            Self::InvalidOrder(_) => "INVALID_ORDER".to_string(),
            Self::Transport(e) if e.is_timeout() => "TIMEOUT".to_string(),
            Self::Transport(_) => "TRANSPORT".to_string(),
            Self::HttpStatus { status, .. } => format!("HTTP {}", status),
            Self::Parse(_) => "PARSE".to_string(),
            Self::Api { code, .. } => code.clone(),
        }
    }

    /// Raw response body or underlying message, untruncated.
    pub fn details(&self) -> Option<String> {
        match self {
            Self::MissingCredentials => None,
            Self::HttpStatus { body, .. } => Some(body.clone()),
            Self::Api { msg, .. } => Some(msg.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Diagnostic view of a result: `{success, data}` or `{success, error, details}`.
pub fn report<T: Serialize>(result: &ExchangeResult<T>) -> Value {
    match result {
        Ok(data) => json!({ "success": true, "data": data }),
        Err(e) => json!({
            "success": false,
            "error": e.code(),
            "details": e.details(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_keeps_full_body() {
        let body = "x".repeat(500);
        let err = ExchangeError::HttpStatus { status: 401, body: body.clone() };
        assert_eq!(err.code(), "HTTP 401");
        assert_eq!(err.details(), Some(body));
        assert_eq!(err.to_string(), "HTTP 401");
    }

    #[test]
    fn report_shapes() {
        let ok: ExchangeResult<Vec<u32>> = Ok(vec![1, 2]);
        assert_eq!(report(&ok), json!({ "success": true, "data": [1, 2] }));

        let failed: ExchangeResult<Vec<u32>> = Err(ExchangeError::MissingCredentials);
        let value = report(&failed);
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "CONFIGURATION");
        assert!(value["details"].is_null());
    }
}
