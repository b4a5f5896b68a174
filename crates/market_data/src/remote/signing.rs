//! KuCoin v2 request authentication.
//!
//! Both the request signature and the passphrase token are base64-encoded
//! HMAC-SHA256 digests keyed with the API secret.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use common::config::Credentials;
use hmac::{Hmac, Mac};
use reqwest::Method;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const API_KEY_VERSION: &str = "2";

fn hmac_base64(secret_key: &str, parts: &[&str]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .expect("HMAC can take key of any size");
    for part in parts {
        mac.update(part.as_bytes());
    }
    BASE64.encode(mac.finalize().into_bytes())
}

pub fn sign_passphrase(secret_key: &str, passphrase: &str) -> String {
    hmac_base64(secret_key, &[passphrase])
}

/// Signs `timestamp + method + path + body`. GET requests pass an empty body.
pub fn sign_request(secret_key: &str, timestamp: &str, method: &str, path: &str, body: &str) -> String {
    hmac_base64(secret_key, &[timestamp, method, path, body])
}

pub fn timestamp_millis() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// A request whose signature and headers share a single timestamp.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub method: Method,
    pub path: String,
    pub timestamp: String,
    pub body: String,
    pub signature: String,
    pub encrypted_passphrase: String,
}

impl SignedRequest {
    pub fn new(credentials: &Credentials, method: Method, path: &str, body: String) -> Self {
        Self::with_timestamp(credentials, method, path, body, timestamp_millis())
    }

    pub fn with_timestamp(
        credentials: &Credentials,
        method: Method,
        path: &str,
        body: String,
        timestamp: String,
    ) -> Self {
        let signature = sign_request(&credentials.secret_key, &timestamp, method.as_str(), path, &body);
        let encrypted_passphrase = sign_passphrase(&credentials.secret_key, &credentials.passphrase);

        Self {
            method,
            path: path.to_string(),
            timestamp,
            body,
            signature,
            encrypted_passphrase,
        }
    }

    pub fn auth_headers(&self, api_key: &str) -> [(&'static str, String); 6] {
        [
            ("KC-API-KEY", api_key.to_string()),
            ("KC-API-SIGN", self.signature.clone()),
            ("KC-API-TIMESTAMP", self.timestamp.clone()),
            ("KC-API-PASSPHRASE", self.encrypted_passphrase.clone()),
            ("KC-API-KEY-VERSION", API_KEY_VERSION.to_string()),
            ("Content-Type", "application/json".to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNTS: &str = "/api/v1/accounts";

    fn credentials() -> Credentials {
        Credentials {
            api_key: "key".into(),
            secret_key: "secret".into(),
            passphrase: "passphrase".into(),
        }
    }

    #[test]
    fn matches_rfc4231_vector() {
        assert_eq!(
            sign_passphrase("Jefe", "what do ya want for nothing?"),
            "W9zBRr9gdU5qBCQmCJV1x1oAPwidJzmDnexYuWTsOEM="
        );
    }

    #[test]
    fn passphrase_is_deterministic_and_input_sensitive() {
        let base = sign_passphrase("secret", "passphrase");
        assert_eq!(base, "sWd5rQWAxDzYJTY6K2sov6seA0l3uNP70anWxITg8IA=");
        assert_eq!(base, sign_passphrase("secret", "passphrase"));
        assert_ne!(base, sign_passphrase("secreu", "passphrase"));
        assert_ne!(base, sign_passphrase("secret", "passphrasf"));
        assert_ne!(base, sign_passphrase("secret", "passphras"));
    }

    #[test]
    fn signature_covers_every_component() {
        let base = sign_request("secret", "1700000000000", "GET", ACCOUNTS, "");
        assert_eq!(base, "ka2jGwVPj+HJ5t7L4fEM4HttekAXENIQpmo8ulfZmV8=");

        assert_ne!(base, sign_request("secret", "1700000000001", "GET", ACCOUNTS, ""));
        assert_ne!(base, sign_request("secret", "1700000000000", "POST", ACCOUNTS, ""));
        assert_ne!(base, sign_request("secret", "1700000000000", "GET", "/api/v1/orders", ""));
        assert_ne!(base, sign_request("secret", "1700000000000", "GET", ACCOUNTS, "{}"));
    }

    #[test]
    fn different_timestamps_change_signature() {
        assert_ne!(
            sign_request("secret", "t1", "GET", ACCOUNTS, ""),
            sign_request("secret", "t2", "GET", ACCOUNTS, "")
        );
    }

    #[test]
    fn headers_share_the_signed_timestamp() {
        let signed = SignedRequest::with_timestamp(
            &credentials(),
            Method::GET,
            ACCOUNTS,
            String::new(),
            "1700000000000".into(),
        );
        let headers = signed.auth_headers("key");
        let get = |name: &str| {
            headers
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.clone())
                .unwrap()
        };

        assert_eq!(get("KC-API-KEY"), "key");
        assert_eq!(get("KC-API-TIMESTAMP"), "1700000000000");
        assert_eq!(get("KC-API-SIGN"), "ka2jGwVPj+HJ5t7L4fEM4HttekAXENIQpmo8ulfZmV8=");
        assert_eq!(get("KC-API-PASSPHRASE"), sign_passphrase("secret", "passphrase"));
        assert_eq!(get("KC-API-KEY-VERSION"), "2");
    }

    #[test]
    fn fresh_requests_carry_a_millisecond_timestamp() {
        let signed = SignedRequest::new(&credentials(), Method::GET, ACCOUNTS, String::new());
        assert!(signed.timestamp.len() >= 13);
        assert!(signed.timestamp.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(
            signed.signature,
            sign_request("secret", &signed.timestamp, "GET", ACCOUNTS, "")
        );
    }
}
