//! HttpBankClient - reqwest-backed BankApi implementation
//!
//! A single `reqwest::Client` with an enabled cookie store carries the
//! session cookie across calls; no other auth scheme is used.

use async_trait::async_trait;
use securebank_core::{AccountInfo, Transaction, TxAmount};
use serde::de::DeserializeOwned;

use crate::api::BankApi;
use crate::error::ClientError;

/// Production client for the banking backend
#[derive(Debug, Clone)]
pub struct HttpBankClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBankClient {
    /// Create a client against the given API base URL
    /// (e.g. `http://localhost:8081/api`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// POST a form and return the raw response text
    async fn post_text(
        &self,
        endpoint: &'static str,
        form: &[(&str, &str)],
    ) -> Result<String, ClientError> {
        tracing::debug!(endpoint, "POST");
        let response = self
            .http
            .post(self.url(endpoint))
            .form(form)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        response.text().await.map_err(|e| ClientError::Decode {
            endpoint,
            reason: e.to_string(),
        })
    }

    /// GET a structured payload
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
    ) -> Result<T, ClientError> {
        tracing::debug!(endpoint, "GET");
        let response = self
            .http
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        response.json().await.map_err(|e| ClientError::Decode {
            endpoint,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl BankApi for HttpBankClient {
    async fn signup(&self, username: &str, password: &str) -> Result<String, ClientError> {
        self.post_text("/signup", &[("username", username), ("password", password)])
            .await
    }

    async fn login(&self, username: &str, password: &str) -> Result<String, ClientError> {
        self.post_text("/login", &[("username", username), ("password", password)])
            .await
    }

    async fn logout(&self) -> Result<String, ClientError> {
        self.post_text("/logout", &[]).await
    }

    async fn deposit(&self, amount: TxAmount) -> Result<String, ClientError> {
        let amount = amount.to_string();
        self.post_text("/deposit", &[("amount", amount.as_str())])
            .await
    }

    async fn withdraw(&self, amount: TxAmount) -> Result<String, ClientError> {
        let amount = amount.to_string();
        self.post_text("/withdraw", &[("amount", amount.as_str())])
            .await
    }

    async fn history(&self) -> Result<Vec<Transaction>, ClientError> {
        self.get_json("/history").await
    }

    async fn user_info(&self) -> Result<AccountInfo, ClientError> {
        self.get_json("/user-info").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = HttpBankClient::new("http://localhost:8081/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8081/api");
        assert_eq!(client.url("/login"), "http://localhost:8081/api/login");
    }

    #[tokio::test]
    async fn test_transport_failure_is_a_value() {
        // Nothing listens on this port; the error must come back as a
        // ClientError::Transport, not a panic.
        let client = HttpBankClient::new("http://127.0.0.1:1/api").unwrap();
        let err = client.logout().await.unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "Network error occurred");
    }
}
