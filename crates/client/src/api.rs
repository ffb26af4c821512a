//! BankApi - The backend surface as an object-safe trait
//!
//! Two endpoints (`/history`, `/user-info`) yield structured payloads; all
//! others answer with human-readable text that the workflow layer
//! classifies via `securebank_core::outcome`.

use async_trait::async_trait;
use securebank_core::{AccountInfo, Transaction, TxAmount};

use crate::error::ClientError;

/// Typed access to the banking backend.
///
/// Implementations attach session credentials to every call and perform no
/// state mutation beyond the network call itself.
#[async_trait]
pub trait BankApi: Send + Sync {
    /// POST `/signup` with form fields `username`, `password`
    async fn signup(&self, username: &str, password: &str) -> Result<String, ClientError>;

    /// POST `/login` with form fields `username`, `password`
    async fn login(&self, username: &str, password: &str) -> Result<String, ClientError>;

    /// POST `/logout`
    async fn logout(&self) -> Result<String, ClientError>;

    /// POST `/deposit` with form field `amount`
    async fn deposit(&self, amount: TxAmount) -> Result<String, ClientError>;

    /// POST `/withdraw` with form field `amount`
    async fn withdraw(&self, amount: TxAmount) -> Result<String, ClientError>;

    /// GET `/history`
    async fn history(&self) -> Result<Vec<Transaction>, ClientError>;

    /// GET `/user-info`
    async fn user_info(&self) -> Result<AccountInfo, ClientError>;
}
