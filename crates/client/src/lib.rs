//! SecureBank Remote Client
//!
//! Wraps outbound calls to the banking backend and normalizes responses
//! into typed results or failures. Session credentials are cookie-based
//! and attached automatically to every call.
//!
//! The backend surface is described by the [`BankApi`] trait so the
//! workflow layer can run against a scripted fake in tests; the production
//! implementation is [`HttpBankClient`].

pub mod api;
pub mod error;
pub mod http;

pub use api::BankApi;
pub use error::ClientError;
pub use http::HttpBankClient;
