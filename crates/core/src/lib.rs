//! SecureBank Core - Domain types
//!
//! This crate contains the fundamental types used across the client:
//! - `TxAmount`: Positive decimal wrapper for deposit/withdrawal amounts
//! - `Transaction` / `AccountInfo`: Read-only records returned by the backend
//! - `StatusMessage`: Transient user-facing message with a fixed display lifetime
//! - `outcome`: Free-text response classification (the substring adapter)

pub mod account;
pub mod amount;
pub mod message;
pub mod outcome;
pub mod transaction;

pub use account::AccountInfo;
pub use amount::{AmountError, TxAmount};
pub use message::{Severity, StatusMessage, MESSAGE_TTL_SECS};
pub use outcome::{AuthOutcome, TxOutcome};
pub use transaction::{Transaction, TransactionKind};
