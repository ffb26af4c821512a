//! Transaction - Read-only history records returned by `/history`
//!
//! Records are immutable once fetched. The local collection is replaced
//! wholesale on each history refresh, never merged incrementally.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a transaction as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "DEPOSIT")]
    Deposit,
    #[serde(rename = "WITHDRAW", alias = "WITHDRAWAL")]
    Withdrawal,
}

impl TransactionKind {
    /// Sign prefix used when rendering the amount ("+" for deposits)
    pub fn sign(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "+",
            TransactionKind::Withdrawal => "-",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// A single history entry. Server-assigned and never mutated locally.
///
/// `amount` arrives as a JSON number, hence the float codec.
/// `description` and `timestamp` are optional on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"id": 7, "type": "DEPOSIT", "amount": 100.5}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(tx.id, 7);
        assert_eq!(tx.kind, TransactionKind::Deposit);
        assert_eq!(tx.amount, dec!(100.5));
        assert_eq!(tx.description, None);
        assert_eq!(tx.timestamp, None);
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": 3,
            "type": "WITHDRAW",
            "amount": 25.0,
            "description": "atm",
            "timestamp": "2025-01-01T10:00:00"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(tx.kind, TransactionKind::Withdrawal);
        assert_eq!(tx.description.as_deref(), Some("atm"));
        assert_eq!(tx.timestamp.as_deref(), Some("2025-01-01T10:00:00"));
    }

    #[test]
    fn test_kind_sign_and_display() {
        assert_eq!(TransactionKind::Deposit.sign(), "+");
        assert_eq!(TransactionKind::Withdrawal.sign(), "-");
        assert_eq!(TransactionKind::Deposit.to_string(), "Deposit");
    }

    #[test]
    fn test_deserialize_history_array() {
        let json = r#"[
            {"id": 1, "type": "DEPOSIT", "amount": 100},
            {"id": 2, "type": "WITHDRAW", "amount": 40}
        ]"#;
        let txs: Vec<Transaction> = serde_json::from_str(json).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[1].kind, TransactionKind::Withdrawal);
    }
}
