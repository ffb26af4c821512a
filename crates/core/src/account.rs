//! AccountInfo - The `/user-info` payload

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identity and balance of the logged-in user as reported by the backend.
///
/// `balance` is authoritative: the client never computes it locally, it only
/// replaces it with whatever the backend last confirmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub username: String,
    #[serde(rename = "accountNumber")]
    pub account_number: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_user_info() {
        let json = r#"{"username": "alice", "accountNumber": "12345678", "balance": 150.0}"#;
        let info: AccountInfo = serde_json::from_str(json).unwrap();

        assert_eq!(info.username, "alice");
        assert_eq!(info.account_number, "12345678");
        assert_eq!(info.balance, dec!(150.0));
    }

    #[test]
    fn test_integer_balance_on_the_wire() {
        let json = r#"{"username": "bob", "accountNumber": "87654321", "balance": 0}"#;
        let info: AccountInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.balance, Decimal::ZERO);
    }
}
