//! TxAmount - Positive decimal wrapper for submitted amounts
//!
//! Every amount submitted to the backend MUST be strictly positive and carry
//! at most 2 fractional digits. This is enforced at the type level; funds
//! sufficiency and any further precision rules stay with the backend.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum fractional digits accepted for a submitted amount
const MAX_SCALE: u32 = 2;

/// Errors that can occur when validating a submitted amount
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount must be positive: {0}")]
    NotPositive(Decimal),

    #[error("Amount has more than {MAX_SCALE} fractional digits: {0}")]
    TooPrecise(Decimal),

    #[error("Not a decimal number: {0:?}")]
    Unparsable(String),
}

/// A validated deposit/withdrawal amount.
///
/// # Invariant
/// The inner value is always > 0 with at most 2 fractional digits.
/// This is enforced by the constructor.
///
/// # Example
/// ```
/// use securebank_core::TxAmount;
///
/// let amount: TxAmount = "50.00".parse().unwrap();
/// assert_eq!(amount.to_string(), "50.00");
///
/// assert!("0".parse::<TxAmount>().is_err());
/// assert!("-3".parse::<TxAmount>().is_err());
/// assert!("1.005".parse::<TxAmount>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct TxAmount(Decimal);

impl TxAmount {
    /// Create a new TxAmount from a Decimal.
    ///
    /// Returns an error if the value is zero, negative, or carries more
    /// than 2 fractional digits.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            Err(AmountError::NotPositive(value))
        } else if value.normalize().scale() > MAX_SCALE {
            Err(AmountError::TooPrecise(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Get the inner Decimal value
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for TxAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TxAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str_exact(s.trim())
            .map_err(|_| AmountError::Unparsable(s.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<Decimal> for TxAmount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TxAmount> for Decimal {
    fn from(amount: TxAmount) -> Self {
        amount.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_positive() {
        let amount = TxAmount::new(dec!(50.00)).unwrap();
        assert_eq!(amount.value(), dec!(50.00));
    }

    #[test]
    fn test_amount_zero_rejected() {
        assert!(matches!(
            TxAmount::new(Decimal::ZERO),
            Err(AmountError::NotPositive(_))
        ));
    }

    #[test]
    fn test_amount_negative_rejected() {
        assert!(matches!(
            TxAmount::new(dec!(-10)),
            Err(AmountError::NotPositive(_))
        ));
    }

    #[test]
    fn test_amount_three_decimals_rejected() {
        assert!(matches!(
            TxAmount::new(dec!(1.005)),
            Err(AmountError::TooPrecise(_))
        ));
    }

    #[test]
    fn test_trailing_zeros_not_counted_as_precision() {
        // 1.500 normalizes to 1.5 which is within 2 fractional digits
        let amount = TxAmount::new(dec!(1.500)).unwrap();
        assert_eq!(amount.value(), dec!(1.500));
    }

    #[test]
    fn test_parse_from_str() {
        let amount: TxAmount = "123.45".parse().unwrap();
        assert_eq!(amount.value(), dec!(123.45));

        assert!(matches!(
            "abc".parse::<TxAmount>(),
            Err(AmountError::Unparsable(_))
        ));
    }

    #[test]
    fn test_display_preserves_scale() {
        let amount: TxAmount = "50.00".parse().unwrap();
        assert_eq!(format!("{}", amount), "50.00");
    }
}
