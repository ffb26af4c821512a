//! Outcome classification for free-text backend replies
//!
//! The backend answers most endpoints with human-readable text, so the
//! client infers success or failure by substring markers. The wording is a
//! contract: change it here and nowhere else.
//!
//! Markers (inherited from the backend's responses):
//! - login success: contains `"successful"` OR `"Welcome"`
//! - signup success: contains `"successful"` AND `"account number"`
//! - deposit/withdraw success: contains `"successfully"` AND `"Balance:"`
//!   followed by a decimal literal

use rust_decimal::Decimal;

/// Outcome of a login or signup attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    Failure,
}

/// Outcome of a deposit or withdrawal attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxOutcome {
    /// Success marker present and a new authoritative balance was extracted
    Applied(Decimal),
    /// Success marker present but the balance was absent or unparsable.
    /// The local balance stays stale until the next account-info refresh.
    AcceptedWithoutBalance,
    /// No success marker (application-level rejection)
    Rejected,
}

/// Classify a `/login` reply
pub fn classify_login(text: &str) -> AuthOutcome {
    if text.contains("successful") || text.contains("Welcome") {
        AuthOutcome::Success
    } else {
        AuthOutcome::Failure
    }
}

/// Classify a `/signup` reply
pub fn classify_signup(text: &str) -> AuthOutcome {
    if text.contains("successful") && text.contains("account number") {
        AuthOutcome::Success
    } else {
        AuthOutcome::Failure
    }
}

/// Classify a `/deposit` or `/withdraw` reply
pub fn classify_transaction(text: &str) -> TxOutcome {
    if !text.contains("successfully") {
        return TxOutcome::Rejected;
    }
    match extract_balance(text) {
        Some(balance) => TxOutcome::Applied(balance),
        None => TxOutcome::AcceptedWithoutBalance,
    }
}

/// Extract the decimal literal following the `Balance:` marker, if any.
///
/// Accepts optional whitespace after the colon. The literal ends at the
/// first character that is neither a digit nor a dot; a trailing dot is
/// tolerated (`"Balance: 150."` yields 150).
pub fn extract_balance(text: &str) -> Option<Decimal> {
    let rest = text.split_once("Balance:")?.1.trim_start();
    let end = rest
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(rest.len());
    let literal = rest[..end].trim_end_matches('.');
    if literal.is_empty() {
        return None;
    }
    Decimal::from_str_exact(literal).ok()
}
