//! View projection - pure derivation of renderable state
//!
//! No network, no mutation. Everything the renderer needs is computed from
//! an [`AppState`] snapshot and the caller's clock.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use securebank_core::{Severity, Transaction};

use crate::state::{AppState, Panel};

/// Message banner content and styling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub text: String,
    pub severity: Severity,
}

/// Account card shown on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub username: String,
    pub account_number: String,
    pub balance: Decimal,
}

/// What the user should see
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub panel: Panel,
    pub banner: Option<Banner>,
    /// Submit controls are disabled while a request is outstanding
    pub controls_disabled: bool,
    /// Present only when authenticated and the user info has resolved
    pub dashboard: Option<DashboardView>,
    /// Populated only on the history panel
    pub transactions: Vec<Transaction>,
}

/// Project the state into renderable form at `now`.
///
/// Panels that require a session coerce to the login form when anonymous;
/// auth forms coerce to the dashboard when authenticated. A message older
/// than its 5-second window produces no banner.
pub fn project(state: &AppState, now: DateTime<Utc>) -> ViewState {
    let authenticated = state.session.is_authenticated();

    let panel = match (authenticated, state.panel.requires_auth()) {
        (true, true) | (false, false) => state.panel,
        (true, false) => Panel::Dashboard,
        (false, true) => Panel::Login,
    };

    let banner = state
        .message
        .as_ref()
        .filter(|m| !m.is_expired(now))
        .map(|m| Banner {
            text: m.text.clone(),
            severity: m.severity,
        });

    let dashboard = if authenticated {
        state.session.user().map(|user| DashboardView {
            username: user.username.clone(),
            account_number: user.account_number.clone(),
            // The independently refreshed balance, not the possibly stale
            // copy inside the user-info payload
            balance: state.balance,
        })
    } else {
        None
    };

    let transactions = if panel == Panel::History {
        state.transactions.clone()
    } else {
        Vec::new()
    };

    ViewState {
        panel,
        banner,
        controls_disabled: state.is_busy(),
        dashboard,
        transactions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::OpKind;
    use chrono::Duration;
    use rust_decimal_macros::dec;
    use securebank_core::{AccountInfo, StatusMessage, TransactionKind};

    fn authenticated_state() -> AppState {
        let mut state = AppState::default();
        state.session.begin_login();
        state.session.complete_login();
        state.session.set_user(AccountInfo {
            username: "alice".to_string(),
            account_number: "12345678".to_string(),
            balance: dec!(100),
        });
        state.balance = dec!(100);
        state.panel = Panel::Dashboard;
        state
    }

    #[test]
    fn test_anonymous_is_coerced_to_login() {
        let mut state = AppState::default();
        state.panel = Panel::Dashboard;

        let view = project(&state, Utc::now());
        assert_eq!(view.panel, Panel::Login);
        assert!(view.dashboard.is_none());
    }

    #[test]
    fn test_signup_panel_stays_when_anonymous() {
        let mut state = AppState::default();
        state.panel = Panel::Signup;

        assert_eq!(project(&state, Utc::now()).panel, Panel::Signup);
    }

    #[test]
    fn test_auth_forms_coerce_to_dashboard_when_authenticated() {
        let mut state = authenticated_state();
        state.panel = Panel::Login;

        assert_eq!(project(&state, Utc::now()).panel, Panel::Dashboard);
    }

    #[test]
    fn test_dashboard_shows_refreshed_balance_not_user_copy() {
        let mut state = authenticated_state();
        // Balance was refreshed by a deposit after the user-info fetch
        state.balance = dec!(150.00);

        let dashboard = project(&state, Utc::now()).dashboard.unwrap();
        assert_eq!(dashboard.balance, dec!(150.00));
        assert_eq!(dashboard.username, "alice");
    }

    #[test]
    fn test_banner_respects_ttl() {
        let t0 = Utc::now();
        let mut state = authenticated_state();
        state.message = Some(StatusMessage::success("Login successful!", t0));

        assert!(project(&state, t0).banner.is_some());
        assert!(project(&state, t0 + Duration::seconds(4)).banner.is_some());
        assert!(project(&state, t0 + Duration::seconds(5)).banner.is_none());
    }

    #[test]
    fn test_controls_disabled_while_in_flight() {
        let mut state = authenticated_state();
        assert!(!project(&state, Utc::now()).controls_disabled);

        state.in_flight = Some(OpKind::Deposit);
        assert!(project(&state, Utc::now()).controls_disabled);
    }

    #[test]
    fn test_transactions_only_on_history_panel() {
        let mut state = authenticated_state();
        state.transactions.push(Transaction {
            id: 1,
            kind: TransactionKind::Deposit,
            amount: dec!(100),
            description: None,
            timestamp: None,
        });

        state.panel = Panel::Dashboard;
        assert!(project(&state, Utc::now()).transactions.is_empty());

        state.panel = Panel::History;
        assert_eq!(project(&state, Utc::now()).transactions.len(), 1);
    }
}
