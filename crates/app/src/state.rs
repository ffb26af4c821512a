//! Client-side state: session, balance, transactions, active panel
//!
//! Exactly one [`Session`] exists per client process. It is mutated only by
//! the auth operations in `workflow`; everything else reads it.

use rust_decimal::Decimal;
use securebank_core::{AccountInfo, StatusMessage, Transaction};

use crate::workflow::OpKind;

/// Authentication status of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Anonymous,
    /// A login request is outstanding
    Authenticating,
    Authenticated,
}

/// Which panel the user is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Login,
    Signup,
    Dashboard,
    Deposit,
    Withdraw,
    History,
}

impl Panel {
    /// Panels that only exist behind a live session
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Panel::Login | Panel::Signup)
    }
}

/// Authentication state plus current user identity.
///
/// # Invariant
/// `Anonymous` and `Authenticating` never carry a user. `Authenticated`
/// carries the user once the follow-up account-info fetch has resolved;
/// until then `user()` is `None`.
#[derive(Debug, Clone, Default)]
pub struct Session {
    auth: AuthState,
    user: Option<AccountInfo>,
}

impl Session {
    pub fn auth(&self) -> AuthState {
        self.auth
    }

    pub fn user(&self) -> Option<&AccountInfo> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth == AuthState::Authenticated
    }

    /// `Anonymous -> Authenticating` on login submission
    pub(crate) fn begin_login(&mut self) {
        self.auth = AuthState::Authenticating;
        self.user = None;
    }

    /// `Authenticating -> Anonymous` on a failed credential check
    pub(crate) fn fail_login(&mut self) {
        self.auth = AuthState::Anonymous;
        self.user = None;
    }

    /// `Authenticating -> Authenticated`; the user arrives separately
    /// via [`Session::set_user`] once `/user-info` resolves.
    pub(crate) fn complete_login(&mut self) {
        self.auth = AuthState::Authenticated;
    }

    pub(crate) fn set_user(&mut self, user: AccountInfo) {
        self.user = Some(user);
    }

    /// `* -> Anonymous`, unconditionally (logout is best-effort)
    pub(crate) fn clear(&mut self) {
        *self = Session::default();
    }
}

/// The single mutable state triple (session, balance, transaction list)
/// plus presentation state (panel, message, in-flight marker).
///
/// Writable only from `workflow`; consumers get clones via
/// [`crate::BankWorkflow::snapshot`].
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: Session,
    /// Most recently backend-confirmed balance. Never derived locally.
    pub balance: Decimal,
    /// Replaced wholesale on every history refresh
    pub transactions: Vec<Transaction>,
    pub message: Option<StatusMessage>,
    pub panel: Panel,
    pub(crate) in_flight: Option<OpKind>,
}

impl AppState {
    /// True while any request is outstanding; submit controls are disabled
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Reset everything tied to the session: user, balance, transactions.
    /// The message and panel are left to the caller.
    pub(crate) fn clear_account(&mut self) {
        self.session.clear();
        self.balance = Decimal::ZERO;
        self.transactions.clear();
    }
}
