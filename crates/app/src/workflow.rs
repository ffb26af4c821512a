//! Transaction and session workflow: submit, await, classify, apply
//!
//! Every operation is one awaited round trip against [`BankApi`] followed
//! by a state transition under the state lock. There is no optimistic
//! update: balances only change when the backend confirms them.
//!
//! Concurrency discipline: a single in-flight marker rejects overlapping
//! submissions (`Busy`) instead of queuing them. The lock is never held
//! across an await; interleaved completions of unsequenced refreshes
//! resolve last-write-wins, matching the backend-as-source-of-truth policy.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use securebank_client::BankApi;
use securebank_core::outcome::{self, AuthOutcome, TxOutcome};
use securebank_core::{Severity, StatusMessage, TransactionKind, TxAmount};
use thiserror::Error;

use crate::state::{AppState, Panel};
use crate::view::ViewState;

/// Kind of operation currently holding the in-flight slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Signup,
    Login,
    Logout,
    Deposit,
    Withdraw,
    Refresh,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpKind::Signup => "signup",
            OpKind::Login => "login",
            OpKind::Logout => "logout",
            OpKind::Deposit => "deposit",
            OpKind::Withdraw => "withdraw",
            OpKind::Refresh => "refresh",
        };
        write!(f, "{name}")
    }
}

/// Errors surfaced to the caller instead of the message banner
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("A {0} request is already in flight")]
    Busy(OpKind),
}

/// Drives the session and transaction state machine against a backend.
///
/// Holds the one mutable state triple (session, balance, transactions)
/// behind a mutex so real-thread embeddings stay single-writer.
pub struct BankWorkflow {
    api: Arc<dyn BankApi>,
    state: Mutex<AppState>,
}

/// Clears the in-flight marker on every exit path
struct Flight<'a> {
    state: &'a Mutex<AppState>,
}

impl Drop for Flight<'_> {
    fn drop(&mut self) {
        self.state.lock().in_flight = None;
    }
}

impl BankWorkflow {
    pub fn new(api: Arc<dyn BankApi>) -> Self {
        Self {
            api,
            state: Mutex::new(AppState::default()),
        }
    }

    /// Clone of the current state, for projection or inspection
    pub fn snapshot(&self) -> AppState {
        self.state.lock().clone()
    }

    /// Project the current state into renderable form at `now`
    pub fn view(&self, now: DateTime<Utc>) -> ViewState {
        crate::view::project(&self.snapshot(), now)
    }

    /// Claim the in-flight slot or reject with `Busy`
    fn begin(&self, op: OpKind) -> Result<Flight<'_>, WorkflowError> {
        let mut state = self.state.lock();
        if let Some(current) = state.in_flight {
            return Err(WorkflowError::Busy(current));
        }
        state.in_flight = Some(op);
        Ok(Flight { state: &self.state })
    }

    fn set_message(&self, message: StatusMessage) {
        self.state.lock().message = Some(message);
    }

    /// Submit credentials for a new account.
    ///
    /// Success switches the active panel to the login form; it never
    /// authenticates.
    pub async fn signup(&self, username: &str, password: &str) -> Result<(), WorkflowError> {
        let _flight = self.begin(OpKind::Signup)?;

        match self.api.signup(username, password).await {
            Ok(text) => {
                let mut state = self.state.lock();
                match outcome::classify_signup(&text) {
                    AuthOutcome::Success => {
                        state.panel = Panel::Login;
                        state.message = Some(StatusMessage::success(text, Utc::now()));
                    }
                    AuthOutcome::Failure => {
                        state.message = Some(StatusMessage::failure(text, Utc::now()));
                    }
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "signup request failed");
                self.set_message(StatusMessage::failure(err.to_string(), Utc::now()));
            }
        }
        Ok(())
    }

    /// Submit credentials and, on success, populate the user and history
    /// with explicitly sequenced follow-up fetches. Their failure is logged
    /// and does not revoke the session.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), WorkflowError> {
        let _flight = self.begin(OpKind::Login)?;
        self.state.lock().session.begin_login();

        match self.api.login(username, password).await {
            Ok(text) => match outcome::classify_login(&text) {
                AuthOutcome::Success => {
                    {
                        let mut state = self.state.lock();
                        state.session.complete_login();
                        state.panel = Panel::Dashboard;
                        state.message = Some(StatusMessage::success(text, Utc::now()));
                    }
                    self.fetch_account().await;
                    self.fetch_history().await;
                }
                AuthOutcome::Failure => {
                    let mut state = self.state.lock();
                    state.session.fail_login();
                    state.message = Some(StatusMessage::failure(text, Utc::now()));
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "login request failed");
                let mut state = self.state.lock();
                state.session.fail_login();
                state.message = Some(StatusMessage::failure(err.to_string(), Utc::now()));
            }
        }
        Ok(())
    }

    /// End the session. Best-effort: local state is cleared even when the
    /// network call fails, so sensitive state disappears immediately.
    pub async fn logout(&self) -> Result<(), WorkflowError> {
        let _flight = self.begin(OpKind::Logout)?;

        let message = match self.api.logout().await {
            Ok(text) => {
                let severity = if text.contains("successful") {
                    Severity::Success
                } else {
                    Severity::Failure
                };
                StatusMessage::new(text, severity, Utc::now())
            }
            Err(err) => {
                tracing::warn!(error = %err, "logout request failed; clearing session anyway");
                StatusMessage::failure(err.to_string(), Utc::now())
            }
        };

        let mut state = self.state.lock();
        state.clear_account();
        state.panel = Panel::Login;
        state.message = Some(message);
        Ok(())
    }

    pub async fn deposit(&self, amount: TxAmount) -> Result<(), WorkflowError> {
        self.submit(TransactionKind::Deposit, amount).await
    }

    pub async fn withdraw(&self, amount: TxAmount) -> Result<(), WorkflowError> {
        self.submit(TransactionKind::Withdrawal, amount).await
    }

    /// Deposit and withdrawal are symmetric: one round trip, classify the
    /// text, apply the confirmed balance, refresh history.
    async fn submit(&self, kind: TransactionKind, amount: TxAmount) -> Result<(), WorkflowError> {
        let op = match kind {
            TransactionKind::Deposit => OpKind::Deposit,
            TransactionKind::Withdrawal => OpKind::Withdraw,
        };
        let _flight = self.begin(op)?;

        let reply = match kind {
            TransactionKind::Deposit => self.api.deposit(amount).await,
            TransactionKind::Withdrawal => self.api.withdraw(amount).await,
        };

        match reply {
            Ok(text) => match outcome::classify_transaction(&text) {
                TxOutcome::Applied(balance) => {
                    {
                        let mut state = self.state.lock();
                        state.balance = balance;
                        state.message = Some(StatusMessage::success(text, Utc::now()));
                    }
                    self.fetch_history().await;
                }
                TxOutcome::AcceptedWithoutBalance => {
                    // The balance stays stale; reconcile from the backend
                    // instead of trusting local arithmetic.
                    self.set_message(StatusMessage::warning(text, Utc::now()));
                    self.fetch_account().await;
                    self.fetch_history().await;
                }
                TxOutcome::Rejected => {
                    self.set_message(StatusMessage::failure(text, Utc::now()));
                }
            },
            Err(err) => {
                tracing::warn!(kind = %kind, error = %err, "transaction request failed");
                self.set_message(StatusMessage::failure(err.to_string(), Utc::now()));
            }
        }
        Ok(())
    }

    /// Navigate to a panel. Opening the history view triggers a refresh.
    pub async fn open_panel(&self, panel: Panel) -> Result<(), WorkflowError> {
        self.state.lock().panel = panel;
        if panel == Panel::History {
            self.refresh_history().await?;
        }
        Ok(())
    }

    /// Fetch `/history` and replace the local list wholesale
    pub async fn refresh_history(&self) -> Result<(), WorkflowError> {
        let _flight = self.begin(OpKind::Refresh)?;
        self.fetch_history().await;
        Ok(())
    }

    /// Fetch `/user-info` and apply the authoritative balance
    pub async fn refresh_account(&self) -> Result<(), WorkflowError> {
        let _flight = self.begin(OpKind::Refresh)?;
        self.fetch_account().await;
        Ok(())
    }

    async fn fetch_history(&self) {
        match self.api.history().await {
            Ok(list) => self.state.lock().transactions = list,
            Err(err) => tracing::warn!(error = %err, "history refresh failed"),
        }
    }

    async fn fetch_account(&self) {
        match self.api.user_info().await {
            Ok(info) => {
                let mut state = self.state.lock();
                // A completion racing a logout must not resurrect the user
                if state.session.is_authenticated() {
                    state.balance = info.balance;
                    state.session.set_user(info);
                }
            }
            Err(err) => tracing::warn!(error = %err, "account info refresh failed"),
        }
    }
}
