//! SecureBank App - Session state machine, transaction workflow, view projection
//!
//! All client-side state lives in a single owned [`AppState`] behind the
//! [`BankWorkflow`], mutated only through its operations. Rendering is a
//! pure projection of a state snapshot; see [`view::project`].

pub mod state;
pub mod view;
pub mod workflow;

pub use state::{AppState, AuthState, Panel, Session};
pub use view::{project, Banner, DashboardView, ViewState};
pub use workflow::{BankWorkflow, OpKind, WorkflowError};
