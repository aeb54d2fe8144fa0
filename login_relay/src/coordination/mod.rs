//! Authentication coordination module
//!
//! High-level flows that reconcile the four entry paths (password login,
//! session-token recheck, Google and Azure code exchanges) into one
//! user-resolution and one error-reporting contract.
//!
//! The module is divided into:
//! - `authenticate`: the [`Authenticator`] entry operations and the session
//!   resolver they share
//! - `errors`: the [`AuthError`] translation chokepoint and the reportable
//!   wire shape
//! - `types`: the path-specific request union and the canonical records

mod authenticate;
mod errors;
mod types;

pub use authenticate::Authenticator;
pub use errors::{AuthError, ReportableError};
pub use types::{AuthRequest, AuthResult, AuthenticateOptions};
