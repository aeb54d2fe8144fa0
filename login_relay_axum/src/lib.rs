//! login-relay-axum - Axum integration for the login-relay library
//!
//! Exposes the four authentication entry points as an axum `Router`, plus a
//! bearer-token extractor for protecting application routes. Successful flows
//! answer with the resolved user and session token; failed ones answer with a
//! stage-tagged `ReportableError` envelope.

mod error;
mod login;
mod oauth2;
mod router;
mod session;
mod state;

pub use router::login_relay_router;
pub use session::VerifiedSession;
pub use state::RelayState;

// Re-export the pieces an embedding application needs from the login_relay crate
pub use login_relay::{
    AuthConfig, AuthResult, Authenticator, MemoryUserStore, ReportableError, SessionClaims,
    SessionTokenData, User, UserStore,
};
