//! login-relay - Authentication reconciliation library
//!
//! This crate converts four credential presentations (username/password,
//! session-token recheck, and authorization-code exchanges against Google and
//! Azure) into one canonical outcome: a resolved user identity plus a signed,
//! time-bounded session token.

mod config;
mod coordination;
mod oauth2;
mod session;
mod userdb;

// Re-export the main coordination components
pub use coordination::{
    AuthError, AuthRequest, AuthResult, AuthenticateOptions, Authenticator, ReportableError,
};

pub use config::{AuthConfig, ConfigError, ProviderConfig};

pub use oauth2::{OAuth2Error, Provider};

pub use session::{
    SESSION_TTL_SECS, SessionClaims, SessionError, SessionSigner, SessionTokenData,
};

pub use userdb::{MemoryUserStore, User, UserError, UserStore};
