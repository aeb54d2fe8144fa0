use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    #[error("Token signing error: {0}")]
    Signing(String),

    #[error("Token verification error: {0}")]
    Verification(String),

    #[error("Session expired")]
    Expired,
}
