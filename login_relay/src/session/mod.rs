mod errors;
mod signer;
mod types;

pub use errors::SessionError;
pub use signer::SessionSigner;
pub use types::{SESSION_TTL_SECS, SessionClaims, SessionTokenData};
