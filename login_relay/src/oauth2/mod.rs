mod client;
mod errors;
mod idtoken;
mod types;

pub use client::OAuth2Client;
pub use errors::OAuth2Error;
pub use types::{IdentityAssertion, Provider};
