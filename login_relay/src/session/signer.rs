use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};

use super::errors::SessionError;
use super::types::{SESSION_TTL_SECS, SessionClaims, SessionTokenData};

/// Signs and verifies session tokens with the process-wide secret
///
/// Tokens are self-contained; validity is entirely cryptographic and
/// time-based, with no server-side session store behind them.
pub struct SessionSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SessionSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Mint a fresh token for `data`, valid for [`SESSION_TTL_SECS`] from now.
    pub fn mint(&self, data: SessionTokenData) -> Result<String, SessionError> {
        let iat = Utc::now().timestamp();
        let claims = SessionClaims {
            data,
            iat,
            exp: iat + SESSION_TTL_SECS,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| SessionError::Signing(e.to_string()))
    }

    /// Verify signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => SessionError::Expired,
                _ => SessionError::Verification(e.to_string()),
            })
    }
}
