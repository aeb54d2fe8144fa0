//! Entry paths and the session resolver

use std::sync::Arc;

use serde_json::Value;

use crate::config::AuthConfig;
use crate::oauth2::{OAuth2Client, Provider};
use crate::session::{SessionClaims, SessionSigner, SessionTokenData};
use crate::userdb::UserStore;

use super::errors::AuthError;
use super::types::{AuthRequest, AuthResult, AuthenticateOptions, CallbackParams};

/// Coordinates the four entry paths into one resolution flow
///
/// Construction wires the injected configuration into the exchange client
/// and the token signer. Requests are independent; nothing here is mutated
/// after construction.
pub struct Authenticator {
    store: Arc<dyn UserStore>,
    signer: SessionSigner,
    oauth2: OAuth2Client,
}

impl Authenticator {
    pub fn new(config: &AuthConfig, store: Arc<dyn UserStore>) -> Self {
        Self {
            oauth2: OAuth2Client::new(config),
            signer: SessionSigner::new(&config.token_secret),
            store,
        }
    }

    /// Signer for the session tokens this authenticator issues.
    ///
    /// The HTTP layer verifies bearer tokens against it before the recheck
    /// path runs.
    pub fn signer(&self) -> &SessionSigner {
        &self.signer
    }

    /// Password login: validate the body, resolve the user with the
    /// credential, mint a fresh session.
    ///
    /// `prior_token` is a bearer token the caller may have sent alongside the
    /// credentials; it never survives normalization.
    pub async fn password_login(
        &self,
        body: &Value,
        prior_token: Option<String>,
    ) -> Result<AuthResult, AuthError> {
        let request = AuthRequest::password_from_body(body, prior_token)?;
        self.resolve_session(request.normalize()).await
    }

    /// Recheck of an already-verified session token.
    ///
    /// The token is carried through verbatim and never re-signed.
    pub async fn token_recheck(
        &self,
        claims: &SessionClaims,
        token: &str,
    ) -> Result<AuthResult, AuthError> {
        let request = AuthRequest::recheck_from_claims(claims, token);
        self.resolve_session(request.normalize()).await
    }

    /// OAuth callback: validate the body, exchange the code with the named
    /// provider, resolve the asserted identity, mint a fresh session.
    pub async fn oauth2_callback(
        &self,
        provider: Provider,
        body: &Value,
    ) -> Result<AuthResult, AuthError> {
        let params = CallbackParams::from_body(body)?;
        let assertion = self
            .oauth2
            .exchange_code(provider, &params.code, &params.redirect_url)
            .await
            .map_err(|err| AuthError::oauth2(provider, err))?;
        let request = AuthRequest::OAuth {
            email: assertion.email,
            redirect_url: params.redirect_url,
        };
        self.resolve_session(request.normalize()).await
    }

    /// Resolve canonical options into the response envelope.
    ///
    /// Reuse vs. mint is purely "was a prior token supplied": a recheck must
    /// not extend or rotate its session's expiry, while a fresh login always
    /// gets a fresh window. Identity is read-only here; the store is never
    /// mutated.
    async fn resolve_session(&self, options: AuthenticateOptions) -> Result<AuthResult, AuthError> {
        let user = self
            .store
            .find_user(&options.user_email, options.password.as_deref())
            .await?;

        let jwt = match options.prior_token {
            Some(token) => token,
            None => self.signer.mint(SessionTokenData {
                customer_id: options.customer_id.clone(),
                user_email: user.email.clone(),
                user_customer_id: user.customer_id.clone(),
            })?,
        };

        Ok(AuthResult {
            jwt,
            serial: options.customer_id,
            user,
            redirect_url: options.redirect_url,
        })
    }
}
