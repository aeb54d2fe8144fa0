use axum::{
    Json, RequestPartsExt,
    extract::{FromRef, FromRequestParts},
    response::{IntoResponse, Response},
};
use axum_extra::TypedHeader;
use headers::{Authorization, authorization::Bearer};
use http::{StatusCode, request::Parts};

use login_relay::{ReportableError, SessionClaims, SessionError};

use super::state::RelayState;

/// Rejection answered when a request carries no usable bearer token
#[derive(Debug)]
pub struct SessionRejection {
    report: ReportableError,
}

impl SessionRejection {
    fn missing_header() -> Self {
        Self {
            report: ReportableError {
                error: "Missing or malformed authorization header".to_string(),
                message: None,
                kind: "sessionToken".to_string(),
            },
        }
    }
}

impl From<SessionError> for SessionRejection {
    fn from(err: SessionError) -> Self {
        Self {
            report: ReportableError {
                error: err.to_string(),
                message: None,
                kind: "sessionToken".to_string(),
            },
        }
    }
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        tracing::debug!("Rejecting session token: {}", self.report.error);
        (StatusCode::UNAUTHORIZED, Json(self.report)).into_response()
    }
}

/// A verified session token, available as an axum extractor
///
/// When used as an extractor, it reads the `Authorization: Bearer` header and
/// checks the token's signature and expiry against the application's signing
/// secret before the handler runs. The handler receives the embedded claims
/// together with the raw token exactly as the client presented it. Requests
/// without a valid token are answered with `401 Unauthorized` and the uniform
/// error envelope.
///
/// Works with any router state from which a [`RelayState`] can be obtained
/// via `FromRef`.
///
/// # Example
///
/// ```no_run
/// use axum::Json;
/// use login_relay_axum::VerifiedSession;
///
/// async fn whoami(session: VerifiedSession) -> Json<String> {
///     Json(session.claims.data.user_email)
/// }
/// ```
pub struct VerifiedSession {
    /// Claims carried by the token
    pub claims: SessionClaims,
    /// The raw token as presented by the client
    pub token: String,
}

impl<S> FromRequestParts<S> for VerifiedSession
where
    RelayState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = SessionRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| SessionRejection::missing_header())?;

        let state = RelayState::from_ref(state);
        let claims = state
            .authenticator
            .signer()
            .verify(bearer.token())
            .map_err(SessionRejection::from)?;

        Ok(Self {
            claims,
            token: bearer.token().to_string(),
        })
    }
}
