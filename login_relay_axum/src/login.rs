use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use http::{HeaderMap, StatusCode, header::AUTHORIZATION};
use serde_json::Value;

use login_relay::{AuthResult, ReportableError};

use super::error::IntoResponseError;
use super::session::VerifiedSession;
use super::state::RelayState;

pub(super) fn router() -> Router<RelayState> {
    Router::new()
        .route("/", post(login))
        .route("/jwt_check", get(jwt_check))
}

/// Password login. A bearer token presented alongside fresh credentials is
/// passed through to the flow, which never reuses it; any other Authorization
/// header counts as no token at all. A successful login always mints a new
/// session.
async fn login(
    State(state): State<RelayState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<AuthResult>, (StatusCode, Json<ReportableError>)> {
    state
        .authenticator
        .password_login(&body, bearer_token(&headers))
        .await
        .map(Json)
        .into_response_error()
}

/// Read a bearer token from the Authorization header. The token is optional
/// on this route, so a missing, unreadable or non-Bearer header is absence,
/// never a rejection.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Session recheck. The extractor has already verified signature and expiry;
/// the flow re-resolves the user and returns the same token untouched.
async fn jwt_check(
    State(state): State<RelayState>,
    session: VerifiedSession,
) -> Result<Json<AuthResult>, (StatusCode, Json<ReportableError>)> {
    state
        .authenticator
        .token_recheck(&session.claims, &session.token)
        .await
        .map(Json)
        .into_response_error()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers_with_authorization(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_bearer_token_reads_bearer_scheme() {
        let headers = headers_with_authorization("Bearer session-token-1");
        assert_eq!(bearer_token(&headers).as_deref(), Some("session-token-1"));
    }

    /// Another scheme, or a bare scheme with no token, is not an error on
    /// this route; there simply is no prior token.
    #[test]
    fn test_bearer_token_ignores_other_schemes() {
        let headers = headers_with_authorization("Basic dXNlcjpwYXNz");
        assert_eq!(bearer_token(&headers), None);

        let headers = headers_with_authorization("Bearer");
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_bearer_token_ignores_missing_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_bearer_token_ignores_unreadable_value() {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xff").unwrap(),
        );
        assert_eq!(bearer_token(&headers), None);
    }
}
