use axum::{Json, Router, extract::State, routing::post};
use http::StatusCode;
use serde_json::Value;

use login_relay::{AuthResult, Provider, ReportableError};

use super::error::IntoResponseError;
use super::state::RelayState;

pub(super) fn router() -> Router<RelayState> {
    Router::new()
        .route("/google_callback", post(google_callback))
        .route("/azure_callback", post(azure_callback))
}

/// Google authorization-code callback
async fn google_callback(
    State(state): State<RelayState>,
    Json(body): Json<Value>,
) -> Result<Json<AuthResult>, (StatusCode, Json<ReportableError>)> {
    authorization_code_login(&state, Provider::Google, &body).await
}

/// Azure authorization-code callback
async fn azure_callback(
    State(state): State<RelayState>,
    Json(body): Json<Value>,
) -> Result<Json<AuthResult>, (StatusCode, Json<ReportableError>)> {
    authorization_code_login(&state, Provider::Azure, &body).await
}

async fn authorization_code_login(
    state: &RelayState,
    provider: Provider,
    body: &Value,
) -> Result<Json<AuthResult>, (StatusCode, Json<ReportableError>)> {
    state
        .authenticator
        .oauth2_callback(provider, body)
        .await
        .map(Json)
        .into_response_error()
}
