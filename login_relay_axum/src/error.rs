use axum::Json;
use http::StatusCode;

use login_relay::{AuthError, ReportableError};

/// Helper trait for converting flow errors to the standard response error format
pub(super) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, Json<ReportableError>)>;
}

/// Implementation for AuthError mapping each failure stage to a status code
impl<T> IntoResponseError<T> for Result<T, AuthError> {
    fn into_response_error(self) -> Result<T, (StatusCode, Json<ReportableError>)> {
        self.map_err(|e| {
            let status = match &e {
                AuthError::BadParameter(_) => StatusCode::BAD_REQUEST,
                AuthError::OAuth2 { .. } => StatusCode::BAD_REQUEST,
                AuthError::User(_) => StatusCode::UNAUTHORIZED,
                AuthError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Json(e.to_report()))
        })
    }
}
