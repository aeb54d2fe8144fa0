//! Combined router for the authentication endpoints

use axum::Router;

use super::state::RelayState;

/// Create a router exposing the four authentication endpoints
///
/// Routes are registered relative to the mount point:
/// - `POST /` - username/password login
/// - `GET /jwt_check` - session token recheck
/// - `POST /google_callback` - Google authorization-code exchange
/// - `POST /azure_callback` - Azure authorization-code exchange
///
/// Nest the returned router wherever the application mounts authentication:
///
/// ```no_run
/// use std::sync::Arc;
///
/// use axum::Router;
/// use login_relay_axum::{login_relay_router, MemoryUserStore, RelayState};
/// use login_relay::{AuthConfig, Authenticator};
///
/// # fn build(config: AuthConfig) -> Router {
/// let store = Arc::new(MemoryUserStore::new());
/// let authenticator = Arc::new(Authenticator::new(&config, store));
/// let app = Router::new().nest("/auth", login_relay_router(RelayState::new(authenticator)));
/// # app
/// # }
/// ```
pub fn login_relay_router(state: RelayState) -> Router {
    Router::new()
        .merge(super::login::router())
        .merge(super::oauth2::router())
        .with_state(state)
}
