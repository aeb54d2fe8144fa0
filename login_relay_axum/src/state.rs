use std::sync::Arc;

use login_relay::Authenticator;

/// Shared state handed to every handler and extractor
///
/// Wraps the application's [`Authenticator`] so one configured instance
/// serves all routes.
#[derive(Clone)]
pub struct RelayState {
    pub(super) authenticator: Arc<Authenticator>,
}

impl RelayState {
    pub fn new(authenticator: Arc<Authenticator>) -> Self {
        Self { authenticator }
    }
}
