use std::sync::Arc;

use axum::{Router, routing::get};
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use login_relay::{AuthConfig, Authenticator, MemoryUserStore, User};
use login_relay_axum::{RelayState, login_relay_router};

mod handlers;
mod server;

use crate::{
    handlers::{index, whoami},
    server::spawn_http_server,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AuthConfig::from_env()?;

    let store = MemoryUserStore::new();
    store
        .insert(
            User::new(
                "demo@example.com".to_string(),
                Some("C1".to_string()),
                "Demo User".to_string(),
            ),
            Some("password"),
        )
        .await;
    let authenticator = Arc::new(Authenticator::new(&config, Arc::new(store)));
    let state = RelayState::new(authenticator);

    let app = Router::new()
        .route("/", get(index))
        .route("/whoami", get(whoami))
        .with_state(state.clone())
        .nest("/auth", login_relay_router(state));

    let http_server = spawn_http_server(3001, app);
    http_server.await?;
    Ok(())
}
