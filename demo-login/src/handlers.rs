use axum::Json;
use serde_json::{Value, json};

use login_relay_axum::VerifiedSession;

pub(crate) async fn index() -> Json<Value> {
    Json(json!({
        "endpoints": {
            "login": "POST /auth/",
            "recheck": "GET /auth/jwt_check",
            "google": "POST /auth/google_callback",
            "azure": "POST /auth/azure_callback",
            "whoami": "GET /whoami",
        },
        "demo_user": {
            "username": "demo@example.com",
            "password": "password",
        },
    }))
}

pub(crate) async fn whoami(session: VerifiedSession) -> Json<Value> {
    tracing::trace!("Session for {}", session.claims.data.user_email);
    Json(json!({
        "userEmail": session.claims.data.user_email,
        "customerId": session.claims.data.customer_id,
        "expiresAt": session.claims.exp,
    }))
}
