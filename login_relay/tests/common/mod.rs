//! Shared helpers for integration tests: a mock provider token endpoint and
//! configuration wiring pointed at it.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{Form, Json, Router, extract::State, http::StatusCode, routing::post};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::{Value, json};
use tokio::sync::Mutex;
use url::Url;

use login_relay::{AuthConfig, ProviderConfig};

/// What the mock token endpoint answers the next exchange with
#[derive(Clone)]
pub enum MockExchange {
    /// 200 with an unsigned id token carrying these claims
    Success { claims: Value },
    /// 200 with the given raw id token (`None` omits the field entirely)
    SuccessRaw { id_token: Option<&'static str> },
    /// 400 with the provider error body
    Rejection {
        error: &'static str,
        description: Option<&'static str>,
    },
}

/// Handle to a running mock provider
#[derive(Clone)]
pub struct MockProvider {
    response: Arc<Mutex<MockExchange>>,
    seen_forms: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl MockProvider {
    pub async fn respond_with(&self, exchange: MockExchange) {
        *self.response.lock().await = exchange;
    }

    /// Form fields of the most recent exchange request.
    pub async fn last_form(&self) -> HashMap<String, String> {
        self.seen_forms
            .lock()
            .await
            .last()
            .cloned()
            .expect("no exchange request was made")
    }

    pub async fn exchange_count(&self) -> usize {
        self.seen_forms.lock().await.len()
    }
}

async fn token_endpoint(
    State(provider): State<MockProvider>,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    provider.seen_forms.lock().await.push(form);

    match &*provider.response.lock().await {
        MockExchange::Success { claims } => (
            StatusCode::OK,
            Json(json!({
                "access_token": "mock-access-token",
                "token_type": "Bearer",
                "expires_in": 3600,
                "id_token": unsigned_id_token(claims),
            })),
        ),
        MockExchange::SuccessRaw { id_token } => {
            let mut body = json!({
                "access_token": "mock-access-token",
                "token_type": "Bearer",
            });
            if let Some(token) = id_token {
                body["id_token"] = json!(token);
            }
            (StatusCode::OK, Json(body))
        }
        MockExchange::Rejection { error, description } => {
            let mut body = json!({ "error": error });
            if let Some(description) = description {
                body["error_description"] = json!(description);
            }
            (StatusCode::BAD_REQUEST, Json(body))
        }
    }
}

/// Craft an id token the way providers emit them, with a signature this
/// crate never checks.
pub fn unsigned_id_token(claims: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.unsigned")
}

/// Start a mock provider on an OS-assigned port, answering success with
/// empty claims until told otherwise.
pub async fn start_mock_provider() -> (MockProvider, Url) {
    let provider = MockProvider {
        response: Arc::new(Mutex::new(MockExchange::Success { claims: json!({}) })),
        seen_forms: Arc::new(Mutex::new(Vec::new())),
    };

    let app = Router::new()
        .route("/token", post(token_endpoint))
        .with_state(provider.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("mock provider should bind");
    let addr = listener.local_addr().expect("mock provider address");
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("mock provider serve");
    });

    let url = Url::parse(&format!("http://{addr}/token")).expect("mock provider url");
    (provider, url)
}

/// Config with both providers pointed at the given token endpoint.
pub fn config_with_token_url(token_url: Url) -> AuthConfig {
    AuthConfig {
        token_secret: "integration-secret".to_string(),
        google: ProviderConfig {
            client_id: "google-client".to_string(),
            client_secret: "google-secret".to_string(),
            token_url: token_url.clone(),
        },
        azure: ProviderConfig {
            client_id: "azure-client".to_string(),
            client_secret: "azure-secret".to_string(),
            token_url,
        },
    }
}
