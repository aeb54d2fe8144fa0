use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;

use crate::config::{AuthConfig, ProviderConfig};

use super::errors::OAuth2Error;
use super::idtoken::decode_claims;
use super::types::{IdentityAssertion, Provider, ProviderErrorBody, TokenResponse};

/// HTTP client for the provider code exchanges
///
/// Holds the per-provider credentials and a pooled reqwest client, both fixed
/// at construction.
pub struct OAuth2Client {
    client: reqwest::Client,
    google: ProviderConfig,
    azure: ProviderConfig,
}

impl OAuth2Client {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            client: build_client(),
            google: config.google.clone(),
            azure: config.azure.clone(),
        }
    }

    fn credentials(&self, provider: Provider) -> &ProviderConfig {
        match provider {
            Provider::Google => &self.google,
            Provider::Azure => &self.azure,
        }
    }

    /// Exchange an authorization code for an identity assertion.
    ///
    /// Posts the form-encoded exchange body to the provider token endpoint,
    /// then extracts the provider's identity claim from the returned id token.
    pub async fn exchange_code(
        &self,
        provider: Provider,
        code: &str,
        redirect_url: &str,
    ) -> Result<IdentityAssertion, OAuth2Error> {
        let credentials = self.credentials(provider);
        let mut form: Vec<(&str, &str)> = vec![
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
        ];
        form.extend_from_slice(provider.fixed_params());
        form.push(("redirect_uri", redirect_url));
        form.push(("grant_type", "authorization_code"));
        form.push(("code", code));

        let response = self
            .client
            .post(credentials.token_url.as_str())
            .form(&form)
            .send()
            .await
            .map_err(|e| OAuth2Error::TokenExchange(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                tracing::debug!("Token exchange against {provider} succeeded");
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                tracing::debug!("Token exchange against {provider} failed: {status} {body}");
                return Err(provider_rejection(status, &body));
            }
        };

        let response_body = response
            .text()
            .await
            .map_err(|e| OAuth2Error::TokenExchange(e.to_string()))?;
        let token_response: TokenResponse = serde_json::from_str(&response_body)
            .map_err(|e| OAuth2Error::TokenExchange(e.to_string()))?;

        let id_token = token_response
            .id_token
            .ok_or_else(|| OAuth2Error::IdToken("ID token not present in response".to_string()))?;

        identity_from_claims(provider, &decode_claims(&id_token)?)
    }
}

/// Map a rejected exchange onto the provider-fault variant, keeping the
/// provider's own error code and description when the body carries them.
fn provider_rejection(status: StatusCode, body: &str) -> OAuth2Error {
    match serde_json::from_str::<ProviderErrorBody>(body) {
        Ok(ProviderErrorBody {
            error: Some(error),
            error_description,
        }) => OAuth2Error::Provider {
            error,
            description: error_description,
        },
        _ => OAuth2Error::TokenExchange(format!("Token exchange failed with status {status}")),
    }
}

fn identity_from_claims(
    provider: Provider,
    claims: &Value,
) -> Result<IdentityAssertion, OAuth2Error> {
    let claim = provider.identity_claim();
    let email = claims
        .get(claim)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| OAuth2Error::IdToken(format!("Missing {claim} claim in id token")))?;
    Ok(IdentityAssertion {
        email: email.to_string(),
    })
}

fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(32)
        .build()
        .expect("Failed to create reqwest client")
}
