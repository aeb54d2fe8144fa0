//! Runtime configuration for the login-relay crate
//!
//! Configuration is read from the environment once at process start and
//! injected into the components that need it. Nothing in this crate reads
//! ambient global state after construction.

use thiserror::Error;
use url::Url;

/// Default token endpoint for the Google code exchange.
const GOOGLE_TOKEN_URL_DEFAULT: &str = "https://oauth2.googleapis.com/token";

/// Default token endpoint for the Azure code exchange.
const AZURE_TOKEN_URL_DEFAULT: &str = "https://login.microsoftonline.com/common/oauth2/token";

/// Errors raised while assembling the runtime configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent
    #[error("{0} must be set")]
    MissingEnv(String),

    /// An endpoint override could not be parsed as a URL
    #[error("Invalid URL in {variable}: {message}")]
    InvalidUrl { variable: String, message: String },
}

/// Client credentials and token endpoint for one OAuth2 provider
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: Url,
}

/// Immutable process configuration
///
/// Built once by [`AuthConfig::from_env`] (or assembled directly in tests) and
/// handed to [`crate::Authenticator::new`].
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret used to sign and verify session tokens
    pub token_secret: String,
    pub google: ProviderConfig,
    pub azure: ProviderConfig,
}

impl AuthConfig {
    /// Read the configuration from the environment.
    ///
    /// Required variables: `AUTH_TOKEN_SECRET`, `OAUTH2_GOOGLE_CLIENT_ID`,
    /// `OAUTH2_GOOGLE_CLIENT_SECRET`, `OAUTH2_AZURE_CLIENT_ID`,
    /// `OAUTH2_AZURE_CLIENT_SECRET`.
    ///
    /// Optional overrides for the provider token endpoints:
    /// `OAUTH2_GOOGLE_TOKEN_URL`, `OAUTH2_AZURE_TOKEN_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            token_secret: require_env("AUTH_TOKEN_SECRET")?,
            google: ProviderConfig {
                client_id: require_env("OAUTH2_GOOGLE_CLIENT_ID")?,
                client_secret: require_env("OAUTH2_GOOGLE_CLIENT_SECRET")?,
                token_url: token_url_env("OAUTH2_GOOGLE_TOKEN_URL", GOOGLE_TOKEN_URL_DEFAULT)?,
            },
            azure: ProviderConfig {
                client_id: require_env("OAUTH2_AZURE_CLIENT_ID")?,
                client_secret: require_env("OAUTH2_AZURE_CLIENT_SECRET")?,
                token_url: token_url_env("OAUTH2_AZURE_TOKEN_URL", AZURE_TOKEN_URL_DEFAULT)?,
            },
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnv(name.to_string()))
}

fn token_url_env(name: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(name).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl {
        variable: name.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const ALL_VARS: [&str; 7] = [
        "AUTH_TOKEN_SECRET",
        "OAUTH2_GOOGLE_CLIENT_ID",
        "OAUTH2_GOOGLE_CLIENT_SECRET",
        "OAUTH2_GOOGLE_TOKEN_URL",
        "OAUTH2_AZURE_CLIENT_ID",
        "OAUTH2_AZURE_CLIENT_SECRET",
        "OAUTH2_AZURE_TOKEN_URL",
    ];

    fn save_env() -> Vec<(&'static str, Option<String>)> {
        ALL_VARS.iter().map(|name| (*name, env::var(name).ok())).collect()
    }

    fn restore_env(saved: Vec<(&'static str, Option<String>)>) {
        for (name, value) in saved {
            unsafe {
                match value {
                    Some(v) => env::set_var(name, v),
                    None => env::remove_var(name),
                }
            }
        }
    }

    fn set_required_vars() {
        unsafe {
            env::set_var("AUTH_TOKEN_SECRET", "test-secret");
            env::set_var("OAUTH2_GOOGLE_CLIENT_ID", "google-id");
            env::set_var("OAUTH2_GOOGLE_CLIENT_SECRET", "google-secret");
            env::set_var("OAUTH2_AZURE_CLIENT_ID", "azure-id");
            env::set_var("OAUTH2_AZURE_CLIENT_SECRET", "azure-secret");
            env::remove_var("OAUTH2_GOOGLE_TOKEN_URL");
            env::remove_var("OAUTH2_AZURE_TOKEN_URL");
        }
    }

    /// With all required variables set, from_env builds a config carrying the
    /// default provider endpoints.
    #[test]
    #[serial]
    fn test_from_env_defaults() {
        let saved = save_env();
        set_required_vars();

        let config = AuthConfig::from_env().expect("config should build");
        assert_eq!(config.token_secret, "test-secret");
        assert_eq!(config.google.client_id, "google-id");
        assert_eq!(config.azure.client_secret, "azure-secret");
        assert_eq!(config.google.token_url.as_str(), GOOGLE_TOKEN_URL_DEFAULT);
        assert_eq!(config.azure.token_url.as_str(), AZURE_TOKEN_URL_DEFAULT);

        restore_env(saved);
    }

    /// A missing required variable is reported by name.
    #[test]
    #[serial]
    fn test_from_env_missing_secret() {
        let saved = save_env();
        set_required_vars();
        unsafe {
            env::remove_var("AUTH_TOKEN_SECRET");
        }

        let err = AuthConfig::from_env().expect_err("config should fail");
        match err {
            ConfigError::MissingEnv(name) => assert_eq!(name, "AUTH_TOKEN_SECRET"),
            other => panic!("Expected MissingEnv, got {other:?}"),
        }

        restore_env(saved);
    }

    /// Endpoint overrides take precedence over the built-in defaults.
    #[test]
    #[serial]
    fn test_from_env_token_url_override() {
        let saved = save_env();
        set_required_vars();
        unsafe {
            env::set_var("OAUTH2_GOOGLE_TOKEN_URL", "http://127.0.0.1:9876/token");
        }

        let config = AuthConfig::from_env().expect("config should build");
        assert_eq!(
            config.google.token_url.as_str(),
            "http://127.0.0.1:9876/token"
        );
        // The other provider keeps its default
        assert_eq!(config.azure.token_url.as_str(), AZURE_TOKEN_URL_DEFAULT);

        restore_env(saved);
    }

    /// An override that is not a URL is rejected, naming the variable.
    #[test]
    #[serial]
    fn test_from_env_invalid_token_url() {
        let saved = save_env();
        set_required_vars();
        unsafe {
            env::set_var("OAUTH2_AZURE_TOKEN_URL", "not a url");
        }

        let err = AuthConfig::from_env().expect_err("config should fail");
        match err {
            ConfigError::InvalidUrl { variable, .. } => {
                assert_eq!(variable, "OAUTH2_AZURE_TOKEN_URL")
            }
            other => panic!("Expected InvalidUrl, got {other:?}"),
        }

        restore_env(saved);
    }
}
