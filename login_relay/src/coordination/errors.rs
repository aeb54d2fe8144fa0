//! Error translation for the authentication flows

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::oauth2::{OAuth2Error, Provider};
use crate::session::SessionError;
use crate::userdb::UserError;

/// Errors surfaced by the authentication flows
///
/// Every failure, whichever component raised it, crosses into this type
/// exactly once, and the crossing is where it is logged. Callers turn it
/// into the wire shape with [`AuthError::to_report`].
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed or missing caller input, named by field
    #[error("Missing or invalid parameter: {0}")]
    BadParameter(String),

    /// The code exchange against a provider failed
    #[error("{provider} exchange error: {source}")]
    OAuth2 {
        provider: Provider,
        source: OAuth2Error,
    },

    /// The user store could not resolve or authenticate the identity
    #[error("User error: {0}")]
    User(UserError),

    /// A session token could not be produced
    #[error("Session error: {0}")]
    Session(SessionError),
}

impl AuthError {
    /// Stage tag carried in the reported `type` field and the log line.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::BadParameter(_) => "badParams",
            Self::OAuth2 {
                provider: Provider::Google,
                ..
            } => "googleOauthResponse",
            Self::OAuth2 {
                provider: Provider::Azure,
                ..
            } => "azureOauthResponse",
            Self::User(_) => "authenticateUser",
            Self::Session(_) => "sessionToken",
        }
    }

    fn log(self) -> Self {
        tracing::error!("[Err] auth - {}: {}", self.stage(), self);
        self
    }

    pub(crate) fn bad_parameter(field: &str) -> Self {
        Self::BadParameter(field.to_string()).log()
    }

    pub(crate) fn oauth2(provider: Provider, source: OAuth2Error) -> Self {
        Self::OAuth2 { provider, source }.log()
    }

    /// Uniform failure envelope surfaced to callers.
    ///
    /// A provider fault keeps the provider's own error code, with its
    /// description (or the failure's string form) as the message; every other
    /// failure reports its string form under the stage tag.
    pub fn to_report(&self) -> ReportableError {
        match self {
            Self::OAuth2 { source, .. } => match source {
                OAuth2Error::Provider { error, description } => ReportableError {
                    error: error.clone(),
                    message: Some(
                        description
                            .clone()
                            .unwrap_or_else(|| source.to_string()),
                    ),
                    kind: self.stage().to_string(),
                },
                other => ReportableError {
                    error: other.to_string(),
                    message: None,
                    kind: self.stage().to_string(),
                },
            },
            _ => ReportableError {
                error: self.to_string(),
                message: None,
                kind: self.stage().to_string(),
            },
        }
    }
}

// Custom From implementations that log at the conversion. There is
// deliberately no From<OAuth2Error>: a provider failure must name its
// provider, so it enters through AuthError::oauth2.

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        Self::User(err).log()
    }
}

impl From<SessionError> for AuthError {
    fn from(err: SessionError) -> Self {
        Self::Session(err).log()
    }
}

/// Uniform failure envelope surfaced to callers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportableError {
    pub error: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(rename = "type")]
    pub kind: String,
}
