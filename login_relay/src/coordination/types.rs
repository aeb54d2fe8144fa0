use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::session::SessionClaims;
use crate::userdb::User;

use super::errors::AuthError;

/// Path-specific raw input, one variant per entry path
///
/// The variants carry what each path receives; [`AuthRequest::normalize`]
/// collapses them into the single canonical shape the resolver consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthRequest {
    /// Direct username/password presentation
    Password {
        username: String,
        password: String,
        /// Bearer token sent alongside the credentials, if any
        prior_token: Option<String>,
    },

    /// Recheck of an already-verified session token
    Recheck {
        user_email: String,
        customer_id: Option<String>,
        prior_token: String,
    },

    /// Externally-verified identity from an OAuth code exchange
    OAuth { email: String, redirect_url: String },
}

impl AuthRequest {
    /// Validate the password-login body.
    ///
    /// The body must be an object with string `username` and `password`
    /// fields; the first offending field names the failure.
    pub fn password_from_body(
        body: &Value,
        prior_token: Option<String>,
    ) -> Result<Self, AuthError> {
        let object = body
            .as_object()
            .ok_or_else(|| AuthError::bad_parameter("body"))?;
        Ok(Self::Password {
            username: string_field(object, "username")?,
            password: string_field(object, "password")?,
            prior_token,
        })
    }

    /// Build a recheck request from verified token claims.
    ///
    /// The claims were verified upstream; the same token is carried forward
    /// for reuse.
    pub fn recheck_from_claims(claims: &SessionClaims, token: &str) -> Self {
        Self::Recheck {
            user_email: claims.data.user_email.clone(),
            customer_id: claims.data.customer_id.clone(),
            prior_token: token.to_string(),
        }
    }

    /// Collapse a path-specific request into the canonical options record.
    ///
    /// This is the one place the path invariant is decided: a password
    /// request yields exactly a credential, a recheck exactly a prior token,
    /// an OAuth request neither. The identity key is lowercased here, so the
    /// resolver always sees the canonical lookup key. A bearer token sent
    /// alongside fresh credentials does not survive: a fresh login gets a
    /// fresh expiry window instead of extending an old session.
    pub fn normalize(self) -> AuthenticateOptions {
        match self {
            Self::Password {
                username,
                password,
                prior_token: _,
            } => AuthenticateOptions {
                user_email: username.to_lowercase(),
                password: Some(password),
                customer_id: None,
                prior_token: None,
                redirect_url: None,
            },
            Self::Recheck {
                user_email,
                customer_id,
                prior_token,
            } => AuthenticateOptions {
                user_email: user_email.to_lowercase(),
                password: None,
                customer_id,
                prior_token: Some(prior_token),
                redirect_url: None,
            },
            Self::OAuth {
                email,
                redirect_url,
            } => AuthenticateOptions {
                user_email: email.to_lowercase(),
                password: None,
                customer_id: None,
                prior_token: None,
                redirect_url: Some(redirect_url),
            },
        }
    }
}

/// Validated body of an OAuth callback request
#[derive(Debug, Clone, PartialEq)]
pub(super) struct CallbackParams {
    pub(super) code: String,
    pub(super) redirect_url: String,
}

impl CallbackParams {
    /// The body must be an object with string `code` and `redirect_url`
    /// fields; the first offending field names the failure.
    pub(super) fn from_body(body: &Value) -> Result<Self, AuthError> {
        let object = body
            .as_object()
            .ok_or_else(|| AuthError::bad_parameter("body"))?;
        Ok(Self {
            code: string_field(object, "code")?,
            redirect_url: string_field(object, "redirect_url")?,
        })
    }
}

fn string_field(object: &Map<String, Value>, field: &str) -> Result<String, AuthError> {
    object
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AuthError::bad_parameter(field))
}

/// Canonical options consumed by the session resolver
///
/// `user_email` is always present and lowercased. At most one of `password`
/// and `prior_token` is set; which one (or neither) characterizes the entry
/// path.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticateOptions {
    pub user_email: String,
    pub password: Option<String>,
    pub customer_id: Option<String>,
    pub prior_token: Option<String>,
    pub redirect_url: Option<String>,
}

/// Success envelope returned by every entry path
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResult {
    pub jwt: String,

    /// Customer scope the request was made under, when there was one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,

    pub user: User,

    #[serde(
        rename = "redirectUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub redirect_url: Option<String>,
}
