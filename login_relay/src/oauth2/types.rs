use serde::Deserialize;

/// Fixed audience parameter Azure requires on its code exchange.
pub(super) const AZURE_RESOURCE: &str = "https://graph.microsoft.com";

/// The two identity providers this crate can exchange codes against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Google,
    Azure,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Azure => "azure",
        }
    }

    /// Claim that carries the user identity in this provider's id tokens.
    pub(crate) fn identity_claim(&self) -> &'static str {
        match self {
            Provider::Google => "email",
            Provider::Azure => "upn",
        }
    }

    /// Fixed form parameters this provider requires on the code exchange.
    pub(super) fn fixed_params(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Provider::Google => &[],
            Provider::Azure => &[("resource", AZURE_RESOURCE)],
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subset of the provider token response this crate consumes
#[derive(Debug, Clone, Deserialize)]
pub(super) struct TokenResponse {
    pub(super) id_token: Option<String>,
}

/// Error body providers return on a rejected exchange
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ProviderErrorBody {
    pub(super) error: Option<String>,
    pub(super) error_description: Option<String>,
}

/// Claims extracted from a provider identity token
///
/// Ephemeral; consumed immediately to derive the canonical user email.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityAssertion {
    pub email: String,
}
