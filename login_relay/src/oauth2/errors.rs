use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum OAuth2Error {
    /// The provider rejected the exchange and reported a structured fault
    #[error("Provider error: {error}")]
    Provider {
        error: String,
        description: Option<String>,
    },

    #[error("Token exchange error: {0}")]
    TokenExchange(String),

    #[error("Id token error: {0}")]
    IdToken(String),
}
