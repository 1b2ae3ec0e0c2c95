mod provider;
mod token;

pub use provider::{TokenProvider, SCOPES};
pub use token::{load_cached_token, save_cached_token, CachedToken, EXPIRY_MARGIN_SECS};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No cached credentials in {0}; sign in once to seed the token cache")]
    NoCachedCredentials(String),
    #[error("Token cache error: {0}")]
    Cache(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Token endpoint returned {status}: {error} ({description})")]
    TokenEndpoint {
        status: u16,
        error: String,
        description: String,
    },
    #[error("Unexpected token response: {0}")]
    UnexpectedShape(String),
}
