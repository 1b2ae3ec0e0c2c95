mod poster;

pub use poster::{format_post, Poster, ThreadsPoster};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Empty post")]
    Empty,
}
