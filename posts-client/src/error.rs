use thiserror::Error;

/// Errors produced by the client library.
#[derive(Debug, Error)]
pub enum PostsClientError {
    /// HTTP transport failure (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The requested post does not exist.
    #[error("post not found")]
    NotFound,

    /// The server rejected the request; carries the message from the
    /// server's error envelope when one was present.
    #[error("request failed: {0}")]
    Api(String),
}

/// Result of `posts-client` operations.
pub type PostsClientResult<T> = Result<T, PostsClientError>;

impl PostsClientError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        match status {
            reqwest::StatusCode::NOT_FOUND => Self::NotFound,
            _ => Self::Api(message.unwrap_or_else(|| format!("http status {status}"))),
        }
    }
}
