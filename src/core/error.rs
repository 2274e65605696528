// src/core/error.rs
use thiserror::Error;

/// Everything that can go wrong with one submission.
///
/// The page treats all variants the same way (stay on the input view, log
/// it); the split only exists so the log says which part failed.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered HTTP {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("request worker ended without a response")]
    Worker,
}
