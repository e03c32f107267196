//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Scaling error: {0}")]
    Scaling(#[from] crate::shared::ScalingError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The response parsed as JSON but did not match the shape the
    /// operation expects. Operations surface this explicitly instead of
    /// indexing into the value blindly.
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The response body was not valid JSON.
    #[error("Undecodable response body: {0}")]
    Decode(String),
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Secret key is not valid base64: {0}")]
    InvalidSecret(#[from] base64::DecodeError),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),
}
