//! Error types for the client library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The service answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (DNS, connect, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
