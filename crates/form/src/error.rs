use thiserror::Error;

/// Failure of a submit cycle.
///
/// A well-formed envelope carrying `success: false` and a failed transport
/// call share this type, so every failure reaches the contributor through the
/// same notification shape.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The server answered but rejected the contribution.
    #[error("Something went wrong")]
    Rejected,
    /// The request never completed.
    #[error("Failed to connect to server: {0}")]
    Connect(String),
    /// The server answered with a non-success status.
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },
    /// The request body could not be assembled.
    #[error("Failed to encode request: {0}")]
    Encode(String),
    /// The response body was not a valid envelope.
    #[error("Failed to decode server response: {0}")]
    Decode(String),
}
