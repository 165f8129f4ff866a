/// Failure while writing an error response.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The body, usually one of its reasons, could not be encoded as JSON.
    #[error("failed to encode error body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("invalid response header name `{name}`")]
    InvalidHeaderName { name: String },
    #[error("invalid value for response header `{name}`")]
    InvalidHeaderValue { name: String },
}
