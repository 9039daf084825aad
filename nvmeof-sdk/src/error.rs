use reqwest::StatusCode;

/// Failure surfaced by a gateway call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request to gateway failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("resource not found")]
    NotFound,
    #[error("gateway returned {status}: {message}")]
    Api { status: StatusCode, message: String },
    #[error("failed to decode gateway response: {0}")]
    Decode(#[source] reqwest::Error),
}
