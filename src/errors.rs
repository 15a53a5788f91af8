//! Submission error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the submission client.
///
/// Every failure is returned immediately to the direct caller; the client
/// never retries, falls back, or recovers internally. Embedding tooling owns
/// its own retry and reporting policy.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A screenshot descriptor is missing a required field. Raised before
    /// any file or network activity.
    #[error("screenshot {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// An image file could not be read. Raised while encoding, before the
    /// request is sent, so a failed read never produces a partial submission.
    #[error("failed to read image {}: {source}", .path.display())]
    FileAccess { path: PathBuf, source: io::Error },

    /// The service answered with a non-success HTTP status. Carries the
    /// status code and the raw response body for caller inspection.
    #[error("server returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Failure inside the HTTP layer: the client could not be built, the
    /// request could not be sent, or the response body could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a success status but a body that is not
    /// valid JSON.
    #[error("failed to parse response body as JSON: {source}")]
    ResponseParse {
        source: serde_json::Error,
        body: String,
    },
}
