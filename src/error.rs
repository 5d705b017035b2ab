// Error types shared by the picker, the API client and the uploader.
// The UI only ever shows these as strings, but keeping them typed lets the
// tests and the one-shot mode tell the kinds apart.

use std::path::PathBuf;
use thiserror::Error;

/// Why an upload did not produce a `ParsedResult`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The request never got a response (DNS, connect, reset, ...).
    #[error("{0}")]
    Transport(String),

    /// The service answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    /// A 2xx answer whose body is not a parse result.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for UploadError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => UploadError::Status {
                status: status.as_u16(),
            },
            None => UploadError::Transport(e.to_string()),
        }
    }
}

/// Failure to turn a chosen path into a `SelectedFile`.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a file path: {0}")]
    NoFileName(PathBuf),
}
