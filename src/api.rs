// API client module: a small blocking HTTP client that posts the selected
// file to the parsing service and decodes what comes back.

use crate::config::Config;
use crate::error::UploadError;
use crate::picker::SelectedFile;
use crate::state::ParsedResult;
use anyhow::{Context, Result};
use reqwest::blocking::{multipart, Client};
use std::time::Duration;
use tracing::{debug, warn};

/// Anything that can turn a file into a `ParsedResult`. The uploader only
/// talks to this trait, so tests can swap in a fake service.
pub trait ParseService {
    fn parse(&self, file: &SelectedFile) -> Result<ParsedResult, UploadError>;
}

/// Holds a reqwest blocking client and the parse endpoint URL.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            // The blocking client gives up after 30s by default; a cold
            // parse service can take longer than that to answer.
            .timeout(None::<Duration>)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ParseService for ApiClient {
    /// POST the file as multipart/form-data under the field `file`.
    fn parse(&self, file: &SelectedFile) -> Result<ParsedResult, UploadError> {
        let part = multipart::Part::bytes(file.content.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime)
            .map_err(|e| UploadError::Transport(e.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        debug!(endpoint = %self.endpoint, file = %file.name, bytes = file.size(), "uploading");
        let res = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .map_err(|e| {
                warn!(error = %e, "upload request failed");
                UploadError::from(e)
            })?;

        let status = res.status();
        let body = res.text().map_err(UploadError::from)?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "parse service rejected upload");
            debug!(%body, "error body");
            return Err(UploadError::Status {
                status: status.as_u16(),
            });
        }
        decode_result(&body)
    }
}

/// Check a 2xx body against the `ParsedResult` schema.
pub fn decode_result(body: &str) -> Result<ParsedResult, UploadError> {
    serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "parse service returned an unexpected body");
        UploadError::Malformed(e.to_string())
    })
}
