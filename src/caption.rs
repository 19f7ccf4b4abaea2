// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the captioning service.
//!
//! One request shape: `POST <endpoint>` with a multipart form holding a
//! single `image` part (raw bytes + mime type). A 2xx response must carry a
//! JSON body with a `caption` string; everything else is a failure. Callers
//! show the user one generic message and keep the full detail for
//! diagnostics.

use crate::selection::SelectedImage;
use serde::Deserialize;
use std::fmt;

/// Multipart field name the service expects.
pub const IMAGE_FIELD: &str = "image";

/// Result type for captioning operations.
pub type CaptionResult<T> = Result<T, CaptionError>;

/// Errors that can occur during a caption request.
#[derive(Debug, Clone)]
pub enum CaptionError {
    /// The request never completed (connection refused, DNS, TLS, ...).
    Transport(String),
    /// The service answered with a non-success status.
    Status { code: u16, detail: Option<String> },
    /// The response body was not the expected JSON shape.
    MalformedResponse(String),
}

impl CaptionError {
    /// Full failure detail for the diagnostics log. Never shown to the user.
    pub fn detail(&self) -> String {
        match self {
            CaptionError::Transport(msg) => format!("transport: {msg}"),
            CaptionError::Status { code, detail } => match detail {
                Some(d) => format!("status {code}: {d}"),
                None => format!("status {code}"),
            },
            CaptionError::MalformedResponse(msg) => format!("malformed response: {msg}"),
        }
    }
}

impl fmt::Display for CaptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptionError::Transport(msg) => write!(f, "Transport error: {msg}"),
            CaptionError::Status { code, .. } => write!(f, "Service returned status {code}"),
            CaptionError::MalformedResponse(msg) => write!(f, "Malformed response: {msg}"),
        }
    }
}

impl std::error::Error for CaptionError {}

/// Success body returned by the service.
#[derive(Debug, Deserialize)]
struct CaptionResponse {
    caption: String,
}

/// Error body the reference service returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: String,
}

/// Client for the captioning service.
#[derive(Debug, Clone)]
pub struct CaptionClient {
    endpoint: String,
    client: reqwest::Client,
}

impl CaptionClient {
    /// Creates a client targeting `endpoint`.
    ///
    /// No timeout is configured: a submission stays in flight until the
    /// exchange settles, and the UI keeps further submissions gated.
    pub fn new(endpoint: impl Into<String>) -> CaptionResult<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("IcedCaption/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CaptionError::Transport(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submits the image and returns the caption text.
    ///
    /// Exactly one attempt; retrying is the user's call.
    pub async fn request_caption(&self, image: &SelectedImage) -> CaptionResult<String> {
        let part = reqwest::multipart::Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(image.mime)
            .map_err(|e| CaptionError::Transport(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part(IMAGE_FIELD, part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| CaptionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The body detail is diagnostic-only; absence is fine.
            let detail = response
                .text()
                .await
                .ok()
                .and_then(|body| serde_json::from_str::<ErrorResponse>(&body).ok())
                .map(|e| e.detail);
            return Err(CaptionError::Status {
                code: status.as_u16(),
                detail,
            });
        }

        let body: CaptionResponse = response
            .json()
            .await
            .map_err(|e| CaptionError::MalformedResponse(e.to_string()))?;

        Ok(body.caption)
    }
}
