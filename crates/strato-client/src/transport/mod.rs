//! HTTP transport seam.
//!
//! The dispatcher talks to the network through the [`Transport`] trait;
//! production uses the reqwest-backed [`HttpTransport`], tests substitute a
//! fake backend. TLS configuration, pooling, and timeouts stay inside the
//! HTTP client.

use async_trait::async_trait;
use bytes::Bytes;

use strato_core::error::{Result, StratoError};
use strato_core::request::{FormData, FormPart};

/// The backend reports its HTTP status in a header literally named `STATUS`,
/// carrying a full status-line string. Non-standard, but load-bearing for
/// compatibility.
pub const STATUS_HEADER: &str = "STATUS";

/// Raw exchange result, before envelope decoding.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Value of the `STATUS` header, when the server sent one.
    pub status_line: Option<String>,
    /// Response body bytes, untouched.
    pub body: Bytes,
}

/// Pluggable HTTP layer: one multipart POST per call.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, url: &str, form: FormData) -> Result<RawResponse>;
}

/// reqwest-backed transport.
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| StratoError::Transport(format!("http client init failed: {e}")))?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, url: &str, form: FormData) -> Result<RawResponse> {
        let mut multipart = reqwest::multipart::Form::new();
        for part in form.into_parts() {
            multipart = match part {
                FormPart::Text { name, value } => multipart.text(name, value),
                FormPart::File {
                    name,
                    file_name,
                    data,
                } => multipart.part(
                    name,
                    reqwest::multipart::Part::bytes(data.to_vec()).file_name(file_name),
                ),
            };
        }

        let response = self
            .http
            .post(url)
            .multipart(multipart)
            .send()
            .await
            .map_err(|e| StratoError::Transport(format!("post {url} failed: {e}")))?;

        let status_line = response
            .headers()
            .get(STATUS_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = response
            .bytes()
            .await
            .map_err(|e| StratoError::Transport(format!("read body failed: {e}")))?;

        Ok(RawResponse { status_line, body })
    }
}
