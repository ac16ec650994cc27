//! Request dispatcher.
//!
//! `submit` renders the multipart form, spawns the network exchange as its
//! own task, and hands back a one-shot completion handle. Each submission
//! delivers exactly one result: a decoded envelope (JSON path), raw bytes
//! (download path), or a typed error. Transport and decode failures are
//! delivered through the handle, never dropped. No ordering exists between
//! independent submissions; callers that need sequencing await one handle
//! before submitting the next.

use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::oneshot;

use strato_core::envelope::{self, ResponseEnvelope};
use strato_core::error::{Result, StratoError};
use strato_core::request::{ApiRequest, AppIdentity, FormData};

use crate::transport::Transport;

/// Completion handle for a JSON-result request.
#[derive(Debug)]
pub struct PendingJson {
    rx: oneshot::Receiver<Result<ResponseEnvelope>>,
}

impl PendingJson {
    /// Wait for the single result of this exchange.
    pub async fn wait(self) -> Result<ResponseEnvelope> {
        self.rx
            .await
            .map_err(|_| StratoError::Internal("dispatch task dropped its result".into()))?
    }

    fn failed(err: StratoError) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(Err(err));
        Self { rx }
    }

    /// Run `observe` on a successful envelope before forwarding the result.
    ///
    /// The observer completes before the caller can see the result, which is
    /// what lets device registration capture the session id ahead of any
    /// dependent call the caller sequences afterwards.
    pub fn tap<F>(self, observe: F) -> Self
    where
        F: FnOnce(&ResponseEnvelope) + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = self.wait().await;
            if let Ok(env) = &result {
                observe(env);
            }
            let _ = tx.send(result);
        });
        Self { rx }
    }
}

/// Completion handle for a binary download.
pub struct PendingBytes {
    rx: oneshot::Receiver<Result<Bytes>>,
}

impl PendingBytes {
    /// Wait for the raw response bytes.
    pub async fn wait(self) -> Result<Bytes> {
        self.rx
            .await
            .map_err(|_| StratoError::Internal("dispatch task dropped its result".into()))?
    }

    fn failed(err: StratoError) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(Err(err));
        Self { rx }
    }
}

/// One dispatcher per client, constructed explicitly and shared by reference.
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    identity: AppIdentity,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn Transport>, identity: AppIdentity) -> Self {
        Self {
            transport,
            identity,
        }
    }

    /// Submit a JSON-result request. Returns immediately; the exchange runs
    /// independently of the caller.
    pub fn submit(&self, request: ApiRequest) -> PendingJson {
        let form = match request.to_form(&self.identity) {
            Ok(form) => form,
            Err(e) => return PendingJson::failed(e),
        };

        let transport = Arc::clone(&self.transport);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = exchange_json(transport, &request, form).await;
            if let Err(e) = &result {
                tracing::warn!(
                    function = request.function(),
                    kind = e.kind().as_str(),
                    error = %e,
                    "exchange failed"
                );
            }
            // receiver may be gone for fire-and-forget calls
            let _ = tx.send(result);
        });

        PendingJson { rx }
    }

    /// Submit a download request: response bytes pass through undecoded.
    pub fn submit_download(&self, request: ApiRequest) -> PendingBytes {
        let form = match request.to_form(&self.identity) {
            Ok(form) => form,
            Err(e) => return PendingBytes::failed(e),
        };

        let transport = Arc::clone(&self.transport);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = exchange_bytes(transport, &request, form).await;
            if let Err(e) = &result {
                tracing::warn!(
                    function = request.function(),
                    kind = e.kind().as_str(),
                    error = %e,
                    "download failed"
                );
            }
            let _ = tx.send(result);
        });

        PendingBytes { rx }
    }
}

async fn exchange_json(
    transport: Arc<dyn Transport>,
    request: &ApiRequest,
    form: FormData,
) -> Result<ResponseEnvelope> {
    let raw = transport.execute(request.url(), form).await?;
    let body = std::str::from_utf8(&raw.body)
        .map_err(|e| StratoError::Decode(format!("response body is not utf-8: {e}")))?;
    let env = envelope::decode(body, raw.status_line.as_deref(), request.function())?;
    tracing::debug!(
        function = request.function(),
        http_status = env.http_status,
        success = env.success,
        "exchange complete"
    );
    Ok(env)
}

async fn exchange_bytes(
    transport: Arc<dyn Transport>,
    request: &ApiRequest,
    form: FormData,
) -> Result<Bytes> {
    let raw = transport.execute(request.url(), form).await?;
    tracing::debug!(
        function = request.function(),
        bytes = raw.body.len(),
        "download complete"
    );
    Ok(raw.body)
}
