//! High-level API surface.
//!
//! [`Strato`] owns the dispatcher, the session slot, and the mutable
//! auth/location slots; endpoint methods live in per-concern submodules.

pub mod data;
pub mod functions;
pub mod logs;
pub mod messaging;
pub mod notifications;
pub mod paypal;

use std::sync::{Arc, RwLock};

use strato_core::error::Result;
use strato_core::payload;
use strato_core::request::{ApiRequest, AppIdentity, Credentials, GeoFix};

use crate::config::ClientConfig;
use crate::dispatch::{Dispatcher, PendingJson};
use crate::session::SessionState;
use crate::transport::{HttpTransport, Transport};

pub use logs::{LogLevel, NavigationOutcome};
pub use notifications::NotificationType;
pub use paypal::{PayPalBill, PayPalBillItem};

/// Caller-collected device metadata for registration. The SDK does not probe
/// the platform itself.
#[derive(Debug, Clone)]
pub struct DeviceProfile {
    pub platform: String,
    pub name: String,
    pub model: String,
    pub language: String,
    pub country: String,
}

/// The strato client. One instance per application, shareable across tasks.
pub struct Strato {
    pub(crate) cfg: ClientConfig,
    pub(crate) dispatcher: Dispatcher,
    pub(crate) session: SessionState,
    auth: RwLock<Option<Credentials>>,
    location: RwLock<Option<GeoFix>>,
}

impl Strato {
    /// Build a client over the production HTTP transport.
    pub fn new(cfg: ClientConfig) -> Result<Self> {
        cfg.validate()?;
        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new()?);
        Ok(Self::with_transport(cfg, transport))
    }

    /// Build a client over a custom transport (tests, instrumentation).
    pub fn with_transport(cfg: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let identity = AppIdentity {
            app_uniq: cfg.app_uniq.clone(),
            app_secret: cfg.app_secret.to_lowercase(),
            device_id: cfg.device_id.clone(),
        };
        Self {
            dispatcher: Dispatcher::new(transport, identity),
            session: SessionState::new(),
            auth: RwLock::new(None),
            location: RwLock::new(None),
            cfg,
        }
    }

    /// Set or clear the per-user credentials sent with subsequent requests.
    pub fn set_auth(&self, credentials: Option<Credentials>) {
        if let Ok(mut slot) = self.auth.write() {
            *slot = credentials;
        }
    }

    /// Set or clear the device position sent with subsequent requests.
    pub fn set_location(&self, fix: Option<GeoFix>) {
        if let Ok(mut slot) = self.location.write() {
            *slot = fix;
        }
    }

    /// Session id captured by the last successful device registration.
    pub fn session_id(&self) -> Option<String> {
        self.session.get()
    }

    /// Register this device and capture the issued session identifier.
    ///
    /// The returned handle resolves to the registration envelope; the session
    /// slot is written before the handle resolves, so a caller that sequences
    /// a dependent request after awaiting it will observe the session.
    pub fn register_device(&self, profile: &DeviceProfile) -> Result<PendingJson> {
        let request = self
            .request("register-device", "register")?
            .field("device_type", &profile.platform)
            .field("device_name", &profile.name)
            .field("device_model", &profile.model)
            .field("language", &profile.language)
            .field("country", &profile.country);

        let session = self.session.clone();
        Ok(self.dispatcher.submit(request).tap(move |env| {
            if !env.success {
                return;
            }
            match env.payload.get("sessionid").and_then(payload::as_plain_string) {
                Some(id) => {
                    tracing::debug!(session = %id, "device registered");
                    session.set(id);
                }
                None => tracing::warn!("registration response carried no sessionid"),
            }
        }))
    }

    pub(crate) fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}/{}", self.cfg.base_url(), self.cfg.app_code, endpoint)
    }

    /// Base request for an endpoint under the application path, with the
    /// current auth/location slots applied.
    pub(crate) fn request(&self, function: &str, endpoint: &str) -> Result<ApiRequest> {
        self.request_absolute(function, &self.endpoint_url(endpoint))
    }

    /// Base request for an absolute URL (PayPal redirects land here).
    pub(crate) fn request_absolute(&self, function: &str, url: &str) -> Result<ApiRequest> {
        let mut request = ApiRequest::new(function, url)?;
        if let Ok(slot) = self.auth.read() {
            if let Some(auth) = slot.as_ref() {
                request = request.auth(auth.clone());
            }
        }
        if let Ok(slot) = self.location.read() {
            if let Some(fix) = *slot {
                request = request.location(fix);
            }
        }
        Ok(request)
    }
}
