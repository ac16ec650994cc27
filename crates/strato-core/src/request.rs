//! Outbound request assembly.
//!
//! [`ApiRequest`] collects everything a single API call needs; [`FormData`]
//! is its transport-ready multipart rendering. Assembly is a pure function:
//! no I/O, no side effects, fallible only on missing required inputs. The
//! conversion to a concrete HTTP body happens at the transport edge.

use bytes::Bytes;

use crate::error::{Result, StratoError};
use crate::payload::{self, Payload};

/// Credentials forwarded when the application enforces per-user auth.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Device position attached to outbound calls when known.
#[derive(Debug, Clone, Copy)]
pub struct GeoFix {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

/// A named file travelling with a document write.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub data: Bytes,
}

/// Identity fields stamped on every outbound form.
#[derive(Debug, Clone)]
pub struct AppIdentity {
    /// Unique application code issued at registration.
    pub app_uniq: String,
    /// Lower-cased hash of the application password.
    pub app_secret: String,
    /// Caller-supplied unique device identifier.
    pub device_id: String,
}

/// One part of a multipart form.
#[derive(Debug, Clone)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        data: Bytes,
    },
}

/// Transport-ready multipart form, inspectable without an HTTP client.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    parts: Vec<FormPart>,
}

impl FormData {
    fn text(&mut self, name: &str, value: impl Into<String>) {
        self.parts.push(FormPart::Text {
            name: name.to_string(),
            value: value.into(),
        });
    }

    fn file(&mut self, name: String, file_name: String, data: Bytes) {
        self.parts.push(FormPart::File {
            name,
            file_name,
            data,
        });
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<FormPart> {
        self.parts
    }

    /// First text part with this name, if any.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|p| match p {
            FormPart::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }
}

/// One outbound API call. Immutable once handed to the dispatcher; discarded
/// after the dispatcher consumes it.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    function: String,
    url: String,
    fields: Vec<(String, String)>,
    payload: Option<Payload>,
    attachments: Vec<Attachment>,
    auth: Option<Credentials>,
    location: Option<GeoFix>,
}

impl ApiRequest {
    /// Start a request. Function identifier and target URL are required.
    pub fn new(function: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let function = function.into();
        let url = url.into();
        if function.is_empty() {
            return Err(StratoError::BadRequest("function must not be empty".into()));
        }
        if url.is_empty() {
            return Err(StratoError::BadRequest("url must not be empty".into()));
        }
        Ok(Self {
            function,
            url,
            fields: Vec::new(),
            payload: None,
            attachments: Vec::new(),
            auth: None,
            location: None,
        })
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments.extend(attachments);
        self
    }

    pub fn auth(mut self, credentials: Credentials) -> Self {
        self.auth = Some(credentials);
        self
    }

    pub fn location(mut self, fix: GeoFix) -> Self {
        self.location = Some(fix);
        self
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Render the transport-ready multipart form.
    ///
    /// Field layout, in order:
    /// - `app_uniq`, `app_pwd`, `device_uniq` — always;
    /// - `post_data` — JSON-encoded structured payload, empty string if none;
    /// - one part per flat field;
    /// - `cb_auth_user` / `cb_auth_password` — only when credentials are set;
    /// - `location_data` — JSON `{lat, lng, alt}` with stringified values;
    ///   the backend reads a zero latitude as "no fix", so that case omits
    ///   the field entirely;
    /// - `file_0`, `file_1`, … — one binary part per attachment, identified
    ///   positionally (the file name rides along as part metadata).
    pub fn to_form(&self, identity: &AppIdentity) -> Result<FormData> {
        let mut form = FormData::default();
        form.text("app_uniq", identity.app_uniq.clone());
        form.text("app_pwd", identity.app_secret.clone());
        form.text("device_uniq", identity.device_id.clone());

        let post_data = match &self.payload {
            Some(value) => payload::encode(value)?,
            None => String::new(),
        };
        form.text("post_data", post_data);

        for (name, value) in &self.fields {
            form.text(name, value.clone());
        }

        if let Some(auth) = &self.auth {
            form.text("cb_auth_user", auth.username.clone());
            form.text("cb_auth_password", auth.password.clone());
        }

        if let Some(fix) = &self.location {
            if fix.latitude != 0.0 {
                let body = serde_json::json!({
                    "lat": fix.latitude.to_string(),
                    "lng": fix.longitude.to_string(),
                    "alt": fix.altitude.to_string(),
                });
                form.text("location_data", payload::encode(&body)?);
            }
        }

        for (index, attachment) in self.attachments.iter().enumerate() {
            form.file(
                format!("file_{index}"),
                attachment.file_name.clone(),
                attachment.data.clone(),
            );
        }

        Ok(form)
    }
}
