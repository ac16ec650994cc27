//! Response envelope decoding.
//!
//! The backend nests every JSON reply under a top-level key equal to the
//! request's function identifier:
//!
//! ```json
//! { "<function>": { "status": "OK", "message": <any json value> } }
//! ```
//!
//! The HTTP status arrives out of band, as a classic status-line string in a
//! header literally named `STATUS`. Decoding is panic-free: malformed bodies
//! surface as `StratoError::Decode`, a body without the function's entry as
//! `StratoError::AmbiguousEnvelope`.

use crate::error::{Result, StratoError};
use crate::payload::{self, Payload};

/// Normalized result of one API exchange.
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
    /// Function identifier echoed from the request.
    pub function: String,
    /// Whether the server reported `status == "OK"`.
    pub success: bool,
    /// HTTP status from the `STATUS` header, 0 when unparseable.
    pub http_status: u16,
    /// Decoded `message` value (may be any JSON value, including null).
    pub payload: Payload,
    /// Canonical re-serialization of `payload`.
    pub payload_text: String,
    /// Scalar server message on failure, when one was supplied.
    pub error_message: Option<String>,
}

/// Parse a `<proto> <code> <reason>` status line into the integer code.
///
/// Malformed input yields 0 instead of an error: the body may still decode.
pub fn parse_status_line(line: &str) -> u16 {
    let mut parts = line.split_whitespace();
    let _proto = parts.next();
    let code = parts.next().and_then(|c| c.parse().ok()).unwrap_or(0);
    if code == 0 {
        tracing::debug!(line, "unparseable status line, http status defaults to 0");
    }
    code
}

/// Decode a raw response body against the envelope convention.
pub fn decode(body: &str, status_line: Option<&str>, function: &str) -> Result<ResponseEnvelope> {
    let http_status = status_line.map(parse_status_line).unwrap_or(0);

    let root = payload::decode(body)?;
    let Payload::Object(root) = root else {
        return Err(StratoError::Decode(
            "envelope body is not a json object".into(),
        ));
    };

    let entry = root
        .get(function)
        .ok_or_else(|| StratoError::AmbiguousEnvelope {
            function: function.to_string(),
        })?;
    let Payload::Object(entry) = entry else {
        return Err(StratoError::Decode(format!(
            "envelope entry for {function} is not an object"
        )));
    };

    let success = entry.get("status").and_then(Payload::as_str) == Some("OK");
    let message = entry.get("message").cloned().unwrap_or(Payload::Null);
    let payload_text = payload::encode(&message)?;
    let error_message = if success {
        None
    } else {
        payload::as_plain_string(&message)
    };

    Ok(ResponseEnvelope {
        function: function.to_string(),
        success,
        http_status,
        payload: message,
        payload_text,
        error_message,
    })
}
