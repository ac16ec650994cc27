//! Envelope decode vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use strato_core::envelope::{self, parse_status_line};
use strato_core::error::{ErrorKind, StratoError};

fn load(name: &str) -> String {
    fs::read_to_string(format!("tests/vectors/{name}")).unwrap()
}

#[test]
fn decode_ok_envelope() {
    let body = load("envelope_ok.json");
    let env = envelope::decode(&body, Some("HTTP/1.1 200 OK"), "log").unwrap();
    assert_eq!(env.function, "log");
    assert!(env.success);
    assert_eq!(env.http_status, 200);
    assert_eq!(env.payload["ok"], true);
    assert_eq!(env.payload_text, r#"{"ok":true}"#);
    assert!(env.error_message.is_none());
}

#[test]
fn decode_application_error() {
    let body = load("envelope_error.json");
    let env = envelope::decode(&body, Some("HTTP/1.1 400 Bad Request"), "log").unwrap();
    assert!(!env.success);
    assert_eq!(env.http_status, 400);
    assert_eq!(env.error_message.as_deref(), Some("log line rejected"));
}

#[test]
fn missing_function_key_is_ambiguous() {
    let body = load("envelope_wrong_key.json");
    let err = envelope::decode(&body, None, "log").expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::AmbiguousEnvelope);
    match err {
        StratoError::AmbiguousEnvelope { function } => assert_eq!(function, "log"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn absent_message_decodes_as_null() {
    let body = load("envelope_no_message.json");
    let env = envelope::decode(&body, None, "data").unwrap();
    assert!(env.success);
    assert!(env.payload.is_null());
    assert_eq!(env.payload_text, "null");
}

#[test]
fn scalar_body_is_a_decode_error() {
    let body = load("scalar_body.json");
    let err = envelope::decode(&body, Some("HTTP/1.1 200 OK"), "log").expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn malformed_body_is_a_decode_error() {
    let err = envelope::decode("{not json", None, "log").expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn non_object_entry_is_a_decode_error() {
    let err =
        envelope::decode(r#"{"log": "OK"}"#, None, "log").expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn non_string_status_is_failure() {
    let env = envelope::decode(r#"{"log":{"status":1,"message":null}}"#, None, "log").unwrap();
    assert!(!env.success);
}

#[test]
fn status_line_parses_code() {
    assert_eq!(parse_status_line("HTTP/1.1 201 Created"), 201);
    assert_eq!(parse_status_line("HTTP/1.0 404 Not Found"), 404);
}

#[test]
fn malformed_status_line_defaults_to_zero() {
    assert_eq!(parse_status_line("garbage"), 0);
    assert_eq!(parse_status_line(""), 0);
    assert_eq!(parse_status_line("HTTP/1.1 abc OK"), 0);

    // and it never aborts payload decoding
    let body = load("envelope_ok.json");
    let env = envelope::decode(&body, Some("garbage"), "log").unwrap();
    assert_eq!(env.http_status, 0);
    assert!(env.success);
}
