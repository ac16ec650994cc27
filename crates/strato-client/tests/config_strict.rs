#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use strato_client::config;
use strato_core::error::ErrorKind;

#[test]
fn deny_unknown_fields() {
    let bad = r#"
app_code: "app1"
app_uniq: "uniq-1"
app_secret: "D41D8CD98F00B204E9800998ECF8427E"
device_id: "device-9"
api_hostt: "api.example.com" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::BadRequest);
}

#[test]
fn ok_minimal_config_with_defaults() {
    let ok = r#"
app_code: "app1"
app_uniq: "uniq-1"
app_secret: "D41D8CD98F00B204E9800998ECF8427E"
device_id: "device-9"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.app_code, "app1");
    assert!(cfg.use_tls);
    assert_eq!(cfg.default_log_category, "DEFAULT");
    assert_eq!(cfg.base_url(), "https://api.strato.dev");
}

#[test]
fn empty_identity_fields_fail_validation() {
    let bad = r#"
app_code: ""
app_uniq: "uniq-1"
app_secret: "x"
device_id: "device-9"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::BadRequest);
}

#[test]
fn plain_http_base_url() {
    let cfg = config::load_from_str(
        r#"
app_code: "app1"
app_uniq: "uniq-1"
app_secret: "x"
device_id: "device-9"
api_host: "localhost:8080"
use_tls: false
"#,
    )
    .expect("must parse");
    assert_eq!(cfg.base_url(), "http://localhost:8080");
}
