//! Payload model round-trip tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde::Serialize;
use serde_json::json;

use strato_core::error::ErrorKind;
use strato_core::payload::{self, Documents};

#[test]
fn roundtrip_nested_tree() {
    let tree = json!({
        "title": "inventory",
        "count": 42,
        "ratio": 0.5,
        "active": true,
        "missing": null,
        "tags": ["a", "b", ["nested", {"deep": [1, 2, 3]}]],
        "owner": { "name": "kim", "meta": { "roles": [] } }
    });
    let text = payload::encode(&tree).unwrap();
    assert_eq!(payload::decode(&text).unwrap(), tree);
}

#[test]
fn roundtrip_bare_scalars() {
    // servers sometimes return a bare scalar as "message"; the model must
    // not force a container around it
    for text in [r#""ok""#, "42", "-7", "true", "false", "null", "1.25"] {
        let value = payload::decode(text).unwrap();
        assert_eq!(payload::encode(&value).unwrap(), text);
    }
}

#[test]
fn integers_keep_53_bit_precision() {
    let big: i64 = 1 << 53;
    let text = payload::encode(&json!({ "n": big })).unwrap();
    let value = payload::decode(&text).unwrap();
    assert_eq!(value["n"].as_i64(), Some(big));
}

#[test]
fn integral_numbers_encode_without_decimal_point() {
    assert_eq!(payload::encode(&json!(5)).unwrap(), "5");
    assert_eq!(payload::encode(&json!({ "n": 100 })).unwrap(), r#"{"n":100}"#);
}

#[test]
fn record_types_encode_with_field_names() {
    #[derive(Serialize)]
    struct Reading {
        sensor: String,
        celsius: i32,
    }
    let text = payload::encode(&Reading {
        sensor: "t1".into(),
        celsius: 21,
    })
    .unwrap();
    assert_eq!(text, r#"{"sensor":"t1","celsius":21}"#);
}

#[test]
fn malformed_text_fails_with_decode() {
    let err = payload::decode("{\"open\":").expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn documents_batch_forms() {
    let one = Documents::One(json!({"a": 1}));
    assert_eq!(one.into_batch(), vec![json!({"a": 1})]);

    let many = Documents::Many(vec![json!({"a": 1}), json!({"b": 2})]);
    assert_eq!(many.into_batch().len(), 2);
}

#[test]
fn plain_string_rendering() {
    assert_eq!(payload::as_plain_string(&json!("abc")).as_deref(), Some("abc"));
    assert_eq!(payload::as_plain_string(&json!(12)).as_deref(), Some("12"));
    assert_eq!(payload::as_plain_string(&json!(true)).as_deref(), Some("true"));
    assert!(payload::as_plain_string(&json!({"x": 1})).is_none());
    assert!(payload::as_plain_string(&json!(null)).is_none());
}
