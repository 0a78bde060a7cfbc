//! Tests for the payload codec
//!
//! These tests verify:
//! - One-field JSON encoding for reads
//! - Silent truncation at the length limit
//! - `led` extraction and every rejection path

use coap_gpio::codec::{decode_field, decode_led, encode, truncate, DecodeError};

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_encode_button_levels() {
    assert_eq!(&encode("button", 0, 255)[..], br#"{"button":0}"#);
    assert_eq!(&encode("button", 1, 255)[..], br#"{"button":1}"#);
}

#[test]
fn test_encode_led_any_integer() {
    assert_eq!(&encode("led", 42, 255)[..], br#"{"led":42}"#);
    assert_eq!(&encode("led", -7, 255)[..], br#"{"led":-7}"#);
}

#[test]
fn test_encode_exact_limit_not_truncated() {
    let full = encode("led", 1, 255);
    let exact = encode("led", 1, full.len());
    assert_eq!(full, exact);
}

#[test]
fn test_encode_truncates_silently() {
    let body = encode("led", 12345, 5);
    assert_eq!(&body[..], br#"{"led"#);
}

#[test]
fn test_truncate_short_body_untouched() {
    let body = truncate(bytes::Bytes::from_static(b"Hello World!"), 255);
    assert_eq!(&body[..], b"Hello World!");
}

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_decode_led_values() {
    assert_eq!(decode_led(br#"{"led": 0}"#).unwrap(), 0);
    assert_eq!(decode_led(br#"{"led": 1}"#).unwrap(), 1);
    assert_eq!(decode_led(br#"{"led": 255}"#).unwrap(), 255);
    assert_eq!(decode_led(br#"{"led": -3}"#).unwrap(), -3);
}

#[test]
fn test_decode_ignores_extra_fields() {
    assert_eq!(decode_led(br#"{"color": "red", "led": 1}"#).unwrap(), 1);
}

#[test]
fn test_decode_accepts_own_encoding() {
    let body = encode("led", 9, 255);
    assert_eq!(decode_led(&body).unwrap(), 9);
}

#[test]
fn test_decode_empty_body() {
    assert!(matches!(decode_led(b""), Err(DecodeError::Empty)));
}

#[test]
fn test_decode_not_json() {
    assert!(matches!(decode_led(b"not json"), Err(DecodeError::Malformed(_))));
}

#[test]
fn test_decode_truncated_json() {
    assert!(matches!(decode_led(br#"{"led": 1"#), Err(DecodeError::Malformed(_))));
}

#[test]
fn test_decode_missing_field() {
    assert!(matches!(
        decode_led(b"{}"),
        Err(DecodeError::MissingField("led"))
    ));
}

#[test]
fn test_decode_not_an_object() {
    assert!(matches!(decode_led(b"[1]"), Err(DecodeError::NotAnObject)));
    assert!(matches!(decode_led(b"1"), Err(DecodeError::NotAnObject)));
}

#[test]
fn test_decode_non_integer_field() {
    let bodies: [&[u8]; 4] = [
        br#"{"led": "1"}"#,
        br#"{"led": true}"#,
        br#"{"led": 1.5}"#,
        br#"{"led": null}"#,
    ];
    for body in bodies {
        assert!(
            matches!(decode_led(body), Err(DecodeError::NotAnInteger("led"))),
            "body {:?}",
            String::from_utf8_lossy(body)
        );
    }
}

#[test]
fn test_decode_other_field() {
    assert_eq!(decode_field(br#"{"button": 1}"#, "button").unwrap(), 1);
    assert!(matches!(
        decode_field(br#"{"led": 1}"#, "button"),
        Err(DecodeError::MissingField("button"))
    ));
}
