//! Payload Codec
//!
//! Conversion between hardware values and the JSON bodies carried in
//! CoAP payloads.
//!
//! ## Body Format
//! One field per message:
//! ```text
//! {"button":0}      GET /button
//! {"led":1}         GET /led, and the body of POST/PUT /led
//! ```
//!
//! Encoding is bounded by a caller-supplied maximum length. An encoding
//! longer than that is cut at the limit without an error, which can leave
//! an unterminated object on the wire.

mod payload;

pub use payload::{decode_field, decode_led, encode, truncate, LED_FIELD};

use thiserror::Error;

/// Why a request body could not be turned into a value
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("empty body")]
    Empty,

    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("body is not a JSON object")]
    NotAnObject,

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` is not an integer")]
    NotAnInteger(&'static str),
}
