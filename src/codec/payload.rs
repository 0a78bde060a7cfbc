//! Payload encode/decode functions

use bytes::Bytes;
use serde_json::{Map, Value};

use super::DecodeError;

/// Field carried by `led` bodies
pub const LED_FIELD: &str = "led";

/// Encode a single integer field as a JSON object
///
/// The result is at most `max_len` bytes long; anything past that is
/// silently dropped.
pub fn encode(field: &str, value: i64, max_len: usize) -> Bytes {
    let mut object = Map::with_capacity(1);
    object.insert(field.to_owned(), Value::from(value));
    let text = Value::Object(object).to_string();

    truncate(Bytes::from(text), max_len)
}

/// Cut a body down to `max_len` bytes
pub fn truncate(mut body: Bytes, max_len: usize) -> Bytes {
    if body.len() > max_len {
        tracing::trace!(len = body.len(), max_len, "Truncating response body");
        body.truncate(max_len);
    }
    body
}

/// Extract the integer `led` field from a request body
pub fn decode_led(bytes: &[u8]) -> Result<i64, DecodeError> {
    decode_field(bytes, LED_FIELD)
}

/// Extract an integer field from a JSON object body
///
/// Other fields in the object are ignored.
pub fn decode_field(bytes: &[u8], field: &'static str) -> Result<i64, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let value: Value = serde_json::from_slice(bytes)?;
    let object = value.as_object().ok_or(DecodeError::NotAnObject)?;

    object
        .get(field)
        .ok_or(DecodeError::MissingField(field))?
        .as_i64()
        .ok_or(DecodeError::NotAnInteger(field))
}
