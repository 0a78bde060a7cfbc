//! Resource handlers
//!
//! One function per (resource, method). Handlers never block and never
//! fail with an error; a rejected request is just a BadRequest response.

use bytes::Bytes;

use crate::codec::{self, LED_FIELD};
use crate::device::Device;
use crate::hardware::Gpio;

use super::{Request, Response};

/// Body of `GET /hello`
pub const HELLO_TEXT: &str = "Hello World!";

/// Field carried by `GET /button` bodies
pub const BUTTON_FIELD: &str = "button";

/// GET /hello
///
/// Always the full literal; the body limit only applies to encoded bodies.
pub fn hello<G: Gpio>(_device: &mut Device<G>, _request: &Request) -> Response {
    Response::content(Bytes::from_static(HELLO_TEXT.as_bytes()))
}

/// GET /button
pub fn button_get<G: Gpio>(device: &mut Device<G>, _request: &Request) -> Response {
    let pressed = device.button();
    Response::content(codec::encode(BUTTON_FIELD, i64::from(pressed), device.max_payload_len()))
}

/// GET /led
pub fn led_get<G: Gpio>(device: &mut Device<G>, _request: &Request) -> Response {
    Response::content(codec::encode(LED_FIELD, device.led_state(), device.max_payload_len()))
}

/// POST or PUT /led
///
/// The body is decoded before anything is touched, so a rejected write
/// leaves both LedState and the pin as they were.
pub fn led_write<G: Gpio>(device: &mut Device<G>, request: &Request) -> Response {
    let body = request.body.as_deref().unwrap_or_default();
    tracing::debug!(body = %String::from_utf8_lossy(body), "LED write request");

    match codec::decode_led(body) {
        Ok(value) => {
            let stored = device.set_led(value);
            tracing::info!(requested = value, stored, "LED state changed");
            Response::changed()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Rejecting LED write");
            Response::bad_request()
        }
    }
}
