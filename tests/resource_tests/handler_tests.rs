//! Tests for the resource handlers
//!
//! These tests verify:
//! - Read handlers produce Content with the expected bodies
//! - LED writes round-trip through LedState and the pin
//! - Rejected writes leave LedState and the pin untouched

use coap_gpio::config::{Config, LedValuePolicy};
use coap_gpio::hardware::SimulatedGpio;
use coap_gpio::resource::handlers::{self, HELLO_TEXT};
use coap_gpio::resource::{BodyFormat, Method, Outcome, Request};
use coap_gpio::Device;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_device(config: Config) -> (SimulatedGpio, Device<SimulatedGpio>) {
    let gpio = SimulatedGpio::new();
    let device = Device::open(&config, gpio.clone()).unwrap();
    (gpio, device)
}

fn led_write(device: &mut Device<SimulatedGpio>, body: &'static [u8]) -> Outcome {
    let request = Request::new(Method::Post, "led").with_body(body);
    handlers::led_write(device, &request).outcome
}

fn led_body(device: &mut Device<SimulatedGpio>) -> Vec<u8> {
    let response = handlers::led_get(device, &Request::new(Method::Get, "led"));
    assert_eq!(response.outcome, Outcome::Content);
    response.body.unwrap().to_vec()
}

// =============================================================================
// Read Handler Tests
// =============================================================================

#[test]
fn test_hello_constant() {
    let (_gpio, mut device) = setup_device(Config::default());

    for _ in 0..3 {
        let response = handlers::hello(&mut device, &Request::new(Method::Get, "hello"));
        assert_eq!(response.outcome, Outcome::Content);
        assert_eq!(response.body.as_deref(), Some(HELLO_TEXT.as_bytes()));
        assert_eq!(response.format, Some(BodyFormat::TextPlain));
    }
}

#[test]
fn test_hello_independent_of_led_writes() {
    let (_gpio, mut device) = setup_device(Config::default());
    led_write(&mut device, br#"{"led": 1}"#);

    let response = handlers::hello(&mut device, &Request::new(Method::Get, "hello"));
    assert_eq!(response.body.as_deref(), Some(&b"Hello World!"[..]));
}

#[test]
fn test_button_reflects_pin() {
    let config = Config::default();
    let (gpio, mut device) = setup_device(config.clone());
    let request = Request::new(Method::Get, "button");

    let first = handlers::button_get(&mut device, &request);
    let second = handlers::button_get(&mut device, &request);
    assert_eq!(first.body.as_deref(), Some(&br#"{"button":0}"#[..]));
    assert_eq!(first, second);

    gpio.set_input(config.button_pin, true);
    let pressed = handlers::button_get(&mut device, &request);
    assert_eq!(pressed.outcome, Outcome::Content);
    assert_eq!(pressed.body.as_deref(), Some(&br#"{"button":1}"#[..]));
}

#[test]
fn test_led_get_initial() {
    let (_gpio, mut device) = setup_device(Config::default());
    assert_eq!(led_body(&mut device), br#"{"led":0}"#);
}

#[test]
fn test_encoded_bodies_respect_limit() {
    let (_gpio, mut device) = setup_device(Config::builder().max_payload_len(4).build());
    assert_eq!(led_body(&mut device), br#"{"le"#);
}

#[test]
fn test_hello_ignores_body_limit() {
    let (_gpio, mut device) = setup_device(Config::builder().max_payload_len(5).build());

    let hello = handlers::hello(&mut device, &Request::new(Method::Get, "hello"));
    assert_eq!(hello.outcome, Outcome::Content);
    assert_eq!(hello.body.as_deref(), Some(&b"Hello World!"[..]));
}

// =============================================================================
// Write Handler Tests
// =============================================================================

#[test]
fn test_led_write_round_trip() {
    let config = Config::default();
    let (gpio, mut device) = setup_device(config.clone());

    assert_eq!(led_write(&mut device, br#"{"led": 1}"#), Outcome::Changed);
    assert_eq!(led_body(&mut device), br#"{"led":1}"#);
    assert!(gpio.level(config.led_pin));

    assert_eq!(led_write(&mut device, br#"{"led": 0}"#), Outcome::Changed);
    assert_eq!(led_body(&mut device), br#"{"led":0}"#);
    assert!(!gpio.level(config.led_pin));
}

#[test]
fn test_led_write_unclamped_value() {
    let config = Config::default();
    let (gpio, mut device) = setup_device(config.clone());

    assert_eq!(led_write(&mut device, br#"{"led": 200}"#), Outcome::Changed);
    assert_eq!(device.led_state(), 200);
    assert_eq!(led_body(&mut device), br#"{"led":200}"#);
    assert!(gpio.level(config.led_pin));
}

#[test]
fn test_led_write_clamped_value() {
    let config = Config::builder()
        .led_value_policy(LedValuePolicy::Clamp)
        .build();
    let (_gpio, mut device) = setup_device(config);

    assert_eq!(led_write(&mut device, br#"{"led": 200}"#), Outcome::Changed);
    assert_eq!(led_body(&mut device), br#"{"led":1}"#);
}

#[test]
fn test_led_write_changed_has_no_body() {
    let (_gpio, mut device) = setup_device(Config::default());
    let request = Request::new(Method::Put, "led").with_body(&br#"{"led": 1}"#[..]);

    let response = handlers::led_write(&mut device, &request);
    assert_eq!(response.outcome, Outcome::Changed);
    assert!(response.body.is_none());
}

#[test]
fn test_led_write_rejections_leave_state() {
    let config = Config::default();
    let (gpio, mut device) = setup_device(config.clone());
    led_write(&mut device, br#"{"led": 1}"#);
    let writes = gpio.write_count();

    let bad: [&'static [u8]; 4] = [b"not json", b"{}", br#"{"led": "on"}"#, b""];
    for body in bad {
        assert_eq!(led_write(&mut device, body), Outcome::BadRequest);
        assert_eq!(device.led_state(), 1);
        assert!(gpio.level(config.led_pin));
    }
    assert_eq!(gpio.write_count(), writes);
}

#[test]
fn test_led_write_without_body() {
    let (_gpio, mut device) = setup_device(Config::default());
    let response = handlers::led_write(&mut device, &Request::new(Method::Post, "led"));

    assert_eq!(response.outcome, Outcome::BadRequest);
    assert!(response.body.is_none());
}

#[test]
fn test_last_write_wins() {
    let (_gpio, mut device) = setup_device(Config::default());

    led_write(&mut device, br#"{"led": 3}"#);
    led_write(&mut device, br#"{"led": 5}"#);
    assert_eq!(device.led_state(), 5);
}
