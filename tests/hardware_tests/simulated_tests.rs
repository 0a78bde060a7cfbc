//! Tests for the simulated GPIO backend and the Device context

use coap_gpio::config::{Config, LedValuePolicy};
use coap_gpio::hardware::{Gpio, PinMode, SimulatedGpio};
use coap_gpio::{CoapGpioError, Device};

// =============================================================================
// SimulatedGpio Tests
// =============================================================================

#[test]
fn test_setup_sets_modes() {
    let mut gpio = SimulatedGpio::new();
    gpio.setup(17, 18).unwrap();

    assert_eq!(gpio.mode(17), Some(PinMode::Output));
    assert_eq!(gpio.mode(18), Some(PinMode::InputPullDown));
    assert_eq!(gpio.mode(4), None);
}

#[test]
fn test_pulled_down_input_reads_low() {
    let mut gpio = SimulatedGpio::new();
    gpio.setup(17, 18).unwrap();
    assert!(!gpio.read(18));
}

#[test]
fn test_clones_share_pins() {
    let mut gpio = SimulatedGpio::new();
    let probe = gpio.clone();

    gpio.write(17, true);
    assert!(probe.level(17));

    probe.set_input(18, true);
    assert!(gpio.read(18));
    assert_eq!(probe.write_count(), 1);
}

// =============================================================================
// Device Tests
// =============================================================================

#[test]
fn test_open_mirrors_initial_state() {
    let gpio = SimulatedGpio::new();
    let config = Config::builder().initial_led_state(1).build();
    let device = Device::open(&config, gpio.clone()).unwrap();

    assert_eq!(device.led_state(), 1);
    assert!(gpio.level(config.led_pin));
}

#[test]
fn test_open_rejects_shared_pin() {
    let config = Config::builder().led_pin(5).button_pin(5).build();
    let result = Device::open(&config, SimulatedGpio::new());
    assert!(matches!(result, Err(CoapGpioError::Config(_))));
}

#[test]
fn test_set_led_pass_through() {
    let gpio = SimulatedGpio::new();
    let config = Config::default();
    let mut device = Device::open(&config, gpio.clone()).unwrap();

    assert_eq!(device.set_led(7), 7);
    assert_eq!(device.led_state(), 7);
    assert!(gpio.level(config.led_pin));

    assert_eq!(device.set_led(0), 0);
    assert!(!gpio.level(config.led_pin));
}

#[test]
fn test_set_led_clamped() {
    let gpio = SimulatedGpio::new();
    let config = Config::builder()
        .led_value_policy(LedValuePolicy::Clamp)
        .build();
    let mut device = Device::open(&config, gpio.clone()).unwrap();

    assert_eq!(device.set_led(-4), 1);
    assert_eq!(device.led_state(), 1);
    assert!(gpio.level(config.led_pin));
}

#[test]
fn test_button_not_cached() {
    let gpio = SimulatedGpio::new();
    let config = Config::default();
    let device = Device::open(&config, gpio.clone()).unwrap();

    assert!(!device.button());
    gpio.set_input(config.button_pin, true);
    assert!(device.button());
    assert!(device.button());
    gpio.set_input(config.button_pin, false);
    assert!(!device.button());
}
