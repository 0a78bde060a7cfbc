//! Device Module
//!
//! The hardware context shared by every resource handler.
//!
//! ## Responsibilities
//! - Own the GPIO backend and the LedState
//! - Configure the pins once at startup
//! - Keep the LED pin equal to LedState after every write
//!
//! There is exactly one `Device` per server. It is owned by the
//! dispatcher and lent to handlers as `&mut`, so LedState needs no lock:
//! requests are handled one at a time.

use crate::config::{Config, LedValuePolicy};
use crate::error::Result;
use crate::hardware::Gpio;

/// LED + button behind a GPIO backend
pub struct Device<G> {
    gpio: G,
    led_pin: u8,
    button_pin: u8,

    /// Last commanded LED value, not range-checked under PassThrough
    led_state: i64,

    led_value_policy: LedValuePolicy,
    max_payload_len: usize,
}

impl<G: Gpio> Device<G> {
    /// Configure the pins and drive the LED to its initial state
    ///
    /// On startup:
    /// 1. Validate the config
    /// 2. Set pin modes (output LED, pulled-down button)
    /// 3. Mirror the initial LedState to the LED pin
    pub fn open(config: &Config, mut gpio: G) -> Result<Self> {
        config.validate()?;
        gpio.setup(config.led_pin, config.button_pin)?;

        let led_state = config.led_value_policy.apply(config.initial_led_state);
        gpio.write(config.led_pin, led_state != 0);

        Ok(Self {
            gpio,
            led_pin: config.led_pin,
            button_pin: config.button_pin,
            led_state,
            led_value_policy: config.led_value_policy,
            max_payload_len: config.max_payload_len,
        })
    }

    /// Last value written to the LED
    pub fn led_state(&self) -> i64 {
        self.led_state
    }

    /// Apply the value policy, drive the pin and remember the value
    ///
    /// Returns the value actually stored.
    pub fn set_led(&mut self, value: i64) -> i64 {
        let value = self.led_value_policy.apply(value);
        self.gpio.write(self.led_pin, value != 0);
        self.led_state = value;
        value
    }

    /// Sample the button. Not cached, not debounced.
    pub fn button(&self) -> bool {
        self.gpio.read(self.button_pin)
    }

    /// Limit applied to generated response bodies
    pub fn max_payload_len(&self) -> usize {
        self.max_payload_len
    }
}
