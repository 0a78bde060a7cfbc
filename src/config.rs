//! Configuration for coap-gpio
//!
//! Centralized configuration with sensible defaults.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use crate::error::{CoapGpioError, Result};

/// Standard CoAP port (RFC 7252 §6.1)
pub const DEFAULT_PORT: u16 = 5683;

/// Upper bound for generated response bodies
pub const DEFAULT_MAX_PAYLOAD_LEN: usize = 255;

/// BCM pin driving the LED anode
pub const DEFAULT_LED_PIN: u8 = 17;

/// BCM pin wired to the button (other leg on 3.3V)
pub const DEFAULT_BUTTON_PIN: u8 = 18;

/// Main configuration for a coap-gpio server
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// UDP bind address
    pub bind_addr: SocketAddr,

    // -------------------------------------------------------------------------
    // Hardware Configuration
    // -------------------------------------------------------------------------
    /// Output pin for the LED
    pub led_pin: u8,

    /// Input pin for the button (pull-down enabled at setup)
    pub button_pin: u8,

    /// LedState at startup, mirrored to the pin during setup
    pub initial_led_state: i64,

    // -------------------------------------------------------------------------
    // Resource Configuration
    // -------------------------------------------------------------------------
    /// Max length of an encoded response body. Longer encodings are
    /// truncated to this length without any error.
    pub max_payload_len: usize,

    /// What to do with `led` values outside {0, 1}
    pub led_value_policy: LedValuePolicy,
}

/// Treatment of integers written to the `led` resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedValuePolicy {
    /// Store any integer as-is; the pin is high for every non-zero value
    #[default]
    PassThrough,

    /// Normalize every non-zero value to 1 before storing it
    Clamp,
}

impl LedValuePolicy {
    /// Apply the policy to a decoded value
    pub fn apply(self, value: i64) -> i64 {
        match self {
            LedValuePolicy::PassThrough => value,
            LedValuePolicy::Clamp => i64::from(value != 0),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            led_pin: DEFAULT_LED_PIN,
            button_pin: DEFAULT_BUTTON_PIN,
            initial_led_state: 0,
            max_payload_len: DEFAULT_MAX_PAYLOAD_LEN,
            led_value_policy: LedValuePolicy::PassThrough,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config for values that cannot work
    pub fn validate(&self) -> Result<()> {
        if self.led_pin == self.button_pin {
            return Err(CoapGpioError::Config(format!(
                "LED and button share pin {}",
                self.led_pin
            )));
        }
        if self.max_payload_len == 0 {
            return Err(CoapGpioError::Config(
                "max payload length must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the UDP bind address
    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.config.bind_addr = addr;
        self
    }

    /// Keep the bind IP, change only the port
    pub fn port(mut self, port: u16) -> Self {
        self.config.bind_addr.set_port(port);
        self
    }

    /// Set the LED output pin
    pub fn led_pin(mut self, pin: u8) -> Self {
        self.config.led_pin = pin;
        self
    }

    /// Set the button input pin
    pub fn button_pin(mut self, pin: u8) -> Self {
        self.config.button_pin = pin;
        self
    }

    /// Set the LedState used at startup
    pub fn initial_led_state(mut self, value: i64) -> Self {
        self.config.initial_led_state = value;
        self
    }

    /// Set the response body length limit (in bytes)
    pub fn max_payload_len(mut self, len: usize) -> Self {
        self.config.max_payload_len = len;
        self
    }

    /// Set the policy for out-of-range `led` writes
    pub fn led_value_policy(mut self, policy: LedValuePolicy) -> Self {
        self.config.led_value_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
