//! Hardware Module
//!
//! Access to the two digital pins behind the resources.
//!
//! ## Responsibilities
//! - One-time pin mode configuration (output for the LED, pulled-down
//!   input for the button)
//! - Direct, synchronous level reads and writes
//!
//! ## Backends
//! - `SimulatedGpio`: in-memory pins, used by tests and the `sim` backend
//! - `RpiGpio`: Raspberry Pi pins through rppal (`rpi` feature)
//!
//! Reads and writes are infallible: once `setup` succeeded the pins are
//! assumed to stay available for the life of the process.

mod simulated;
#[cfg(feature = "rpi")]
mod rpi;

pub use simulated::{PinMode, SimulatedGpio};
#[cfg(feature = "rpi")]
pub use rpi::RpiGpio;

use crate::error::Result;

/// Digital pin access used by the resource handlers
pub trait Gpio {
    /// Configure `output` as a push-pull output and `input` as an input
    /// with the internal pull-down enabled, so it reads low when released
    fn setup(&mut self, output: u8, input: u8) -> Result<()>;

    /// Drive an output pin high (`true`) or low (`false`)
    fn write(&mut self, pin: u8, high: bool);

    /// Sample the current level of a pin
    fn read(&self, pin: u8) -> bool;
}

impl<G: Gpio + ?Sized> Gpio for Box<G> {
    fn setup(&mut self, output: u8, input: u8) -> Result<()> {
        (**self).setup(output, input)
    }

    fn write(&mut self, pin: u8, high: bool) {
        (**self).write(pin, high)
    }

    fn read(&self, pin: u8) -> bool {
        (**self).read(pin)
    }
}
