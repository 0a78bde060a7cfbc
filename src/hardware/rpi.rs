//! Raspberry Pi backend
//!
//! Wiring (BCM numbering, defaults from `Config`):
//! ```text
//! LED anode  ---------------------------> GPIO17
//! LED cathode ----> 330 Ohm ------------> GND
//! Button pin 1 -------------------------> GPIO18 (internal pull-down)
//! Button pin 2 -------------------------> 3.3V
//! ```

use std::collections::HashMap;

use rppal::gpio::{Gpio as RppalGpio, InputPin, OutputPin};

use crate::error::{CoapGpioError, Result};

use super::Gpio;

/// GPIO access through `/dev/gpiomem`
pub struct RpiGpio {
    gpio: RppalGpio,
    outputs: HashMap<u8, OutputPin>,
    inputs: HashMap<u8, InputPin>,
}

impl RpiGpio {
    /// Open the GPIO peripheral
    pub fn open() -> Result<Self> {
        let gpio = RppalGpio::new().map_err(|e| CoapGpioError::Gpio(e.to_string()))?;
        Ok(Self {
            gpio,
            outputs: HashMap::new(),
            inputs: HashMap::new(),
        })
    }
}

impl Gpio for RpiGpio {
    fn setup(&mut self, output: u8, input: u8) -> Result<()> {
        let out_pin = self
            .gpio
            .get(output)
            .map_err(|e| CoapGpioError::Gpio(format!("pin {}: {}", output, e)))?
            .into_output_low();
        let in_pin = self
            .gpio
            .get(input)
            .map_err(|e| CoapGpioError::Gpio(format!("pin {}: {}", input, e)))?
            .into_input_pulldown();

        self.outputs.insert(output, out_pin);
        self.inputs.insert(input, in_pin);
        tracing::info!(output, input, "GPIO pins configured");
        Ok(())
    }

    fn write(&mut self, pin: u8, high: bool) {
        match self.outputs.get_mut(&pin) {
            Some(out) if high => out.set_high(),
            Some(out) => out.set_low(),
            None => tracing::warn!(pin, "Write to pin not configured as output"),
        }
    }

    fn read(&self, pin: u8) -> bool {
        match self.inputs.get(&pin) {
            Some(input) => input.is_high(),
            None => {
                tracing::warn!(pin, "Read from pin not configured as input");
                false
            }
        }
    }
}
