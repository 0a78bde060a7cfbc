//! Simulated pins
//!
//! In-memory GPIO backend. Clones share the same pin bank, so a test can
//! keep one handle to press the button while the server owns another.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;

use super::Gpio;

/// Mode a simulated pin was configured with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    Output,
    InputPullDown,
}

#[derive(Debug, Default)]
struct PinBank {
    levels: HashMap<u8, bool>,
    modes: HashMap<u8, PinMode>,
    writes: u64,
}

/// Shared in-memory pin bank
#[derive(Debug, Clone, Default)]
pub struct SimulatedGpio {
    bank: Arc<Mutex<PinBank>>,
}

impl SimulatedGpio {
    /// Create a bank with every pin low and unconfigured
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the level seen on an input pin (pressing/releasing the button)
    pub fn set_input(&self, pin: u8, high: bool) {
        self.bank.lock().levels.insert(pin, high);
    }

    /// Current level of a pin; unset pins read low
    pub fn level(&self, pin: u8) -> bool {
        self.bank.lock().levels.get(&pin).copied().unwrap_or(false)
    }

    /// Mode set by `setup`, if any
    pub fn mode(&self, pin: u8) -> Option<PinMode> {
        self.bank.lock().modes.get(&pin).copied()
    }

    /// Number of writes issued to any pin
    pub fn write_count(&self) -> u64 {
        self.bank.lock().writes
    }
}

impl Gpio for SimulatedGpio {
    fn setup(&mut self, output: u8, input: u8) -> Result<()> {
        let mut bank = self.bank.lock();
        bank.modes.insert(output, PinMode::Output);
        bank.modes.insert(input, PinMode::InputPullDown);
        // pull-down: released button reads low
        bank.levels.entry(input).or_insert(false);
        tracing::debug!(output, input, "Simulated GPIO configured");
        Ok(())
    }

    fn write(&mut self, pin: u8, high: bool) {
        let mut bank = self.bank.lock();
        bank.levels.insert(pin, high);
        bank.writes += 1;
    }

    fn read(&self, pin: u8) -> bool {
        self.level(pin)
    }
}
