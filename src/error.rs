//! Error types for coap-gpio
//!
//! Provides a unified error type for everything outside the payload codec.
//! Body decode failures have their own type, see [`crate::codec::DecodeError`].

use thiserror::Error;

/// Result type alias using CoapGpioError
pub type Result<T> = std::result::Result<T, CoapGpioError>;

/// Unified error type for coap-gpio operations
#[derive(Debug, Error)]
pub enum CoapGpioError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Hardware Errors
    // -------------------------------------------------------------------------
    #[error("GPIO error: {0}")]
    Gpio(String),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
