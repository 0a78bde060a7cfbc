//! # coap-gpio
//!
//! A CoAP resource server for one LED and one push button:
//! - `/hello`:  GET returns `Hello World!`
//! - `/button`: GET returns the current button level
//! - `/led`:    GET returns the LED state, POST/PUT sets it
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  UDP Server (one socket)                     │
//! │              blocking receive, one datagram                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │           Dispatcher (Idle → Decoding → Dispatching)         │
//! │              coap-lite decode, registry lookup               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Handlers   │─────────►│    Codec    │
//!   │ (resources) │          │   (JSON)    │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │   Device    │
//!   │ LedState +  │
//!   │    GPIO     │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod hardware;
pub mod codec;
pub mod device;
pub mod resource;
pub mod protocol;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CoapGpioError, Result};
pub use config::Config;
pub use device::Device;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of coap-gpio
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
