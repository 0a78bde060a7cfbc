//! Request dispatcher
//!
//! The socket-free half of the event loop, written as an explicit state
//! machine so it can be driven with synthetic datagrams.
//!
//! ```text
//!            datagram_ready            decoded OK
//!   ┌──────┐ ─────────────► ┌──────────┐ ─────────► ┌─────────────┐
//!   │ Idle │                │ Decoding │            │ Dispatching │
//!   └──────┘ ◄───────────── └──────────┘            └──────┬──────┘
//!      ▲       parse error (dropped)                        │
//!      └────────────────────────────────────────────────────┘
//!                      reply built (any outcome)
//! ```

use std::net::SocketAddr;

use crate::device::Device;
use crate::hardware::Gpio;
use crate::protocol::{self, Decoded, Exchange};
use crate::resource::{Lookup, Registry};

/// Where the dispatcher is in handling the current datagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    /// Waiting for the next datagram
    Idle,

    /// A datagram was handed over and parsed
    Decoding,

    /// A handler is running or its reply is being encoded
    Dispatching,
}

/// Routes decoded requests to resource handlers
///
/// Owns the `Device`, so every handler invocation gets exclusive access
/// and two requests can never interleave.
pub struct Dispatcher<G> {
    device: Device<G>,
    registry: Registry<G>,
    state: DispatchState,
}

impl<G: Gpio> Dispatcher<G> {
    /// Create a dispatcher over the standard resources
    pub fn new(device: Device<G>) -> Self {
        Self {
            device,
            registry: Registry::standard(),
            state: DispatchState::Idle,
        }
    }

    /// Current state
    pub fn state(&self) -> DispatchState {
        self.state
    }

    /// The device behind the resources
    pub fn device(&self) -> &Device<G> {
        &self.device
    }

    /// Idle → Decoding
    ///
    /// Returns `None` (and goes back to Idle) when the datagram is not
    /// something we answer. Nothing is sent for those.
    pub fn datagram_ready(&mut self, bytes: &[u8], peer: SocketAddr) -> Option<Decoded> {
        self.state = DispatchState::Decoding;
        tracing::trace!("Datagram from {}: {} bytes", peer, bytes.len());

        match protocol::decode_datagram(bytes, peer) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::debug!("Dropping datagram from {}: {}", peer, e);
                self.state = DispatchState::Idle;
                None
            }
        }
    }

    /// Decoding → Dispatching → Idle
    ///
    /// Produces the reply datagram. The state returns to Idle whatever
    /// the outcome.
    pub fn dispatch(&mut self, decoded: Decoded) -> Option<Vec<u8>> {
        self.state = DispatchState::Dispatching;

        let reply = match decoded {
            Decoded::Ping(reset) => {
                tracing::debug!("CoAP ping, answering with RST");
                protocol::encode_packet(&reset)
            }
            Decoded::Request(exchange) => self.route(exchange),
        };

        self.state = DispatchState::Idle;

        match reply {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::warn!("Failed to encode reply: {}", e);
                None
            }
        }
    }

    /// Run one datagram through the whole state machine
    pub fn handle_datagram(&mut self, bytes: &[u8], peer: SocketAddr) -> Option<Vec<u8>> {
        let decoded = self.datagram_ready(bytes, peer)?;
        self.dispatch(decoded)
    }

    fn route(&mut self, exchange: Exchange) -> crate::Result<Vec<u8>> {
        let request = exchange.request();
        tracing::debug!(
            "{:?} /{} from {}",
            request.method,
            request.path,
            exchange.peer()
        );

        match self.registry.lookup(&request.path, request.method) {
            Lookup::Found(handler) => {
                let response = handler(&mut self.device, request);
                tracing::debug!("/{} -> {:?}", request.path, response.outcome);
                exchange.respond(&response)
            }
            Lookup::NotFound => {
                tracing::debug!("No resource at /{}", request.path);
                exchange.not_found()
            }
            Lookup::MethodNotAllowed => {
                tracing::debug!("{:?} not allowed on /{}", request.method, request.path);
                exchange.method_not_allowed()
            }
        }
    }
}
