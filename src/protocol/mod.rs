//! Protocol Module
//!
//! Glue between CoAP datagrams (parsed by `coap-lite`) and the typed
//! requests/responses of the resource layer.
//!
//! ## Message Format (RFC 7252 §3)
//! ```text
//! ┌─────┬─────┬─────┬──────────┬───────────────┐
//! │Ver 2│ T 2 │TKL 4│ Code (8) │ Message ID 16 │
//! ├─────┴─────┴─────┴──────────┴───────────────┤
//! │ Token (TKL bytes) │ Options │ 0xFF │ Payload│
//! └────────────────────────────────────────────┘
//! ```
//!
//! ### Handled
//! - CON/NON requests → `Decoded::Request`; the reply is a piggybacked
//!   ACK (CON) or a NON carrying the same token
//! - Empty CON (CoAP ping) → `Decoded::Ping`, answered with RST
//!
//! ### Dropped (no reply)
//! - Anything `coap-lite` cannot parse
//! - Version field other than 1
//! - Responses, ACK/RST messages, empty NON messages
//!
//! ### Status Codes
//! - 2.05 Content, 2.04 Changed, 4.00 Bad Request (handler outcomes)
//! - 4.04 Not Found, 4.05 Method Not Allowed (routing)

mod codec;

pub use codec::{
    decode_datagram, encode_packet, request_packet, status_for, Decoded, Exchange,
    COAP_VERSION,
};
