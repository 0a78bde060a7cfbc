//! Network Module
//!
//! UDP server and request dispatch.
//!
//! ## Architecture
//! - One thread, one socket
//! - Blocking receive with no timeout is the only suspension point
//! - Requests handled strictly one after another through `Dispatcher`

mod dispatcher;
mod server;

pub use dispatcher::{DispatchState, Dispatcher};
pub use server::Server;

/// Receive buffer size; larger datagrams are truncated by the OS and
/// then fail to parse
pub const MAX_DATAGRAM_SIZE: usize = 1500;
