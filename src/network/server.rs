//! UDP Server
//!
//! Blocking single-socket loop: wait for a datagram, dispatch it, send
//! the reply, repeat.

use std::convert::Infallible;
use std::io::ErrorKind;
use std::net::{SocketAddr, UdpSocket};

use crate::config::Config;
use crate::error::Result;
use crate::hardware::Gpio;

use super::{Dispatcher, MAX_DATAGRAM_SIZE};

/// CoAP server bound to one UDP socket
pub struct Server<G> {
    socket: UdpSocket,
    dispatcher: Dispatcher<G>,
    buf: Vec<u8>,
}

impl<G: Gpio> Server<G> {
    /// Bind the socket from the config
    pub fn bind(config: &Config, dispatcher: Dispatcher<G>) -> Result<Self> {
        let socket = UdpSocket::bind(config.bind_addr)?;
        tracing::info!("CoAP server listening on {}", socket.local_addr()?);

        Ok(Self {
            socket,
            dispatcher,
            buf: vec![0u8; MAX_DATAGRAM_SIZE],
        })
    }

    /// Address the socket is actually bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Serve forever (blocking)
    ///
    /// Only returns on a fatal socket error.
    pub fn run(&mut self) -> Result<Infallible> {
        loop {
            self.serve_one()?;
        }
    }

    /// Wait for one datagram and answer it
    ///
    /// Receive errors are fatal. A failed send only loses that reply.
    pub fn serve_one(&mut self) -> Result<()> {
        let (len, peer) = loop {
            match self.socket.recv_from(&mut self.buf) {
                Ok(received) => break received,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::error!("Socket receive failed: {}", e);
                    return Err(e.into());
                }
            }
        };

        let Some(reply) = self.dispatcher.handle_datagram(&self.buf[..len], peer) else {
            return Ok(());
        };

        if let Err(e) = self.socket.send_to(&reply, peer) {
            tracing::warn!("Error sending reply to {}: {}", peer, e);
        }
        Ok(())
    }
}
