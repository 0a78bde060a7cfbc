//! Blocking CoAP client
//!
//! Minimal client used by the CLI binary and the end-to-end tests.
//! Sends confirmable requests and waits for the matching piggybacked
//! reply; there is no retransmission.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use coap_lite::{MessageClass, MessageType, Packet, RequestType, ResponseType};

use crate::error::{CoapGpioError, Result};
use crate::network::MAX_DATAGRAM_SIZE;
use crate::protocol::{encode_packet, request_packet};

/// A response as seen by the client
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: ResponseType,
    pub payload: Vec<u8>,
}

impl Reply {
    /// Payload as UTF-8, lossy
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}

/// Client talking to one server
pub struct Client {
    socket: UdpSocket,
    server: SocketAddr,
    next_message_id: u16,
    buf: Vec<u8>,
}

impl Client {
    /// Bind an ephemeral socket; `timeout` bounds every wait for a reply
    pub fn connect(server: SocketAddr, timeout: Duration) -> Result<Self> {
        let local: SocketAddr = if server.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        let socket = UdpSocket::bind(local)?;
        socket.set_read_timeout(Some(timeout))?;

        // Message IDs only need to differ between nearby exchanges
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() as u16)
            .unwrap_or(1);

        Ok(Self {
            socket,
            server,
            next_message_id: seed,
            buf: vec![0u8; MAX_DATAGRAM_SIZE],
        })
    }

    /// GET `path`
    pub fn get(&mut self, path: &str) -> Result<Reply> {
        self.request(RequestType::Get, path, &[])
    }

    /// POST `body` to `path`
    pub fn post(&mut self, path: &str, body: &[u8]) -> Result<Reply> {
        self.request(RequestType::Post, path, body)
    }

    /// PUT `body` to `path`
    pub fn put(&mut self, path: &str, body: &[u8]) -> Result<Reply> {
        self.request(RequestType::Put, path, body)
    }

    /// Send any request and wait for its reply
    pub fn request(&mut self, method: RequestType, path: &str, payload: &[u8]) -> Result<Reply> {
        let message_id = self.next_id();
        let token = message_id.to_be_bytes();
        let packet = request_packet(method, path, payload, message_id, &token, true);
        self.socket.send_to(&encode_packet(&packet)?, self.server)?;

        let reply = self.receive(message_id)?;
        match reply.header.code {
            MessageClass::Response(status) => Ok(Reply {
                status,
                payload: reply.payload,
            }),
            other => Err(CoapGpioError::Protocol(format!(
                "expected a response, got {:?}",
                other
            ))),
        }
    }

    /// Send a CoAP ping; `true` when the server answered with RST
    pub fn ping(&mut self) -> Result<bool> {
        let message_id = self.next_id();
        let mut packet = Packet::new();
        packet.header.set_type(MessageType::Confirmable);
        packet.header.code = MessageClass::Empty;
        packet.header.message_id = message_id;
        self.socket.send_to(&encode_packet(&packet)?, self.server)?;

        let reply = self.receive(message_id)?;
        Ok(matches!(reply.header.get_type(), MessageType::Reset))
    }

    fn next_id(&mut self) -> u16 {
        let id = self.next_message_id;
        self.next_message_id = self.next_message_id.wrapping_add(1);
        id
    }

    /// Wait for the packet answering `message_id`, skipping stale replies
    fn receive(&mut self, message_id: u16) -> Result<Packet> {
        loop {
            let (len, from) = self.socket.recv_from(&mut self.buf)?;
            match Packet::from_bytes(&self.buf[..len]) {
                Ok(packet) if packet.header.message_id == message_id => return Ok(packet),
                Ok(packet) => {
                    tracing::debug!(
                        "Ignoring reply {} from {}",
                        packet.header.message_id,
                        from
                    );
                }
                Err(e) => tracing::debug!("Ignoring unparseable datagram from {}: {:?}", from, e),
            }
        }
    }
}
