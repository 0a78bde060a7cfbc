//! Protocol codec
//!
//! Decoding of incoming datagrams and encoding of replies.

use std::net::SocketAddr;

use coap_lite::{
    CoapOption, CoapRequest, CoapResponse, ContentFormat, MessageClass, MessageType, Packet,
    RequestType, ResponseType,
};

use crate::error::{CoapGpioError, Result};
use crate::resource::{BodyFormat, Method, Outcome, Request, Response};

/// The only protocol version this server speaks
pub const COAP_VERSION: u8 = 1;

/// A datagram that survived decoding and deserves a reply
pub enum Decoded {
    /// A request; answer it through the `Exchange`
    Request(Exchange),

    /// An empty confirmable message; the packet is the ready-made RST
    Ping(Packet),
}

/// One request and the reply skeleton matching it
pub struct Exchange {
    request: Request,
    peer: SocketAddr,
    reply: CoapResponse,
}

impl Exchange {
    fn from_packet(packet: Packet, peer: SocketAddr) -> Result<Self> {
        let coap = CoapRequest::from_packet(packet, peer);
        let method = method_from(coap.get_method());
        let path = coap.get_path();

        // No reply skeleton means the request rode in an ACK or RST
        let reply = coap.response.ok_or_else(|| {
            CoapGpioError::Protocol("request code in an ACK or RST message".to_string())
        })?;

        let request = Request::new(method, path).with_body(coap.message.payload);
        Ok(Self {
            request,
            peer,
            reply,
        })
    }

    /// The typed request
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Sender of the datagram
    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    /// Encode a handler response as the reply datagram
    pub fn respond(mut self, response: &Response) -> Result<Vec<u8>> {
        self.reply.set_status(status_for(response.outcome));
        if let Some(BodyFormat::TextPlain) = response.format {
            self.reply.message.set_content_format(ContentFormat::TextPlain);
        }
        // the skeleton may carry a copy of the request payload
        self.reply.message.payload = response
            .body
            .as_ref()
            .map(|body| body.to_vec())
            .unwrap_or_default();
        encode_packet(&self.reply.message)
    }

    /// Answer 4.04 without involving a handler
    pub fn not_found(self) -> Result<Vec<u8>> {
        self.reject(ResponseType::NotFound)
    }

    /// Answer 4.05 without involving a handler
    pub fn method_not_allowed(self) -> Result<Vec<u8>> {
        self.reject(ResponseType::MethodNotAllowed)
    }

    fn reject(mut self, status: ResponseType) -> Result<Vec<u8>> {
        self.reply.set_status(status);
        self.reply.message.payload.clear();
        encode_packet(&self.reply.message)
    }
}

/// Parse a datagram into something the dispatcher can answer
///
/// Every `Err` means the datagram is dropped silently.
pub fn decode_datagram(bytes: &[u8], peer: SocketAddr) -> Result<Decoded> {
    let packet = Packet::from_bytes(bytes)
        .map_err(|e| CoapGpioError::Protocol(format!("unparseable PDU: {:?}", e)))?;

    // RFC 7252 §3: unknown versions are silently ignored
    let version = packet.header.get_version();
    if version != COAP_VERSION {
        return Err(CoapGpioError::Protocol(format!(
            "unsupported CoAP version {}",
            version
        )));
    }

    match packet.header.code {
        MessageClass::Request(_) => Exchange::from_packet(packet, peer).map(Decoded::Request),
        MessageClass::Empty => match packet.header.get_type() {
            MessageType::Confirmable => Ok(Decoded::Ping(reset_for(&packet))),
            other => Err(CoapGpioError::Protocol(format!(
                "empty message of type {:?}",
                other
            ))),
        },
        other => Err(CoapGpioError::Protocol(format!(
            "not a request: {:?}",
            other
        ))),
    }
}

/// Serialize a packet for the wire
pub fn encode_packet(packet: &Packet) -> Result<Vec<u8>> {
    packet
        .to_bytes()
        .map_err(|e| CoapGpioError::Protocol(format!("cannot encode PDU: {:?}", e)))
}

/// Build a request packet
///
/// `path` may start with `/`; each segment becomes one Uri-Path option.
pub fn request_packet(
    method: RequestType,
    path: &str,
    payload: &[u8],
    message_id: u16,
    token: &[u8],
    confirmable: bool,
) -> Packet {
    let mut packet = Packet::new();
    packet.header.set_type(if confirmable {
        MessageType::Confirmable
    } else {
        MessageType::NonConfirmable
    });
    packet.header.code = MessageClass::Request(method);
    packet.header.message_id = message_id;
    packet.set_token(token.to_vec());

    for segment in path.split('/').filter(|s| !s.is_empty()) {
        packet.add_option(CoapOption::UriPath, segment.as_bytes().to_vec());
    }
    packet.payload = payload.to_vec();
    packet
}

/// CoAP response code for a handler outcome
pub fn status_for(outcome: Outcome) -> ResponseType {
    match outcome {
        Outcome::Content => ResponseType::Content,
        Outcome::Changed => ResponseType::Changed,
        Outcome::BadRequest => ResponseType::BadRequest,
    }
}

fn method_from(method: &RequestType) -> Method {
    match method {
        RequestType::Get => Method::Get,
        RequestType::Post => Method::Post,
        RequestType::Put => Method::Put,
        RequestType::Delete => Method::Delete,
        _ => Method::Other,
    }
}

/// RST for an empty confirmable message (RFC 7252 §4.3)
fn reset_for(ping: &Packet) -> Packet {
    let mut reset = Packet::new();
    reset.header.set_type(MessageType::Reset);
    reset.header.code = MessageClass::Empty;
    reset.header.message_id = ping.header.message_id;
    reset
}
