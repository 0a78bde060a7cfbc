//! Resource Module
//!
//! Typed requests and responses, the handlers behind each resource and
//! the registry that routes between them.
//!
//! ## Resources
//! | Path      | Methods         | Body                  |
//! |-----------|-----------------|-----------------------|
//! | `/hello`  | GET             | `Hello World!`        |
//! | `/button` | GET             | `{"button":0\|1}`     |
//! | `/led`    | GET, POST, PUT  | `{"led":<int>}`       |
//!
//! ## Outcomes
//! - Content: successful read, body attached
//! - Changed: successful write, no body
//! - BadRequest: write body absent, malformed or missing `led`
//!
//! Unknown paths and disallowed methods never reach a handler; the
//! protocol layer answers those itself.

pub mod handlers;
mod registry;

pub use registry::{Handler, Lookup, Registry, Resource};

use bytes::Bytes;

/// Request methods as seen by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,

    /// FETCH, PATCH, iPATCH or an unassigned method code
    Other,
}

/// Result of a handler, abstracted from CoAP response codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Content,
    Changed,
    BadRequest,
}

/// Content format attached to a response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    TextPlain,
}

/// A request routed to a resource
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,

    /// Resource path without the leading `/`, e.g. `led`
    pub path: String,

    /// Request payload, `None` when the datagram carried no payload
    pub body: Option<Bytes>,
}

impl Request {
    /// Create a request without a body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Attach a body; an empty body counts as absent
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        self.body = if body.is_empty() { None } else { Some(body) };
        self
    }
}

/// A handler's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub outcome: Outcome,
    pub body: Option<Bytes>,
    pub format: Option<BodyFormat>,
}

impl Response {
    /// Successful read carrying a text/plain body
    pub fn content(body: Bytes) -> Self {
        Self {
            outcome: Outcome::Content,
            body: Some(body),
            format: Some(BodyFormat::TextPlain),
        }
    }

    /// Successful write, no body
    pub fn changed() -> Self {
        Self {
            outcome: Outcome::Changed,
            body: None,
            format: None,
        }
    }

    /// Rejected write, no body
    pub fn bad_request() -> Self {
        Self {
            outcome: Outcome::BadRequest,
            body: None,
            format: None,
        }
    }
}
