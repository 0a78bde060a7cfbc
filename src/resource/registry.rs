//! Resource registry
//!
//! Fixed table from resource name to its allowed methods and handlers.
//! Built once at startup; nothing is added or removed afterwards.

use crate::device::Device;
use crate::hardware::Gpio;

use super::handlers;
use super::{Method, Request, Response};

/// Function implementing one method of one resource
pub type Handler<G> = fn(&mut Device<G>, &Request) -> Response;

/// A named resource and the methods it answers
pub struct Resource<G> {
    pub name: &'static str,
    routes: Vec<(Method, Handler<G>)>,
}

impl<G> Resource<G> {
    /// Methods this resource accepts, in registration order
    pub fn methods(&self) -> impl Iterator<Item = Method> + '_ {
        self.routes.iter().map(|(method, _)| *method)
    }

    fn handler(&self, method: Method) -> Option<Handler<G>> {
        self.routes
            .iter()
            .find(|(m, _)| *m == method)
            .map(|(_, handler)| *handler)
    }
}

/// Outcome of a registry lookup
pub enum Lookup<G> {
    Found(Handler<G>),
    NotFound,
    MethodNotAllowed,
}

/// Read-only routing table
pub struct Registry<G> {
    resources: Vec<Resource<G>>,
}

impl<G: Gpio> Registry<G> {
    /// The three resources of the device: `hello`, `button` and `led`
    pub fn standard() -> Self {
        let resources = vec![
            Resource {
                name: "hello",
                routes: vec![(Method::Get, handlers::hello::<G> as Handler<G>)],
            },
            Resource {
                name: "button",
                routes: vec![(Method::Get, handlers::button_get::<G> as Handler<G>)],
            },
            Resource {
                name: "led",
                routes: vec![
                    (Method::Get, handlers::led_get::<G> as Handler<G>),
                    (Method::Post, handlers::led_write::<G> as Handler<G>),
                    (Method::Put, handlers::led_write::<G> as Handler<G>),
                ],
            },
        ];
        Self { resources }
    }
}

impl<G> Registry<G> {
    /// Find the handler for `method` on `path`
    ///
    /// Matching is exact on the name; a single leading `/` is ignored.
    pub fn lookup(&self, path: &str, method: Method) -> Lookup<G> {
        let name = path.strip_prefix('/').unwrap_or(path);

        match self.resources.iter().find(|r| r.name == name) {
            None => Lookup::NotFound,
            Some(resource) => match resource.handler(method) {
                Some(handler) => Lookup::Found(handler),
                None => Lookup::MethodNotAllowed,
            },
        }
    }

    /// Iterate over the registered resources
    pub fn resources(&self) -> impl Iterator<Item = &Resource<G>> {
        self.resources.iter()
    }

    /// Number of registered resources
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
