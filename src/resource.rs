//! Generic CRUD operations shared by every resource type.
//!
//! A [`Resource`] is a [`ResourceDescriptor`] (singular name and URI suffix)
//! bound to a shared [`RestContext`]. The typed resources in
//! [`resources`](crate::resources) wrap one and expose only the operations the
//! service supports for that entity.

use crate::error::Result;
use crate::response::Response;
use crate::rest::{Endpoint, RestContext};
use crate::transport::HttpMethod;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Display;
use std::sync::Arc;

/// Static description of a resource type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Singular key used to wrap request payloads (e.g. "client")
    pub name: &'static str,
    /// URI suffix relative to the base URL (e.g. "clients")
    pub uri: &'static str,
}

impl ResourceDescriptor {
    pub const fn new(name: &'static str, uri: &'static str) -> Self {
        ResourceDescriptor { name, uri }
    }
}

/// A resource descriptor bound to the context it dispatches through
#[derive(Debug, Clone)]
pub struct Resource {
    descriptor: ResourceDescriptor,
    ctx: Arc<RestContext>,
}

impl Resource {
    pub fn new(descriptor: ResourceDescriptor, ctx: Arc<RestContext>) -> Self {
        Resource { descriptor, ctx }
    }

    pub fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    /// URI suffix of this resource
    pub fn uri(&self) -> &'static str {
        self.descriptor.uri
    }

    /// Wrap attributes in the envelope the service expects,
    /// e.g. `{"client": {...}}`
    pub fn wrap<P: Serialize>(&self, attributes: &P) -> Result<Value> {
        let mut envelope = Map::new();
        envelope.insert(
            self.descriptor.name.to_string(),
            serde_json::to_value(attributes)?,
        );
        Ok(Value::Object(envelope))
    }

    /// Dispatch a request to `uri[/id][/extra...]`.
    ///
    /// Every other operation is expressed through this one.
    pub fn send<P: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        id: Option<&dyn Display>,
        extra: &[&str],
        payload: Option<&P>,
    ) -> Result<Response> {
        let id = id.map(|id| id.to_string());

        let mut endpoint = Endpoint::new(self.descriptor.uri).with_extra(extra);
        if let Some(ref id) = id {
            endpoint = endpoint.with_id(id);
        }

        let payload = payload.map(serde_json::to_value).transpose()?;
        self.ctx.do_request(method, &endpoint, payload.as_ref())
    }

    /// GET the collection
    pub fn list(&self) -> Result<Response> {
        self.send::<Value>(HttpMethod::Get, None, &[], None)
    }

    /// GET one item by identifier
    pub fn get(&self, id: impl Display) -> Result<Response> {
        self.send::<Value>(HttpMethod::Get, Some(&id as &dyn Display), &[], None)
    }

    /// GET a sub-resource of one item, e.g. `clients/{id}/projects`
    pub fn get_related(&self, id: impl Display, extra: &[&str]) -> Result<Response> {
        self.send::<Value>(HttpMethod::Get, Some(&id as &dyn Display), extra, None)
    }

    /// POST a new item; the payload is sent as given
    pub fn create<P: Serialize + ?Sized>(&self, payload: &P) -> Result<Response> {
        self.send(HttpMethod::Post, None, &[], Some(payload))
    }

    /// PUT changes to one item; the payload is sent as given
    pub fn update<P: Serialize + ?Sized>(&self, id: impl Display, payload: &P) -> Result<Response> {
        self.send(HttpMethod::Put, Some(&id as &dyn Display), &[], Some(payload))
    }

    /// DELETE one item. An empty body yields an empty object.
    pub fn delete(&self, id: impl Display) -> Result<Response> {
        self.send::<Value>(HttpMethod::Delete, Some(&id as &dyn Display), &[], None)
    }
}
