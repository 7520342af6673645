//! # toggl-api - blocking client for the Toggl REST API
//!
//! A thin, stateless client for the Toggl v8 time-tracking API. Every request
//! is authenticated with the user's API token, payloads and responses are JSON,
//! and HTTP failures are translated into typed errors.
//!
//! ## Features
//!
//! - One [`Toggl`] facade exposing every resource as a named field
//! - Generic CRUD layer parameterized by a [`ResourceDescriptor`]
//! - Typed errors: [`TogglError::Auth`] for rejected credentials,
//!   [`TogglError::Request`] for other failures, [`TogglError::Decode`] for
//!   malformed bodies
//! - Pluggable [`Transport`]; the default uses a blocking reqwest client
//!
//! No pagination, rate limiting, retries or caching are performed.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use toggl_api::{json, Toggl};
//!
//! fn main() -> Result<(), toggl_api::TogglError> {
//!     let toggl = Toggl::new("1971800d4d82861d8f2c1651fea4d212")?;
//!
//!     let me = toggl.user.get()?;
//!     println!("Hello {:?}", me.get_string("data/fullname"));
//!
//!     let created = toggl
//!         .clients
//!         .create(&json!({"client": {"name": "Very Big Company", "wid": 777}}))?;
//!     let id = created.get_i64("data/id").unwrap_or_default();
//!
//!     toggl.clients.update_with(id, &json!({"notes": "Important"}))?;
//!     toggl.clients.delete(id)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! ```no_run
//! use toggl_api::{Toggl, TogglError};
//!
//! let toggl = Toggl::new("wrong-token")?;
//! match toggl.user.get() {
//!     Ok(me) => println!("{:?}", me.raw()),
//!     Err(TogglError::Auth { .. }) => eprintln!("token rejected"),
//!     Err(e) => eprintln!("request failed: {}", e),
//! }
//! # Ok::<(), TogglError>(())
//! ```
//!
//! ## Concurrency
//!
//! Calls block until the transport returns. The facade holds no mutable state,
//! so it can be shared between threads as long as the transport is
//! thread-safe, which [`Transport`] requires.

pub mod client;
pub mod error;
pub mod resource;
pub mod resources;
pub mod response;
pub mod rest;
pub mod toggl;
pub mod token;
pub mod transport;

// Re-export main types for convenience
pub use client::{Config, DEFAULT_API_URL};
pub use error::{Result, TogglError, TransportError};
pub use resource::{Resource, ResourceDescriptor};
pub use resources::{
    Clients, Dashboard, Groups, ProjectUsers, Projects, Tags, Tasks, TimeEntries, User,
    WorkspaceUsers, Workspaces,
};
pub use response::Response;
pub use rest::{Endpoint, RestContext};
pub use toggl::Toggl;
pub use token::ApiToken;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};

// Re-export serde_json for convenience
pub use serde_json::json;
