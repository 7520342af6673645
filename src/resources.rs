//! Typed resources of the Toggl v8 API.
//!
//! Each type wraps a generic [`Resource`] and exposes only the operations the
//! service offers for that entity. Endpoints that deviate from plain CRUD
//! (`time_entries/start`, `clients/{id}/projects`, ...) are explicit methods
//! here rather than changes to the generic layer.
//!
//! `create`/`update` send the payload verbatim, so the caller supplies the
//! envelope (`{"client": {...}}`). The `*_with` variants take bare attributes
//! and wrap them under the resource's singular name.

use crate::error::Result;
use crate::resource::{Resource, ResourceDescriptor};
use crate::response::Response;
use crate::rest::RestContext;
use crate::transport::HttpMethod;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use std::sync::Arc;

/// The authenticated user (`/me`)
#[derive(Debug, Clone)]
pub struct User {
    resource: Resource,
}

impl User {
    pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("user", "me");

    pub(crate) fn new(ctx: Arc<RestContext>) -> Self {
        User {
            resource: Resource::new(Self::DESCRIPTOR, ctx),
        }
    }

    /// The underlying generic resource
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Fetch the current user's profile
    pub fn get(&self) -> Result<Response> {
        self.resource.list()
    }

    /// Update the current user's profile
    pub fn update<P: Serialize + ?Sized>(&self, payload: &P) -> Result<Response> {
        self.resource.send(HttpMethod::Put, None, &[], Some(payload))
    }

    /// Update an user from bare attributes
    pub fn update_with<P: Serialize>(&self, attributes: &P) -> Result<Response> {
        self.update(&self.resource.wrap(attributes)?)
    }
}

/// Clients (`/clients`)
#[derive(Debug, Clone)]
pub struct Clients {
    resource: Resource,
}

impl Clients {
    pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("client", "clients");

    pub(crate) fn new(ctx: Arc<RestContext>) -> Self {
        Clients {
            resource: Resource::new(Self::DESCRIPTOR, ctx),
        }
    }

    /// The underlying generic resource
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// All clients visible to the user
    pub fn list(&self) -> Result<Response> {
        self.resource.list()
    }

    /// Fetch one client by id
    pub fn get(&self, id: impl Display) -> Result<Response> {
        self.resource.get(id)
    }

    /// Create a client; the payload is sent as given
    pub fn create<P: Serialize + ?Sized>(&self, payload: &P) -> Result<Response> {
        self.resource.create(payload)
    }

    /// Create a client from bare attributes
    pub fn create_with<P: Serialize>(&self, attributes: &P) -> Result<Response> {
        self.create(&self.resource.wrap(attributes)?)
    }

    /// Update a client; the payload is sent as given
    pub fn update<P: Serialize + ?Sized>(&self, id: impl Display, payload: &P) -> Result<Response> {
        self.resource.update(id, payload)
    }

    /// Update a client from bare attributes
    pub fn update_with<P: Serialize>(&self, id: impl Display, attributes: &P) -> Result<Response> {
        self.update(id, &self.resource.wrap(attributes)?)
    }

    /// Delete a client
    pub fn delete(&self, id: impl Display) -> Result<Response> {
        self.resource.delete(id)
    }

    /// Projects belonging to a client
    pub fn projects(&self, id: impl Display) -> Result<Response> {
        self.resource.get_related(id, &["projects"])
    }
}

/// Workspaces (`/workspaces`). The service does not allow creating or
/// deleting them through the API.
#[derive(Debug, Clone)]
pub struct Workspaces {
    resource: Resource,
}

impl Workspaces {
    pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("workspace", "workspaces");

    pub(crate) fn new(ctx: Arc<RestContext>) -> Self {
        Workspaces {
            resource: Resource::new(Self::DESCRIPTOR, ctx),
        }
    }

    /// The underlying generic resource
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// List all workspaces
    pub fn list(&self) -> Result<Response> {
        self.resource.list()
    }

    /// Fetch one workspace by id
    pub fn get(&self, id: impl Display) -> Result<Response> {
        self.resource.get(id)
    }

    /// Update a workspace; the payload is sent as given
    pub fn update<P: Serialize + ?Sized>(&self, id: impl Display, payload: &P) -> Result<Response> {
        self.resource.update(id, payload)
    }

    /// Update a workspace from bare attributes
    pub fn update_with<P: Serialize>(&self, id: impl Display, attributes: &P) -> Result<Response> {
        self.update(id, &self.resource.wrap(attributes)?)
    }

    /// Users of a workspace
    pub fn users(&self, id: impl Display) -> Result<Response> {
        self.resource.get_related(id, &["users"])
    }

    /// Clients of a workspace
    pub fn clients(&self, id: impl Display) -> Result<Response> {
        self.resource.get_related(id, &["clients"])
    }

    /// Projects of a workspace
    pub fn projects(&self, id: impl Display) -> Result<Response> {
        self.resource.get_related(id, &["projects"])
    }

    /// Tasks of a workspace
    pub fn tasks(&self, id: impl Display) -> Result<Response> {
        self.resource.get_related(id, &["tasks"])
    }

    /// Tags of a workspace
    pub fn tags(&self, id: impl Display) -> Result<Response> {
        self.resource.get_related(id, &["tags"])
    }

    /// Groups of a workspace
    pub fn groups(&self, id: impl Display) -> Result<Response> {
        self.resource.get_related(id, &["groups"])
    }

    /// Membership records of a workspace
    pub fn workspace_users(&self, id: impl Display) -> Result<Response> {
        self.resource.get_related(id, &["workspace_users"])
    }
}

/// Projects (`/projects`)
#[derive(Debug, Clone)]
pub struct Projects {
    resource: Resource,
}

impl Projects {
    pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("project", "projects");

    pub(crate) fn new(ctx: Arc<RestContext>) -> Self {
        Projects {
            resource: Resource::new(Self::DESCRIPTOR, ctx),
        }
    }

    /// The underlying generic resource
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Fetch one project by id
    pub fn get(&self, id: impl Display) -> Result<Response> {
        self.resource.get(id)
    }

    /// Create a project; the payload is sent as given
    pub fn create<P: Serialize + ?Sized>(&self, payload: &P) -> Result<Response> {
        self.resource.create(payload)
    }

    /// Create a project from bare attributes
    pub fn create_with<P: Serialize>(&self, attributes: &P) -> Result<Response> {
        self.create(&self.resource.wrap(attributes)?)
    }

    /// Update a project; the payload is sent as given
    pub fn update<P: Serialize + ?Sized>(&self, id: impl Display, payload: &P) -> Result<Response> {
        self.resource.update(id, payload)
    }

    /// Update a project from bare attributes
    pub fn update_with<P: Serialize>(&self, id: impl Display, attributes: &P) -> Result<Response> {
        self.update(id, &self.resource.wrap(attributes)?)
    }

    /// Delete a project
    pub fn delete(&self, id: impl Display) -> Result<Response> {
        self.resource.delete(id)
    }

    /// Users assigned to a project
    pub fn users(&self, id: impl Display) -> Result<Response> {
        self.resource.get_related(id, &["project_users"])
    }

    /// Tasks of a project
    pub fn tasks(&self, id: impl Display) -> Result<Response> {
        self.resource.get_related(id, &["tasks"])
    }
}

/// Project membership (`/project_users`)
#[derive(Debug, Clone)]
pub struct ProjectUsers {
    resource: Resource,
}

impl ProjectUsers {
    pub const DESCRIPTOR: ResourceDescriptor =
        ResourceDescriptor::new("project_user", "project_users");

    pub(crate) fn new(ctx: Arc<RestContext>) -> Self {
        ProjectUsers {
            resource: Resource::new(Self::DESCRIPTOR, ctx),
        }
    }

    /// The underlying generic resource
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Create a project membership; the payload is sent as given
    pub fn create<P: Serialize + ?Sized>(&self, payload: &P) -> Result<Response> {
        self.resource.create(payload)
    }

    /// Create a project membership from bare attributes
    pub fn create_with<P: Serialize>(&self, attributes: &P) -> Result<Response> {
        self.create(&self.resource.wrap(attributes)?)
    }

    /// Update a project membership; the payload is sent as given
    pub fn update<P: Serialize + ?Sized>(&self, id: impl Display, payload: &P) -> Result<Response> {
        self.resource.update(id, payload)
    }

    /// Update a project membership from bare attributes
    pub fn update_with<P: Serialize>(&self, id: impl Display, attributes: &P) -> Result<Response> {
        self.update(id, &self.resource.wrap(attributes)?)
    }

    /// Delete a project membership
    pub fn delete(&self, id: impl Display) -> Result<Response> {
        self.resource.delete(id)
    }
}

/// Time entries (`/time_entries`)
#[derive(Debug, Clone)]
pub struct TimeEntries {
    resource: Resource,
}

impl TimeEntries {
    pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("time_entry", "time_entries");

    pub(crate) fn new(ctx: Arc<RestContext>) -> Self {
        TimeEntries {
            resource: Resource::new(Self::DESCRIPTOR, ctx),
        }
    }

    /// The underlying generic resource
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Recent time entries of the user
    pub fn list(&self) -> Result<Response> {
        self.resource.list()
    }

    /// Fetch one time entry by id
    pub fn get(&self, id: impl Display) -> Result<Response> {
        self.resource.get(id)
    }

    /// Create a time entry; the payload is sent as given
    pub fn create<P: Serialize + ?Sized>(&self, payload: &P) -> Result<Response> {
        self.resource.create(payload)
    }

    /// Create a time entry from bare attributes
    pub fn create_with<P: Serialize>(&self, attributes: &P) -> Result<Response> {
        self.create(&self.resource.wrap(attributes)?)
    }

    /// Update a time entry; the payload is sent as given
    pub fn update<P: Serialize + ?Sized>(&self, id: impl Display, payload: &P) -> Result<Response> {
        self.resource.update(id, payload)
    }

    /// Update a time entry from bare attributes
    pub fn update_with<P: Serialize>(&self, id: impl Display, attributes: &P) -> Result<Response> {
        self.update(id, &self.resource.wrap(attributes)?)
    }

    /// Delete a time entry
    pub fn delete(&self, id: impl Display) -> Result<Response> {
        self.resource.delete(id)
    }

    /// Start a new running time entry
    pub fn start<P: Serialize + ?Sized>(&self, payload: &P) -> Result<Response> {
        self.resource.send(HttpMethod::Post, None, &["start"], Some(payload))
    }

    /// Stop a running time entry
    pub fn stop(&self, id: impl Display) -> Result<Response> {
        self.resource
            .send::<Value>(HttpMethod::Put, Some(&id as &dyn Display), &["stop"], None)
    }

    /// The currently running time entry, if any
    pub fn current(&self) -> Result<Response> {
        self.resource.send::<Value>(HttpMethod::Get, None, &["current"], None)
    }
}

/// Tags (`/tags`)
#[derive(Debug, Clone)]
pub struct Tags {
    resource: Resource,
}

impl Tags {
    pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("tag", "tags");

    pub(crate) fn new(ctx: Arc<RestContext>) -> Self {
        Tags {
            resource: Resource::new(Self::DESCRIPTOR, ctx),
        }
    }

    /// The underlying generic resource
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Create a tag; the payload is sent as given
    pub fn create<P: Serialize + ?Sized>(&self, payload: &P) -> Result<Response> {
        self.resource.create(payload)
    }

    /// Create a tag from bare attributes
    pub fn create_with<P: Serialize>(&self, attributes: &P) -> Result<Response> {
        self.create(&self.resource.wrap(attributes)?)
    }

    /// Update a tag; the payload is sent as given
    pub fn update<P: Serialize + ?Sized>(&self, id: impl Display, payload: &P) -> Result<Response> {
        self.resource.update(id, payload)
    }

    /// Update a tag from bare attributes
    pub fn update_with<P: Serialize>(&self, id: impl Display, attributes: &P) -> Result<Response> {
        self.update(id, &self.resource.wrap(attributes)?)
    }

    /// Delete a tag
    pub fn delete(&self, id: impl Display) -> Result<Response> {
        self.resource.delete(id)
    }
}

/// Tasks (`/tasks`)
#[derive(Debug, Clone)]
pub struct Tasks {
    resource: Resource,
}

impl Tasks {
    pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("task", "tasks");

    pub(crate) fn new(ctx: Arc<RestContext>) -> Self {
        Tasks {
            resource: Resource::new(Self::DESCRIPTOR, ctx),
        }
    }

    /// The underlying generic resource
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Fetch one task by id
    pub fn get(&self, id: impl Display) -> Result<Response> {
        self.resource.get(id)
    }

    /// Create a task; the payload is sent as given
    pub fn create<P: Serialize + ?Sized>(&self, payload: &P) -> Result<Response> {
        self.resource.create(payload)
    }

    /// Create a task from bare attributes
    pub fn create_with<P: Serialize>(&self, attributes: &P) -> Result<Response> {
        self.create(&self.resource.wrap(attributes)?)
    }

    /// Update a task; the payload is sent as given
    pub fn update<P: Serialize + ?Sized>(&self, id: impl Display, payload: &P) -> Result<Response> {
        self.resource.update(id, payload)
    }

    /// Update a task from bare attributes
    pub fn update_with<P: Serialize>(&self, id: impl Display, attributes: &P) -> Result<Response> {
        self.update(id, &self.resource.wrap(attributes)?)
    }

    /// Delete a task
    pub fn delete(&self, id: impl Display) -> Result<Response> {
        self.resource.delete(id)
    }
}

/// Groups (`/groups`)
#[derive(Debug, Clone)]
pub struct Groups {
    resource: Resource,
}

impl Groups {
    pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("group", "groups");

    pub(crate) fn new(ctx: Arc<RestContext>) -> Self {
        Groups {
            resource: Resource::new(Self::DESCRIPTOR, ctx),
        }
    }

    /// The underlying generic resource
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Create a group; the payload is sent as given
    pub fn create<P: Serialize + ?Sized>(&self, payload: &P) -> Result<Response> {
        self.resource.create(payload)
    }

    /// Create a group from bare attributes
    pub fn create_with<P: Serialize>(&self, attributes: &P) -> Result<Response> {
        self.create(&self.resource.wrap(attributes)?)
    }

    /// Update a group; the payload is sent as given
    pub fn update<P: Serialize + ?Sized>(&self, id: impl Display, payload: &P) -> Result<Response> {
        self.resource.update(id, payload)
    }

    /// Update a group from bare attributes
    pub fn update_with<P: Serialize>(&self, id: impl Display, attributes: &P) -> Result<Response> {
        self.update(id, &self.resource.wrap(attributes)?)
    }

    /// Delete a group
    pub fn delete(&self, id: impl Display) -> Result<Response> {
        self.resource.delete(id)
    }
}

/// Workspace membership (`/workspace_users`). Members are invited through
/// the workspace, so only update and delete are available here.
#[derive(Debug, Clone)]
pub struct WorkspaceUsers {
    resource: Resource,
}

impl WorkspaceUsers {
    pub const DESCRIPTOR: ResourceDescriptor =
        ResourceDescriptor::new("workspace_user", "workspace_users");

    pub(crate) fn new(ctx: Arc<RestContext>) -> Self {
        WorkspaceUsers {
            resource: Resource::new(Self::DESCRIPTOR, ctx),
        }
    }

    /// The underlying generic resource
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Update a workspace membership; the payload is sent as given
    pub fn update<P: Serialize + ?Sized>(&self, id: impl Display, payload: &P) -> Result<Response> {
        self.resource.update(id, payload)
    }

    /// Update a workspace membership from bare attributes
    pub fn update_with<P: Serialize>(&self, id: impl Display, attributes: &P) -> Result<Response> {
        self.update(id, &self.resource.wrap(attributes)?)
    }

    /// Delete a workspace membership
    pub fn delete(&self, id: impl Display) -> Result<Response> {
        self.resource.delete(id)
    }
}

/// Workspace activity dashboard (`/dashboard/{workspace_id}`), read only
#[derive(Debug, Clone)]
pub struct Dashboard {
    resource: Resource,
}

impl Dashboard {
    pub const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("dashboard", "dashboard");

    pub(crate) fn new(ctx: Arc<RestContext>) -> Self {
        Dashboard {
            resource: Resource::new(Self::DESCRIPTOR, ctx),
        }
    }

    /// The underlying generic resource
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Activity summary of a workspace
    pub fn get(&self, workspace_id: impl Display) -> Result<Response> {
        self.resource.get(workspace_id)
    }
}
