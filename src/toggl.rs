use crate::client::Config;
use crate::error::Result;
use crate::resources::{
    Clients, Dashboard, Groups, ProjectUsers, Projects, Tags, Tasks, TimeEntries, User,
    WorkspaceUsers, Workspaces,
};
use crate::rest::RestContext;
use crate::token::ApiToken;
use crate::transport::{ReqwestTransport, Transport};
use std::sync::Arc;

/// Authenticated entry point to the Toggl API.
///
/// Holds one instance of every resource type. All of them share the same
/// immutable context, so the facade is cheap to clone and can be used from
/// several threads at once.
#[derive(Debug, Clone)]
pub struct Toggl {
    ctx: Arc<RestContext>,
    pub user: User,
    pub clients: Clients,
    pub workspaces: Workspaces,
    pub projects: Projects,
    pub project_users: ProjectUsers,
    pub time_entries: TimeEntries,
    pub tags: Tags,
    pub tasks: Tasks,
    pub groups: Groups,
    pub workspace_users: WorkspaceUsers,
    pub dashboard: Dashboard,
}

impl Toggl {
    /// Create a client for the production API.
    ///
    /// Fails with [`TogglError::InvalidToken`](crate::TogglError::InvalidToken)
    /// if the token is empty. No request is made.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::with_config(api_token, Config::default())
    }

    /// Create a client against a different base URL
    pub fn with_url(api_token: impl Into<String>, api_url: impl Into<String>) -> Result<Self> {
        Self::with_config(api_token, Config::new(api_url))
    }

    /// Create a client with custom configuration and the default transport
    pub fn with_config(api_token: impl Into<String>, config: Config) -> Result<Self> {
        let token = ApiToken::new(api_token)?;
        let transport = ReqwestTransport::new(&config)?;
        Self::build(token, config, Arc::new(transport))
    }

    /// Create a client that sends requests through `transport`
    pub fn with_transport(
        api_token: impl Into<String>,
        config: Config,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let token = ApiToken::new(api_token)?;
        Self::build(token, config, transport)
    }

    fn build(token: ApiToken, config: Config, transport: Arc<dyn Transport>) -> Result<Self> {
        let ctx = Arc::new(RestContext::new(token, config, transport)?);

        Ok(Toggl {
            user: User::new(ctx.clone()),
            clients: Clients::new(ctx.clone()),
            workspaces: Workspaces::new(ctx.clone()),
            projects: Projects::new(ctx.clone()),
            project_users: ProjectUsers::new(ctx.clone()),
            time_entries: TimeEntries::new(ctx.clone()),
            tags: Tags::new(ctx.clone()),
            tasks: Tasks::new(ctx.clone()),
            groups: Groups::new(ctx.clone()),
            workspace_users: WorkspaceUsers::new(ctx.clone()),
            dashboard: Dashboard::new(ctx.clone()),
            ctx,
        })
    }

    /// Base URL requests are sent to
    pub fn api_url(&self) -> &str {
        self.ctx.config().base_url()
    }
}
