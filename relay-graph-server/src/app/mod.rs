mod config;
mod error;

use relay_graph::{
    connection::ResolveError, make_connection_resolver, node::NodeError, Connection,
    ConnectionArgs, ConnectionResolver, GlobalId, NodeDispatcher, ResolvedNode, TypeRegistry,
};
use tracing::instrument;

use std::sync::Arc;

use crate::store::*;

pub use config::*;
pub use error::*;

#[derive(Clone)]
pub struct RelayApp {
    store: Store,
    nodes: NodeDispatcher<StoreError>,
    viewer_users: Arc<ConnectionResolver<ViewerUsers>>,
    user_tasks: Arc<ConnectionResolver<UserTasks>>,
    project_users: Arc<ConnectionResolver<ProjectUsers>>,
}

impl RelayApp {
    pub fn init(config: AppConfig) -> Result<Self, ApplicationError> {
        let store = Store::seed(&config.seed)?;
        let registry = node_registry(&store)?;
        tracing::info!(types = ?registry.type_names(), "node types registered");
        Ok(Self {
            nodes: NodeDispatcher::new(Arc::new(registry)),
            viewer_users: Arc::new(
                make_connection_resolver(ViewerUsers::new(&store))
                    .order_by(config.ordering.viewer_users),
            ),
            user_tasks: Arc::new(
                make_connection_resolver(UserTasks::new(&store))
                    .order_by(config.ordering.user_tasks),
            ),
            project_users: Arc::new(
                make_connection_resolver(ProjectUsers::new(&store))
                    .order_by(config.ordering.project_users),
            ),
            store,
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn nodes(&self) -> &NodeDispatcher<StoreError> {
        &self.nodes
    }

    pub async fn node(&self, global_id: &str) -> Result<Option<ResolvedNode>, NodeError<StoreError>> {
        self.nodes.resolve_node(global_id).await
    }

    pub fn global_id<T: std::any::Any>(
        &self,
        local_id: impl std::fmt::Display,
    ) -> Result<GlobalId, NodeError<StoreError>> {
        self.nodes.global_id_for::<T>(local_id)
    }

    #[instrument(name = "relay_app.viewer_users", skip(self, viewer))]
    pub async fn viewer_users(
        &self,
        viewer: &ViewerValues,
        args: &ConnectionArgs,
    ) -> Result<Connection<UserValues>, ResolveError<StoreError>> {
        self.viewer_users.resolve(viewer, args).await
    }

    #[instrument(name = "relay_app.user_tasks", skip(self, user), fields(user_id = user.id))]
    pub async fn user_tasks(
        &self,
        user: &UserValues,
        args: &ConnectionArgs,
    ) -> Result<Connection<TaskValues>, ResolveError<StoreError>> {
        self.user_tasks.resolve(user, args).await
    }

    #[instrument(name = "relay_app.project_users", skip(self, project), fields(project_id = project.id))]
    pub async fn project_users(
        &self,
        project: &ProjectValues,
        args: &ConnectionArgs,
    ) -> Result<Connection<UserValues>, ResolveError<StoreError>> {
        self.project_users.resolve(project, args).await
    }
}

/// Local ids that are not `i32`s cannot match any row.
fn parse_id(local_id: &str) -> Option<i32> {
    local_id.parse().ok()
}

fn node_registry(store: &Store) -> Result<TypeRegistry<StoreError>, ApplicationError> {
    let mut builder = TypeRegistry::<StoreError>::builder();

    let viewers = store.clone();
    builder.register(ViewerValues::NODE_TYPE, move |id: String| {
        let store = viewers.clone();
        async move { store.find_viewer(&id).await }
    })?;

    let users = store.clone();
    builder.register(UserValues::NODE_TYPE, move |id: String| {
        let store = users.clone();
        async move {
            match parse_id(&id) {
                Some(id) => store.find_user(id).await,
                None => Ok(None),
            }
        }
    })?;

    let tasks = store.clone();
    builder.register(TaskValues::NODE_TYPE, move |id: String| {
        let store = tasks.clone();
        async move {
            match parse_id(&id) {
                Some(id) => store.find_task(id).await,
                None => Ok(None),
            }
        }
    })?;

    let projects = store.clone();
    builder.register(ProjectValues::NODE_TYPE, move |id: String| {
        let store = projects.clone();
        async move {
            match parse_id(&id) {
                Some(id) => store.find_project(id).await,
                None => Ok(None),
            }
        }
    })?;

    Ok(builder.build())
}
