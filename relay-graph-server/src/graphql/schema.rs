use async_graphql::*;

use super::{node::Node, project::Project, user::User, viewer::Viewer};
use crate::app::RelayApp;

pub struct Query;

#[Object]
impl Query {
    async fn viewer(&self, ctx: &Context<'_>) -> Viewer {
        let app = ctx.data_unchecked::<RelayApp>();
        Viewer::from(app.store().viewer())
    }

    async fn user(&self, ctx: &Context<'_>, id: i32) -> Result<Option<User>> {
        let app = ctx.data_unchecked::<RelayApp>();
        Ok(app.store().find_user(id).await?.map(User::from))
    }

    async fn project(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Project>> {
        let app = ctx.data_unchecked::<RelayApp>();
        Ok(app.store().find_project(id).await?.map(Project::from))
    }

    /// Fetches an object given its global id.
    async fn node(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Node>> {
        let app = ctx.data_unchecked::<RelayApp>();
        match app.node(&id).await? {
            Some(resolved) => Ok(Some(Node::try_from(resolved)?)),
            None => Ok(None),
        }
    }
}
