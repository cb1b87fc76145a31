use async_graphql::{types::connection::*, *};
use relay_graph::{ConnectionArgs, OffsetCursor};

use super::{convert::ToGlobalId, user::User};
use crate::{app::RelayApp, store::ProjectValues};

#[derive(Clone)]
pub struct Project {
    values: ProjectValues,
}

#[Object]
impl Project {
    pub async fn id(&self, ctx: &Context<'_>) -> Result<ID> {
        self.values.to_global_id(ctx.data_unchecked::<RelayApp>())
    }

    async fn project_id(&self) -> i32 {
        self.values.id
    }

    async fn name(&self) -> &str {
        &self.values.name
    }

    async fn users(
        &self,
        ctx: &Context<'_>,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
    ) -> Result<Connection<OffsetCursor, User, EmptyFields, EmptyFields>> {
        let app = ctx.data_unchecked::<RelayApp>();
        let args = ConnectionArgs::new(first, after, last, before);
        let users = app.project_users(&self.values, &args).await?;
        Ok(users.map(User::from).into_graphql())
    }
}

impl From<ProjectValues> for Project {
    fn from(values: ProjectValues) -> Self {
        Self { values }
    }
}
