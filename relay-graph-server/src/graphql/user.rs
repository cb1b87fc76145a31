use async_graphql::{types::connection::*, *};
use relay_graph::{ConnectionArgs, OffsetCursor};

use super::{convert::ToGlobalId, task::Task};
use crate::{app::RelayApp, store::UserValues};

#[derive(Clone)]
pub struct User {
    values: UserValues,
}

#[Object]
impl User {
    pub async fn id(&self, ctx: &Context<'_>) -> Result<ID> {
        self.values.to_global_id(ctx.data_unchecked::<RelayApp>())
    }

    async fn user_id(&self) -> i32 {
        self.values.id
    }

    async fn name(&self) -> &str {
        &self.values.name
    }

    async fn tasks(
        &self,
        ctx: &Context<'_>,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
    ) -> Result<Connection<OffsetCursor, Task, EmptyFields, EmptyFields>> {
        let app = ctx.data_unchecked::<RelayApp>();
        let args = ConnectionArgs::new(first, after, last, before);
        let tasks = app.user_tasks(&self.values, &args).await?;
        Ok(tasks.map(Task::from).into_graphql())
    }
}

impl From<UserValues> for User {
    fn from(values: UserValues) -> Self {
        Self { values }
    }
}
