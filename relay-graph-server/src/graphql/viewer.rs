use async_graphql::{types::connection::*, *};
use relay_graph::{ConnectionArgs, OffsetCursor};

use super::{convert::ToGlobalId, user::User};
use crate::{app::RelayApp, store::ViewerValues};

/// Root viewer for queries.
#[derive(Clone)]
pub struct Viewer {
    values: ViewerValues,
}

#[Object]
impl Viewer {
    pub async fn id(&self, ctx: &Context<'_>) -> Result<ID> {
        self.values.to_global_id(ctx.data_unchecked::<RelayApp>())
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
        let users = app.viewer_users(&self.values, &args).await?;
        Ok(users.map(User::from).into_graphql())
    }
}

impl From<ViewerValues> for Viewer {
    fn from(values: ViewerValues) -> Self {
        Self { values }
    }
}
