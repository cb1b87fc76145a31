use async_graphql::*;

use super::convert::ToGlobalId;
use crate::{app::RelayApp, store::TaskValues};

#[derive(Clone)]
pub struct Task {
    values: TaskValues,
}

#[Object]
impl Task {
    pub async fn id(&self, ctx: &Context<'_>) -> Result<ID> {
        self.values.to_global_id(ctx.data_unchecked::<RelayApp>())
    }

    async fn task_id(&self) -> i32 {
        self.values.id
    }

    async fn name(&self) -> &str {
        &self.values.name
    }
}

impl From<TaskValues> for Task {
    fn from(values: TaskValues) -> Self {
        Self { values }
    }
}
