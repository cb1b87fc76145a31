mod convert;
mod node;
mod project;
mod schema;
mod task;
mod user;
mod viewer;

use async_graphql::*;

pub use node::Node;
pub use schema::*;

use crate::app::RelayApp;

pub const MAX_QUERY_DEPTH: usize = 15;

pub type RelaySchema = Schema<Query, EmptyMutation, EmptySubscription>;

pub fn schema(app: Option<RelayApp>) -> RelaySchema {
    let schema = Schema::build(Query, EmptyMutation, EmptySubscription).limit_depth(MAX_QUERY_DEPTH);
    if let Some(app) = app {
        schema.data(app).finish()
    } else {
        schema.finish()
    }
}
