use async_graphql::*;
use relay_graph::ResolvedNode;
use thiserror::Error;

use super::{project::Project, task::Task, user::User, viewer::Viewer};
use crate::store::*;

#[derive(Interface)]
#[graphql(field(name = "id", ty = "ID", desc = "The global id of the object."))]
pub enum Node {
    Viewer(Viewer),
    User(User),
    Task(Task),
    Project(Project),
}

#[derive(Error, Debug)]
#[error("UnresolvedNode: no graphql type for node type '{0}'")]
pub struct UnresolvedNode(String);

impl TryFrom<ResolvedNode> for Node {
    type Error = UnresolvedNode;

    fn try_from(resolved: ResolvedNode) -> Result<Self, Self::Error> {
        let node = match resolved.type_name.as_str() {
            ViewerValues::NODE_TYPE => resolved
                .downcast_ref::<ViewerValues>()
                .map(|values| Node::Viewer(Viewer::from(values.clone()))),
            UserValues::NODE_TYPE => resolved
                .downcast_ref::<UserValues>()
                .map(|values| Node::User(User::from(values.clone()))),
            TaskValues::NODE_TYPE => resolved
                .downcast_ref::<TaskValues>()
                .map(|values| Node::Task(Task::from(values.clone()))),
            ProjectValues::NODE_TYPE => resolved
                .downcast_ref::<ProjectValues>()
                .map(|values| Node::Project(Project::from(values.clone()))),
            _ => None,
        };
        node.ok_or(UnresolvedNode(resolved.type_name))
    }
}
