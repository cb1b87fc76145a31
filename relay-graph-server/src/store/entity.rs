use serde::{Deserialize, Serialize};

pub const VIEWER_ID: &str = "me";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerValues {
    pub id: String,
    pub name: String,
}

impl ViewerValues {
    pub const NODE_TYPE: &'static str = "Viewer";
}

impl Default for ViewerValues {
    fn default() -> Self {
        Self {
            id: VIEWER_ID.to_string(),
            name: "Viewer!".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserValues {
    pub id: i32,
    pub name: String,
}

impl UserValues {
    pub const NODE_TYPE: &'static str = "User";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskValues {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
}

impl TaskValues {
    pub const NODE_TYPE: &'static str = "Task";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectValues {
    pub id: i32,
    pub name: String,
}

impl ProjectValues {
    pub const NODE_TYPE: &'static str = "Project";
}
