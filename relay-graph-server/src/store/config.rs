use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_users")]
    pub users: usize,
    #[serde(default = "default_tasks_per_user")]
    pub tasks_per_user: usize,
    #[serde(default = "default_projects")]
    pub projects: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users: default_users(),
            tasks_per_user: default_tasks_per_user(),
            projects: default_projects(),
        }
    }
}

fn default_users() -> usize {
    2
}

fn default_tasks_per_user() -> usize {
    3
}

fn default_projects() -> usize {
    1
}
