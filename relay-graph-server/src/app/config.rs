use relay_graph::Sort;
use serde::{Deserialize, Serialize};

use crate::store::SeedConfig;

#[derive(Clone, Default, Debug, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub ordering: OrderingConfig,
}

/// Ordering hints applied to each relation.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OrderingConfig {
    #[serde(default = "by_id")]
    pub viewer_users: Sort,
    #[serde(default = "by_id")]
    pub user_tasks: Sort,
    #[serde(default = "by_id")]
    pub project_users: Sort,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            viewer_users: by_id(),
            user_tasks: by_id(),
            project_users: by_id(),
        }
    }
}

fn by_id() -> Sort {
    Sort::ascending("id")
}
