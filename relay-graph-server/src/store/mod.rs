//! In-memory storage standing in for a relational database.
//!
//! Rows are created once from a [`SeedConfig`] and never change afterwards.
mod config;
mod entity;
pub mod error;
mod relations;

use relay_graph::{ListDirection, Sort};
use tracing::instrument;

use std::{collections::BTreeMap, sync::Arc};

pub use config::*;
pub use entity::*;
pub use error::*;
pub use relations::*;

struct Tables {
    viewer: ViewerValues,
    users: BTreeMap<i32, UserValues>,
    tasks: BTreeMap<i32, TaskValues>,
    projects: BTreeMap<i32, ProjectValues>,
    project_members: Vec<(i32, i32)>,
}

#[derive(Clone)]
pub struct Store {
    tables: Arc<Tables>,
}

impl Store {
    pub fn seed(config: &SeedConfig) -> Result<Self, StoreError> {
        let user_count = row_count("users", config.users)?;
        let project_count = row_count("projects", config.projects)?;
        row_count("tasks", config.users.saturating_mul(config.tasks_per_user))?;

        let mut users = BTreeMap::new();
        let mut tasks = BTreeMap::new();
        let mut projects = BTreeMap::new();
        let mut project_members = Vec::new();

        let mut task_id = 0;
        for user_id in 1..=user_count {
            users.insert(
                user_id,
                UserValues {
                    id: user_id,
                    name: format!("user-{user_id}"),
                },
            );
            for _ in 0..config.tasks_per_user {
                task_id += 1;
                tasks.insert(
                    task_id,
                    TaskValues {
                        id: task_id,
                        user_id,
                        name: format!("task-{task_id}"),
                    },
                );
            }
        }
        for project_id in 1..=project_count {
            projects.insert(
                project_id,
                ProjectValues {
                    id: project_id,
                    name: format!("project-{project_id}"),
                },
            );
            project_members.extend(users.keys().map(|user_id| (project_id, *user_id)));
        }

        tracing::debug!(
            users = users.len(),
            tasks = tasks.len(),
            projects = projects.len(),
            "seeded store"
        );

        Ok(Self {
            tables: Arc::new(Tables {
                viewer: ViewerValues::default(),
                users,
                tasks,
                projects,
                project_members,
            }),
        })
    }

    pub fn viewer(&self) -> ViewerValues {
        self.tables.viewer.clone()
    }

    pub async fn find_viewer(&self, id: &str) -> Result<Option<ViewerValues>, StoreError> {
        Ok((self.tables.viewer.id == id).then(|| self.viewer()))
    }

    #[instrument(name = "store.find_user", skip(self), err)]
    pub async fn find_user(&self, id: i32) -> Result<Option<UserValues>, StoreError> {
        Ok(self.tables.users.get(&id).cloned())
    }

    #[instrument(name = "store.find_task", skip(self), err)]
    pub async fn find_task(&self, id: i32) -> Result<Option<TaskValues>, StoreError> {
        Ok(self.tables.tasks.get(&id).cloned())
    }

    #[instrument(name = "store.find_project", skip(self), err)]
    pub async fn find_project(&self, id: i32) -> Result<Option<ProjectValues>, StoreError> {
        Ok(self.tables.projects.get(&id).cloned())
    }

    #[instrument(name = "store.list_tasks_for_user", skip(self), err)]
    pub async fn list_tasks_for_user(
        &self,
        user_id: i32,
        sort: Option<&Sort>,
    ) -> Result<Vec<TaskValues>, StoreError> {
        let mut tasks: Vec<_> = self
            .tables
            .tasks
            .values()
            .filter(|task| task.user_id == user_id)
            .cloned()
            .collect();
        sort_rows(&mut tasks, sort, |task, key| match key {
            "id" => Ok(SortKey::Id(task.id)),
            "name" => Ok(SortKey::Name(task.name.clone())),
            other => Err(StoreError::UnknownSortKey(other.to_string())),
        })?;
        Ok(tasks)
    }

    #[instrument(name = "store.list_users_for_project", skip(self), err)]
    pub async fn list_users_for_project(
        &self,
        project_id: i32,
        sort: Option<&Sort>,
    ) -> Result<Vec<UserValues>, StoreError> {
        let mut users = self
            .tables
            .project_members
            .iter()
            .filter(|(project, _)| *project == project_id)
            .map(|(_, user_id)| {
                self.tables
                    .users
                    .get(user_id)
                    .cloned()
                    .ok_or(StoreError::DanglingReference("user", *user_id))
            })
            .collect::<Result<Vec<_>, _>>()?;
        sort_rows(&mut users, sort, user_sort_key)?;
        Ok(users)
    }

    /// Ids of all users in the requested order, for paging through them lazily.
    pub(crate) fn user_ids(&self, sort: Option<&Sort>) -> Result<Vec<i32>, StoreError> {
        let mut users: Vec<_> = self.tables.users.values().collect();
        sort_rows(&mut users, sort, |user, key| user_sort_key(user, key))?;
        Ok(users.into_iter().map(|user| user.id).collect())
    }

    pub(crate) fn users_by_ids(&self, ids: &[i32]) -> Result<Vec<UserValues>, StoreError> {
        ids.iter()
            .map(|id| {
                self.tables
                    .users
                    .get(id)
                    .cloned()
                    .ok_or(StoreError::DanglingReference("user", *id))
            })
            .collect()
    }
}

fn row_count(table: &'static str, count: usize) -> Result<i32, StoreError> {
    i32::try_from(count).map_err(|_| StoreError::SeedTooLarge(table, count))
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Id(i32),
    Name(String),
}

fn user_sort_key(user: &UserValues, key: &str) -> Result<SortKey, StoreError> {
    match key {
        "id" => Ok(SortKey::Id(user.id)),
        "name" => Ok(SortKey::Name(user.name.clone())),
        other => Err(StoreError::UnknownSortKey(other.to_string())),
    }
}

fn sort_rows<T>(
    rows: &mut Vec<T>,
    sort: Option<&Sort>,
    key: impl Fn(&T, &str) -> Result<SortKey, StoreError>,
) -> Result<(), StoreError> {
    let Some(sort) = sort else {
        return Ok(());
    };
    let mut keyed = rows
        .drain(..)
        .map(|row| Ok((key(&row, &sort.by)?, row)))
        .collect::<Result<Vec<_>, StoreError>>()?;
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    if sort.direction == ListDirection::Descending {
        keyed.reverse();
    }
    rows.extend(keyed.into_iter().map(|(_, row)| row));
    Ok(())
}
