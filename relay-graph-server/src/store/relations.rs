use async_trait::async_trait;
use relay_graph::{AssociatedRows, Association, ConnectionSource, Sort};

use super::{entity::*, error::StoreError, Store};

pub struct UserTasks {
    store: Store,
}

impl UserTasks {
    pub fn new(store: &Store) -> Self {
        Self {
            store: store.clone(),
        }
    }
}

#[async_trait]
impl Association<UserValues> for UserTasks {
    type Node = TaskValues;
    type Error = StoreError;

    async fn fetch(
        &self,
        user: &UserValues,
        ordering: Option<&Sort>,
    ) -> Result<AssociatedRows<TaskValues, StoreError>, StoreError> {
        let tasks = self.store.list_tasks_for_user(user.id, ordering).await?;
        Ok(AssociatedRows::Loaded(tasks))
    }
}

/// Many-to-many through project memberships.
pub struct ProjectUsers {
    store: Store,
}

impl ProjectUsers {
    pub fn new(store: &Store) -> Self {
        Self {
            store: store.clone(),
        }
    }
}

#[async_trait]
impl Association<ProjectValues> for ProjectUsers {
    type Node = UserValues;
    type Error = StoreError;

    async fn fetch(
        &self,
        project: &ProjectValues,
        ordering: Option<&Sort>,
    ) -> Result<AssociatedRows<UserValues, StoreError>, StoreError> {
        let users = self
            .store
            .list_users_for_project(project.id, ordering)
            .await?;
        Ok(AssociatedRows::Loaded(users))
    }
}

/// Every user, paged through without loading them all.
pub struct ViewerUsers {
    store: Store,
}

impl ViewerUsers {
    pub fn new(store: &Store) -> Self {
        Self {
            store: store.clone(),
        }
    }
}

#[async_trait]
impl Association<ViewerValues> for ViewerUsers {
    type Node = UserValues;
    type Error = StoreError;

    async fn fetch(
        &self,
        _: &ViewerValues,
        ordering: Option<&Sort>,
    ) -> Result<AssociatedRows<UserValues, StoreError>, StoreError> {
        let ids = self.store.user_ids(ordering)?;
        Ok(AssociatedRows::Lazy(Box::new(UserPages {
            store: self.store.clone(),
            ids,
        })))
    }
}

struct UserPages {
    store: Store,
    ids: Vec<i32>,
}

#[async_trait]
impl ConnectionSource for UserPages {
    type Node = UserValues;
    type Error = StoreError;

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.ids.len())
    }

    async fn slice(&self, offset: usize, limit: usize) -> Result<Vec<UserValues>, StoreError> {
        let end = offset.saturating_add(limit).min(self.ids.len());
        let ids = self.ids.get(offset..end).unwrap_or_default();
        self.store.users_by_ids(ids)
    }
}
