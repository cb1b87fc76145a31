use async_trait::async_trait;

use std::{collections::HashMap, sync::Arc};

use relay_graph::{
    connection::{ConnectionSource, ResolveError},
    node::NodeError,
    *,
};

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    name: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Task {
    id: u32,
    user_id: u32,
    name: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Project {
    id: u32,
    name: String,
}

#[derive(Debug, thiserror::Error)]
#[error("StoreError: {0}")]
struct StoreError(String);

#[derive(Default)]
struct Store {
    users: HashMap<u32, User>,
    tasks: HashMap<u32, Task>,
    projects: HashMap<u32, Project>,
    memberships: Vec<(u32, u32)>,
}

impl Store {
    fn seeded() -> Arc<Self> {
        let mut store = Store::default();
        let mut task_id = 1;
        for (user_id, tasks) in [(1, 3), (2, 2)] {
            store.users.insert(
                user_id,
                User {
                    id: user_id,
                    name: format!("user-{user_id}"),
                },
            );
            for _ in 0..tasks {
                store.tasks.insert(
                    task_id,
                    Task {
                        id: task_id,
                        user_id,
                        name: format!("task-{task_id}"),
                    },
                );
                task_id += 1;
            }
        }
        store.projects.insert(
            1,
            Project {
                id: 1,
                name: "project-1".to_string(),
            },
        );
        store.memberships = vec![(1, 1), (1, 2)];
        Arc::new(store)
    }

    fn sorted<T: Clone>(rows: &HashMap<u32, T>, keep: impl Fn(&T) -> bool) -> Vec<(u32, T)> {
        let mut rows: Vec<_> = rows
            .iter()
            .filter(|(_, row)| keep(row))
            .map(|(id, row)| (*id, row.clone()))
            .collect();
        rows.sort_by_key(|(id, _)| *id);
        rows
    }
}

struct UserTasks(Arc<Store>);

#[async_trait]
impl Association<User> for UserTasks {
    type Node = Task;
    type Error = StoreError;

    async fn fetch(
        &self,
        parent: &User,
        _: Option<&Sort>,
    ) -> Result<AssociatedRows<Task, StoreError>, StoreError> {
        let tasks = Store::sorted(&self.0.tasks, |task| task.user_id == parent.id);
        Ok(tasks.into_iter().map(|(_, task)| task).collect::<Vec<_>>().into())
    }
}

struct ProjectUsers(Arc<Store>);

struct MemberSource {
    store: Arc<Store>,
    user_ids: Vec<u32>,
}

#[async_trait]
impl ConnectionSource for MemberSource {
    type Node = User;
    type Error = StoreError;

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.user_ids.len())
    }

    async fn slice(&self, offset: usize, limit: usize) -> Result<Vec<User>, StoreError> {
        self.user_ids
            .iter()
            .skip(offset)
            .take(limit)
            .map(|id| {
                self.store
                    .users
                    .get(id)
                    .cloned()
                    .ok_or_else(|| StoreError(format!("dangling member {id}")))
            })
            .collect()
    }
}

#[async_trait]
impl Association<Project> for ProjectUsers {
    type Node = User;
    type Error = StoreError;

    async fn fetch(
        &self,
        parent: &Project,
        _: Option<&Sort>,
    ) -> Result<AssociatedRows<User, StoreError>, StoreError> {
        let mut user_ids: Vec<_> = self
            .0
            .memberships
            .iter()
            .filter(|(project_id, _)| *project_id == parent.id)
            .map(|(_, user_id)| *user_id)
            .collect();
        user_ids.sort_unstable();
        Ok(AssociatedRows::Lazy(Box::new(MemberSource {
            store: Arc::clone(&self.0),
            user_ids,
        })))
    }
}

fn registry(store: &Arc<Store>) -> anyhow::Result<TypeRegistry<StoreError>> {
    let mut builder = TypeRegistry::<StoreError>::builder();
    let users = Arc::clone(store);
    builder.register("User", move |id: String| {
        let users = Arc::clone(&users);
        async move {
            let Ok(id) = id.parse::<u32>() else {
                return Ok::<_, StoreError>(None);
            };
            Ok(users.users.get(&id).cloned())
        }
    })?;
    let tasks = Arc::clone(store);
    builder.register("Task", move |id: String| {
        let tasks = Arc::clone(&tasks);
        async move {
            let Ok(id) = id.parse::<u32>() else {
                return Ok::<_, StoreError>(None);
            };
            Ok(tasks.tasks.get(&id).cloned())
        }
    })?;
    let projects = Arc::clone(store);
    builder.register("Project", move |id: String| {
        let projects = Arc::clone(&projects);
        async move {
            let Ok(id) = id.parse::<u32>() else {
                return Ok::<_, StoreError>(None);
            };
            Ok(projects.projects.get(&id).cloned())
        }
    })?;
    builder.register("Archive", |id: String| async move {
        Err::<Option<String>, _>(StoreError(format!("archive offline, cannot load {id}")))
    })?;
    Ok(builder.build())
}

#[tokio::test]
async fn user_tasks_connection() -> anyhow::Result<()> {
    let store = Store::seeded();
    let resolver = make_connection_resolver(UserTasks(Arc::clone(&store)));
    let user_a = store.users[&1].clone();

    let page = resolver
        .resolve(&user_a, &ConnectionArgs::default().first(2))
        .await?;
    let names: Vec<_> = page.nodes().map(|task| task.name.as_str()).collect();
    assert_eq!(names, vec!["task-1", "task-2"]);
    assert!(page.page_info.has_next_page);

    let end_cursor = page.page_info.end_cursor.expect("has edges").encode();
    let rest = resolver
        .resolve(&user_a, &ConnectionArgs::default().after(end_cursor).first(2))
        .await?;
    let names: Vec<_> = rest.nodes().map(|task| task.name.as_str()).collect();
    assert_eq!(names, vec!["task-3"]);
    assert!(!rest.page_info.has_next_page);
    assert!(rest.page_info.has_previous_page);
    Ok(())
}

#[tokio::test]
async fn project_users_through_lazy_source() -> anyhow::Result<()> {
    let store = Store::seeded();
    let resolver = make_connection_resolver(ProjectUsers(Arc::clone(&store)));
    let project = store.projects[&1].clone();

    let page = resolver
        .resolve(&project, &ConnectionArgs::default().last(1))
        .await?;
    assert_eq!(page.total_count, 2);
    assert_eq!(page.into_nodes(), vec![store.users[&2].clone()]);
    Ok(())
}

#[tokio::test]
async fn garbage_cursor_on_lazy_source() -> anyhow::Result<()> {
    let store = Store::seeded();
    let resolver = make_connection_resolver(ProjectUsers(Arc::clone(&store)));
    let project = store.projects[&1].clone();
    let res = resolver
        .resolve(&project, &ConnectionArgs::default().before("not-a-cursor"))
        .await;
    assert!(matches!(res, Err(ResolveError::Connection(_))));
    Ok(())
}

#[tokio::test]
async fn node_dispatch_across_types() -> anyhow::Result<()> {
    let store = Store::seeded();
    let dispatcher = NodeDispatcher::new(Arc::new(registry(&store)?));

    for (type_name, local_id) in [("User", "1"), ("Task", "4"), ("Project", "1")] {
        let id = encode_global_id(type_name, local_id)?;
        let resolved = dispatcher
            .resolve_node(id.as_str())
            .await?
            .expect("seeded row exists");
        assert_eq!(resolved.type_name, type_name);
        assert_eq!(dispatcher.type_name_for_node(&resolved.node)?, type_name);
    }

    let task = dispatcher
        .resolve_node(encode_global_id("Task", "4")?.as_str())
        .await?
        .expect("task 4 exists");
    assert_eq!(task.downcast_ref::<Task>().map(|t| t.user_id), Some(2));

    let missing = encode_global_id("User", "999")?;
    assert!(dispatcher.resolve_node(missing.as_str()).await?.is_none());

    for local_id in ["abc", "99999999999"] {
        let unparsable = encode_global_id("User", local_id)?;
        assert!(dispatcher.resolve_node(unparsable.as_str()).await?.is_none());
    }

    let archived = encode_global_id("Archive", "1")?;
    assert!(matches!(
        dispatcher.resolve_node(archived.as_str()).await,
        Err(NodeError::Load(StoreError(_)))
    ));
    Ok(())
}
