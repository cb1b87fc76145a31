#![allow(dead_code)]
use relay_graph_server::{
    app::{AppConfig, RelayApp},
    graphql::{self, RelaySchema},
    store::SeedConfig,
};

pub fn test_schema() -> anyhow::Result<RelaySchema> {
    let config = AppConfig {
        seed: SeedConfig {
            users: 2,
            tasks_per_user: 3,
            projects: 1,
        },
        ..Default::default()
    };
    let app = RelayApp::init(config)?;
    Ok(graphql::schema(Some(app)))
}

pub async fn execute(schema: &RelaySchema, query: &str) -> anyhow::Result<serde_json::Value> {
    let response = schema.execute(query).await;
    if let Some(error) = response.errors.first() {
        anyhow::bail!("graphql error: {}", error.message);
    }
    Ok(response.data.into_json()?)
}

pub async fn execute_err(schema: &RelaySchema, query: &str) -> Vec<String> {
    let response = schema.execute(query).await;
    response.errors.into_iter().map(|e| e.message).collect()
}
