mod config;

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{routing::get, Extension, Router};

use crate::{app::RelayApp, graphql};

pub use config::*;

pub async fn run(config: ServerConfig, app: RelayApp) -> anyhow::Result<()> {
    let schema = graphql::schema(Some(app));

    let app = Router::new()
        .route("/graphql", get(playground).post(graphql_handler))
        .layer(Extension(schema));

    tracing::info!(port = config.port, "starting graphql server");
    let listener =
        tokio::net::TcpListener::bind(&std::net::SocketAddr::from(([0, 0, 0, 0], config.port)))
            .await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

pub async fn graphql_handler(
    Extension(schema): Extension<graphql::RelaySchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn playground() -> impl axum::response::IntoResponse {
    axum::response::Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}
