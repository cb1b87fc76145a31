//! Cursor paginated windows over ordered collections.
mod args;
pub mod error;
#[cfg(feature = "graphql")]
mod graphql;
mod source;

use serde::Serialize;
use tracing::instrument;

use crate::cursor::OffsetCursor;

pub use args::*;
pub use error::*;
pub use source::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge<T> {
    pub node: T,
    pub cursor: OffsetCursor,
}

impl<T> Edge<T> {
    pub fn new(cursor: OffsetCursor, node: T) -> Self {
        Self { node, cursor }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub start_cursor: Option<OffsetCursor>,
    pub end_cursor: Option<OffsetCursor>,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
    pub total_count: usize,
}

impl<T> Connection<T> {
    pub fn empty() -> Self {
        Self {
            edges: Vec::new(),
            page_info: PageInfo::default(),
            total_count: 0,
        }
    }

    /// Builds the connection from the items inside `window`, where the first
    /// item sits at `window.start` of the full collection.
    fn from_window(window: Window, items: impl IntoIterator<Item = T>) -> Self {
        let edges: Vec<_> = items
            .into_iter()
            .take(window.len())
            .enumerate()
            .map(|(idx, node)| Edge::new(OffsetCursor::new(window.start + idx), node))
            .collect();
        let page_info = PageInfo {
            start_cursor: edges.first().map(|edge| edge.cursor),
            end_cursor: edges.last().map(|edge| edge.cursor),
            has_previous_page: window.has_previous_page(),
            has_next_page: window.has_next_page(),
        };
        Self {
            edges,
            page_info,
            total_count: window.total,
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|edge| &edge.node)
    }

    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Connection<U> {
        Connection {
            edges: self
                .edges
                .into_iter()
                .map(|edge| Edge::new(edge.cursor, f(edge.node)))
                .collect(),
            page_info: self.page_info,
            total_count: self.total_count,
        }
    }
}

impl PageRequest {
    pub fn apply_to_vec<T>(&self, items: Vec<T>) -> Connection<T> {
        let window = self.window(items.len());
        Connection::from_window(window, items.into_iter().skip(window.start))
    }

    /// Counts the source once, then fetches only the visible slice.
    pub async fn apply_to_source<S>(
        &self,
        source: &S,
    ) -> Result<Connection<S::Node>, ResolveError<S::Error>>
    where
        S: ConnectionSource + ?Sized,
    {
        let total = source.count().await.map_err(ResolveError::Source)?;
        let window = self.window(total);
        let items = if window.is_empty() {
            Vec::new()
        } else {
            source
                .slice(window.start, window.len())
                .await
                .map_err(ResolveError::Source)?
        };
        if items.len() < window.len() {
            tracing::debug!(
                expected = window.len(),
                received = items.len(),
                "source returned a short slice"
            );
        }
        Ok(Connection::from_window(window, items))
    }
}

/// Paginates a fully materialized ordered collection.
pub fn connection_from_vec<T>(
    items: Vec<T>,
    args: &ConnectionArgs,
) -> Result<Connection<T>, ConnectionError> {
    Ok(args.page_request()?.apply_to_vec(items))
}

pub fn connection_from_slice<T: Clone>(
    items: &[T],
    args: &ConnectionArgs,
) -> Result<Connection<T>, ConnectionError> {
    let request = args.page_request()?;
    let window = request.window(items.len());
    let visible = items
        .get(window.start..window.start + window.len())
        .unwrap_or_default();
    Ok(Connection::from_window(window, visible.iter().cloned()))
}

/// Paginates a lazily fetched ordered collection.
#[instrument(name = "relay_graph.connection.from_source", skip(source))]
pub async fn connection_from_source<S>(
    source: &S,
    args: &ConnectionArgs,
) -> Result<Connection<S::Node>, ResolveError<S::Error>>
where
    S: ConnectionSource + ?Sized,
{
    let request = args.page_request()?;
    request.apply_to_source(source).await
}
