//! Glue turning a relation of some parent entity into a connection resolver.
use async_trait::async_trait;
use tracing::instrument;

use crate::{connection::*, query::Sort};

/// Rows returned by the storage collaborator for one parent.
pub enum AssociatedRows<T, E> {
    Loaded(Vec<T>),
    Lazy(Box<dyn ConnectionSource<Node = T, Error = E>>),
}

impl<T, E> From<Vec<T>> for AssociatedRows<T, E> {
    fn from(rows: Vec<T>) -> Self {
        Self::Loaded(rows)
    }
}

impl<T, E> std::fmt::Debug for AssociatedRows<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loaded(rows) => write!(f, "Loaded({} rows)", rows.len()),
            Self::Lazy(_) => write!(f, "Lazy"),
        }
    }
}

/// A one-to-many relation from `P` to `Self::Node`.
///
/// Implementations fetch the related rows already ordered according to the
/// hint. Errors are handed back to the caller untouched.
#[async_trait]
pub trait Association<P: ?Sized + Sync>: Send + Sync {
    type Node;
    type Error;

    async fn fetch(
        &self,
        parent: &P,
        ordering: Option<&Sort>,
    ) -> Result<AssociatedRows<Self::Node, Self::Error>, Self::Error>;
}

pub struct ConnectionResolver<A> {
    association: A,
    ordering: Option<Sort>,
}

pub fn make_connection_resolver<A>(association: A) -> ConnectionResolver<A> {
    ConnectionResolver {
        association,
        ordering: None,
    }
}

impl<A> ConnectionResolver<A> {
    pub fn order_by(mut self, sort: Sort) -> Self {
        self.ordering = Some(sort);
        self
    }

    pub fn ordering(&self) -> Option<&Sort> {
        self.ordering.as_ref()
    }

    /// Resolves the connection of `parent` for the given arguments.
    ///
    /// Arguments are validated before anything is fetched, and the
    /// association is fetched exactly once.
    #[instrument(name = "relay_graph.association.resolve", skip(self, parent))]
    pub async fn resolve<P>(
        &self,
        parent: &P,
        args: &ConnectionArgs,
    ) -> Result<Connection<A::Node>, ResolveError<A::Error>>
    where
        P: ?Sized + Sync,
        A: Association<P>,
    {
        let request = args.page_request()?;
        let rows = self
            .association
            .fetch(parent, self.ordering.as_ref())
            .await
            .map_err(ResolveError::Source)?;
        match rows {
            AssociatedRows::Loaded(rows) => Ok(request.apply_to_vec(rows)),
            AssociatedRows::Lazy(source) => request.apply_to_source(source.as_ref()).await,
        }
    }
}
