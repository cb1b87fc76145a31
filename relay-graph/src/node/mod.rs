//! Resolution of global identifiers into typed nodes.
pub mod error;

use tracing::instrument;

use std::sync::Arc;

use crate::{
    cursor::{decode_global_id, encode_global_id, GlobalId},
    registry::{AnyNode, TypeRegistry, UnresolvedTypeError},
};

pub use error::*;

/// A node tagged with the registered type it was loaded as.
#[derive(Debug, Clone)]
pub struct ResolvedNode {
    pub node: AnyNode,
    pub type_name: String,
}

impl ResolvedNode {
    pub fn downcast_ref<T: std::any::Any>(&self) -> Option<&T> {
        self.node.downcast_ref::<T>()
    }
}

pub struct NodeDispatcher<E> {
    registry: Arc<TypeRegistry<E>>,
}

impl<E> Clone for NodeDispatcher<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<E: Send + 'static> NodeDispatcher<E> {
    pub fn new(registry: Arc<TypeRegistry<E>>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TypeRegistry<E> {
        &self.registry
    }

    /// Resolves an untrusted global id.
    ///
    /// `Ok(None)` is a regular "not found" and should surface as a null field.
    #[instrument(name = "relay_graph.node.resolve_node", skip(self))]
    pub async fn resolve_node(&self, global_id: &str) -> Result<Option<ResolvedNode>, NodeError<E>> {
        let id = decode_global_id(global_id)?;
        let node = self.registry.resolve(&id.type_name, &id.local_id).await?;
        Ok(node.map(|node| ResolvedNode {
            node,
            type_name: id.type_name,
        }))
    }

    pub fn type_name_for_node(&self, node: &AnyNode) -> Result<&str, UnresolvedTypeError> {
        self.registry.type_name_of(node)
    }

    /// Mints the global id of a node that was already resolved.
    pub fn global_id_for_node(
        &self,
        node: &AnyNode,
        local_id: impl std::fmt::Display,
    ) -> Result<GlobalId, NodeError<E>> {
        let type_name = self.type_name_for_node(node)?;
        Ok(encode_global_id(type_name, local_id)?)
    }

    /// Mints the global id for a value of the rust type registered as a node.
    pub fn global_id_for<T: std::any::Any>(
        &self,
        local_id: impl std::fmt::Display,
    ) -> Result<GlobalId, NodeError<E>> {
        let type_name = self.registry.type_name_for::<T>()?;
        Ok(encode_global_id(type_name, local_id)?)
    }
}
