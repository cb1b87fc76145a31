//! Mapping from node type names to the loaders that fetch them.
//!
//! A [`TypeRegistryBuilder`] collects registrations during setup. Calling
//! [`TypeRegistryBuilder::build`] freezes them into a [`TypeRegistry`] that is
//! only ever read afterwards and can be shared across concurrent resolutions.
pub mod error;
mod node;

use futures::future::{BoxFuture, FutureExt};
use tracing::instrument;

use std::{
    any::{Any, TypeId},
    collections::HashMap,
    future::Future,
    sync::Arc,
};

use crate::cursor::validate_type_name;

pub use error::*;
pub use node::*;

type LoadFuture<E> = BoxFuture<'static, Result<Option<AnyNode>, E>>;
type Loader<E> = Arc<dyn Fn(String) -> LoadFuture<E> + Send + Sync>;

struct Registration<E> {
    loader: Loader<E>,
    node_type: TypeId,
}

pub struct TypeRegistryBuilder<E> {
    registrations: HashMap<String, Registration<E>>,
    type_names: HashMap<TypeId, String>,
}

impl<E> Default for TypeRegistryBuilder<E> {
    fn default() -> Self {
        Self {
            registrations: HashMap::new(),
            type_names: HashMap::new(),
        }
    }
}

impl<E: Send + 'static> TypeRegistryBuilder<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the loader for `type_name`, whose nodes are values of `T`.
    ///
    /// Returns `true` when an earlier registration under the same name was
    /// replaced. Replacing is allowed (last write wins) but gets logged.
    pub fn register<T, F, Fut>(
        &mut self,
        type_name: impl Into<String>,
        loader: F,
    ) -> Result<bool, InvalidRegistration>
    where
        T: Any + Send + Sync,
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<T>, E>> + Send + 'static,
    {
        let type_name = type_name.into();
        validate_type_name(&type_name)?;
        let node_type = TypeId::of::<T>();

        let loader: Loader<E> = Arc::new(move |local_id: String| {
            let load = loader(local_id);
            async move { load.await.map(|node| node.map(AnyNode::new)) }.boxed()
        });

        let replaced = self
            .registrations
            .insert(type_name.clone(), Registration { loader, node_type });
        if let Some(previous) = &replaced {
            tracing::warn!(type_name = %type_name, "overwriting existing node type registration");
            if previous.node_type != node_type {
                self.type_names.remove(&previous.node_type);
            }
        }
        if let Some(previous_name) = self.type_names.insert(node_type, type_name.clone()) {
            if previous_name != type_name {
                tracing::warn!(
                    rust_type = std::any::type_name::<T>(),
                    previous = %previous_name,
                    type_name = %type_name,
                    "rust type rebound to a different node type name"
                );
                self.registrations.remove(&previous_name);
            }
        }
        Ok(replaced.is_some())
    }

    pub fn build(self) -> TypeRegistry<E> {
        TypeRegistry {
            registrations: self.registrations,
            type_names: self.type_names,
        }
    }
}

/// Read-only set of node types, built once at setup.
pub struct TypeRegistry<E> {
    registrations: HashMap<String, Registration<E>>,
    type_names: HashMap<TypeId, String>,
}

impl<E: Send + 'static> TypeRegistry<E> {
    pub fn builder() -> TypeRegistryBuilder<E> {
        TypeRegistryBuilder::default()
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.registrations.contains_key(type_name)
    }

    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.registrations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Loads a node by type name and local id.
    ///
    /// `Ok(None)` means the id was well formed but no such row exists.
    #[instrument(name = "relay_graph.registry.resolve", skip(self))]
    pub async fn resolve(
        &self,
        type_name: &str,
        local_id: &str,
    ) -> Result<Option<AnyNode>, RegistryError<E>> {
        let registration = self
            .registrations
            .get(type_name)
            .ok_or_else(|| RegistryError::UnknownType(type_name.to_string()))?;
        (registration.loader)(local_id.to_string())
            .await
            .map_err(RegistryError::Load)
    }

    /// Name of the registered type `node` was loaded as.
    pub fn type_name_of(&self, node: &AnyNode) -> Result<&str, UnresolvedTypeError> {
        self.type_names
            .get(&node.node_type_id())
            .map(String::as_str)
            .ok_or(UnresolvedTypeError(node.rust_type()))
    }

    pub fn type_name_for<T: Any>(&self) -> Result<&str, UnresolvedTypeError> {
        self.type_names
            .get(&TypeId::of::<T>())
            .map(String::as_str)
            .ok_or(UnresolvedTypeError(std::any::type_name::<T>()))
    }
}

impl<E> std::fmt::Debug for TypeRegistry<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.registrations.keys().collect();
        names.sort_unstable();
        f.debug_struct("TypeRegistry")
            .field("types", &names)
            .finish()
    }
}
