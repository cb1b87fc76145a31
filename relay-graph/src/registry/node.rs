use std::{
    any::{Any, TypeId},
    sync::Arc,
};

/// A resolved entity whose concrete type is only known at runtime.
#[derive(Clone)]
pub struct AnyNode {
    inner: Arc<dyn Any + Send + Sync>,
    rust_type: &'static str,
}

impl AnyNode {
    pub fn new<T: Any + Send + Sync>(node: T) -> Self {
        Self {
            inner: Arc::new(node),
            rust_type: std::any::type_name::<T>(),
        }
    }

    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub fn downcast<T: Any + Send + Sync>(self) -> Result<Arc<T>, Self> {
        let rust_type = self.rust_type;
        self.inner
            .downcast::<T>()
            .map_err(|inner| Self { inner, rust_type })
    }

    pub(crate) fn node_type_id(&self) -> TypeId {
        (*self.inner).type_id()
    }

    pub(crate) fn rust_type(&self) -> &'static str {
        self.rust_type
    }
}

impl std::fmt::Debug for AnyNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AnyNode({})", self.rust_type)
    }
}
