use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque handle to whatever runs a component's callbacks.
///
/// The core stores and hands these back; only the owner that attached one
/// knows its concrete type and can recover it with [`ExecutorHandle::downcast_ref`].
#[derive(Clone)]
pub struct ExecutorHandle {
    label: Arc<str>,
    inner: Arc<dyn Any + Send + Sync>,
}

impl ExecutorHandle {
    pub fn new<T: Any + Send + Sync>(label: impl Into<Arc<str>>, executor: T) -> Self {
        Self {
            label: label.into(),
            inner: Arc::new(executor),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Whether both handles point at the same executor.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ExecutorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutorHandle")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
