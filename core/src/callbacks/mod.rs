//! Callback fan-out registries.
//!
//! Two registries hang off every application: one for component lifecycle
//! events and one for environment changes (configuration, memory level).
//! Both share [`CallbackRegistry`], which dispatches over a snapshot and
//! isolates panicking listeners.

mod elements;
mod lifecycle;
mod registry;

pub use elements::{ElementsCallback, ElementsEvent, ElementsRegistry};
pub use lifecycle::{LifecycleCallbacks, LifecycleEvent, LifecycleRegistry, SavedState};
pub use registry::{CallbackRegistry, DispatchReport};
