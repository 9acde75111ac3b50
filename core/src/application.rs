//! The per-process application object.

use crate::callbacks::{
    DispatchReport, ElementsCallback, ElementsEvent, ElementsRegistry, LifecycleCallbacks,
    LifecycleEvent, LifecycleRegistry, SavedState,
};
use crate::context::ContextContainer;
use crate::info::{Configuration, MemoryLevel};
use crate::record::{ComponentRecord, RecordStore};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

/// Application-defined lifecycle hooks. Every method defaults to a no-op.
pub trait ApplicationHooks: Send + Sync {
    fn on_start(&self) {}

    fn on_foreground(&self) {}

    fn on_background(&self) {}

    fn on_terminate(&self) {}

    fn on_configuration_updated(&self, _config: &Configuration) {}

    fn on_memory_level(&self, _level: MemoryLevel) {}
}

/// Hooks for an application that only relies on its listeners.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl ApplicationHooks for NoopHooks {}

/// One application per process.
///
/// Owns the user hooks, the context container, and both callback
/// registries. The record store is shared with the host and bound late.
pub struct Application {
    hooks: Box<dyn ApplicationHooks>,
    context: ContextContainer,
    lifecycle: LifecycleRegistry,
    elements: ElementsRegistry,
    record_store: RwLock<Option<Arc<RecordStore>>>,
}

impl Application {
    pub fn new(hooks: impl ApplicationHooks + 'static) -> Self {
        Self::from_boxed(Box::new(hooks))
    }

    pub fn from_boxed(hooks: Box<dyn ApplicationHooks>) -> Self {
        Self {
            hooks,
            context: ContextContainer::new(),
            lifecycle: LifecycleRegistry::lifecycle(),
            elements: ElementsRegistry::elements(),
            record_store: RwLock::new(None),
        }
    }

    pub fn hooks(&self) -> &dyn ApplicationHooks {
        self.hooks.as_ref()
    }

    pub fn context(&self) -> &ContextContainer {
        &self.context
    }

    pub fn lifecycle_callbacks(&self) -> &LifecycleRegistry {
        &self.lifecycle
    }

    pub fn elements_callbacks(&self) -> &ElementsRegistry {
        &self.elements
    }

    pub fn set_record_store(&self, store: Arc<RecordStore>) {
        *self.record_store.write() = Some(store);
    }

    pub fn record_store(&self) -> Option<Arc<RecordStore>> {
        self.record_store.read().clone()
    }

    // -- application hooks --

    pub fn on_start(&self) {
        info!("application started");
        self.hooks.on_start();
    }

    pub fn on_foreground(&self) {
        self.hooks.on_foreground();
    }

    pub fn on_background(&self) {
        self.hooks.on_background();
    }

    pub fn on_terminate(&self) {
        info!("application terminating");
        self.hooks.on_terminate();
    }

    pub fn on_configuration_updated(&self, config: &Configuration) -> DispatchReport {
        self.hooks.on_configuration_updated(config);
        self.elements
            .dispatch(&ElementsEvent::ConfigurationUpdated(config))
    }

    pub fn on_memory_level(&self, level: MemoryLevel) -> DispatchReport {
        self.hooks.on_memory_level(level);
        self.elements.dispatch(&ElementsEvent::MemoryLevel(level))
    }

    // -- component fan-out --

    pub fn on_component_start(&self, component: &ComponentRecord) -> DispatchReport {
        self.lifecycle.dispatch(&LifecycleEvent::Start(component))
    }

    pub fn on_component_inactive(&self, component: &ComponentRecord) -> DispatchReport {
        self.lifecycle.dispatch(&LifecycleEvent::Inactive(component))
    }

    pub fn on_component_background(&self, component: &ComponentRecord) -> DispatchReport {
        self.lifecycle.dispatch(&LifecycleEvent::Background(component))
    }

    pub fn on_component_foreground(&self, component: &ComponentRecord) -> DispatchReport {
        self.lifecycle.dispatch(&LifecycleEvent::Foreground(component))
    }

    pub fn on_component_active(&self, component: &ComponentRecord) -> DispatchReport {
        self.lifecycle.dispatch(&LifecycleEvent::Active(component))
    }

    pub fn on_component_stop(&self, component: &ComponentRecord) -> DispatchReport {
        self.lifecycle.dispatch(&LifecycleEvent::Stop(component))
    }

    pub fn on_component_save_state(&self, state: &SavedState) -> DispatchReport {
        self.lifecycle.dispatch(&LifecycleEvent::SaveState(state))
    }

    // -- registration --

    pub fn register_lifecycle_callbacks(
        &self,
        callbacks: impl Into<Option<Arc<dyn LifecycleCallbacks>>>,
    ) -> bool {
        self.lifecycle.register(callbacks)
    }

    pub fn unregister_lifecycle_callbacks(
        &self,
        callbacks: impl Into<Option<Arc<dyn LifecycleCallbacks>>>,
    ) -> usize {
        self.lifecycle.unregister(callbacks)
    }

    pub fn register_elements_callbacks(
        &self,
        callback: impl Into<Option<Arc<dyn ElementsCallback>>>,
    ) -> bool {
        self.elements.register(callback)
    }

    pub fn unregister_elements_callbacks(
        &self,
        callback: impl Into<Option<Arc<dyn ElementsCallback>>>,
    ) -> usize {
        self.elements.unregister(callback)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new(NoopHooks)
    }
}
