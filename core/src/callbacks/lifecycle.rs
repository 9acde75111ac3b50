use super::registry::{CallbackRegistry, DispatchReport};
use crate::record::ComponentRecord;
use serde_json::{Map, Value};

/// State a component hands out when asked to save itself.
pub type SavedState = Map<String, Value>;

/// Observer of per-component lifecycle events inside the application.
///
/// Every method has an empty default so listeners only implement what they
/// care about.
pub trait LifecycleCallbacks: Send + Sync {
    fn on_component_start(&self, _component: &ComponentRecord) {}

    fn on_component_inactive(&self, _component: &ComponentRecord) {}

    fn on_component_background(&self, _component: &ComponentRecord) {}

    fn on_component_foreground(&self, _component: &ComponentRecord) {}

    fn on_component_active(&self, _component: &ComponentRecord) {}

    fn on_component_stop(&self, _component: &ComponentRecord) {}

    fn on_component_save_state(&self, _state: &SavedState) {}
}

/// One component lifecycle notification.
#[derive(Debug, Clone, Copy)]
pub enum LifecycleEvent<'a> {
    Start(&'a ComponentRecord),
    Inactive(&'a ComponentRecord),
    Background(&'a ComponentRecord),
    Foreground(&'a ComponentRecord),
    Active(&'a ComponentRecord),
    Stop(&'a ComponentRecord),
    SaveState(&'a SavedState),
}

impl LifecycleEvent<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleEvent::Start(_) => "start",
            LifecycleEvent::Inactive(_) => "inactive",
            LifecycleEvent::Background(_) => "background",
            LifecycleEvent::Foreground(_) => "foreground",
            LifecycleEvent::Active(_) => "active",
            LifecycleEvent::Stop(_) => "stop",
            LifecycleEvent::SaveState(_) => "save_state",
        }
    }
}

pub type LifecycleRegistry = CallbackRegistry<dyn LifecycleCallbacks>;

impl CallbackRegistry<dyn LifecycleCallbacks> {
    pub fn lifecycle() -> Self {
        Self::new("lifecycle")
    }

    /// Deliver `event` to every registered listener in registration order.
    pub fn dispatch(&self, event: &LifecycleEvent<'_>) -> DispatchReport {
        tracing::trace!(
            event = event.name(),
            listeners = self.len(),
            "lifecycle dispatch"
        );
        self.for_each(|listener| match *event {
            LifecycleEvent::Start(c) => listener.on_component_start(c),
            LifecycleEvent::Inactive(c) => listener.on_component_inactive(c),
            LifecycleEvent::Background(c) => listener.on_component_background(c),
            LifecycleEvent::Foreground(c) => listener.on_component_foreground(c),
            LifecycleEvent::Active(c) => listener.on_component_active(c),
            LifecycleEvent::Stop(c) => listener.on_component_stop(c),
            LifecycleEvent::SaveState(s) => listener.on_component_save_state(s),
        })
    }
}
