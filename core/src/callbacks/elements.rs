use super::registry::{CallbackRegistry, DispatchReport};
use crate::info::{Configuration, MemoryLevel};

/// Observer of process-wide environment changes.
pub trait ElementsCallback: Send + Sync {
    fn on_configuration_updated(&self, _config: &Configuration) {}

    fn on_memory_level(&self, _level: MemoryLevel) {}
}

#[derive(Debug, Clone, Copy)]
pub enum ElementsEvent<'a> {
    ConfigurationUpdated(&'a Configuration),
    MemoryLevel(MemoryLevel),
}

pub type ElementsRegistry = CallbackRegistry<dyn ElementsCallback>;

impl CallbackRegistry<dyn ElementsCallback> {
    pub fn elements() -> Self {
        Self::new("elements")
    }

    pub fn dispatch(&self, event: &ElementsEvent<'_>) -> DispatchReport {
        self.for_each(|listener| match *event {
            ElementsEvent::ConfigurationUpdated(config) => {
                listener.on_configuration_updated(config)
            }
            ElementsEvent::MemoryLevel(level) => listener.on_memory_level(level),
        })
    }
}
