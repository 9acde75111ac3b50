#![allow(dead_code)]

use appkit_core::api::{
    Application, ApplicationHooks, ApplicationImpl, ApplicationState, ComponentInfo,
    ComponentRecord, Configuration, ElementsCallback, LifecycleCallbacks, MemoryLevel, Token,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared, ordered log of what hooks and listeners observed.
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().clone()
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }
}

pub struct RecordingHooks(pub EventLog);

impl ApplicationHooks for RecordingHooks {
    fn on_start(&self) {
        self.0.push("hook:start");
    }

    fn on_foreground(&self) {
        self.0.push("hook:foreground");
    }

    fn on_background(&self) {
        self.0.push("hook:background");
    }

    fn on_terminate(&self) {
        self.0.push("hook:terminate");
    }

    fn on_memory_level(&self, level: MemoryLevel) {
        self.0.push(format!("hook:memory:{level}"));
    }
}

/// Listener tagged with a name so fan-out order is visible in the log.
pub struct NamedListener {
    pub name: &'static str,
    pub log: EventLog,
}

impl NamedListener {
    pub fn new(name: &'static str, log: &EventLog) -> Arc<Self> {
        Arc::new(Self {
            name,
            log: log.clone(),
        })
    }
}

impl LifecycleCallbacks for NamedListener {
    fn on_component_start(&self, component: &ComponentRecord) {
        self.log
            .push(format!("{}:start:{}", self.name, component.info().name));
    }

    fn on_component_stop(&self, component: &ComponentRecord) {
        self.log
            .push(format!("{}:stop:{}", self.name, component.info().name));
    }
}

impl ElementsCallback for NamedListener {
    fn on_configuration_updated(&self, _config: &Configuration) {
        self.log.push(format!("{}:config", self.name));
    }

    fn on_memory_level(&self, level: MemoryLevel) {
        self.log.push(format!("{}:memory:{level}", self.name));
    }
}

/// A state cell with a recording application bound to it.
pub fn bound_impl() -> (ApplicationImpl, Arc<Application>, EventLog) {
    let log = EventLog::default();
    let app = Arc::new(Application::new(RecordingHooks(log.clone())));
    let cell = ApplicationImpl::new();
    cell.set_application(app.clone());
    (cell, app, log)
}

/// Drive a freshly bound cell into `target` through legal ops only.
pub fn drive_to(cell: &ApplicationImpl, target: ApplicationState) {
    let path: &[fn(&ApplicationImpl) -> bool] = match target {
        ApplicationState::Created => &[],
        ApplicationState::Ready => &[ApplicationImpl::perform_ready],
        ApplicationState::Foreground => &[
            ApplicationImpl::perform_ready,
            ApplicationImpl::perform_foreground,
        ],
        ApplicationState::Background => &[
            ApplicationImpl::perform_ready,
            ApplicationImpl::perform_foreground,
            ApplicationImpl::perform_background,
        ],
        ApplicationState::Terminated => &[
            ApplicationImpl::perform_ready,
            ApplicationImpl::perform_foreground,
            ApplicationImpl::perform_background,
            ApplicationImpl::perform_terminate,
        ],
    };
    for step in path {
        assert!(step(cell));
    }
    assert_eq!(cell.state(), target);
}

pub fn component(name: &str) -> Arc<ComponentRecord> {
    Arc::new(ComponentRecord::new(
        Arc::new(ComponentInfo::new("com.example.demo", name)),
        Token::new(),
    ))
}
