//! The process's authoritative application state cell.

use super::transitions::StateTransition;
use super::types::{ApplicationState, LifecycleOp};
use crate::application::Application;
use crate::info::{Configuration, MemoryLevel};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Guards the application's lifecycle state and drives the hooks of the
/// bound [`Application`].
///
/// The check and the state write of every guarded op happen under one write
/// lock, so two racing callers cannot both pass the same guard. Hooks run
/// after the lock is released.
pub struct ApplicationImpl {
    state: RwLock<ApplicationState>,
    record_id: AtomicI32,
    application: RwLock<Option<Arc<Application>>>,
}

impl Default for ApplicationImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationImpl {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(ApplicationState::Created),
            record_id: AtomicI32::new(0),
            application: RwLock::new(None),
        }
    }

    pub fn set_application(&self, application: Arc<Application>) {
        *self.application.write() = Some(application);
    }

    pub fn application(&self) -> Option<Arc<Application>> {
        self.application.read().clone()
    }

    pub fn state(&self) -> ApplicationState {
        *self.state.read()
    }

    /// Correlation id handed out by the manager; never validated.
    pub fn record_id(&self) -> i32 {
        self.record_id.load(Ordering::Relaxed)
    }

    pub fn set_record_id(&self, id: i32) {
        self.record_id.store(id, Ordering::Relaxed);
    }

    /// Created -> Ready, running the start hook.
    ///
    /// Unlike the other guarded ops this one also refuses while no
    /// application is bound. A binding is never cleared, so any non-terminal state past
    /// `Created` implies one; the other ops only skip their hook on an
    /// unbound cell, where the transition table already rejects them.
    pub fn perform_ready(&self) -> bool {
        if self.application().is_none() {
            error!(
                record_id = self.record_id(),
                "ApplicationImpl::perform_ready no application bound"
            );
            return false;
        }
        self.perform_guarded(LifecycleOp::Ready, |app| app.on_start())
    }

    pub fn perform_foreground(&self) -> bool {
        self.perform_guarded(LifecycleOp::Foreground, |app| app.on_foreground())
    }

    pub fn perform_background(&self) -> bool {
        self.perform_guarded(LifecycleOp::Background, |app| app.on_background())
    }

    pub fn perform_terminate(&self) -> bool {
        self.perform_guarded(LifecycleOp::Terminate, |app| app.on_terminate())
    }

    /// Forced teardown: ignores the current state and always runs the
    /// termination hook.
    pub fn perform_terminate_strong(&self) -> bool {
        let previous = {
            let mut state = self.state.write();
            std::mem::replace(&mut *state, ApplicationState::Terminated)
        };
        debug!(
            record_id = self.record_id(),
            from = %previous,
            "ApplicationImpl::perform_terminate_strong"
        );
        self.with_application(LifecycleOp::TerminateStrong, |app| app.on_terminate());
        true
    }

    pub fn perform_memory_level(&self, level: MemoryLevel) -> bool {
        debug!(record_id = self.record_id(), %level, "ApplicationImpl::perform_memory_level");
        self.with_application(LifecycleOp::MemoryLevel, |app| {
            app.on_memory_level(level);
        });
        true
    }

    pub fn perform_configuration_updated(&self, config: &Configuration) -> bool {
        debug!(
            record_id = self.record_id(),
            "ApplicationImpl::perform_configuration_updated"
        );
        self.with_application(LifecycleOp::ConfigurationUpdated, |app| {
            app.on_configuration_updated(config);
        });
        true
    }

    fn perform_guarded<F>(&self, op: LifecycleOp, hook: F) -> bool
    where
        F: FnOnce(&Application),
    {
        {
            let mut state = self.state.write();
            let from = *state;
            match StateTransition::validate(op, from) {
                Ok(next) => {
                    debug!(
                        record_id = self.record_id(),
                        %op,
                        %from,
                        to = %next,
                        "application state transition"
                    );
                    *state = next;
                }
                Err(err) => {
                    error!(record_id = self.record_id(), %op, %err, "lifecycle op rejected");
                    return false;
                }
            }
        }

        self.with_application(op, hook);
        true
    }

    fn with_application<F>(&self, op: LifecycleOp, f: F)
    where
        F: FnOnce(&Application),
    {
        match self.application() {
            Some(app) => f(&app),
            None => warn!(record_id = self.record_id(), %op, "no application bound; hook skipped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationHooks;
    use parking_lot::Mutex;

    #[derive(Clone, Default)]
    struct HookLog(Arc<Mutex<Vec<&'static str>>>);

    impl ApplicationHooks for HookLog {
        fn on_start(&self) {
            self.0.lock().push("start");
        }

        fn on_foreground(&self) {
            self.0.lock().push("foreground");
        }

        fn on_background(&self) {
            self.0.lock().push("background");
        }

        fn on_terminate(&self) {
            self.0.lock().push("terminate");
        }
    }

    fn bound() -> (ApplicationImpl, HookLog) {
        let log = HookLog::default();
        let cell = ApplicationImpl::new();
        cell.set_application(Arc::new(Application::new(log.clone())));
        (cell, log)
    }

    #[test]
    fn test_ready_requires_application() {
        let cell = ApplicationImpl::new();
        assert!(!cell.perform_ready());
        assert_eq!(cell.state(), ApplicationState::Created);
    }

    #[test]
    fn test_unbound_cell_rejects_every_guarded_op() {
        let cell = ApplicationImpl::new();
        assert!(!cell.perform_ready());
        assert!(!cell.perform_foreground());
        assert!(!cell.perform_background());
        assert!(!cell.perform_terminate());
        assert_eq!(cell.state(), ApplicationState::Created);
    }

    #[test]
    fn test_ready_only_once() {
        let (cell, log) = bound();
        assert!(cell.perform_ready());
        assert!(!cell.perform_ready());
        assert_eq!(cell.state(), ApplicationState::Ready);
        assert_eq!(*log.0.lock(), vec!["start"]);
    }

    #[test]
    fn test_rejected_op_leaves_state_and_skips_hook() {
        let (cell, log) = bound();
        assert!(!cell.perform_background());
        assert!(!cell.perform_terminate());
        assert_eq!(cell.state(), ApplicationState::Created);
        assert!(log.0.lock().is_empty());
    }

    #[test]
    fn test_terminate_strong_from_any_state() {
        let (cell, log) = bound();
        assert!(cell.perform_ready());
        assert!(cell.perform_terminate_strong());
        assert_eq!(cell.state(), ApplicationState::Terminated);
        assert!(cell.perform_terminate_strong());
        assert_eq!(*log.0.lock(), vec!["start", "terminate", "terminate"]);
        assert!(!cell.perform_foreground());
    }

    #[test]
    fn test_notifications_do_not_move_state() {
        let (cell, _log) = bound();
        assert!(cell.perform_memory_level(MemoryLevel::Low));
        let config = Configuration::default();
        assert!(cell.perform_configuration_updated(&config));
        assert_eq!(cell.state(), ApplicationState::Created);
    }

    #[test]
    fn test_record_id_accessors() {
        let cell = ApplicationImpl::new();
        assert_eq!(cell.record_id(), 0);
        cell.set_record_id(-7);
        assert_eq!(cell.record_id(), -7);
    }
}
