use super::traits::{ComponentConnection, Context};
use crate::info::{ApplicationInfo, ComponentInfo, ProcessInfo, Want};
use crate::token::Token;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, error};

/// Late-bound holder of a base [`Context`].
///
/// Every call forwards to the attached delegate. Until one is attached,
/// accessors return empty values and operations return `false`; each such
/// call is logged at error severity.
#[derive(Default)]
pub struct ContextContainer {
    base: RwLock<Option<Arc<dyn Context>>>,
}

impl ContextContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `base`, replacing any previous delegate. `None` is ignored.
    pub fn attach_base_context(&self, base: impl Into<Option<Arc<dyn Context>>>) {
        let Some(base) = base.into() else {
            error!("ContextContainer::attach_base_context base is null");
            return;
        };
        let replaced = self.base.write().replace(base).is_some();
        debug!(replaced, "ContextContainer::attach_base_context");
    }

    pub fn is_attached(&self) -> bool {
        self.base.read().is_some()
    }

    pub fn base_context(&self) -> Option<Arc<dyn Context>> {
        self.base.read().clone()
    }

    fn with_base<R>(
        &self,
        call: &'static str,
        fallback: R,
        f: impl FnOnce(&dyn Context) -> R,
    ) -> R {
        match self.base_context() {
            Some(base) => f(base.as_ref()),
            None => {
                error!(call, "ContextContainer base context is not attached");
                fallback
            }
        }
    }
}

impl Context for ContextContainer {
    fn package_name(&self) -> String {
        self.with_base("package_name", String::new(), |c| c.package_name())
    }

    fn process_name(&self) -> String {
        self.with_base("process_name", String::new(), |c| c.process_name())
    }

    fn app_type(&self) -> String {
        self.with_base("app_type", String::new(), |c| c.app_type())
    }

    fn code_path(&self) -> String {
        self.with_base("code_path", String::new(), |c| c.code_path())
    }

    fn resource_path(&self) -> String {
        self.with_base("resource_path", String::new(), |c| c.resource_path())
    }

    fn data_dir(&self) -> String {
        self.with_base("data_dir", String::new(), |c| c.data_dir())
    }

    fn cache_dir(&self) -> String {
        self.with_base("cache_dir", String::new(), |c| c.cache_dir())
    }

    fn database_dir(&self) -> String {
        self.with_base("database_dir", String::new(), |c| c.database_dir())
    }

    fn files_dir(&self) -> String {
        self.with_base("files_dir", String::new(), |c| c.files_dir())
    }

    fn code_cache_dir(&self) -> String {
        self.with_base("code_cache_dir", String::new(), |c| c.code_cache_dir())
    }

    fn no_backup_files_dir(&self) -> String {
        self.with_base("no_backup_files_dir", String::new(), |c| {
            c.no_backup_files_dir()
        })
    }

    fn external_cache_dir(&self) -> String {
        self.with_base("external_cache_dir", String::new(), |c| {
            c.external_cache_dir()
        })
    }

    fn external_files_dir(&self, kind: &str) -> String {
        self.with_base("external_files_dir", String::new(), |c| {
            c.external_files_dir(kind)
        })
    }

    fn distributed_dir(&self) -> String {
        self.with_base("distributed_dir", String::new(), |c| c.distributed_dir())
    }

    fn get_dir(&self, name: &str, mode: u32) -> String {
        self.with_base("get_dir", String::new(), |c| c.get_dir(name, mode))
    }

    fn delete_file(&self, name: &str) -> bool {
        self.with_base("delete_file", false, |c| c.delete_file(name))
    }

    fn application_info(&self) -> Option<Arc<ApplicationInfo>> {
        self.with_base("application_info", None, |c| c.application_info())
    }

    fn component_info(&self) -> Option<Arc<ComponentInfo>> {
        self.with_base("component_info", None, |c| c.component_info())
    }

    fn process_info(&self) -> Option<Arc<ProcessInfo>> {
        self.with_base("process_info", None, |c| c.process_info())
    }

    fn token(&self) -> Option<Token> {
        self.with_base("token", None, |c| c.token())
    }

    fn caller(&self) -> Option<String> {
        self.with_base("caller", None, |c| c.caller())
    }

    fn start_component(&self, want: &Want, request_code: i32) -> bool {
        self.with_base("start_component", false, |c| {
            c.start_component(want, request_code)
        })
    }

    fn stop_component(&self, want: &Want) -> bool {
        self.with_base("stop_component", false, |c| c.stop_component(want))
    }

    fn connect_component(&self, want: &Want, connection: Arc<dyn ComponentConnection>) -> bool {
        self.with_base("connect_component", false, |c| {
            c.connect_component(want, connection)
        })
    }

    fn disconnect_component(&self, connection: Arc<dyn ComponentConnection>) -> bool {
        self.with_base("disconnect_component", false, |c| {
            c.disconnect_component(connection)
        })
    }

    fn terminate_component(&self) -> bool {
        self.with_base("terminate_component", false, |c| c.terminate_component())
    }
}
