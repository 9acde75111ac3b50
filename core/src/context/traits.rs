use crate::info::{ApplicationInfo, ComponentInfo, ProcessInfo, Want};
use crate::token::Token;
use std::sync::Arc;

/// Package and runtime context visible to component code.
///
/// Path accessors return an empty string when the information is not
/// available; metadata accessors return `None`.
pub trait Context: Send + Sync {
    fn package_name(&self) -> String;

    fn process_name(&self) -> String;

    fn app_type(&self) -> String;

    fn code_path(&self) -> String;

    fn resource_path(&self) -> String;

    fn data_dir(&self) -> String;

    fn cache_dir(&self) -> String;

    fn database_dir(&self) -> String;

    fn files_dir(&self) -> String;

    fn code_cache_dir(&self) -> String;

    fn no_backup_files_dir(&self) -> String;

    fn external_cache_dir(&self) -> String;

    fn external_files_dir(&self, kind: &str) -> String;

    fn distributed_dir(&self) -> String;

    /// `data_dir/name`, created with `mode` when missing.
    fn get_dir(&self, name: &str, mode: u32) -> String;

    /// Remove `data_dir/name`.
    fn delete_file(&self, name: &str) -> bool;

    fn application_info(&self) -> Option<Arc<ApplicationInfo>>;

    fn component_info(&self) -> Option<Arc<ComponentInfo>>;

    fn process_info(&self) -> Option<Arc<ProcessInfo>>;

    fn token(&self) -> Option<Token>;

    /// Identity of whoever started this component, if known.
    fn caller(&self) -> Option<String>;

    fn start_component(&self, want: &Want, request_code: i32) -> bool;

    fn stop_component(&self, want: &Want) -> bool;

    fn connect_component(&self, want: &Want, connection: Arc<dyn ComponentConnection>) -> bool;

    fn disconnect_component(&self, connection: Arc<dyn ComponentConnection>) -> bool;

    fn terminate_component(&self) -> bool;
}

/// Client side of the external component-manager service.
pub trait ComponentManager: Send + Sync {
    fn start(&self, want: &Want, request_code: i32, caller: Option<Token>) -> bool;

    fn stop(&self, want: &Want) -> bool;

    fn connect(
        &self,
        want: &Want,
        connection: Arc<dyn ComponentConnection>,
        caller: Option<Token>,
    ) -> bool;

    fn disconnect(&self, connection: Arc<dyn ComponentConnection>) -> bool;

    fn terminate(&self, token: Token) -> bool;
}

/// Receives the outcome of connect/disconnect requests.
pub trait ComponentConnection: Send + Sync {
    fn on_connect_done(&self, _component: &ComponentInfo, _result_code: i32) {}

    fn on_disconnect_done(&self, _component: &ComponentInfo, _result_code: i32) {}
}
