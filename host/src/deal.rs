//! Metadata-backed [`Context`] delegate.

use appkit_core::api::{
    ApplicationInfo, ComponentConnection, ComponentInfo, ComponentManager, Context, ProcessInfo,
    Token, Want,
};
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

const FILES_DIR: &str = "files";
const CODE_CACHE_DIR: &str = "code_cache";
const NO_BACKUP_DIR: &str = "no_backup";

pub const DEFAULT_NO_BACKUP_DIR_MODE: u32 = 0o771;

#[derive(Default)]
struct DealState {
    application_info: Option<Arc<ApplicationInfo>>,
    component_info: Option<Arc<ComponentInfo>>,
    process_info: Option<Arc<ProcessInfo>>,
    manager: Option<Arc<dyn ComponentManager>>,
    token: Option<Token>,
    caller: Option<String>,
}

/// The concrete context attached to an application or component.
///
/// Paths derive from the application's `data_dir`; with no application info
/// set, every path is empty.
pub struct ContextDeal {
    state: RwLock<DealState>,
    no_backup_dir_mode: u32,
}

impl Default for ContextDeal {
    fn default() -> Self {
        Self::new(DEFAULT_NO_BACKUP_DIR_MODE)
    }
}

impl ContextDeal {
    pub fn new(no_backup_dir_mode: u32) -> Self {
        Self {
            state: RwLock::new(DealState::default()),
            no_backup_dir_mode,
        }
    }

    pub fn set_application_info(&self, info: Arc<ApplicationInfo>) {
        self.state.write().application_info = Some(info);
    }

    pub fn set_component_info(&self, info: Arc<ComponentInfo>) {
        self.state.write().component_info = Some(info);
    }

    pub fn set_process_info(&self, info: Arc<ProcessInfo>) {
        self.state.write().process_info = Some(info);
    }

    pub fn set_component_manager(&self, manager: Arc<dyn ComponentManager>) {
        self.state.write().manager = Some(manager);
    }

    pub fn set_token(&self, token: Token) {
        self.state.write().token = (!token.is_null()).then_some(token);
    }

    pub fn set_caller(&self, caller: impl Into<String>) {
        self.state.write().caller = Some(caller.into());
    }

    fn app_field(&self, f: impl FnOnce(&ApplicationInfo) -> &str) -> String {
        self.state
            .read()
            .application_info
            .as_deref()
            .map(|info| f(info).to_string())
            .unwrap_or_default()
    }

    /// `data_dir/name`, or empty when there is no data dir. An empty
    /// `data_dir` never composes a path at the filesystem root.
    fn join_data_dir(&self, name: &str) -> String {
        let data_dir = self.data_dir();
        if data_dir.is_empty() {
            return String::new();
        }
        format!("{data_dir}/{name}")
    }

    fn ensure_dir(&self, dir: &str, mode: u32) {
        let path = Path::new(dir);
        if path.exists() {
            return;
        }
        if let Err(err) = std::fs::create_dir_all(path) {
            warn!(dir, %err, "ContextDeal create dir failed");
            return;
        }
        set_mode(path, mode);
        debug!(dir, mode = %format_args!("{mode:o}"), "ContextDeal created dir");
    }

    fn manager(&self, call: &'static str) -> Option<Arc<dyn ComponentManager>> {
        let manager = self.state.read().manager.clone();
        if manager.is_none() {
            warn!(call, "ContextDeal no component manager");
        }
        manager
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(err) = std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)) {
        warn!(path = %path.display(), %err, "ContextDeal chmod failed");
    }
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) {}

impl Context for ContextDeal {
    fn package_name(&self) -> String {
        self.app_field(|info| &info.bundle_name)
    }

    fn process_name(&self) -> String {
        self.state
            .read()
            .process_info
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_default()
    }

    fn app_type(&self) -> String {
        self.app_field(|info| &info.app_type)
    }

    fn code_path(&self) -> String {
        self.app_field(|info| &info.code_path)
    }

    fn resource_path(&self) -> String {
        self.state
            .read()
            .component_info
            .as_ref()
            .map(|c| c.resource_path.clone())
            .unwrap_or_default()
    }

    fn data_dir(&self) -> String {
        self.app_field(|info| &info.data_dir)
    }

    fn cache_dir(&self) -> String {
        self.app_field(|info| &info.cache_dir)
    }

    fn database_dir(&self) -> String {
        self.app_field(|info| &info.database_dir)
    }

    fn files_dir(&self) -> String {
        self.join_data_dir(FILES_DIR)
    }

    fn code_cache_dir(&self) -> String {
        self.join_data_dir(CODE_CACHE_DIR)
    }

    fn no_backup_files_dir(&self) -> String {
        let dir = self.join_data_dir(NO_BACKUP_DIR);
        if !dir.is_empty() {
            self.ensure_dir(&dir, self.no_backup_dir_mode);
        }
        dir
    }

    fn external_cache_dir(&self) -> String {
        String::new()
    }

    fn external_files_dir(&self, _kind: &str) -> String {
        String::new()
    }

    fn distributed_dir(&self) -> String {
        String::new()
    }

    fn get_dir(&self, name: &str, mode: u32) -> String {
        let dir = self.join_data_dir(name);
        if !dir.is_empty() {
            self.ensure_dir(&dir, mode);
        }
        dir
    }

    fn delete_file(&self, name: &str) -> bool {
        let path = self.join_data_dir(name);
        if path.is_empty() {
            return false;
        }
        match std::fs::remove_file(&path) {
            Ok(()) => true,
            Err(err) => {
                debug!(path, %err, "ContextDeal::delete_file failed");
                false
            }
        }
    }

    fn application_info(&self) -> Option<Arc<ApplicationInfo>> {
        self.state.read().application_info.clone()
    }

    fn component_info(&self) -> Option<Arc<ComponentInfo>> {
        self.state.read().component_info.clone()
    }

    fn process_info(&self) -> Option<Arc<ProcessInfo>> {
        self.state.read().process_info.clone()
    }

    fn token(&self) -> Option<Token> {
        self.state.read().token
    }

    fn caller(&self) -> Option<String> {
        self.state.read().caller.clone()
    }

    fn start_component(&self, want: &Want, request_code: i32) -> bool {
        let token = self.token();
        self.manager("start_component")
            .is_some_and(|m| m.start(want, request_code, token))
    }

    fn stop_component(&self, want: &Want) -> bool {
        self.manager("stop_component").is_some_and(|m| m.stop(want))
    }

    fn connect_component(&self, want: &Want, connection: Arc<dyn ComponentConnection>) -> bool {
        let token = self.token();
        self.manager("connect_component")
            .is_some_and(|m| m.connect(want, connection, token))
    }

    fn disconnect_component(&self, connection: Arc<dyn ComponentConnection>) -> bool {
        self.manager("disconnect_component")
            .is_some_and(|m| m.disconnect(connection))
    }

    fn terminate_component(&self) -> bool {
        let Some(token) = self.token() else {
            warn!("ContextDeal::terminate_component no token");
            return false;
        };
        self.manager("terminate_component")
            .is_some_and(|m| m.terminate(token))
    }
}
