use std::sync::Arc;

use appkit_core::api::{AppkitConfig, ApplicationLoader};
use tracing::{info, warn};

use crate::app_mgr::AppManager;
use crate::main_thread::{MainThread, MainThreadHandle};

/// Build the application loader: the explicit registration phase a host
/// runs once before its main thread starts.
pub fn build_loader<F>(cfg: &AppkitConfig, register: F) -> Arc<ApplicationLoader>
where
    F: FnOnce(&mut ApplicationLoader),
{
    let mut loader = ApplicationLoader::new(cfg.loader.clone());
    register(&mut loader);

    if loader.is_empty() {
        warn!("application loader has no registered constructors");
    } else if cfg.loader.fallback_to_default && !loader.contains(&cfg.loader.default_application)
    {
        warn!(
            default = %cfg.loader.default_application,
            "fallback enabled but default application is not registered"
        );
    }
    info!(names = ?loader.names(), "application loader ready");
    Arc::new(loader)
}

pub fn build_main_thread(
    cfg: &AppkitConfig,
    loader: Arc<ApplicationLoader>,
    app_mgr: Arc<dyn AppManager>,
) -> (MainThreadHandle, MainThread) {
    MainThread::new(cfg.host.clone(), loader, app_mgr)
}
