//! Process-side driver for appkit applications.
//!
//! [`MainThread`] receives the manager's lifecycle requests, constructs the
//! application through the loader, attaches a [`ContextDeal`] and applies
//! every transition through the core state machine.

pub mod app_mgr;
pub mod deal;
pub mod factory;
pub mod launch;
pub mod main_thread;

pub use app_mgr::{AppManager, DetachedAppManager};
pub use deal::ContextDeal;
pub use factory::{build_loader, build_main_thread};
pub use launch::AppLaunchData;
pub use main_thread::{HostTask, MainThread, MainThreadHandle, MainThreadState};
