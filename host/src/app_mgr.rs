use appkit_core::api::Token;

/// Client side of the external application-manager service.
///
/// The main thread reports each completed transition, tagged with the
/// record id handed over at launch.
pub trait AppManager: Send + Sync {
    fn application_foregrounded(&self, record_id: i32);

    fn application_backgrounded(&self, record_id: i32);

    fn application_terminated(&self, record_id: i32);

    fn component_cleaned(&self, token: Token);
}

/// Reports nowhere; for hosts running without a manager.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedAppManager;

impl AppManager for DetachedAppManager {
    fn application_foregrounded(&self, _record_id: i32) {}

    fn application_backgrounded(&self, _record_id: i32) {}

    fn application_terminated(&self, _record_id: i32) {}

    fn component_cleaned(&self, _token: Token) {}
}
