#![allow(dead_code)]

use appkit_core::api::{
    AppkitConfig, Application, ApplicationHooks, ApplicationInfo, ComponentRecord, Configuration,
    ElementsCallback, LifecycleCallbacks, LoaderConfig, MemoryLevel, ProcessInfo, Token,
};
use appkit_host::{build_loader, build_main_thread, AppLaunchData, AppManager, MainThreadHandle};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;

#[derive(Clone, Default)]
pub struct Log(Arc<Mutex<Vec<String>>>);

impl Log {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().clone()
    }
}

pub struct RecordingAppManager(pub Log);

impl AppManager for RecordingAppManager {
    fn application_foregrounded(&self, record_id: i32) {
        self.0.push(format!("foregrounded:{record_id}"));
    }

    fn application_backgrounded(&self, record_id: i32) {
        self.0.push(format!("backgrounded:{record_id}"));
    }

    fn application_terminated(&self, record_id: i32) {
        self.0.push(format!("terminated:{record_id}"));
    }

    fn component_cleaned(&self, _token: Token) {
        self.0.push("cleaned");
    }
}

pub struct AppHooks(pub Log);

impl ApplicationHooks for AppHooks {
    fn on_start(&self) {
        self.0.push("app:start");
    }

    fn on_terminate(&self) {
        self.0.push("app:terminate");
    }
}

pub struct ComponentListener(pub Log);

impl LifecycleCallbacks for ComponentListener {
    fn on_component_start(&self, component: &ComponentRecord) {
        self.0.push(format!("component:start:{}", component.info().name));
    }

    fn on_component_stop(&self, component: &ComponentRecord) {
        self.0.push(format!("component:stop:{}", component.info().name));
    }
}

pub struct ElementsListener(pub Log);

impl ElementsCallback for ElementsListener {
    fn on_configuration_updated(&self, config: &Configuration) {
        let language = config.get("language").unwrap_or("-");
        self.0.push(format!("elements:config:{language}"));
    }

    fn on_memory_level(&self, level: MemoryLevel) {
        self.0.push(format!("elements:memory:{level}"));
    }
}

pub struct Harness {
    pub handle: MainThreadHandle,
    pub join: JoinHandle<()>,
    pub app_log: Log,
    pub mgr_log: Log,
}

/// Start a main thread whose loader knows one application, "Demo".
pub fn start(loader_cfg: LoaderConfig) -> Harness {
    let app_log = Log::default();
    let mgr_log = Log::default();
    let cfg = AppkitConfig {
        loader: loader_cfg,
        ..AppkitConfig::default()
    };

    let hooks_log = app_log.clone();
    let loader = build_loader(&cfg, move |loader| {
        loader.register("Demo", move || {
            let app = Application::new(AppHooks(hooks_log.clone()));
            let component: Arc<dyn LifecycleCallbacks> =
                Arc::new(ComponentListener(hooks_log.clone()));
            app.register_lifecycle_callbacks(component);
            let elements: Arc<dyn ElementsCallback> =
                Arc::new(ElementsListener(hooks_log.clone()));
            app.register_elements_callbacks(elements);
            app
        });
    });

    let (handle, main_thread) =
        build_main_thread(&cfg, loader, Arc::new(RecordingAppManager(mgr_log.clone())));
    let join = tokio::spawn(main_thread.run());
    Harness {
        handle,
        join,
        app_log,
        mgr_log,
    }
}

pub fn launch_data(name: &str, data_dir: &str, record_id: i32) -> AppLaunchData {
    AppLaunchData::new(
        ApplicationInfo {
            name: name.to_string(),
            bundle_name: "com.example.demo".to_string(),
            data_dir: data_dir.to_string(),
            ..ApplicationInfo::default()
        },
        ProcessInfo {
            name: "com.example.demo".to_string(),
            pid: 4242,
        },
    )
    .with_record_id(record_id)
}
