//! The process main thread: a task loop that applies the manager's
//! lifecycle requests to the application in arrival order.

use crate::app_mgr::AppManager;
use crate::deal::ContextDeal;
use crate::launch::AppLaunchData;
use appkit_core::api::{
    Application, ApplicationImpl, ApplicationLoader, ApplicationState, ComponentInfo,
    ComponentManager, ComponentRecord, Configuration, Context, ExecutorHandle, HostConfig,
    HostError, MemoryLevel, RecordStore, Token,
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainThreadState {
    /// Constructed, loop not started
    Init,
    /// Loop running, waiting for the application launch
    Ready,
    /// Application launched
    Running,
    /// Loop exited
    Stopped,
}

impl fmt::Display for MainThreadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MainThreadState::Init => "init",
            MainThreadState::Ready => "ready",
            MainThreadState::Running => "running",
            MainThreadState::Stopped => "stopped",
        };
        f.write_str(s)
    }
}

/// A request queued on the main thread.
#[derive(Debug, Clone)]
pub enum HostTask {
    LaunchApplication(AppLaunchData),
    LaunchComponent { info: ComponentInfo, token: Token },
    CleanComponent(Token),
    Foreground,
    Background,
    Terminate,
    ShrinkMemory(MemoryLevel),
    ConfigurationUpdated(Configuration),
    ProcessSecurityExit,
}

impl HostTask {
    fn name(&self) -> &'static str {
        match self {
            HostTask::LaunchApplication(_) => "launch_application",
            HostTask::LaunchComponent { .. } => "launch_component",
            HostTask::CleanComponent(_) => "clean_component",
            HostTask::Foreground => "foreground",
            HostTask::Background => "background",
            HostTask::Terminate => "terminate",
            HostTask::ShrinkMemory(_) => "shrink_memory",
            HostTask::ConfigurationUpdated(_) => "configuration_updated",
            HostTask::ProcessSecurityExit => "process_security_exit",
        }
    }
}

enum Flow {
    Continue,
    Stop,
}

struct Shared {
    state: RwLock<MainThreadState>,
    application: ApplicationImpl,
    records: RwLock<Option<Arc<RecordStore>>>,
    context: RwLock<Option<Arc<ContextDeal>>>,
}

impl Shared {
    fn set_state(&self, state: MainThreadState) {
        let previous = std::mem::replace(&mut *self.state.write(), state);
        if previous != state {
            debug!(from = %previous, to = %state, "main thread state");
        }
    }
}

/// Cloneable front door to a [`MainThread`]; the manager's transport holds
/// one and schedules tasks through it.
#[derive(Clone)]
pub struct MainThreadHandle {
    tx: mpsc::Sender<HostTask>,
    shared: Arc<Shared>,
}

impl MainThreadHandle {
    async fn send(&self, task: HostTask) -> Result<(), HostError> {
        debug!(task = task.name(), "schedule");
        self.tx
            .send(task)
            .await
            .map_err(|_| HostError::TaskQueueClosed)
    }

    /// Launch data is checked before it is queued.
    pub async fn schedule_launch_application(&self, data: AppLaunchData) -> Result<(), HostError> {
        data.validate()?;
        self.send(HostTask::LaunchApplication(data)).await
    }

    pub async fn schedule_launch_component(
        &self,
        info: ComponentInfo,
        token: Token,
    ) -> Result<(), HostError> {
        if token.is_null() {
            return Err(HostError::InvalidLaunchData(
                "component token is null".to_string(),
            ));
        }
        self.send(HostTask::LaunchComponent { info, token }).await
    }

    pub async fn schedule_clean_component(&self, token: Token) -> Result<(), HostError> {
        self.send(HostTask::CleanComponent(token)).await
    }

    pub async fn schedule_foreground(&self) -> Result<(), HostError> {
        self.send(HostTask::Foreground).await
    }

    pub async fn schedule_background(&self) -> Result<(), HostError> {
        self.send(HostTask::Background).await
    }

    pub async fn schedule_terminate(&self) -> Result<(), HostError> {
        self.send(HostTask::Terminate).await
    }

    pub async fn schedule_shrink_memory(&self, level: MemoryLevel) -> Result<(), HostError> {
        self.send(HostTask::ShrinkMemory(level)).await
    }

    pub async fn schedule_configuration_updated(
        &self,
        config: Configuration,
    ) -> Result<(), HostError> {
        self.send(HostTask::ConfigurationUpdated(config)).await
    }

    pub async fn schedule_process_security_exit(&self) -> Result<(), HostError> {
        self.send(HostTask::ProcessSecurityExit).await
    }

    pub fn state(&self) -> MainThreadState {
        *self.shared.state.read()
    }

    pub fn application_state(&self) -> ApplicationState {
        self.shared.application.state()
    }

    pub fn application(&self) -> Option<Arc<Application>> {
        self.shared.application.application()
    }

    pub fn record_store(&self) -> Option<Arc<RecordStore>> {
        self.shared.records.read().clone()
    }

    pub fn context(&self) -> Option<Arc<ContextDeal>> {
        self.shared.context.read().clone()
    }

    pub fn record_id(&self) -> i32 {
        self.shared.application.record_id()
    }
}

/// Owns the receiving end of the task queue. Consumed by [`MainThread::run`].
pub struct MainThread {
    config: HostConfig,
    loader: Arc<ApplicationLoader>,
    app_mgr: Arc<dyn AppManager>,
    component_manager: Option<Arc<dyn ComponentManager>>,
    rx: mpsc::Receiver<HostTask>,
    shared: Arc<Shared>,
}

impl MainThread {
    pub fn new(
        config: HostConfig,
        loader: Arc<ApplicationLoader>,
        app_mgr: Arc<dyn AppManager>,
    ) -> (MainThreadHandle, MainThread) {
        let (tx, rx) = mpsc::channel(config.task_queue_capacity.max(1));
        let shared = Arc::new(Shared {
            state: RwLock::new(MainThreadState::Init),
            application: ApplicationImpl::new(),
            records: RwLock::new(None),
            context: RwLock::new(None),
        });

        let handle = MainThreadHandle {
            tx,
            shared: shared.clone(),
        };
        let main_thread = MainThread {
            config,
            loader,
            app_mgr,
            component_manager: None,
            rx,
            shared,
        };
        (handle, main_thread)
    }

    /// Component-manager client handed to every context created here.
    pub fn with_component_manager(mut self, manager: Arc<dyn ComponentManager>) -> Self {
        self.component_manager = Some(manager);
        self
    }

    /// Drain the queue until a terminating task runs or every handle is
    /// dropped. Task failures are logged and do not stop the loop.
    pub async fn run(mut self) {
        self.shared.set_state(MainThreadState::Ready);
        info!("main thread started");

        while let Some(task) = self.rx.recv().await {
            let name = task.name();
            match self.handle_task(task) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => break,
                Err(err) => error!(task = name, %err, "main thread task failed"),
            }
        }

        self.rx.close();
        self.shared.set_state(MainThreadState::Stopped);
        info!("main thread stopped");
    }

    fn handle_task(&mut self, task: HostTask) -> Result<Flow, HostError> {
        match task {
            HostTask::LaunchApplication(data) => {
                self.handle_launch_application(data)?;
                Ok(Flow::Continue)
            }
            HostTask::LaunchComponent { info, token } => {
                self.handle_launch_component(info, token)?;
                Ok(Flow::Continue)
            }
            HostTask::CleanComponent(token) => {
                let (store, app) = self.launched()?;
                if self.clean_component_local(&store, &app, token) {
                    self.app_mgr.component_cleaned(token);
                }
                Ok(Flow::Continue)
            }
            HostTask::Foreground => {
                self.launched()?;
                if self.shared.application.perform_foreground() {
                    self.app_mgr
                        .application_foregrounded(self.shared.application.record_id());
                }
                Ok(Flow::Continue)
            }
            HostTask::Background => {
                self.launched()?;
                if self.shared.application.perform_background() {
                    self.app_mgr
                        .application_backgrounded(self.shared.application.record_id());
                }
                Ok(Flow::Continue)
            }
            HostTask::Terminate => {
                self.launched()?;
                if self.shared.application.perform_terminate() {
                    self.app_mgr
                        .application_terminated(self.shared.application.record_id());
                    return Ok(Flow::Stop);
                }
                Ok(Flow::Continue)
            }
            HostTask::ShrinkMemory(level) => {
                self.launched()?;
                self.shared.application.perform_memory_level(level);
                Ok(Flow::Continue)
            }
            HostTask::ConfigurationUpdated(config) => {
                self.launched()?;
                self.shared.application.perform_configuration_updated(&config);
                Ok(Flow::Continue)
            }
            HostTask::ProcessSecurityExit => {
                self.handle_process_security_exit();
                Ok(Flow::Stop)
            }
        }
    }

    fn launched(&self) -> Result<(Arc<RecordStore>, Arc<Application>), HostError> {
        let store = self.shared.records.read().clone();
        match (store, self.shared.application.application()) {
            (Some(store), Some(app)) => Ok((store, app)),
            _ => Err(HostError::NotReady),
        }
    }

    fn handle_launch_application(&mut self, data: AppLaunchData) -> Result<(), HostError> {
        if self.shared.application.application().is_some() {
            return Err(HostError::AlreadyLaunched);
        }
        data.validate()?;

        let deal = Arc::new(ContextDeal::new(self.config.no_backup_dir_mode));
        deal.set_application_info(Arc::new(data.application_info.clone()));
        deal.set_process_info(Arc::new(data.process_info.clone()));
        if let Some(manager) = &self.component_manager {
            deal.set_component_manager(manager.clone());
        }

        let name = data.application_info.name.as_str();
        let app = self
            .loader
            .construct(name)
            .ok_or_else(|| HostError::ApplicationNotFound {
                name: name.to_string(),
            })?;

        app.context()
            .attach_base_context(deal.clone() as Arc<dyn Context>);
        let store = Arc::new(RecordStore::new());
        app.set_record_store(store.clone());

        *self.shared.context.write() = Some(deal);
        *self.shared.records.write() = Some(store);
        self.shared.application.set_application(app);
        self.shared.application.set_record_id(data.record_id);

        if !self.shared.application.perform_ready() {
            error!(name, "application did not become ready");
        }
        self.shared.set_state(MainThreadState::Running);
        info!(
            name,
            process = %data.process_info.name,
            record_id = data.record_id,
            "application launched"
        );
        Ok(())
    }

    fn handle_launch_component(&self, info: ComponentInfo, token: Token) -> Result<(), HostError> {
        let (store, app) = self.launched()?;

        let info = Arc::new(info);
        let record = Arc::new(ComponentRecord::new(info.clone(), token));
        store.set_current_token(token);
        store.add_record(token, record.clone());

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let label = format!("component:{}", info.name);
                store.bind_executor(ExecutorHandle::new(label, runtime));
            }
            Err(_) => warn!(%token, "no runtime to bind component executor"),
        }

        debug!(%token, component = %info.name, "component launched");
        app.on_component_start(&record);
        Ok(())
    }

    /// Drop `token`'s record and notify listeners. Returns whether a record
    /// existed.
    fn clean_component_local(
        &self,
        store: &RecordStore,
        app: &Application,
        token: Token,
    ) -> bool {
        let Some(record) = store.remove_record(token) else {
            warn!(%token, "clean_component no record");
            return false;
        };
        record.take_executor();
        app.on_component_stop(&record);
        debug!(%token, component = %record.info().name, "component cleaned");
        true
    }

    fn handle_process_security_exit(&self) {
        match self.launched() {
            Ok((store, app)) => {
                for token in store.all_tokens() {
                    self.clean_component_local(&store, &app, token);
                }
                self.shared.application.perform_terminate_strong();
                info!("process security exit");
            }
            Err(_) => warn!("process security exit before launch"),
        }
    }
}
