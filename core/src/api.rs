//! Stable re-exports for consumers (`appkit-host` and external crates).
//!
//! Prefer importing from `appkit_core::api` instead of reaching into internal modules.

pub use crate::application::{Application, ApplicationHooks, NoopHooks};
pub use crate::callbacks::{
    CallbackRegistry, DispatchReport, ElementsCallback, ElementsEvent, ElementsRegistry,
    LifecycleCallbacks, LifecycleEvent, LifecycleRegistry, SavedState,
};
pub use crate::config::{
    load_default, load_from_str, AppkitConfig, HostConfig, LoaderConfig, LoggingConfig,
};
pub use crate::context::{ComponentConnection, ComponentManager, Context, ContextContainer};
pub use crate::error::{ConfigError, HostError, TransitionError};
pub use crate::info::{
    ApplicationInfo, ComponentInfo, ComponentKind, Configuration, MemoryLevel, ProcessInfo, Want,
};
pub use crate::loader::{ApplicationConstructor, ApplicationLoader};
pub use crate::logging::init_tracing;
pub use crate::record::{ComponentRecord, ExecutorHandle, RecordKey, RecordStore};
pub use crate::state::{ApplicationImpl, ApplicationState, LifecycleOp, StateTransition};
pub use crate::token::Token;
