use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Failures of the host's main-thread driver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("application already launched")]
    AlreadyLaunched,
    #[error("invalid launch data: {0}")]
    InvalidLaunchData(String),
    #[error("no constructor registered for application {name:?}")]
    ApplicationNotFound { name: String },
    #[error("application not launched yet")]
    NotReady,
    #[error("main-thread task queue is closed")]
    TaskQueueClosed,
}
