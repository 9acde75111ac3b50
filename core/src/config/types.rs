use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppkitConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub loader: LoaderConfig,

    #[serde(default)]
    pub host: HostConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default = "default_logging_file")]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "appkit_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_file() -> bool {
    false
}

fn default_logging_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: default_logging_file(),
            level: default_logging_level(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Name resolved when a requested application has no constructor.
    #[serde(default = "default_application_name")]
    pub default_application: String,

    #[serde(default = "default_fallback_to_default")]
    pub fallback_to_default: bool,
}

fn default_application_name() -> String {
    "Application".to_string()
}

fn default_fallback_to_default() -> bool {
    true
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            default_application: default_application_name(),
            fallback_to_default: default_fallback_to_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Bound of the main-thread task queue.
    #[serde(default = "default_task_queue_capacity")]
    pub task_queue_capacity: usize,

    /// Permission bits for the no-backup files directory.
    #[serde(default = "default_no_backup_dir_mode")]
    pub no_backup_dir_mode: u32,
}

fn default_task_queue_capacity() -> usize {
    256
}

fn default_no_backup_dir_mode() -> u32 {
    0o771
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            task_queue_capacity: default_task_queue_capacity(),
            no_backup_dir_mode: default_no_backup_dir_mode(),
        }
    }
}
