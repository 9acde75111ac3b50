//! Process-wide `tracing` setup driven by [`LoggingConfig`].

use crate::config::LoggingConfig;
use crate::error::ConfigError;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// `RUST_LOG` wins over the configured level.
fn build_filter(level: &str) -> Result<EnvFilter, ConfigError> {
    match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => Ok(EnvFilter::from_default_env()),
        _ => EnvFilter::try_new(level).map_err(|e| ConfigError::Logging(e.to_string())),
    }
}

fn log_dir(logging: &LoggingConfig) -> PathBuf {
    match logging
        .directory
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        Some(d) => PathBuf::from(d),
        None => std::env::temp_dir().join("appkit"),
    }
}

pub fn init_tracing(logging: &LoggingConfig) -> Result<(), ConfigError> {
    if !logging.enabled {
        return Ok(());
    }

    if !logging.console && !logging.file {
        return Err(ConfigError::Logging(
            "logging disabled for both console and file".to_string(),
        ));
    }

    let filter = build_filter(&logging.level)?;

    let mut maybe_writer = None;
    if logging.file {
        let dir = log_dir(logging);
        if let Err(e) = std::fs::create_dir_all(&dir) {
            return Err(ConfigError::Logging(format!("create log dir failed: {e}")));
        }
        let file_name = format!("appkit.{}.log", std::process::id());
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        maybe_writer = Some(non_blocking);
    }

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    let file_layer = maybe_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logging_is_noop() {
        let cfg = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        assert!(init_tracing(&cfg).is_ok());
    }

    #[test]
    fn test_no_sink_is_rejected() {
        let cfg = LoggingConfig {
            console: false,
            file: false,
            ..LoggingConfig::default()
        };
        assert!(matches!(init_tracing(&cfg), Err(ConfigError::Logging(_))));
    }

    #[test]
    fn test_log_dir_falls_back_to_temp() {
        let cfg = LoggingConfig {
            directory: Some("  ".to_string()),
            ..LoggingConfig::default()
        };
        assert_eq!(log_dir(&cfg), std::env::temp_dir().join("appkit"));

        let cfg = LoggingConfig {
            directory: Some("/var/log/demo".to_string()),
            ..LoggingConfig::default()
        };
        assert_eq!(log_dir(&cfg), PathBuf::from("/var/log/demo"));
    }
}
