use std::path::{Path, PathBuf};

use super::types::AppkitConfig;
use crate::error::ConfigError;

const CONFIG_ENV: &str = "APPKIT_CONFIG";
const LOCAL_CONFIG: &str = "appkit.toml";

/// Path named by `$APPKIT_CONFIG`, if set and non-empty.
pub fn config_path_from_env() -> Option<PathBuf> {
    std::env::var(CONFIG_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub fn load_default() -> anyhow::Result<AppkitConfig> {
    // Priority 1: $APPKIT_CONFIG
    let env_config = config_path_from_env();

    // Priority 2: ./appkit.toml
    let local_config = Path::new(LOCAL_CONFIG);

    let mut cfg = match env_config {
        Some(path) => load_from_path(&path)?,
        None if local_config.exists() => load_from_path(local_config)?,
        None => AppkitConfig::default(),
    };

    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

pub fn load_from_path(path: &Path) -> Result<AppkitConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<AppkitConfig, ConfigError> {
    Ok(toml::from_str::<AppkitConfig>(s)?)
}

/// Environment variable overrides (highest priority).
pub fn apply_env_overrides(cfg: &mut AppkitConfig) {
    if let Ok(v) = std::env::var("APPKIT_LOG_LEVEL") {
        if !v.trim().is_empty() {
            cfg.logging.level = v;
        }
    }
    if let Ok(v) = std::env::var("APPKIT_DEFAULT_APPLICATION") {
        if !v.trim().is_empty() {
            cfg.loader.default_application = v;
        }
    }
}
