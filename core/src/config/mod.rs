mod load;
mod types;

pub use load::{
    apply_env_overrides, config_path_from_env, load_default, load_from_path, load_from_str,
};
pub use types::{AppkitConfig, HostConfig, LoaderConfig, LoggingConfig};
