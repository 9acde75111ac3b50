//! Application factory registry.

use crate::application::Application;
use crate::config::LoaderConfig;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, warn};

pub type ApplicationConstructor = Box<dyn Fn() -> Application + Send + Sync>;

/// Maps an application name to the constructor of its [`Application`].
///
/// Populated during the host's initialization phase through `&mut self`,
/// then shared read-only (typically behind an `Arc`).
pub struct ApplicationLoader {
    config: LoaderConfig,
    constructors: HashMap<String, ApplicationConstructor>,
}

impl ApplicationLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            constructors: HashMap::new(),
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Register `constructor` under `name`. A later registration for the
    /// same name replaces the earlier one; returns whether that happened.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F) -> bool
    where
        F: Fn() -> Application + Send + Sync + 'static,
    {
        let name = name.into();
        let replaced = self
            .constructors
            .insert(name.clone(), Box::new(constructor))
            .is_some();
        if replaced {
            debug!(%name, "ApplicationLoader::register replaced existing constructor");
        }
        replaced
    }

    /// Build the application registered as `name`.
    ///
    /// Unknown names fall back to `default_application` when
    /// `fallback_to_default` is set. This keeps hosts working that only
    /// ever register the default name.
    pub fn construct(&self, name: &str) -> Option<Arc<Application>> {
        if let Some(ctor) = self.constructors.get(name) {
            debug!(name, "ApplicationLoader::construct");
            return Some(Arc::new(ctor()));
        }

        let default = self.config.default_application.as_str();
        if self.config.fallback_to_default && name != default {
            if let Some(ctor) = self.constructors.get(default) {
                warn!(
                    requested = name,
                    default, "ApplicationLoader::construct falling back to default application"
                );
                return Some(Arc::new(ctor()));
            }
        }

        error!(
            name,
            "ApplicationLoader::construct no constructor registered"
        );
        None
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl Default for ApplicationLoader {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}

impl fmt::Debug for ApplicationLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationLoader")
            .field("config", &self.config)
            .field("names", &self.names())
            .finish()
    }
}
