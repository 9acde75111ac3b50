//! Read-only metadata records supplied by the package manager.
//!
//! The core never interprets these beyond the path rules in the context
//! delegate; it stores and forwards them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Installed application metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationInfo {
    pub name: String,
    pub bundle_name: String,
    #[serde(default)]
    pub code_path: String,
    #[serde(default)]
    pub data_dir: String,
    #[serde(default)]
    pub cache_dir: String,
    #[serde(default)]
    pub database_dir: String,
    #[serde(default)]
    pub app_type: String,
}

/// What kind of component a record describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    #[default]
    Page,
    Service,
    Data,
}

/// Metadata of one component inside a package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInfo {
    pub name: String,
    pub bundle_name: String,
    #[serde(default)]
    pub kind: ComponentKind,
    #[serde(default)]
    pub resource_path: String,
    #[serde(default)]
    pub process: String,
}

impl ComponentInfo {
    pub fn new(bundle_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bundle_name: bundle_name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfo {
    pub name: String,
    #[serde(default)]
    pub pid: u32,
}

/// Start/stop/connect request addressed to a component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Want {
    pub bundle_name: String,
    pub component_name: String,
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl Want {
    pub fn new(bundle_name: impl Into<String>, component_name: impl Into<String>) -> Self {
        Self {
            bundle_name: bundle_name.into(),
            component_name: component_name.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// Configuration snapshot pushed by the component manager (locale, orientation, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration(pub BTreeMap<String, String>);

impl Configuration {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }
}

/// Memory pressure reported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryLevel {
    Moderate,
    Low,
    Critical,
}

impl MemoryLevel {
    /// Raw levels above `Critical` clamp to it; negative values read as `Moderate`.
    pub fn from_raw(level: i32) -> Self {
        match level {
            i32::MIN..=0 => Self::Moderate,
            1 => Self::Low,
            _ => Self::Critical,
        }
    }

    pub fn as_raw(self) -> i32 {
        match self {
            Self::Moderate => 0,
            Self::Low => 1,
            Self::Critical => 2,
        }
    }
}

impl fmt::Display for MemoryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Moderate => "moderate",
            Self::Low => "low",
            Self::Critical => "critical",
        };
        f.write_str(s)
    }
}
