//! Application lifecycle state types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse lifecycle state of the application.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationState {
    /// Constructed, not yet started
    #[default]
    Created,
    /// Started, nothing visible yet
    Ready,
    /// Visible and interactive
    Foreground,
    /// Running but not visible
    Background,
    /// Finished; absorbing
    Terminated,
}

impl ApplicationState {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationState::Created => "created",
            ApplicationState::Ready => "ready",
            ApplicationState::Foreground => "foreground",
            ApplicationState::Background => "background",
            ApplicationState::Terminated => "terminated",
        }
    }
}

impl fmt::Display for ApplicationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation requested of the lifecycle machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleOp {
    Ready,
    Foreground,
    Background,
    Terminate,
    TerminateStrong,
    MemoryLevel,
    ConfigurationUpdated,
}

impl LifecycleOp {
    pub fn as_str(self) -> &'static str {
        match self {
            LifecycleOp::Ready => "ready",
            LifecycleOp::Foreground => "foreground",
            LifecycleOp::Background => "background",
            LifecycleOp::Terminate => "terminate",
            LifecycleOp::TerminateStrong => "terminate_strong",
            LifecycleOp::MemoryLevel => "memory_level",
            LifecycleOp::ConfigurationUpdated => "configuration_updated",
        }
    }
}

impl fmt::Display for LifecycleOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
