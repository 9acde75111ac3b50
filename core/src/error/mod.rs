#[allow(clippy::module_inception)]
pub mod error;

pub use crate::state::TransitionError;
pub use error::{ConfigError, HostError};
