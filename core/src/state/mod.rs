//! # Application lifecycle state
//!
//! `Created → Ready → Foreground ⇄ Background → Terminated`, with a forced
//! `TerminateStrong` that bypasses the guards.
//!
//! [`StateTransition`] holds the transition table; [`ApplicationImpl`] is
//! the state cell that applies it and calls the application hooks. Illegal
//! transitions are logged and reported as `false`, never fatal.

pub mod application_impl;
pub mod transitions;
pub mod types;

pub use application_impl::ApplicationImpl;
pub use transitions::{StateTransition, TransitionError};
pub use types::{ApplicationState, LifecycleOp};
