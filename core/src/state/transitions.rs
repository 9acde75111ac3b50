//! Lifecycle transition rules.

use super::types::{ApplicationState, LifecycleOp};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("{op} is not allowed from {from} (would move to {to})")]
    InvalidTransition {
        from: ApplicationState,
        to: ApplicationState,
        op: LifecycleOp,
    },
    #[error("{op} is not allowed from terminal state {state}")]
    FromTerminalState {
        state: ApplicationState,
        op: LifecycleOp,
    },
}

pub struct StateTransition;

impl StateTransition {
    /// State that `op` moves to when it succeeds. Ops that do not change
    /// state report the state they started from.
    pub fn target(op: LifecycleOp, from: ApplicationState) -> ApplicationState {
        match op {
            LifecycleOp::Ready => ApplicationState::Ready,
            LifecycleOp::Foreground => ApplicationState::Foreground,
            LifecycleOp::Background => ApplicationState::Background,
            LifecycleOp::Terminate | LifecycleOp::TerminateStrong => ApplicationState::Terminated,
            LifecycleOp::MemoryLevel | LifecycleOp::ConfigurationUpdated => from,
        }
    }

    /// States from which `op` is accepted.
    pub fn required_states(op: LifecycleOp) -> &'static [ApplicationState] {
        use ApplicationState::*;
        match op {
            LifecycleOp::Ready => &[Created],
            LifecycleOp::Foreground => &[Ready, Background],
            LifecycleOp::Background => &[Foreground],
            LifecycleOp::Terminate => &[Background],
            LifecycleOp::TerminateStrong
            | LifecycleOp::MemoryLevel
            | LifecycleOp::ConfigurationUpdated => {
                &[Created, Ready, Foreground, Background, Terminated]
            }
        }
    }

    /// Check `op` against the current state and return the state it leads to.
    pub fn validate(
        op: LifecycleOp,
        from: ApplicationState,
    ) -> Result<ApplicationState, TransitionError> {
        let allowed = Self::required_states(op);
        if allowed.contains(&from) {
            return Ok(Self::target(op, from));
        }

        if Self::is_terminal(from) {
            return Err(TransitionError::FromTerminalState { state: from, op });
        }

        Err(TransitionError::InvalidTransition {
            from,
            to: Self::target(op, from),
            op,
        })
    }

    pub fn is_terminal(state: ApplicationState) -> bool {
        matches!(state, ApplicationState::Terminated)
    }
}
