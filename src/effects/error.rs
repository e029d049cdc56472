//! Errors raised while assembling or driving a machine.

use crate::core::StateId;
use crate::effects::executor::ExecutionError;
use thiserror::Error;

/// Assembly-time errors.
///
/// A failed call leaves the machine exactly as it was.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MachineError {
    #[error("Transition on '{event}' from state '{source_state}' has no target in this machine")]
    InvalidTransitionTarget { source_state: String, event: String },

    #[error("Machine is already running; the transition graph is frozen")]
    MachineAlreadyRunning,

    #[error("A state named '{0}' is already registered")]
    DuplicateStateName(String),

    #[error("State {0} does not belong to this machine")]
    UnknownState(StateId),
}

/// Runtime outcomes other than a clean transition, as errors.
///
/// Produced by [`FireResult::into_result`](crate::effects::FireResult::into_result).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FireError {
    #[error("No transition for event '{event}' in state {state}")]
    NoTransition { state: StateId, event: String },

    #[error("Command '{command}' failed on event '{event}' (machine moved to {target_state})")]
    CommandFailed {
        event: String,
        target_state: StateId,
        command: String,
        #[source]
        cause: ExecutionError,
    },
}
