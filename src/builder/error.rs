//! Build errors for state machine and transition builders.

use crate::effects::MachineError;
use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(name) before .build()")]
    MissingStartState,

    #[error("Transition source state not specified. Call .from(name)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(name)")]
    MissingToState,

    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error("No state named '{0}' was declared")]
    UnknownState(String),

    #[error(transparent)]
    Machine(#[from] MachineError),
}
