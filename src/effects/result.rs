//! Outcome of a single `fire` call.

use crate::core::{Command, Event, StateId};
use crate::effects::error::FireError;
use crate::effects::executor::ExecutionError;

/// Result of firing one event.
///
/// An unhandled event and a failing command are both ordinary outcomes,
/// returned as values. Use [`FireResult::into_result`] to treat them as
/// errors instead.
#[derive(Clone, Debug, PartialEq)]
pub enum FireResult {
    /// The machine moved and every command succeeded.
    Transitioned {
        from: StateId,
        to: StateId,
        event: Event,
    },

    /// The current state has no transition for the event. Nothing changed.
    NoTransition { state: StateId, event: Event },

    /// The machine moved to `target_state`, but a command failed. Commands
    /// after `failed_command` in the same batch were not run.
    CommandFailed {
        event: Event,
        from: StateId,
        target_state: StateId,
        failed_command: Command,
        cause: ExecutionError,
    },
}

impl FireResult {
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }

    /// Whether the current state changed. True for `Transitioned` and
    /// `CommandFailed`.
    pub fn state_changed(&self) -> bool {
        !matches!(self, Self::NoTransition { .. })
    }

    /// Convert into the entered state, or a [`FireError`].
    ///
    /// `CommandFailed` maps to an error even though the state change was
    /// committed.
    pub fn into_result(self) -> Result<StateId, FireError> {
        match self {
            Self::Transitioned { to, .. } => Ok(to),
            Self::NoTransition { state, event } => Err(FireError::NoTransition {
                state,
                event: event.code().to_string(),
            }),
            Self::CommandFailed {
                event,
                target_state,
                failed_command,
                cause,
                ..
            } => Err(FireError::CommandFailed {
                event: event.code().to_string(),
                target_state,
                command: failed_command.code().to_string(),
                cause,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;
    use crate::effects::{noop_executor, StateMachine};
    use std::error::Error;

    fn ids() -> (StateId, StateId) {
        let mut machine = StateMachine::new(State::new("Idle"), noop_executor::<()>());
        let running = machine.add_state(State::new("Running")).unwrap();
        (machine.start_id(), running)
    }

    #[test]
    fn transitioned_maps_to_entered_state() {
        let (idle, running) = ids();
        let result = FireResult::Transitioned {
            from: idle,
            to: running,
            event: Event::new("Start", "START"),
        };

        assert!(result.is_transitioned());
        assert!(result.state_changed());
        assert_eq!(result.into_result(), Ok(running));
    }

    #[test]
    fn no_transition_maps_to_error_with_event_code() {
        let (idle, _) = ids();
        let result = FireResult::NoTransition {
            state: idle,
            event: Event::new("Finish", "FINISH"),
        };

        assert!(!result.state_changed());
        let err = result.into_result().unwrap_err();
        assert_eq!(
            err,
            FireError::NoTransition {
                state: idle,
                event: "FINISH".to_string(),
            }
        );
        assert!(err.to_string().contains("'FINISH'"));
        assert!(err.source().is_none());
    }

    #[test]
    fn command_failed_maps_to_error_with_command_target_and_cause() {
        let (idle, running) = ids();
        let cause = ExecutionError::Failed("jammed".to_string());
        let result = FireResult::CommandFailed {
            event: Event::new("Start", "START"),
            from: idle,
            target_state: running,
            failed_command: Command::new("Spin up", "SPIN"),
            cause: cause.clone(),
        };

        assert!(!result.is_transitioned());
        assert!(result.state_changed());

        let err = result.into_result().unwrap_err();
        assert_eq!(
            err,
            FireError::CommandFailed {
                event: "START".to_string(),
                target_state: running,
                command: "SPIN".to_string(),
                cause: cause.clone(),
            }
        );
        assert!(err.to_string().contains("'SPIN'"));
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some(cause.to_string())
        );
    }
}
