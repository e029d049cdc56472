//! Builder for constructing state machines by state name.

use crate::builder::error::BuildError;
use crate::builder::transition::{TransitionBuilder, TransitionDef};
use crate::core::State;
use crate::effects::{CommandExecutor, MachineError, StateMachine};
use tracing::debug;

/// Builder for assembling a whole machine with a fluent API.
///
/// Transitions name their states; names are resolved when
/// [`build`](Self::build) runs, so declarations may appear in any order.
#[derive(Debug, Default)]
pub struct StateMachineBuilder {
    start: Option<String>,
    states: Vec<State>,
    transitions: Vec<TransitionDef>,
}

impl StateMachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the start state (required). It must also be declared with
    /// [`state`](Self::state).
    pub fn start(mut self, name: impl Into<String>) -> Self {
        self.start = Some(name.into());
        self
    }

    /// Declare a state.
    pub fn state(mut self, state: State) -> Self {
        self.states.push(state);
        self
    }

    pub fn states(mut self, states: impl IntoIterator<Item = State>) -> Self {
        self.states.extend(states);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition declaration.
    pub fn add_transition(mut self, transition: TransitionDef) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Build the machine, resolving every state name.
    ///
    /// A transition whose target names no declared state fails with
    /// [`MachineError::InvalidTransitionTarget`]; one whose source names
    /// no declared state fails with [`BuildError::UnknownState`].
    pub fn build<Env, X>(self, executor: X) -> Result<StateMachine<Env>, BuildError>
    where
        Env: Clone + Send + Sync + 'static,
        X: CommandExecutor<Env> + 'static,
    {
        let start_name = self.start.ok_or(BuildError::MissingStartState)?;
        let mut states = self.states;
        let start_index = states
            .iter()
            .position(|s| s.name() == start_name)
            .ok_or_else(|| BuildError::UnknownState(start_name.clone()))?;
        let start = states.remove(start_index);

        let mut machine = StateMachine::new(start, executor);
        for state in states {
            machine.add_state(state)?;
        }

        for def in self.transitions {
            let source = machine
                .state_id(&def.from)
                .ok_or_else(|| BuildError::UnknownState(def.from.clone()))?;
            let target = machine.state_id(&def.to).ok_or_else(|| {
                MachineError::InvalidTransitionTarget {
                    source_state: def.from.clone(),
                    event: def.event.code().to_string(),
                }
            })?;
            machine.add_transition_with_commands(source, def.event, target, def.commands)?;
        }

        debug!(
            start = %start_name,
            states = machine.registered_states().len(),
            "built state machine"
        );
        Ok(machine)
    }
}
