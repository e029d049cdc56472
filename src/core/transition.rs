//! Transitions: labeled edges between two states of one machine.

use super::event::{Command, Event};
use super::state::StateId;

/// A directed edge `(source, trigger) -> target` with the commands to run
/// when it is taken.
///
/// Transitions have no public constructor. They only come into existence
/// through `State::add_transition`, so every transition is registered in
/// its source state's lookup table and can be reached by firing its
/// trigger.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    source: StateId,
    target: StateId,
    trigger: Event,
    commands: Vec<Command>,
}

impl Transition {
    pub(crate) fn new(
        source: StateId,
        target: StateId,
        trigger: Event,
        commands: Vec<Command>,
    ) -> Self {
        Self {
            source,
            target,
            trigger,
            commands,
        }
    }

    pub fn source(&self) -> StateId {
        self.source
    }

    pub fn target(&self) -> StateId {
        self.target
    }

    pub fn trigger(&self) -> &Event {
        &self.trigger
    }

    /// Code of the triggering event; equal to the key this transition is
    /// stored under in its source state.
    pub fn event_code(&self) -> &str {
        self.trigger.code()
    }

    /// Commands executed, in order, when the transition is taken.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}
