//! States: named nodes with entry commands and an event lookup table.

use super::event::{Command, Event};
use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Handle to a state registered with a particular machine.
///
/// Ids carry the identity of the machine that issued them, so a handle
/// from one machine is rejected by every other machine instead of silently
/// pointing at an unrelated state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateId {
    machine: Uuid,
    index: usize,
}

impl StateId {
    pub(crate) fn new(machine: Uuid, index: usize) -> Self {
        Self { machine, index }
    }

    pub(crate) fn machine(&self) -> Uuid {
        self.machine
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}", self.index, self.machine)
    }
}

/// A node of the machine graph.
///
/// States are assembled with their entry commands, then handed to a
/// [`StateMachine`](crate::effects::StateMachine), which wires transitions
/// between them.
///
/// # Example
///
/// ```rust
/// use fauler::core::{Command, State};
///
/// let active = State::new("Active")
///     .with_entry_command(Command::new("Unlock door", "D1UL"))
///     .with_entry_command(Command::new("Lock panel", "PNLK"));
///
/// assert_eq!(active.name(), "Active");
/// assert_eq!(active.entry_commands().len(), 2);
/// assert!(active.get_transition("D1CL").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct State {
    name: String,
    entry_commands: Vec<Command>,
    transitions: HashMap<String, Transition>,
}

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entry_commands: Vec::new(),
            transitions: HashMap::new(),
        }
    }

    /// Append a command to run on every entry into this state.
    pub fn with_entry_command(mut self, command: Command) -> Self {
        self.entry_commands.push(command);
        self
    }

    /// Append several entry commands, preserving their order.
    pub fn with_entry_commands(mut self, commands: impl IntoIterator<Item = Command>) -> Self {
        self.entry_commands.extend(commands);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Commands run, in order, each time the machine enters this state.
    ///
    /// A state does not run these itself; `StateMachine::fire` hands each
    /// one to the machine's executor after committing the move.
    pub fn entry_commands(&self) -> &[Command] {
        &self.entry_commands
    }

    /// Look up the outgoing transition for an event code.
    pub fn get_transition(&self, event_code: &str) -> Option<&Transition> {
        self.transitions.get(event_code)
    }

    /// All outgoing transitions, in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.values()
    }

    /// Register a transition from `source` (this state) to `target` on
    /// `event`.
    ///
    /// A transition already registered for the same event code is
    /// replaced; the last registration wins. Callers validate `target`
    /// before calling this.
    pub(crate) fn add_transition(
        &mut self,
        source: StateId,
        event: Event,
        target: StateId,
        commands: Vec<Command>,
    ) -> &Transition {
        let code = event.code().to_string();
        let transition = Transition::new(source, target, event, commands);
        self.transitions.insert(code.clone(), transition);
        &self.transitions[&code]
    }
}
