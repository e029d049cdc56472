//! Builder for declaring transitions by state name.

use crate::builder::error::BuildError;
use crate::core::{Command, Event};

/// A validated transition declaration, resolved against real states when
/// the machine is built.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionDef {
    pub(crate) from: String,
    pub(crate) to: String,
    pub(crate) event: Event,
    pub(crate) commands: Vec<Command>,
}

impl TransitionDef {
    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}

/// Builder for declaring transitions with a fluent API.
#[derive(Debug, Default)]
pub struct TransitionBuilder {
    from: Option<String>,
    to: Option<String>,
    event: Option<Event>,
    commands: Vec<Command>,
}

impl TransitionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source state (required).
    pub fn from(mut self, state: impl Into<String>) -> Self {
        self.from = Some(state.into());
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<String>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: Event) -> Self {
        self.event = Some(event);
        self
    }

    /// Append a command to run when the transition is taken.
    pub fn command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    pub fn commands(mut self, commands: impl IntoIterator<Item = Command>) -> Self {
        self.commands.extend(commands);
        self
    }

    /// Build the declaration.
    pub fn build(self) -> Result<TransitionDef, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;

        Ok(TransitionDef {
            from,
            to,
            event,
            commands: self.commands,
        })
    }
}
