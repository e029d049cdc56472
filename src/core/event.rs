//! Events and commands: the identifiable triggers and actions of a machine.
//!
//! Both are immutable `(name, code)` pairs. The code is the identity: two
//! values with the same code compare equal and hash the same, whatever
//! their names.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// An external trigger, looked up by its code.
///
/// # Example
///
/// ```rust
/// use fauler::core::Event;
///
/// let start = Event::new("Start job", "START");
/// assert_eq!(start.name(), "Start job");
/// assert_eq!(start.code(), "START");
///
/// // Identity is the code alone.
/// assert_eq!(start, Event::new("Begin", "START"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Event {
    name: String,
    code: String,
}

impl Event {
    /// Create an event from a display name and a lookup code.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    /// Human-readable name, used in logs only.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lookup key for transitions.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Event {}

impl Hash for Event {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

/// A named side-effecting action.
///
/// A command carries no behavior of its own. The machine hands it to a
/// [`CommandExecutor`](crate::effects::CommandExecutor), which decides what
/// running it means.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Command {
    name: String,
    code: String,
}

impl Command {
    /// Create a command from a display name and an identifying code.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl PartialEq for Command {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Command {}

impl Hash for Command {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}
