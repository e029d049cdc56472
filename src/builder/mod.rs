//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders for declaring a machine by state
//! name, resolving the names into handles when the machine is built.

pub mod error;
pub mod machine;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::{TransitionBuilder, TransitionDef};

use crate::core::Event;

/// Declare a transition with no commands.
///
/// # Example
///
/// ```
/// use fauler::builder::simple_transition;
/// use fauler::core::Event;
///
/// let def = simple_transition("Idle", Event::new("Start", "START"), "Running");
/// assert_eq!(def.to(), "Running");
/// ```
pub fn simple_transition(
    from: impl Into<String>,
    event: Event,
    to: impl Into<String>,
) -> TransitionDef {
    TransitionDef {
        from: from.into(),
        to: to.into(),
        event,
        commands: Vec::new(),
    }
}
