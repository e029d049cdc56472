//! Core graph types of the state machine.
//!
//! This module contains the passive building blocks:
//! - `Event` and `Command`, identified by code
//! - `State`, with entry commands and an event-code lookup table
//! - `Transition`, the edges between states
//! - `StateHistory`, the log of committed moves
//!
//! Nothing here executes commands; that happens in [`crate::effects`].

mod event;
mod history;
mod state;
mod transition;

pub use event::{Command, Event};
pub use history::{StateHistory, TransitionRecord};
pub use state::{State, StateId};
pub use transition::Transition;
