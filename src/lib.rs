//! Fauler: an event-driven finite-state machine engine
//!
//! A machine is a graph of named states. Events fire transitions between
//! them, and commands (side-effecting actions) run as transitions are
//! taken and as states are entered. The engine only decides *which*
//! commands run and in what order; running them is delegated to a
//! [`CommandExecutor`](effects::CommandExecutor) supplied by the
//! application, which returns Stillwater effects.
//!
//! # Core Concepts
//!
//! - **Event / Command**: immutable `(name, code)` values, identified by code
//! - **State**: entry commands plus an event-code lookup table of transitions
//! - **StateMachine**: owns the graph and the current state; `fire` drives it
//! - **History**: immutable log of committed transitions
//!
//! # Example
//!
//! ```rust
//! use fauler::core::{Command, Event, State};
//! use fauler::effects::{noop_executor, StateMachine};
//!
//! let start = Event::new("Start", "START");
//!
//! let mut machine = StateMachine::new(State::new("Idle"), noop_executor::<()>());
//! let idle = machine.start_id();
//! let running = machine
//!     .add_state(State::new("Running").with_entry_command(Command::new("Spin up", "SPIN")))
//!     .unwrap();
//! machine.add_transition(idle, start.clone(), running).unwrap();
//!
//! let names: Vec<&str> = machine.get_states().iter().map(|s| s.name()).collect();
//! assert_eq!(names, vec!["Idle", "Running"]);
//! ```

pub mod builder;
pub mod core;
pub mod effects;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use crate::core::{Command, Event, State, StateHistory, StateId, Transition, TransitionRecord};
pub use crate::effects::{CommandExecutor, ExecutionError, FireResult, MachineError, StateMachine};
