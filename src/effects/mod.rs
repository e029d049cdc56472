//! The engine: event dispatch and command sequencing.
//!
//! This module is the imperative shell around the passive graph types in
//! [`crate::core`]:
//! - **StateMachine**: owns the graph, the current state, and the fire lock
//! - **CommandExecutor**: the application's capability for running commands
//! - **FireResult**: what a single `fire` did
//!
//! Command effects follow Stillwater conventions: executors return a
//! `BoxedEffect`, built with the free-standing `pure()`, `fail()` and
//! `from_fn()` constructors, and the machine runs it against the
//! environment passed to `fire`.

mod error;
mod executor;
mod machine;
mod result;

pub use error::{FireError, MachineError};
pub use executor::{failing_executor, noop_executor, CommandExecutor, ExecutionError};
pub use machine::StateMachine;
pub use result::FireResult;
