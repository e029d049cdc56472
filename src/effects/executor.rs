//! The command execution seam.
//!
//! The engine decides which commands run and in what order; an executor
//! supplied by the embedding application decides what running one means.
//! Executors return Stillwater effects, which the engine runs against the
//! environment passed to `fire`.

use crate::core::Command;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;
use thiserror::Error;

/// Errors reported by a command executor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExecutionError {
    #[error("Command execution failed: {0}")]
    Failed(String),

    /// The environment signalled cancellation before the command finished.
    #[error("Command execution cancelled")]
    Cancelled,
}

/// Capability that executes a single command.
///
/// Called at most once per command per transition. Any closure of shape
/// `Fn(&Command) -> BoxedEffect<(), ExecutionError, Env>` is an executor.
///
/// # Example
///
/// ```rust
/// use fauler::core::Command;
/// use fauler::effects::{CommandExecutor, ExecutionError};
/// use stillwater::effect::BoxedEffect;
/// use stillwater::prelude::*;
///
/// #[derive(Clone)]
/// struct Panel {
///     locked: bool,
/// }
///
/// fn panel_executor() -> impl CommandExecutor<Panel> {
///     |command: &Command| -> BoxedEffect<(), ExecutionError, Panel> {
///         let code = command.code().to_string();
///         from_fn(move |panel: &Panel| {
///             if code == "PNUL" && panel.locked {
///                 Err(ExecutionError::Failed("panel jammed".to_string()))
///             } else {
///                 Ok(())
///             }
///         })
///         .boxed()
///     }
/// }
/// ```
pub trait CommandExecutor<Env>: Send + Sync {
    fn execute(&self, command: &Command) -> BoxedEffect<(), ExecutionError, Env>;
}

impl<Env, F> CommandExecutor<Env> for F
where
    F: Fn(&Command) -> BoxedEffect<(), ExecutionError, Env> + Send + Sync,
{
    fn execute(&self, command: &Command) -> BoxedEffect<(), ExecutionError, Env> {
        self(command)
    }
}

/// Executor that accepts every command without doing anything.
pub fn noop_executor<Env>() -> impl CommandExecutor<Env>
where
    Env: Clone + Send + Sync + 'static,
{
    |_command: &Command| -> BoxedEffect<(), ExecutionError, Env> { pure(()).boxed() }
}

/// Executor that rejects the commands whose codes are listed.
///
/// Handy for exercising failure paths without a real environment.
pub fn failing_executor<Env>(codes: Vec<String>) -> impl CommandExecutor<Env>
where
    Env: Clone + Send + Sync + 'static,
{
    move |command: &Command| -> BoxedEffect<(), ExecutionError, Env> {
        if codes.iter().any(|code| code == command.code()) {
            fail(ExecutionError::Failed(format!(
                "command '{}' rejected",
                command.code()
            )))
            .boxed()
        } else {
            pure(()).boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stillwater::effect::Effect;

    #[tokio::test]
    async fn noop_executor_succeeds() {
        let executor = noop_executor::<()>();
        let result = executor.execute(&Command::new("Lock", "LOCK")).run(&()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn failing_executor_rejects_listed_codes() {
        let executor = failing_executor::<()>(vec!["BOOM".to_string()]);

        let ok = executor.execute(&Command::new("Lock", "LOCK")).run(&()).await;
        assert!(ok.is_ok());

        let err = executor.execute(&Command::new("Explode", "BOOM")).run(&()).await;
        assert_eq!(
            err,
            Err(ExecutionError::Failed("command 'BOOM' rejected".to_string()))
        );
    }

    #[tokio::test]
    async fn closure_executor_reads_environment() {
        #[derive(Clone)]
        struct Env {
            cancelled: bool,
        }

        let executor = |_command: &Command| -> BoxedEffect<(), ExecutionError, Env> {
            from_fn(|env: &Env| {
                if env.cancelled {
                    Err(ExecutionError::Cancelled)
                } else {
                    Ok(())
                }
            })
            .boxed()
        };

        let command = Command::new("Lock", "LOCK");
        let live = executor.execute(&command).run(&Env { cancelled: false }).await;
        let cancelled = executor.execute(&command).run(&Env { cancelled: true }).await;

        assert!(live.is_ok());
        assert_eq!(cancelled, Err(ExecutionError::Cancelled));
    }
}
