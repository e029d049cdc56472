//! State machine that dispatches events and sequences commands.

use crate::core::{Command, Event, State, StateHistory, StateId, Transition, TransitionRecord};
use crate::effects::error::MachineError;
use crate::effects::executor::{CommandExecutor, ExecutionError};
use crate::effects::result::FireResult;
use chrono::Utc;
use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use stillwater::effect::Effect;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Mutable runtime state, guarded by the fire lock.
#[derive(Debug)]
struct Runtime {
    current: StateId,
    history: StateHistory,
}

/// Event-driven state machine.
///
/// A machine has two modes. While *assembling* (before the first `fire`),
/// states and transitions may be added through `&mut self`. The first call
/// to [`fire`](Self::fire) switches it to *running*, after which the graph
/// is frozen and assembly calls fail with
/// [`MachineError::MachineAlreadyRunning`].
///
/// `fire` takes `&self` and serializes concurrent callers on a single lock
/// held for the whole call, so a machine can be shared behind an `Arc`.
pub struct StateMachine<Env: Clone + Send + Sync + 'static> {
    id: Uuid,
    states: Vec<State>,
    start: StateId,
    executor: Arc<dyn CommandExecutor<Env>>,
    running: AtomicBool,
    runtime: Mutex<Runtime>,
}

impl<Env: Clone + Send + Sync + 'static> StateMachine<Env> {
    /// Create a machine whose start (and initial current) state is `start`.
    ///
    /// The start state's entry commands are not run on construction; they
    /// run whenever a transition enters it.
    pub fn new<X>(start: State, executor: X) -> Self
    where
        X: CommandExecutor<Env> + 'static,
    {
        let id = Uuid::new_v4();
        let start_id = StateId::new(id, 0);
        debug!(machine = %id, start = start.name(), "creating state machine");

        Self {
            id,
            states: vec![start],
            start: start_id,
            executor: Arc::new(executor),
            running: AtomicBool::new(false),
            runtime: Mutex::new(Runtime {
                current: start_id,
                history: StateHistory::new(),
            }),
        }
    }

    /// Register another state and return its handle.
    pub fn add_state(&mut self, state: State) -> Result<StateId, MachineError> {
        self.ensure_assembling()?;
        if self.state_id(state.name()).is_some() {
            return Err(MachineError::DuplicateStateName(state.name().to_string()));
        }

        let id = StateId::new(self.id, self.states.len());
        debug!(state = state.name(), %id, "registered state");
        self.states.push(state);
        Ok(id)
    }

    /// Register a transition from `source` to `target` on `event`.
    ///
    /// An existing transition for the same event code on `source` is
    /// replaced (last write wins). On error nothing is registered.
    pub fn add_transition(
        &mut self,
        source: StateId,
        event: Event,
        target: StateId,
    ) -> Result<&Transition, MachineError> {
        self.add_transition_with_commands(source, event, target, Vec::new())
    }

    /// Like [`add_transition`](Self::add_transition), attaching commands
    /// that run, in order, when the transition is taken.
    pub fn add_transition_with_commands(
        &mut self,
        source: StateId,
        event: Event,
        target: StateId,
        commands: impl IntoIterator<Item = Command>,
    ) -> Result<&Transition, MachineError> {
        self.ensure_assembling()?;
        if !self.contains(source) {
            return Err(MachineError::UnknownState(source));
        }
        if !self.contains(target) {
            return Err(MachineError::InvalidTransitionTarget {
                source_state: self.states[source.index()].name().to_string(),
                event: event.code().to_string(),
            });
        }

        let state = &mut self.states[source.index()];
        if state.get_transition(event.code()).is_some() {
            debug!(
                state = state.name(),
                event = event.code(),
                "replacing existing transition"
            );
        }
        Ok(state.add_transition(source, event, target, commands.into_iter().collect()))
    }

    /// States reachable from the start state, in breadth-first order.
    ///
    /// Derived from the transition graph on each call. Registered states
    /// that no transition leads to are not included. The successors of a
    /// state are visited in the order those target states were added to
    /// the machine.
    pub fn get_states(&self) -> Vec<&State> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        let mut reachable = Vec::new();

        visited.insert(self.start.index());
        queue.push_back(self.start.index());

        while let Some(index) = queue.pop_front() {
            let state = &self.states[index];
            reachable.push(state);

            let mut targets: Vec<usize> = state.transitions().map(|t| t.target().index()).collect();
            targets.sort_unstable();
            for target in targets {
                if visited.insert(target) {
                    queue.push_back(target);
                }
            }
        }

        reachable
    }

    /// Every registered state, reachable or not, in registration order.
    pub fn registered_states(&self) -> &[State] {
        &self.states
    }

    pub fn start(&self) -> &State {
        &self.states[self.start.index()]
    }

    pub fn start_id(&self) -> StateId {
        self.start
    }

    /// The live state. Waits for any in-flight `fire` to finish.
    pub async fn current(&self) -> &State {
        let id = self.current_id().await;
        &self.states[id.index()]
    }

    pub async fn current_id(&self) -> StateId {
        self.runtime.lock().await.current
    }

    /// Snapshot of the committed transitions so far.
    pub async fn history(&self) -> StateHistory {
        self.runtime.lock().await.history.clone()
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        if self.contains(id) {
            Some(&self.states[id.index()])
        } else {
            None
        }
    }

    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .position(|s| s.name() == name)
            .map(|index| StateId::new(self.id, index))
    }

    /// Whether `fire` has been called at least once.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Fire an event against the current state.
    ///
    /// If the current state has a transition for the event, its commands
    /// run in order, the machine moves to the target, and the target's
    /// entry commands run in order. If a command fails, the rest of its
    /// batch is skipped (as is the entry batch, when the failure was in the
    /// transition batch), but the move is still committed and reported as
    /// [`FireResult::CommandFailed`].
    ///
    /// `env` is handed to every command effect. Cancellation and timeouts
    /// are the environment's concern; dropping the returned future stops at
    /// the next command boundary.
    pub async fn fire(&self, event: &Event, env: &Env) -> FireResult {
        if !self.running.swap(true, Ordering::SeqCst) {
            debug!(machine = %self.id, "machine running; graph frozen");
        }

        let mut runtime = self.runtime.lock().await;
        let from = runtime.current;
        let source = &self.states[from.index()];

        let Some(transition) = source.get_transition(event.code()) else {
            warn!(
                state = source.name(),
                event = event.code(),
                "no transition for event"
            );
            return FireResult::NoTransition {
                state: from,
                event: event.clone(),
            };
        };

        let to = transition.target();
        let target = &self.states[to.index()];
        debug!(
            from = source.name(),
            to = target.name(),
            event = event.code(),
            "taking transition"
        );

        let mut outcome = self.run_commands(transition.commands(), env).await;

        // Commit point: the move and its record land together, before any
        // entry command can suspend or be cancelled.
        runtime.current = to;
        runtime.history = runtime.history.record(TransitionRecord {
            from: source.name().to_string(),
            to: target.name().to_string(),
            event: event.code().to_string(),
            command_failed: outcome.is_err(),
            timestamp: Utc::now(),
        });

        if outcome.is_ok() {
            outcome = self.run_commands(target.entry_commands(), env).await;
            if outcome.is_err() {
                runtime.history.mark_last_command_failed();
            }
        }

        match outcome {
            Ok(()) => {
                info!(
                    from = source.name(),
                    to = target.name(),
                    event = event.code(),
                    "transitioned"
                );
                FireResult::Transitioned {
                    from,
                    to,
                    event: event.clone(),
                }
            }
            Err((failed_command, cause)) => {
                warn!(
                    from = source.name(),
                    to = target.name(),
                    event = event.code(),
                    command = failed_command.code(),
                    error = %cause,
                    "command failed; transition committed"
                );
                FireResult::CommandFailed {
                    event: event.clone(),
                    from,
                    target_state: to,
                    failed_command,
                    cause,
                }
            }
        }
    }

    /// Run a batch of commands in order, stopping at the first failure.
    async fn run_commands(
        &self,
        commands: &[Command],
        env: &Env,
    ) -> Result<(), (Command, ExecutionError)> {
        for command in commands {
            debug!(command = command.code(), "executing command");
            self.executor
                .execute(command)
                .run(env)
                .await
                .map_err(|cause| (command.clone(), cause))?;
        }
        Ok(())
    }

    fn contains(&self, id: StateId) -> bool {
        id.machine() == self.id && id.index() < self.states.len()
    }

    fn ensure_assembling(&self) -> Result<(), MachineError> {
        if self.is_running() {
            Err(MachineError::MachineAlreadyRunning)
        } else {
            Ok(())
        }
    }
}
