//! Tick-driven state machine.

use crate::config::MachineConfig;
use crate::core::{LinearTable, State, Transition, TransitionTable};
use crate::engine::error::{Endpoint, MachineError};
use crate::engine::outcome::TriggerOutcome;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// State machine driven by a periodic `run` and external `trigger` calls.
///
/// The machine borrows its states for `'s` and owns only its transition
/// table. Calls must be strictly sequential; there is no internal locking.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tickfsm::{State, StateMachine};
///
/// let counter = Rc::new(Cell::new(0));
/// let (on_enter, on_step) = (Rc::clone(&counter), Rc::clone(&counter));
///
/// let idle = State::named("Idle").on_enter(move || on_enter.set(on_enter.get() + 1));
/// let active = State::named("Active").on_step(move || on_step.set(on_step.get() + 1));
///
/// let mut machine = StateMachine::new(&idle);
/// machine.add_transition(5, &idle, &active).unwrap();
///
/// machine.run();
/// machine.trigger(5);
/// machine.run();
/// machine.run();
///
/// assert_eq!(counter.get(), 3);
/// assert!(machine.is_current(&active));
/// ```
pub struct StateMachine<'s, E = i32, T = LinearTable<'s, E>> {
    current: &'s State,
    table: T,
    initialized: bool,
    config: MachineConfig,
    _event: PhantomData<E>,
}

impl<'s, E: PartialEq + fmt::Debug> StateMachine<'s, E, LinearTable<'s, E>> {
    /// Create a machine resting in `initial`, with the default config and a
    /// linearly scanned table.
    ///
    /// Nothing runs until the first call to `run`.
    pub fn new(initial: &'s State) -> Self {
        Self::with_config(initial, MachineConfig::default())
    }

    /// Create a machine with an explicit config.
    pub fn with_config(initial: &'s State, config: MachineConfig) -> Self {
        Self::with_table(initial, config, LinearTable::default())
    }
}

impl<'s, E, T> StateMachine<'s, E, T>
where
    E: fmt::Debug,
    T: TransitionTable<'s, E>,
{
    /// Create a machine over a caller-chosen table, e.g. `IndexedTable`.
    ///
    /// Rules already in `table` are kept as they are.
    pub fn with_table(initial: &'s State, config: MachineConfig, table: T) -> Self {
        Self {
            current: initial,
            table,
            initialized: false,
            config,
            _event: PhantomData,
        }
    }

    /// Register a transition from `from` to `to` on `event`.
    ///
    /// Rules are kept in registration order. A missing endpoint never reaches
    /// the table; whether it is reported depends on the configured
    /// `InvalidInputPolicy`. No behavior runs here.
    pub fn add_transition<F, G>(&mut self, event: E, from: F, to: G) -> Result<(), MachineError>
    where
        F: Into<Option<&'s State>>,
        G: Into<Option<&'s State>>,
    {
        let missing = match (from.into(), to.into()) {
            (Some(from), Some(to)) => {
                self.table.insert(Transition { event, from, to });
                return Ok(());
            }
            (None, Some(_)) => Endpoint::From,
            (Some(_), None) => Endpoint::To,
            (None, None) => Endpoint::Both,
        };

        if self.config.rejects_invalid() {
            debug!(event = ?event, %missing, "rejecting transition");
            return Err(MachineError::MissingEndpoint {
                event: format!("{:?}", event),
                missing,
            });
        }

        debug!(event = ?event, %missing, "ignoring transition");
        Ok(())
    }

    /// Advance one tick.
    ///
    /// The first call enters the initial state; every call, the first
    /// included, then steps the current state.
    pub fn run(&mut self) {
        if !self.initialized {
            // Set before entering so a panicking enter is never replayed.
            self.initialized = true;
            trace!(state = self.current.name(), "entering initial state");
            self.current.enter();
        }

        trace!(state = self.current.name(), "step");
        self.current.step();
    }

    /// Deliver `event`, firing at most one transition.
    ///
    /// On a match the source state's exit runs, then the target's enter,
    /// then the target becomes current. Before the first `run`, or when no
    /// rule matches, nothing happens.
    pub fn trigger(&mut self, event: E) -> TriggerOutcome {
        if !self.initialized {
            trace!(event = ?event, "machine not initialized, dropping event");
            return TriggerOutcome::NotInitialized;
        }

        let Some(transition) = self.table.find(self.current, &event) else {
            trace!(state = self.current.name(), event = ?event, "no matching transition");
            return TriggerOutcome::Ignored;
        };

        let (from, to) = (transition.from, transition.to);
        debug!(
            from = from.name(),
            to = to.name(),
            event = ?event,
            "transition"
        );

        from.exit();
        to.enter();
        self.current = to;

        TriggerOutcome::Transitioned
    }

    /// The state the machine currently rests in.
    pub fn current_state(&self) -> &'s State {
        self.current
    }

    /// Check whether `state` is the current state (by identity).
    pub fn is_current(&self, state: &State) -> bool {
        self.current.same(state)
    }

    /// Whether the initial enter has happened.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn transition_count(&self) -> usize {
        self.table.len()
    }

    /// Registered rules in registration order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition<'s, E>> {
        self.table.as_slice().iter()
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }
}

impl<'s, E, T> fmt::Debug for StateMachine<'s, E, T>
where
    E: fmt::Debug,
    T: TransitionTable<'s, E>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current.name())
            .field("initialized", &self.initialized)
            .field("transitions", &self.table.len())
            .field("config", &self.config)
            .finish()
    }
}
