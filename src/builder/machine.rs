//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::config::MachineConfig;
use crate::core::{IndexedTable, LinearTable, State, TransitionTable};
use crate::engine::StateMachine;
use std::fmt::Debug;
use std::hash::Hash;

type Pending<'s, E> = (E, Option<&'s State>, Option<&'s State>);

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use tickfsm::builder::MachineBuilder;
/// use tickfsm::State;
///
/// let (red, green) = (State::named("Red"), State::named("Green"));
///
/// let mut machine = MachineBuilder::new()
///     .initial(&red)
///     .transition(0, &red, &green)
///     .transition(0, &green, &red)
///     .build()
///     .unwrap();
///
/// machine.run();
/// machine.trigger(0);
/// assert!(machine.is_current(&green));
/// ```
pub struct MachineBuilder<'s, E = i32> {
    initial: Option<&'s State>,
    config: MachineConfig,
    transitions: Vec<Pending<'s, E>>,
}

impl<'s, E: PartialEq + Debug> MachineBuilder<'s, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            config: MachineConfig::default(),
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: &'s State) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the machine config.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Reject transitions with a missing endpoint instead of dropping them.
    pub fn strict(self) -> Self {
        self.config(MachineConfig::strict())
    }

    /// Queue a transition. Rules are registered in the order they are queued.
    pub fn transition<F, G>(mut self, event: E, from: F, to: G) -> Self
    where
        F: Into<Option<&'s State>>,
        G: Into<Option<&'s State>>,
    {
        self.transitions.push((event, from.into(), to.into()));
        self
    }

    /// Build a machine with a linearly scanned table.
    pub fn build(self) -> Result<StateMachine<'s, E>, BuildError> {
        self.build_with(LinearTable::default())
    }

    /// Build a machine with an indexed table.
    pub fn build_indexed(self) -> Result<StateMachine<'s, E, IndexedTable<'s, E>>, BuildError>
    where
        E: Hash + Eq + Clone,
    {
        self.build_with(IndexedTable::default())
    }

    fn build_with<T>(self, table: T) -> Result<StateMachine<'s, E, T>, BuildError>
    where
        T: TransitionTable<'s, E>,
    {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut machine = StateMachine::with_table(initial, self.config, table);
        for (event, from, to) in self.transitions {
            machine.add_transition(event, from, to)?;
        }

        Ok(machine)
    }
}

impl<'s, E: PartialEq + Debug> Default for MachineBuilder<'s, E> {
    fn default() -> Self {
        Self::new()
    }
}
