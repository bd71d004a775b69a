//! Tickfsm: a small tick-driven finite state machine
//!
//! Tickfsm targets control loops: a fixed set of states, each with optional
//! enter, step and exit behaviors, and a table of event-triggered
//! transitions between them. The application owns the states; a
//! `StateMachine` borrows them and owns only its transition table.
//!
//! # Core Concepts
//!
//! - **State**: An identity with up to three behavior slots
//! - **Transition**: A rule `(event, from, to)`; the first registered match wins
//! - **Tick**: One call to `run`, which enters the initial state the first
//!   time and steps the current state every time
//! - **Trigger**: Delivery of an event, firing at most one transition
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tickfsm::{State, StateMachine, TriggerOutcome};
//!
//! let ticks = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&ticks);
//!
//! let idle = State::named("Idle");
//! let active = State::named("Active").on_step(move || counter.set(counter.get() + 1));
//!
//! let mut machine = StateMachine::new(&idle);
//! machine.add_transition(1, &idle, &active).unwrap();
//!
//! assert_eq!(machine.trigger(1), TriggerOutcome::NotInitialized);
//!
//! machine.run();
//! assert_eq!(machine.trigger(1), TriggerOutcome::Transitioned);
//! machine.run();
//!
//! assert_eq!(ticks.get(), 1);
//! assert_eq!(machine.trigger(1), TriggerOutcome::Ignored);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use config::{InvalidInputPolicy, MachineConfig};
pub use core::{Behavior, IndexedTable, LinearTable, State, Transition, TransitionTable};
pub use engine::{Endpoint, MachineError, StateMachine, TriggerOutcome};
