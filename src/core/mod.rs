//! Core state machine types.
//!
//! This module contains the data the engine works on:
//! - `State` with its optional enter/step/exit behaviors
//! - `Transition` rules keyed by source state and event
//! - `TransitionTable` storage, linear or indexed
//!
//! Nothing here runs on its own; `engine::StateMachine` drives it.

mod state;
mod table;
mod transition;

pub use state::{Behavior, State};
pub use table::{IndexedTable, LinearTable, TransitionTable};
pub use transition::Transition;
