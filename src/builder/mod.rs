//! Builder API for declaring a machine in one expression.
//!
//! `MachineBuilder` collects the initial state, the config and the rules,
//! then registers the rules in order when `build` is called. The
//! `transitions!` macro does the same for a machine that already exists.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;
