//! The running state machine.
//!
//! `StateMachine` is driven from the outside: a super-loop or scheduler
//! calls `run` once per cycle and `trigger` whenever an event arrives. Both
//! calls are synchronous and complete before returning.
//!
//! Neither call ever fails. An event the current state has no rule for is
//! dropped, and `trigger` reports what happened through `TriggerOutcome`.
//! Registration can fail only when the machine is configured to reject
//! invalid input.

mod error;
mod machine;
mod outcome;

pub use error::{Endpoint, MachineError};
pub use machine::StateMachine;
pub use outcome::TriggerOutcome;
