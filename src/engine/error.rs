//! Registration errors.

use std::fmt;
use thiserror::Error;

/// Which side of a transition was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    From,
    To,
    Both,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From => f.write_str("source state"),
            Self::To => f.write_str("target state"),
            Self::Both => f.write_str("source and target states"),
        }
    }
}

/// Errors raised while configuring a machine.
///
/// Only produced when the machine runs with `InvalidInputPolicy::Reject`.
/// Unmatched events are never errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("Transition for event {event} is missing its {missing}")]
    MissingEndpoint { event: String, missing: Endpoint },
}
