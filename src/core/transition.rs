//! Event-triggered transition records.

use super::state::State;
use std::fmt;

/// A rule moving the machine from `from` to `to` when `event` arrives.
///
/// Both endpoints are borrowed from the application. A `Transition` can only
/// be built with both present, so a table of them never holds a dangling or
/// missing endpoint.
pub struct Transition<'s, E> {
    pub event: E,
    pub from: &'s State,
    pub to: &'s State,
}

impl<'s, E: PartialEq> Transition<'s, E> {
    pub fn new(event: E, from: &'s State, to: &'s State) -> Self {
        Self { event, from, to }
    }

    /// Check if this rule fires for `event` while resident in `current`.
    pub fn matches(&self, current: &State, event: &E) -> bool {
        self.from.same(current) && self.event == *event
    }
}

impl<E: fmt::Debug> fmt::Debug for Transition<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("event", &self.event)
            .field("from", &self.from.name())
            .field("to", &self.to.name())
            .finish()
    }
}
