//! Result of delivering an event.

/// What a call to `trigger` did.
///
/// Every variant except `Transitioned` means the machine was left exactly as
/// it was. Callers that only care about the silent contract can ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A rule fired and the current state changed
    Transitioned,

    /// No rule matches the current state and event
    Ignored,

    /// `run` has not been called yet, so the initial state was never entered
    NotInitialized,
}

impl TriggerOutcome {
    pub fn fired(&self) -> bool {
        matches!(self, Self::Transitioned)
    }
}
