//! Macros for ergonomic transition registration.

/// Register a batch of transitions on an existing machine.
///
/// Each entry is `(event, from => to)`. Entries are registered in order with
/// `add_transition`; the macro evaluates to `Result<(), MachineError>` and
/// stops at the first rejected entry.
///
/// # Example
///
/// ```
/// use tickfsm::{transitions, State, StateMachine};
///
/// let (stopped, running) = (State::named("Stopped"), State::named("Running"));
/// let mut machine = StateMachine::new(&stopped);
///
/// transitions!(machine;
///     (1, &stopped => &running),
///     (2, &running => &stopped),
/// )
/// .unwrap();
///
/// assert_eq!(machine.transition_count(), 2);
/// ```
#[macro_export]
macro_rules! transitions {
    (
        $machine:expr;
        $(
            ($event:expr, $from:expr => $to:expr)
        ),* $(,)?
    ) => {{
        #[allow(unused_variables)]
        let machine = &mut $machine;
        #[allow(unused_mut)]
        let mut result: ::core::result::Result<(), $crate::engine::MachineError> =
            ::core::result::Result::Ok(());
        $(
            if result.is_ok() {
                result = machine.add_transition($event, $from, $to);
            }
        )*
        result
    }};
}
