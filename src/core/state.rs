//! States and their behavior slots.
//!
//! A state is an identity plus up to three zero-argument behaviors. The
//! application owns every `State`; machines only borrow them, and compare
//! them by address rather than by value.

use std::fmt;

/// A zero-argument behavior attached to a state.
///
/// Behaviors are plain side-effecting closures. They run synchronously on
/// the caller's thread and any panic they raise unwinds through the machine
/// unchanged.
pub type Behavior = Box<dyn Fn()>;

const UNNAMED: &str = "<unnamed>";

/// A machine state with optional enter, step and exit behaviors.
///
/// Each slot is either present or absent. A state with every slot empty is a
/// valid marker state.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tickfsm::core::State;
///
/// let entered = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&entered);
///
/// let idle = State::named("Idle").on_enter(move || counter.set(counter.get() + 1));
///
/// assert!(idle.has_enter());
/// assert!(!idle.has_step());
/// assert_eq!(idle.name(), "Idle");
/// ```
#[derive(Default)]
pub struct State {
    name: Option<String>,
    enter: Option<Behavior>,
    step: Option<Behavior>,
    exit: Option<Behavior>,
}

impl State {
    /// Create a state from its three behavior slots.
    pub fn new(enter: Option<Behavior>, step: Option<Behavior>, exit: Option<Behavior>) -> Self {
        Self {
            name: None,
            enter,
            step,
            exit,
        }
    }

    /// Create a state with no behaviors and no name.
    pub fn marker() -> Self {
        Self::default()
    }

    /// Create an empty state carrying a diagnostic name.
    ///
    /// The name only shows up in logs and `Debug` output; it plays no part
    /// in identity.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the enter behavior, replacing any previous one.
    pub fn on_enter<F>(mut self, behavior: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.enter = Some(Box::new(behavior));
        self
    }

    /// Set the step behavior, replacing any previous one.
    pub fn on_step<F>(mut self, behavior: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.step = Some(Box::new(behavior));
        self
    }

    /// Set the exit behavior, replacing any previous one.
    pub fn on_exit<F>(mut self, behavior: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.exit = Some(Box::new(behavior));
        self
    }

    /// Diagnostic name, or `"<unnamed>"`.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }

    pub fn has_enter(&self) -> bool {
        self.enter.is_some()
    }

    pub fn has_step(&self) -> bool {
        self.step.is_some()
    }

    pub fn has_exit(&self) -> bool {
        self.exit.is_some()
    }

    /// Reference identity. Two distinct `State` values are never the same
    /// state, even when they look alike.
    pub fn same(&self, other: &State) -> bool {
        std::ptr::eq(self, other)
    }

    pub(crate) fn enter(&self) {
        if let Some(behavior) = &self.enter {
            behavior();
        }
    }

    pub(crate) fn step(&self) {
        if let Some(behavior) = &self.step {
            behavior();
        }
    }

    pub(crate) fn exit(&self) {
        if let Some(behavior) = &self.exit {
            behavior();
        }
    }

    /// Address used as the state's key in indexed tables.
    pub(crate) fn key(&self) -> usize {
        self as *const State as usize
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name())
            .field("enter", &self.has_enter())
            .field("step", &self.has_step())
            .field("exit", &self.has_exit())
            .finish()
    }
}
