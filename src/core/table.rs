//! Transition storage and lookup.
//!
//! Tables are append-only and keep insertion order. When several rules share
//! the same source state and event, lookup always returns the one registered
//! first, whichever table is used.

use super::state::State;
use super::transition::Transition;
use std::collections::HashMap;
use std::hash::Hash;

/// Storage for a machine's transition rules.
pub trait TransitionTable<'s, E> {
    /// Append a rule after every rule already present.
    fn insert(&mut self, transition: Transition<'s, E>);

    /// First rule, in insertion order, that fires for `event` in `current`.
    fn find(&self, current: &State, event: &E) -> Option<&Transition<'s, E>>;

    /// All rules in insertion order.
    fn as_slice(&self) -> &[Transition<'s, E>];

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rules in a `Vec`, looked up by a linear scan.
///
/// Lookup is O(n) in the number of rules, which is the right trade for the
/// handful of rules a control loop usually has.
#[derive(Debug)]
pub struct LinearTable<'s, E> {
    entries: Vec<Transition<'s, E>>,
}

impl<E> Default for LinearTable<'_, E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<'s, E: PartialEq> TransitionTable<'s, E> for LinearTable<'s, E> {
    fn insert(&mut self, transition: Transition<'s, E>) {
        self.entries.push(transition);
    }

    fn find(&self, current: &State, event: &E) -> Option<&Transition<'s, E>> {
        self.entries.iter().find(|t| t.matches(current, event))
    }

    fn as_slice(&self) -> &[Transition<'s, E>] {
        &self.entries
    }
}

/// Rules in a `Vec` plus a per-state event index.
///
/// The index maps each `(source, event)` pair to the position of the first
/// rule registered for it, so lookups are O(1) and later duplicates are
/// stored but never selected.
#[derive(Debug)]
pub struct IndexedTable<'s, E> {
    entries: Vec<Transition<'s, E>>,
    index: HashMap<usize, HashMap<E, usize>>,
}

impl<E> Default for IndexedTable<'_, E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<'s, E: Hash + Eq + Clone> TransitionTable<'s, E> for IndexedTable<'s, E> {
    fn insert(&mut self, transition: Transition<'s, E>) {
        let position = self.entries.len();
        self.index
            .entry(transition.from.key())
            .or_default()
            .entry(transition.event.clone())
            .or_insert(position);
        self.entries.push(transition);
    }

    fn find(&self, current: &State, event: &E) -> Option<&Transition<'s, E>> {
        let position = *self.index.get(&current.key())?.get(event)?;
        self.entries.get(position)
    }

    fn as_slice(&self) -> &[Transition<'s, E>] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_wins<'s, T: TransitionTable<'s, i32>>(
        mut table: T,
        a: &'s State,
        b: &'s State,
        c: &'s State,
    ) {
        table.insert(Transition::new(1, a, b));
        table.insert(Transition::new(1, a, c));

        let found = table.find(a, &1).unwrap();
        assert!(found.to.same(b));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn linear_table_prefers_first_registration() {
        let (a, b, c) = (State::marker(), State::marker(), State::marker());
        first_wins(LinearTable::default(), &a, &b, &c);
    }

    #[test]
    fn indexed_table_prefers_first_registration() {
        let (a, b, c) = (State::marker(), State::marker(), State::marker());
        first_wins(IndexedTable::default(), &a, &b, &c);
    }

    #[test]
    fn empty_tables_find_nothing() {
        let a = State::marker();
        let linear: LinearTable<'_, i32> = LinearTable::default();
        let indexed: IndexedTable<'_, i32> = IndexedTable::default();

        assert!(linear.is_empty());
        assert!(indexed.is_empty());
        assert!(linear.find(&a, &0).is_none());
        assert!(indexed.find(&a, &0).is_none());
    }

    #[test]
    fn indexed_lookup_separates_states_and_events() {
        let (a, b, c) = (State::named("A"), State::named("B"), State::named("C"));
        let mut table = IndexedTable::default();
        table.insert(Transition::new(1, &a, &b));
        table.insert(Transition::new(2, &a, &c));
        table.insert(Transition::new(1, &b, &c));

        assert!(table.find(&a, &1).unwrap().to.same(&b));
        assert!(table.find(&a, &2).unwrap().to.same(&c));
        assert!(table.find(&b, &1).unwrap().to.same(&c));
        assert!(table.find(&b, &2).is_none());
        assert!(table.find(&c, &1).is_none());
    }

    #[test]
    fn as_slice_keeps_insertion_order() {
        let (a, b) = (State::marker(), State::marker());
        let mut table = LinearTable::default();
        for event in [3, 1, 2] {
            table.insert(Transition::new(event, &a, &b));
        }

        let events: Vec<i32> = table.as_slice().iter().map(|t| t.event).collect();
        assert_eq!(events, vec![3, 1, 2]);
    }
}
