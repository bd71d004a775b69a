//! Property-based tests for the state machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated registrations and event sequences.

use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use tickfsm::{IndexedTable, MachineConfig, State, StateMachine, TriggerOutcome};

const STATES: usize = 4;

fn states() -> Vec<State> {
    (0..STATES).map(|i| State::named(format!("S{}", i))).collect()
}

prop_compose! {
    /// A registration where either endpoint may be missing.
    fn arbitrary_registration()(
        event in 0..4i32,
        from in proptest::option::weighted(0.8, 0..STATES),
        to in proptest::option::weighted(0.8, 0..STATES),
    ) -> (i32, Option<usize>, Option<usize>) {
        (event, from, to)
    }
}

prop_compose! {
    fn arbitrary_rule()(event in 0..4i32, from in 0..STATES, to in 0..STATES) -> (i32, usize, usize) {
        (event, from, to)
    }
}

proptest! {
    #[test]
    fn table_grows_only_for_complete_registrations(
        registrations in prop::collection::vec(arbitrary_registration(), 0..20)
    ) {
        let states = states();
        let mut machine = StateMachine::new(&states[0]);

        let mut valid = 0;
        for (event, from, to) in &registrations {
            let before = machine.transition_count();
            machine
                .add_transition(*event, from.map(|i| &states[i]), to.map(|i| &states[i]))
                .unwrap();

            if from.is_some() && to.is_some() {
                valid += 1;
                prop_assert_eq!(machine.transition_count(), before + 1);
            } else {
                prop_assert_eq!(machine.transition_count(), before);
            }
        }

        prop_assert_eq!(machine.transition_count(), valid);
    }

    #[test]
    fn strict_machine_errors_exactly_on_missing_endpoints(
        registrations in prop::collection::vec(arbitrary_registration(), 0..20)
    ) {
        let states = states();
        let mut machine = StateMachine::with_config(&states[0], MachineConfig::strict());

        for (event, from, to) in &registrations {
            let result =
                machine.add_transition(*event, from.map(|i| &states[i]), to.map(|i| &states[i]));
            prop_assert_eq!(result.is_ok(), from.is_some() && to.is_some());
        }
    }

    #[test]
    fn initial_enter_fires_once(runs in 1..50usize) {
        let enters = Rc::new(Cell::new(0));
        let steps = Rc::new(Cell::new(0));
        let (e, s) = (Rc::clone(&enters), Rc::clone(&steps));
        let state = State::marker()
            .on_enter(move || e.set(e.get() + 1))
            .on_step(move || s.set(s.get() + 1));

        let mut machine: StateMachine<'_, i32> = StateMachine::new(&state);
        for _ in 0..runs {
            machine.run();
        }

        prop_assert_eq!(enters.get(), 1);
        prop_assert_eq!(steps.get(), runs);
    }

    #[test]
    fn triggers_before_run_never_move(
        rules in prop::collection::vec(arbitrary_rule(), 0..12),
        events in prop::collection::vec(0..4i32, 0..12),
    ) {
        let states = states();
        let mut machine = StateMachine::new(&states[0]);
        for (event, from, to) in &rules {
            machine.add_transition(*event, &states[*from], &states[*to]).unwrap();
        }

        for event in events {
            prop_assert_eq!(machine.trigger(event), TriggerOutcome::NotInitialized);
            prop_assert!(machine.is_current(&states[0]));
        }
    }

    #[test]
    fn first_registered_duplicate_always_wins(
        event in 0..4i32,
        targets in prop::collection::vec(1..STATES, 1..6),
    ) {
        let states = states();
        let mut machine = StateMachine::new(&states[0]);
        for to in &targets {
            machine.add_transition(event, &states[0], &states[*to]).unwrap();
        }

        machine.run();
        prop_assert!(machine.trigger(event).fired());
        prop_assert!(machine.is_current(&states[targets[0]]));
    }

    #[test]
    fn indexed_and_linear_tables_agree(
        rules in prop::collection::vec(arbitrary_rule(), 0..16),
        events in prop::collection::vec(0..4i32, 0..32),
    ) {
        let states = states();
        let mut linear = StateMachine::new(&states[0]);
        let mut indexed =
            StateMachine::with_table(&states[0], MachineConfig::default(), IndexedTable::default());

        for (event, from, to) in &rules {
            linear.add_transition(*event, &states[*from], &states[*to]).unwrap();
            indexed.add_transition(*event, &states[*from], &states[*to]).unwrap();
        }

        linear.run();
        indexed.run();

        for event in events {
            prop_assert_eq!(linear.trigger(event), indexed.trigger(event));
            prop_assert!(linear.current_state().same(indexed.current_state()));
        }
    }

    #[test]
    fn trigger_moves_along_a_matching_rule(
        rules in prop::collection::vec(arbitrary_rule(), 0..16),
        events in prop::collection::vec(0..4i32, 0..32),
    ) {
        let states = states();
        let mut machine = StateMachine::new(&states[0]);
        for (event, from, to) in &rules {
            machine.add_transition(*event, &states[*from], &states[*to]).unwrap();
        }
        machine.run();

        for event in events {
            let before = machine.current_state();
            let expected = rules
                .iter()
                .find(|(e, from, _)| *e == event && states[*from].same(before))
                .map(|(_, _, to)| &states[*to]);

            let outcome = machine.trigger(event);
            match expected {
                Some(to) => {
                    prop_assert_eq!(outcome, TriggerOutcome::Transitioned);
                    prop_assert!(machine.is_current(to));
                }
                None => {
                    prop_assert_eq!(outcome, TriggerOutcome::Ignored);
                    prop_assert!(machine.current_state().same(before));
                }
            }
        }
    }
}
