//! Super-Loop Heater Controller
//!
//! This example drives a machine the way a bare-metal main loop would: one
//! `run` per cycle, with events polled from a fake sensor in between.
//!
//! Key concepts:
//! - Application-owned states with enter/step/exit behaviors
//! - Fieldless enum events
//! - Unmatched events are silently ignored
//! - Transition logs via `tracing`
//!
//! Run with: RUST_LOG=tickfsm=debug cargo run --example super_loop

use std::cell::Cell;
use std::rc::Rc;
use tickfsm::{transitions, State, StateMachine};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Event {
    TooCold,
    WarmEnough,
    Fault,
    Reset,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Super-Loop Heater Controller ===\n");

    let temperature = Rc::new(Cell::new(17.0_f64));

    let heat = Rc::clone(&temperature);
    let cool = Rc::clone(&temperature);
    let sensor = Rc::clone(&temperature);

    let idle = State::named("Idle")
        .on_enter(|| println!("  [idle] heater off"))
        .on_step(move || cool.set(cool.get() - 0.5));
    let heating = State::named("Heating")
        .on_enter(|| println!("  [heating] heater on"))
        .on_step(move || heat.set(heat.get() + 0.75))
        .on_exit(|| println!("  [heating] heater off"));

    let fault = State::named("Fault").on_enter(|| println!("  [fault] latched"));

    let mut machine = StateMachine::new(&idle);
    transitions!(machine;
        (Event::TooCold, &idle => &heating),
        (Event::WarmEnough, &heating => &idle),
        (Event::Fault, &idle => &fault),
        (Event::Fault, &heating => &fault),
        (Event::Reset, &fault => &idle),
    )
    .unwrap();

    for cycle in 0..16 {
        machine.run();

        let reading = sensor.get();
        println!(
            "cycle {:>2}: {:>5.2} C in {}",
            cycle,
            reading,
            machine.current_state().name()
        );

        let event = match cycle {
            12 => Event::Fault,
            14 => Event::Reset,
            _ if reading < 18.0 => Event::TooCold,
            _ => Event::WarmEnough,
        };
        machine.trigger(event);
    }

    println!("\nFinal state: {}", machine.current_state().name());
    println!("\n=== Example Complete ===");
}
