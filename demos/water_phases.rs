//! Water Phases
//!
//! This example drives the water phase machine through its basic protocol.
//!
//! Key concepts:
//! - Transitions registered from a table with `transitions!`
//! - Seeding the machine once with `set_initial`
//! - Unmatched events leave the state alone
//! - A temperature guard vetoing `condense`
//!
//! Run with: cargo run --example water_phases

use safe_fsm::core::TransitionContext;
use safe_fsm::{transitions, StateMachine};

struct Water {
    temperature: i32,
}

fn main() {
    println!("=== Water Phases Example ===\n");

    let mut machine = StateMachine::new(Water { temperature: 130 });
    transitions!(machine, {
        freeze: LIQUID => SOLID,
        condense: GAS => LIQUID,
    });
    machine.define_transition("default", "A", "B");

    println!("Events: {:?}", machine.list_events());
    println!("States: {:?}", machine.list_states());

    // Water only condenses below 120 degrees
    machine.before("condense", |w: &mut Water, _: &TransitionContext| {
        w.temperature < 120
    });
    machine.after("condense", |_: &mut Water, ctx: &TransitionContext| {
        println!("  condensed out of {:?}", ctx.from_state());
    });

    machine.set_initial("GAS");
    println!("\nInitial state: {:?}", machine.current_state());

    println!("\nAt 130 degrees:");
    machine.fire("condense");
    println!("  state: {:?}", machine.current_state());

    println!("\nAt 100 degrees:");
    machine.data_mut().temperature = 100;
    machine.fire("condense");
    println!("  state: {:?}", machine.current_state());

    println!("\nCondensing again:");
    machine.fire("condense");
    println!("  state: {:?}", machine.current_state());

    println!("\nFreezing through the shortcut:");
    machine.invoke("freeze");
    println!("  state: {:?}", machine.current_state());

    println!("\n=== Example Complete ===");
}
