//! Strict Builder
//!
//! This example contrasts lenient and strict construction of a machine.
//!
//! Key concepts:
//! - Lenient builds drop invalid transitions silently
//! - Strict builds report every invalid transition at once
//! - Named methods become convention hooks
//!
//! Run with: cargo run --example strict_builder

use safe_fsm::core::TransitionContext;
use safe_fsm::machine::BuildError;
use safe_fsm::StateMachineBuilder;

#[derive(Default)]
struct Water {
    temperature: i32,
    log: Vec<String>,
}

fn main() {
    println!("=== Strict Builder Example ===\n");

    let table = || {
        StateMachineBuilder::new(Water::default())
            .transition("freeze", "LIQUID", "SOLID")
            .transition("condense", "GAS", "LIQUID")
            .transition("default", "A", "B")
            .transition("freeze", "GAS", "SOLID")
            .initial("GAS")
    };

    let lenient = table().build().unwrap();
    println!("Lenient build events: {:?}", lenient.list_events());

    match table().strict().build() {
        Ok(_) => println!("Strict build unexpectedly succeeded"),
        Err(BuildError::InvalidTransitions(errors)) => {
            println!("Strict build rejected {} transitions:", errors.len());
            for error in errors {
                println!("  - {error}");
            }
        }
        Err(error) => println!("Strict build failed: {error}"),
    }

    let mut machine = StateMachineBuilder::new(Water {
        temperature: 90,
        ..Water::default()
    })
    .transition("freeze", "LIQUID", "SOLID")
    .transition("condense", "GAS", "LIQUID")
    .initial("GAS")
    .guard_method("beforeCondense", |w: &mut Water, _: &TransitionContext| {
        w.temperature < 120
    })
    .action_method("afterCondense", |w: &mut Water, ctx: &TransitionContext| {
        w.log.push(format!("condensed from {:?}", ctx.from_state()));
    })
    .strict()
    .build()
    .unwrap();

    machine.fire("condense");
    println!("\nStrict machine state: {:?}", machine.current_state());
    println!("Hook log: {:?}", machine.data().log);

    println!("\n=== Example Complete ===");
}
