//! Light Switch State Machine
//!
//! This example walks a two-state machine forward and back through its
//! history.
//!
//! Key concepts:
//! - Configuration in its JSON shape
//! - Event-driven transitions
//! - Undo/redo and redo invalidation
//!
//! Run with: cargo run --example light_switch

use rewind::{MachineError, StateMachine};

const CONFIG: &str = r#"{
    "initial": "off",
    "states": {
        "off": { "transitions": { "switchOn": "on" } },
        "on": { "transitions": { "switchOff": "off" } }
    }
}"#;

fn main() -> Result<(), MachineError> {
    println!("=== Light Switch State Machine ===\n");

    let mut machine = StateMachine::from_json(CONFIG)?;
    println!("Initial state: {}", machine.state());

    machine.trigger("switchOn")?;
    println!("switchOn  -> {}", machine.state());
    machine.trigger("switchOff")?;
    println!("switchOff -> {}\n", machine.state());

    while machine.undo() {
        println!("undo      -> {}", machine.state());
    }
    println!("Nothing left to undo\n");

    machine.redo();
    println!("redo      -> {}", machine.state());

    machine.reset()?;
    println!("reset     -> {}", machine.state());
    println!("Redo available after reset: {}\n", machine.can_redo());

    match machine.trigger("switchOff") {
        Ok(()) => println!("unexpected transition"),
        Err(err) => println!("switchOff while off: {err}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
