//! Checkpoint and Resume
//!
//! This example saves a machine's runtime state, drops the machine, and
//! rebuilds it from the saved bytes against the same configuration.
//!
//! Run with: cargo run --example checkpoint_resume

use rewind::{fsm_config, Checkpoint, StateMachine};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Checkpoint and Resume ===\n");

    let config = Arc::new(fsm_config! {
        initial: "pending",
        states: {
            "pending" => { "pay" => "paid", "cancel" => "cancelled" },
            "paid" => { "ship" => "shipped", "refund" => "cancelled" },
            "shipped" => { "deliver" => "delivered" },
            "delivered" => {},
            "cancelled" => {},
        }
    });

    let mut machine = StateMachine::shared(Arc::clone(&config));
    machine.trigger("pay")?;
    machine.trigger("ship")?;
    machine.undo();
    println!("Before checkpoint: {}", machine.state());

    let json = machine.checkpoint().to_json()?;
    let bytes = machine.checkpoint().to_binary()?;
    println!("JSON checkpoint: {json}");
    println!("Binary checkpoint: {} bytes\n", bytes.len());
    drop(machine);

    let mut resumed = StateMachine::resume(config, Checkpoint::from_binary(&bytes)?)?;
    println!("Resumed at: {}", resumed.state());
    resumed.redo();
    println!("redo -> {}", resumed.state());
    resumed.trigger("deliver")?;
    println!("deliver -> {}", resumed.state());

    println!("\n=== Example Complete ===");
    Ok(())
}
