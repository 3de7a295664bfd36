//! Document Review Workflow
//!
//! This example builds a review workflow with the fluent builder and shows
//! how to query which states react to an event.
//!
//! Run with: cargo run --example document_review

use rewind::{BuildError, StateMachineBuilder};

fn main() -> Result<(), BuildError> {
    println!("=== Document Review Workflow ===\n");

    let mut machine = StateMachineBuilder::new()
        .initial("draft")
        .transition("draft", "submit", "review")
        .transition("review", "approve", "published")
        .transition("review", "reject", "draft")
        .transition("published", "retract", "draft")
        .state("archived")
        .history_limit(16)
        .strict()
        .build()?;

    println!("States: {:?}", machine.states(None));
    println!("States handling 'reject': {:?}\n", machine.states(Some("reject")));

    for event in ["submit", "reject", "submit", "approve"] {
        match machine.trigger(event) {
            Ok(()) => println!("{event:<8} -> {}", machine.state()),
            Err(err) => println!("{event:<8} failed: {err}"),
        }
    }

    // Archiving is an administrative move, not an event.
    if machine.change_state("archived").is_ok() {
        println!("archive  -> {}", machine.state());
    }

    println!("\nHistory: {:?}", machine.history().undo_stack());
    machine.clear_history();
    println!("After clear, can undo: {}", machine.can_undo());

    println!("\n=== Example Complete ===");
    Ok(())
}
