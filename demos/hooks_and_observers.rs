//! Hooks and Observers
//!
//! This example demonstrates the three observation points around a
//! successful transition.
//!
//! Key concepts:
//! - `on_exit` fires with the state being left, before the change commits
//! - `on_state_change` fires per object once the new state is committed
//! - `on_enter` fires last, with the state entered
//!
//! Run with: cargo run --example hooks_and_observers

use statecraft::MachineDefinition;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Hooks and Observers ===\n");

    let mut def = MachineDefinition::named("connection");
    def.states(["online", "offline"])
        .transition("toggle", "offline", "online")?
        .transition("toggle", "online", "offline")?
        .on_exit(|state| println!("  exit:   leaving '{state}'"))
        .on_enter(|state| println!("  enter:  arrived in '{state}'"));

    let mut status = def.build("offline")?;
    status.on_state_change(|name, from, to| {
        println!("  change: '{name}' moved this object from '{from}' to '{to}'");
    });

    println!("Dispatching toggle from '{}':", status.state());
    status.apply("toggle")?;

    println!("\nDispatching toggle from '{}':", status.state());
    status.apply("toggle")?;

    println!("\nVisited states: {:?}", status.history().path());

    println!("\n=== Example Complete ===");
    Ok(())
}
