//! Multiple Stateful Objects
//!
//! This example demonstrates that one machine definition can stamp out any
//! number of fully independent stateful objects.
//!
//! Key concepts:
//! - `build` borrows the definition, so it can be called repeatedly
//! - Sibling objects share only the read-only dispatch surface
//! - Each object owns its state and its history
//!
//! Run with: cargo run --example multiple_stateful

use statecraft::MachineDefinition;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Multiple Stateful Objects ===\n");

    let mut def = MachineDefinition::named("connection");
    def.states(["online", "offline"])
        .transition("connect", "offline", "online")?
        .transition("disconnect", "online", "offline")?;

    let mut one = def.build("offline")?;
    let mut two = def.build("online")?;

    println!("one: {}", one.state()); // offline
    println!("two: {}", two.state()); // online

    two.apply("disconnect")?;
    println!("\nAfter two.disconnect():");
    println!("one: {}", one.state()); // offline
    println!("two: {}", two.state()); // offline

    one.apply("connect")?;
    println!("\nAfter one.connect():");
    println!("one: {}", one.state()); // online
    println!("two: {}", two.state()); // offline

    println!("\nHistories are per-object:");
    println!("one applied {} transition(s)", one.history().len());
    println!("two applied {} transition(s)", two.history().len());

    println!("\n=== Example Complete ===");
    Ok(())
}
