//! Connection Status State Machine
//!
//! This example demonstrates the basic declare-then-build workflow.
//!
//! Key concepts:
//! - Fluent state and transition declaration
//! - Building a stateful object with an initial state
//! - Dispatching transitions by name
//!
//! Run with: cargo run --example connection_status

use statecraft::MachineDefinition;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Connection Status State Machine ===\n");

    let mut def = MachineDefinition::named("connection");
    def.states(["online", "offline"])
        .transition("connect", "offline", "online")?
        .transition("disconnect", "online", "offline")?;

    let mut status = def.build("offline")?;
    println!("Initial state: {}", status.state());

    status.apply("connect")?;
    println!("After connect: {}", status.state());

    status.apply("disconnect")?;
    println!("After disconnect: {}", status.state());

    println!("\nDispatching 'disconnect' again while offline fails:");
    match status.apply("disconnect") {
        Err(err) => println!("  {err}"),
        Ok(_) => unreachable!("disconnect has no destination for 'offline'"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
