//! Statecraft: a fluent state machine definition and instantiation library
//!
//! A `MachineDefinition` is a reusable blueprint: declare states and named
//! transitions through chained builder calls, then `build` any number of
//! independent stateful objects from it. Each stateful object carries its
//! own current state and dispatches the declared transitions by name,
//! validating them against the blueprint.
//!
//! # Core Concepts
//!
//! - **Machine definition**: the blueprint of states, transitions and hooks
//! - **Stateful object**: one instantiated machine with its own state
//! - **Transition**: a named edge set; one name may cover several source states
//! - **Strictness flags**: choose between errors and boolean outcomes for
//!   unknown states and invalid dispatch
//!
//! # Example
//!
//! ```rust
//! use statecraft::MachineDefinition;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut def = MachineDefinition::named("connection");
//! def.states(["online", "offline"])
//!     .transition("connect", "offline", "online")?
//!     .transition("disconnect", "online", "offline")?;
//!
//! let mut status = def.build("offline")?;
//! assert_eq!(status.state(), "offline");
//!
//! status.apply("connect")?;
//! assert_eq!(status.state(), "online");
//!
//! status.apply("disconnect")?;
//! assert_eq!(status.state(), "offline");
//! # Ok(())
//! # }
//! ```
//!
//! Dispatching a transition that does not apply to the current state is an
//! error by default; build the definition with
//! `DefinitionOptions { error_on_invalid_transition: false, .. }` to get a
//! boolean outcome instead.

pub mod builder;
pub mod core;
pub mod registry;
pub mod stateful;

// Re-export commonly used types
pub use builder::{ConfigurationError, DefinitionOptions, MachineDefinition};
pub use core::{State, StateHistory, Transition, TransitionRecord};
pub use registry::MachineRegistry;
pub use stateful::{Stateful, TransitionError};
