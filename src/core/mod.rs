//! Core state machine data types.
//!
//! This module contains the plain data the rest of the crate is built on:
//! - State identity records
//! - Named transitions with their (source, destination) pairs
//! - Transition history tracking
//!
//! Nothing in this module dispatches transitions or holds callbacks; it is
//! shared read-only between a machine definition and the stateful objects
//! built from it.

mod history;
mod state;
mod transition;

pub use history::{StateHistory, TransitionRecord};
pub use state::State;
pub use transition::Transition;
