//! Stateful objects: instantiated machines with their own current state.
//!
//! A stateful object is produced by `MachineDefinition::build` and carries
//! the definition's dispatch surface, its own state, its own transition
//! history and an optional caller payload.

mod error;
pub(crate) mod object;

pub use error::TransitionError;
pub use object::Stateful;
