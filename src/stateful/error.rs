//! Dispatch errors for stateful objects.

use thiserror::Error;

/// Errors raised when dispatching a transition on a stateful object.
///
/// A failed dispatch never changes the object's state; the object stays
/// usable.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// The transition exists but has no destination registered for the
    /// object's current state. Only raised when the definition was built
    /// with `error_on_invalid_transition`; otherwise dispatch reports the
    /// failure through its boolean result.
    #[error("Cannot apply transition '{transition}' from state '{state}'")]
    NotApplicable { transition: String, state: String },

    /// The name is not on the object's dispatch surface at all. Raised
    /// regardless of strictness flags.
    #[error("Unknown transition '{transition}'")]
    UnknownTransition { transition: String },
}
