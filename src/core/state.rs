//! State identity records.
//!
//! Within one machine definition a state is identity only: a unique
//! identifier with no attached data. Registration creates the record and
//! re-registering the same identifier is a harmless overwrite.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered state, identified by name.
///
/// # Example
///
/// ```rust
/// use statecraft::core::State;
///
/// let online = State::new("online");
/// assert_eq!(online.id(), "online");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct State {
    id: String,
}

impl State {
    /// Create a state record with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The state's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
