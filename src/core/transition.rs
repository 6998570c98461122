//! Named transitions and the source states they apply to.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named transition and its set of (source, destination) state pairs.
///
/// A single transition name may cover several disjoint source states, each
/// with its own destination. At most one destination is kept per source
/// state: registering the same source again overwrites the earlier
/// destination.
///
/// # Example
///
/// ```rust
/// use statecraft::core::Transition;
///
/// let mut toggle = Transition::new("toggle");
/// toggle.add_states("online", "offline");
/// toggle.add_states("offline", "online");
///
/// assert!(toggle.is_applicable_for_state("online"));
/// assert_eq!(toggle.to_state("online"), Some("offline"));
/// assert_eq!(toggle.to_state("idle"), None);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transition {
    name: String,
    applicable_states: HashMap<String, String>,
}

impl Transition {
    /// Create a transition with no applicable states yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            applicable_states: HashMap::new(),
        }
    }

    /// The transition's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register the destination for `from`, overwriting any earlier one.
    pub fn add_states(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.applicable_states.insert(from.into(), to.into());
    }

    /// Whether this transition has a destination registered for `state`.
    ///
    /// This is the sole validity gate consulted at dispatch time.
    pub fn is_applicable_for_state(&self, state: &str) -> bool {
        self.applicable_states.contains_key(state)
    }

    /// The destination registered for `from`, if any.
    pub fn to_state(&self, from: &str) -> Option<&str> {
        self.applicable_states.get(from).map(String::as_str)
    }

    /// The registered source states, in no particular order.
    pub fn from_states(&self) -> impl Iterator<Item = &str> {
        self.applicable_states.keys().map(String::as_str)
    }

    /// Number of (source, destination) pairs registered under this name.
    pub fn len(&self) -> usize {
        self.applicable_states.len()
    }

    /// Whether no (source, destination) pair has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.applicable_states.is_empty()
    }
}
