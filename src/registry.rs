//! Id-keyed storage of machine definitions.

use crate::builder::{DefinitionOptions, MachineDefinition};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Keeps machine definitions addressable by id.
///
/// Useful when definitions are declared once at startup and looked up by
/// name elsewhere. The registry owns its definitions; `create` hands back
/// a mutable reference so the fluent declaration can continue in place.
///
/// # Example
///
/// ```rust
/// use statecraft::MachineRegistry;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut registry = MachineRegistry::new();
/// registry
///     .create("connection")
///     .states(["online", "offline"])
///     .transition("connect", "offline", "online")?;
///
/// let def = registry.get("connection").unwrap();
/// let status = def.build("offline")?;
/// assert_eq!(status.machine_id(), Some("connection"));
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct MachineRegistry {
    definitions: HashMap<String, MachineDefinition>,
}

impl MachineRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Create and store a definition under `id` with default options,
    /// replacing any definition previously stored under that id.
    pub fn create(&mut self, id: impl Into<String>) -> &mut MachineDefinition {
        self.create_with_options(id, DefinitionOptions::default())
    }

    /// Create and store a definition under `id` with the given options,
    /// replacing any definition previously stored under that id.
    pub fn create_with_options(
        &mut self,
        id: impl Into<String>,
        options: DefinitionOptions,
    ) -> &mut MachineDefinition {
        let id = id.into();
        let definition = MachineDefinition::named_with_options(id.clone(), options);
        match self.definitions.entry(id) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(definition);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(definition),
        }
    }

    /// Look up a definition by id.
    pub fn get(&self, id: &str) -> Option<&MachineDefinition> {
        self.definitions.get(id)
    }

    /// Look up a definition by id for further declaration.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut MachineDefinition> {
        self.definitions.get_mut(id)
    }

    /// Remove and return the definition stored under `id`.
    pub fn remove(&mut self, id: &str) -> Option<MachineDefinition> {
        self.definitions.remove(id)
    }

    /// Drop every stored definition.
    pub fn reset(&mut self) {
        self.definitions.clear();
    }

    /// The stored ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// Number of stored definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the registry holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
