//! Fluent machine definitions.

use crate::builder::error::ConfigurationError;
use crate::core::{State, Transition};
use crate::stateful::object::{DispatchTable, Hook};
use crate::stateful::Stateful;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Strictness flags recognized when constructing a machine definition.
///
/// Both flags default to true. They are independent: a definition may
/// accept transitions over undeclared states while still erroring on
/// invalid dispatch, and vice versa.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DefinitionOptions {
    /// Error when `transition` references a state that was never registered.
    pub error_on_unknown_state: bool,
    /// Error when a dispatched transition has no destination for the
    /// object's current state. When false, dispatch reports the failure
    /// through its boolean result instead.
    pub error_on_invalid_transition: bool,
}

impl Default for DefinitionOptions {
    fn default() -> Self {
        Self {
            error_on_unknown_state: true,
            error_on_invalid_transition: true,
        }
    }
}

/// Reusable blueprint of states, transitions and hooks.
///
/// States and transitions are declared through chained mutator calls, then
/// `build` stamps out a stateful object carrying the declared dispatch
/// surface and an initial state. `build` borrows the definition, so one
/// definition can produce any number of fully independent objects.
///
/// # Example
///
/// ```rust
/// use statecraft::MachineDefinition;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut def = MachineDefinition::named("connection");
/// def.states(["online", "offline"])
///     .transition("connect", "offline", "online")?
///     .transition("disconnect", "online", "offline")?;
///
/// let mut status = def.build("offline")?;
/// status.apply("connect")?;
/// assert_eq!(status.state(), "online");
/// # Ok(())
/// # }
/// ```
pub struct MachineDefinition {
    id: Option<String>,
    options: DefinitionOptions,
    states: HashMap<String, State>,
    transition_index: HashMap<String, usize>,
    transitions: Vec<Transition>,
    on_enter: Hook,
    on_exit: Hook,
}

impl std::fmt::Debug for MachineDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MachineDefinition")
            .field("id", &self.id)
            .field("options", &self.options)
            .field("states", &self.states)
            .field("transition_index", &self.transition_index)
            .field("transitions", &self.transitions)
            .finish_non_exhaustive()
    }
}

fn noop_hook() -> Hook {
    Arc::new(|_: &str| {})
}

impl MachineDefinition {
    /// Create an anonymous definition with default options.
    pub fn new() -> Self {
        Self::with_options(DefinitionOptions::default())
    }

    /// Create a named definition with default options.
    pub fn named(id: impl Into<String>) -> Self {
        Self::named_with_options(id, DefinitionOptions::default())
    }

    /// Create an anonymous definition with the given options.
    pub fn with_options(options: DefinitionOptions) -> Self {
        Self {
            id: None,
            options,
            states: HashMap::new(),
            transition_index: HashMap::new(),
            transitions: Vec::new(),
            on_enter: noop_hook(),
            on_exit: noop_hook(),
        }
    }

    /// Create a named definition with the given options.
    pub fn named_with_options(id: impl Into<String>, options: DefinitionOptions) -> Self {
        let mut definition = Self::with_options(options);
        definition.id = Some(id.into());
        definition
    }

    /// The definition's id, if it was given one.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The strictness flags this definition was created with.
    pub fn options(&self) -> DefinitionOptions {
        self.options
    }

    /// Register a state identifier. Re-registration is a harmless
    /// overwrite.
    pub fn state(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        self.states.insert(id.clone(), State::new(id));
        self
    }

    /// Register every state identifier in `ids`, in order.
    pub fn states<I>(&mut self, ids: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for id in ids {
            self.state(id);
        }
        self
    }

    /// Register a transition edge from `from` to `to` under `name`.
    ///
    /// When the definition already knows a transition called `name`, the
    /// edge is added to it, so one name can cover several disjoint source
    /// states. Registering the same name and source again overwrites the
    /// earlier destination.
    ///
    /// With `error_on_unknown_state` set, both endpoints must have been
    /// registered beforehand; the check runs before any mutation.
    pub fn transition(
        &mut self,
        name: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<&mut Self, ConfigurationError> {
        let name = name.into();
        let from = from.into();
        let to = to.into();

        if self.options.error_on_unknown_state {
            if !self.states.contains_key(&from) {
                return Err(ConfigurationError::UnknownState {
                    transition: name,
                    state: from,
                });
            }
            if !self.states.contains_key(&to) {
                return Err(ConfigurationError::UnknownState {
                    transition: name,
                    state: to,
                });
            }
        }

        match self.transition_index.get(&name) {
            Some(&index) => self.transitions[index].add_states(from, to),
            None => {
                let mut transition = Transition::new(name.clone());
                transition.add_states(from, to);
                self.transition_index.insert(name, self.transitions.len());
                self.transitions.push(transition);
            }
        }

        Ok(self)
    }

    /// Replace the hook invoked after every successful transition with the
    /// entered state. Exactly one enter hook is active; the last
    /// registration wins.
    pub fn on_enter<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_enter = Arc::new(hook);
        self
    }

    /// Replace the hook invoked before every state change with the state
    /// being left. Exactly one exit hook is active; the last registration
    /// wins.
    pub fn on_exit<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_exit = Arc::new(hook);
        self
    }

    /// Build a stateful object starting in `initial`.
    pub fn build(&self, initial: &str) -> Result<Stateful, ConfigurationError> {
        self.build_with(initial, ())
    }

    /// Build a stateful object starting in `initial`, carrying `target` as
    /// its payload.
    ///
    /// The dispatch surface is snapshotted here: transitions declared on
    /// the definition after this call are invisible to the returned object.
    pub fn build_with<T>(&self, initial: &str, target: T) -> Result<Stateful<T>, ConfigurationError> {
        if !self.states.contains_key(initial) {
            return Err(ConfigurationError::UnknownInitialState {
                state: initial.to_string(),
            });
        }

        let table = DispatchTable {
            machine_id: self.id.clone(),
            transitions: self
                .transitions
                .iter()
                .map(|t| (t.name().to_string(), t.clone()))
                .collect(),
            names: self.transitions.iter().map(|t| t.name().to_string()).collect(),
            error_on_invalid_transition: self.options.error_on_invalid_transition,
            on_enter: Arc::clone(&self.on_enter),
            on_exit: Arc::clone(&self.on_exit),
        };

        Ok(Stateful::new(initial.to_string(), target, Arc::new(table)))
    }

    /// The registered states, in no particular order.
    pub fn registered_states(&self) -> Vec<&State> {
        self.states.values().collect()
    }

    /// The registered transitions, in declaration order.
    pub fn registered_transitions(&self) -> &[Transition] {
        &self.transitions
    }
}

impl Default for MachineDefinition {
    fn default() -> Self {
        Self::new()
    }
}
