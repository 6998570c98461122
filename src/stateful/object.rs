//! Stateful objects and the transition dispatch algorithm.

use crate::core::{StateHistory, Transition, TransitionRecord};
use crate::stateful::error::TransitionError;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;

/// Shared hook callback, invoked with the state entered or exited.
pub(crate) type Hook = Arc<dyn Fn(&str) + Send + Sync>;

/// Per-object observer invoked after every successful transition with the
/// transition name, the state left and the state entered.
type StateChangeFn = Box<dyn FnMut(&str, &str, &str) + Send>;

/// Dispatch data snapshotted off a machine definition at build time.
///
/// Shared read-only between the stateful objects built from the same
/// definition. Transitions declared on the definition after a build are
/// not visible here.
pub(crate) struct DispatchTable {
    pub(crate) machine_id: Option<String>,
    pub(crate) transitions: HashMap<String, Transition>,
    pub(crate) names: Vec<String>,
    pub(crate) error_on_invalid_transition: bool,
    pub(crate) on_enter: Hook,
    pub(crate) on_exit: Hook,
}

/// One instantiated machine: a current state plus the dispatch surface
/// declared on its originating definition.
///
/// Objects built from the same definition share only the read-only
/// dispatch table; each owns its current state, history and observer, so
/// mutating one never affects another.
///
/// The optional payload `T` carries caller data alongside the state,
/// accessible through `target`/`target_mut`.
///
/// # Example
///
/// ```rust
/// use statecraft::MachineDefinition;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut def = MachineDefinition::new();
/// def.states(["online", "offline"])
///     .transition("toggle", "offline", "online")?
///     .transition("toggle", "online", "offline")?;
///
/// let mut status = def.build("online")?;
/// status.apply("toggle")?;
/// assert_eq!(status.state(), "offline");
/// status.apply("toggle")?;
/// assert_eq!(status.state(), "online");
/// # Ok(())
/// # }
/// ```
pub struct Stateful<T = ()> {
    state: String,
    target: T,
    table: Arc<DispatchTable>,
    state_change: StateChangeFn,
    history: StateHistory,
}

impl<T> std::fmt::Debug for Stateful<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stateful")
            .field("state", &self.state)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

impl<T> Stateful<T> {
    pub(crate) fn new(state: String, target: T, table: Arc<DispatchTable>) -> Self {
        Self {
            state,
            target,
            table,
            state_change: Box::new(|_, _, _| {}),
            history: StateHistory::new(),
        }
    }

    /// The current state identifier.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Overwrite the current state without dispatching a transition.
    ///
    /// No validation, hooks or history recording happen; this is an escape
    /// hatch for correcting state externally before re-dispatching.
    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
    }

    /// Dispatch the transition called `name`.
    ///
    /// When the transition has a destination registered for the current
    /// state, the object moves there and `Ok(true)` is returned. Callbacks
    /// fire in a fixed order: the exit hook sees the state being left, the
    /// state is committed, the `state_change` observer and the enter hook
    /// then see the new state.
    ///
    /// When it does not, the state is left untouched and the outcome
    /// depends on the definition's `error_on_invalid_transition` flag:
    /// an error when set, `Ok(false)` otherwise. A `name` that was never
    /// declared on the definition is an error regardless of flags.
    pub fn apply(&mut self, name: &str) -> Result<bool, TransitionError> {
        let transition =
            self.table
                .transitions
                .get(name)
                .ok_or_else(|| TransitionError::UnknownTransition {
                    transition: name.to_string(),
                })?;

        let to = match transition.to_state(&self.state) {
            Some(to) => to.to_string(),
            None => {
                if self.table.error_on_invalid_transition {
                    return Err(TransitionError::NotApplicable {
                        transition: name.to_string(),
                        state: self.state.clone(),
                    });
                }
                return Ok(false);
            }
        };

        let from = self.state.clone();
        (self.table.on_exit)(&from);
        self.state = to.clone();
        (self.state_change)(name, &from, &to);
        (self.table.on_enter)(&to);
        self.history = self.history.record(TransitionRecord {
            transition: name.to_string(),
            from,
            to,
            timestamp: Utc::now(),
        });

        Ok(true)
    }

    /// Whether dispatching `name` from the current state would succeed.
    pub fn can_apply(&self, name: &str) -> bool {
        self.table
            .transitions
            .get(name)
            .is_some_and(|t| t.is_applicable_for_state(&self.state))
    }

    /// The transition names on this object's dispatch surface, in
    /// declaration order.
    pub fn transition_names(&self) -> impl Iterator<Item = &str> {
        self.table.names.iter().map(String::as_str)
    }

    /// Replace the observer invoked after every successful transition.
    ///
    /// The observer receives the transition name, the state left and the
    /// state entered, in that order; the default observer does nothing.
    pub fn on_state_change<F>(&mut self, observer: F)
    where
        F: FnMut(&str, &str, &str) + Send + 'static,
    {
        self.state_change = Box::new(observer);
    }

    /// History of every transition this object has applied.
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Id of the originating machine definition, if it had one.
    pub fn machine_id(&self) -> Option<&str> {
        self.table.machine_id.as_deref()
    }

    /// The caller-supplied payload.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Mutable access to the caller-supplied payload.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Consume the object, returning the caller-supplied payload.
    pub fn into_target(self) -> T {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{DefinitionOptions, MachineDefinition};
    use std::sync::Mutex;

    fn connection_definition() -> MachineDefinition {
        let mut def = MachineDefinition::new();
        def.states(["online", "offline"]);
        def.transition("connect", "offline", "online").unwrap();
        def.transition("disconnect", "online", "offline").unwrap();
        def
    }

    fn lenient_dispatch() -> DefinitionOptions {
        DefinitionOptions {
            error_on_invalid_transition: false,
            ..DefinitionOptions::default()
        }
    }

    #[test]
    fn apply_moves_to_the_registered_destination() {
        let def = connection_definition();
        let mut status = def.build("offline").unwrap();

        let applied = status.apply("connect").unwrap();

        assert!(applied);
        assert_eq!(status.state(), "online");
    }

    #[test]
    fn invalid_transition_errors_by_default() {
        let def = connection_definition();
        let mut status = def.build("offline").unwrap();

        let err = status.apply("disconnect").unwrap_err();

        assert!(matches!(
            err,
            TransitionError::NotApplicable { ref transition, ref state }
                if transition == "disconnect" && state == "offline"
        ));
        assert!(err.to_string().contains("Cannot apply transition"));
        assert_eq!(status.state(), "offline");
    }

    #[test]
    fn invalid_transition_returns_false_when_lenient() {
        let mut def = MachineDefinition::with_options(lenient_dispatch());
        def.states(["online", "offline"]);
        def.transition("disconnect", "online", "offline").unwrap();

        let mut status = def.build("offline").unwrap();
        let applied = status.apply("disconnect").unwrap();

        assert!(!applied);
        assert_eq!(status.state(), "offline");
    }

    #[test]
    fn unknown_transition_errors_even_when_lenient() {
        let mut def = MachineDefinition::with_options(lenient_dispatch());
        def.state("online");

        let mut status = def.build("online").unwrap();

        assert!(matches!(
            status.apply("vanish"),
            Err(TransitionError::UnknownTransition { ref transition }) if transition == "vanish"
        ));
    }

    #[test]
    fn callbacks_fire_in_exit_change_enter_order() {
        let log: Arc<Mutex<Vec<String>>> = Default::default();

        let exit_log = Arc::clone(&log);
        let enter_log = Arc::clone(&log);
        let mut def = connection_definition();
        def.on_exit(move |state| exit_log.lock().unwrap().push(format!("exit:{state}")))
            .on_enter(move |state| enter_log.lock().unwrap().push(format!("enter:{state}")));

        let mut status = def.build("offline").unwrap();
        let change_log = Arc::clone(&log);
        status.on_state_change(move |name, from, to| {
            change_log
                .lock()
                .unwrap()
                .push(format!("change:{name}:{from}:{to}"));
        });

        status.apply("connect").unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "exit:offline".to_string(),
                "change:connect:offline:online".to_string(),
                "enter:online".to_string(),
            ]
        );
    }

    #[test]
    fn callbacks_do_not_fire_on_failed_dispatch() {
        let log: Arc<Mutex<Vec<String>>> = Default::default();

        let exit_log = Arc::clone(&log);
        let mut def = connection_definition();
        def.on_exit(move |state| exit_log.lock().unwrap().push(state.to_string()));

        let mut status = def.build("offline").unwrap();
        assert!(status.apply("disconnect").is_err());

        assert!(log.lock().unwrap().is_empty());
        assert!(status.history().is_empty());
    }

    #[test]
    fn observer_can_accumulate_across_calls() {
        let def = connection_definition();
        let mut status = def.build("offline").unwrap();

        let mut count = 0usize;
        let counter: Arc<Mutex<usize>> = Default::default();
        let slot = Arc::clone(&counter);
        status.on_state_change(move |_, _, _| {
            count += 1;
            *slot.lock().unwrap() = count;
        });

        status.apply("connect").unwrap();
        status.apply("disconnect").unwrap();

        assert_eq!(*counter.lock().unwrap(), 2);
    }

    #[test]
    fn set_state_overrides_without_side_effects() {
        let log: Arc<Mutex<Vec<String>>> = Default::default();

        let enter_log = Arc::clone(&log);
        let mut def = connection_definition();
        def.on_enter(move |state| enter_log.lock().unwrap().push(state.to_string()));

        let mut status = def.build("offline").unwrap();
        status.set_state("online");

        assert_eq!(status.state(), "online");
        assert!(log.lock().unwrap().is_empty());

        status.apply("disconnect").unwrap();
        assert_eq!(status.state(), "offline");
    }

    #[test]
    fn can_apply_reflects_the_current_state() {
        let def = connection_definition();
        let status = def.build("offline").unwrap();

        assert!(status.can_apply("connect"));
        assert!(!status.can_apply("disconnect"));
        assert!(!status.can_apply("vanish"));
    }

    #[test]
    fn transition_names_follow_declaration_order() {
        let def = connection_definition();
        let status = def.build("offline").unwrap();

        let names: Vec<&str> = status.transition_names().collect();
        assert_eq!(names, vec!["connect", "disconnect"]);
    }

    #[test]
    fn history_records_every_applied_transition() {
        let def = connection_definition();
        let mut status = def.build("offline").unwrap();

        status.apply("connect").unwrap();
        status.apply("disconnect").unwrap();

        let history = status.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history.records()[0].transition, "connect");
        assert_eq!(history.path(), vec!["offline", "online", "offline"]);
    }

    #[test]
    fn payload_travels_with_the_object() {
        #[derive(Debug, PartialEq)]
        struct Connection {
            attempts: u32,
        }

        let def = connection_definition();
        let mut status = def
            .build_with("offline", Connection { attempts: 0 })
            .unwrap();

        status.target_mut().attempts += 1;
        status.apply("connect").unwrap();

        assert_eq!(status.target().attempts, 1);
        assert_eq!(status.into_target(), Connection { attempts: 1 });
    }

    #[test]
    fn machine_id_comes_from_the_definition() {
        let mut def = MachineDefinition::named("connection");
        def.state("online");

        let status = def.build("online").unwrap();
        assert_eq!(status.machine_id(), Some("connection"));
    }
}
