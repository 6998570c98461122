//! Macros for declaring machine definitions.

/// Declare a whole machine definition in one block.
///
/// States are registered before any transition, so edges between the
/// listed states never trip the unknown-state check; a typo in a
/// transition endpoint surfaces as a `ConfigurationError`. Repeating a
/// transition name adds another source state to it.
///
/// # Example
///
/// ```rust
/// use statecraft::machine_def;
///
/// let def = machine_def! {
///     id: "connection",
///     states: [online, offline],
///     transitions: {
///         connect: offline => online,
///         disconnect: online => offline,
///     }
/// }
/// .unwrap();
///
/// let mut status = def.build("offline").unwrap();
/// status.apply("connect").unwrap();
/// assert_eq!(status.state(), "online");
/// ```
#[macro_export]
macro_rules! machine_def {
    (
        id: $id:expr,
        states: [$($state:ident),* $(,)?],
        transitions: { $($name:ident : $from:ident => $to:ident),* $(,)? } $(,)?
    ) => {
        $crate::machine_def!(
            @build $crate::MachineDefinition::named($id),
            [$($state),*],
            [$($name, $from, $to);*]
        )
    };
    (
        states: [$($state:ident),* $(,)?],
        transitions: { $($name:ident : $from:ident => $to:ident),* $(,)? } $(,)?
    ) => {
        $crate::machine_def!(
            @build $crate::MachineDefinition::new(),
            [$($state),*],
            [$($name, $from, $to);*]
        )
    };
    (@build $def:expr, [$($state:ident),*], [$($name:ident, $from:ident, $to:ident);*]) => {{
        let mut def = $def;
        $(def.state(stringify!($state));)*
        let mut outcome: ::std::result::Result<(), $crate::ConfigurationError> = Ok(());
        $(
            if outcome.is_ok() {
                outcome = def
                    .transition(stringify!($name), stringify!($from), stringify!($to))
                    .map(|_| ());
            }
        )*
        outcome.map(|()| def)
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn macro_builds_a_working_definition() {
        let def = machine_def! {
            states: [online, offline],
            transitions: {
                connect: offline => online,
                disconnect: online => offline,
            }
        }
        .unwrap();

        let mut status = def.build("offline").unwrap();
        status.apply("connect").unwrap();
        assert_eq!(status.state(), "online");
    }

    #[test]
    fn macro_supports_an_id() {
        let def = machine_def! {
            id: "door",
            states: [open, closed],
            transitions: {
                close: open => closed,
                open: closed => open,
            }
        }
        .unwrap();

        assert_eq!(def.id(), Some("door"));
    }

    #[test]
    fn macro_supports_repeated_transition_names() {
        let def = machine_def! {
            states: [online, offline],
            transitions: {
                toggle: online => offline,
                toggle: offline => online,
            }
        }
        .unwrap();

        let mut status = def.build("online").unwrap();
        status.apply("toggle").unwrap();
        status.apply("toggle").unwrap();
        assert_eq!(status.state(), "online");
    }
}
