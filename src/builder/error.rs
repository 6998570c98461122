//! Configuration errors for machine definitions.

use thiserror::Error;

/// Errors raised while declaring a machine definition or building a
/// stateful object from one.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Cannot register transition '{transition}': unknown state '{state}'")]
    UnknownState { transition: String, state: String },

    #[error("Cannot build stateful object: unknown initial state '{state}'")]
    UnknownInitialState { state: String },
}
