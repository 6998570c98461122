//! Builder API for declaring machine definitions.
//!
//! This module provides the fluent `MachineDefinition` builder and the
//! `machine_def!` macro for declaring a whole machine in one block.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::ConfigurationError;
pub use machine::{DefinitionOptions, MachineDefinition};
