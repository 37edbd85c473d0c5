//! Machine configuration errors.

use thiserror::Error;

/// Errors reported while configuring a state machine.
///
/// Dispatch itself never returns errors; anything that could dangle is
/// rejected up front, at assignment time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("transition target '{target}' for ('{state}', '{signal}') is not a registered state")]
    UnregisteredTarget {
        state: String,
        signal: String,
        target: String,
    },

    #[error("state '{name}' is not registered with this machine")]
    UnknownState { name: String },
}
