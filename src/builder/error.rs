//! Build errors for seeded machine construction.

use crate::core::MachineError;
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("initial state '{0}' is not registered. Call .state(..) before .initial(..)")]
    UnknownInitialState(String),

    #[error(transparent)]
    InvalidTable(#[from] MachineError),
}
