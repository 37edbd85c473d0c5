//! Core state machine types and dispatch logic.
//!
//! This module contains the heart of the runtime:
//! - Signals and the signal registry
//! - The `State` behavior contract
//! - The transition table and its stay-by-default resolution
//! - The `StateMachine` with both dispatch modes
//! - Transition logging

mod error;
mod history;
mod machine;
mod registry;
mod signal;
mod state;
mod table;

pub use error::MachineError;
pub use history::{TransitionLog, TransitionRecord};
pub use machine::StateMachine;
pub use registry::SignalRegistry;
pub use signal::Signal;
pub use state::{Context, Next, Outcome, State};
pub use table::TransitionTable;
