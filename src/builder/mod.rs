//! Builder API for seeded state machine construction.
//!
//! Hosts can always wire a machine by hand with `add_state` /
//! `set_transitions` / `set_current`; this module packages that sequence
//! into a fluent builder with build-time validation, plus the [`routes!`]
//! macro for declarative tables.
//!
//! [`routes!`]: crate::routes

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
