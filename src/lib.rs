//! Ministate: a minimalist embeddable state machine
//!
//! A host object defines a set of named states, each encapsulating behavior,
//! and moves between them in response to named, optionally payload-bearing
//! [`Signal`]s. Routing lives in a [`TransitionTable`] keyed by
//! `(state name, signal name)`; behavior lives in [`State`] implementations
//! that read and mutate the shared model.
//!
//! Two dispatch modes drive the same abstraction:
//!
//! - **Single-step**: [`StateMachine::process`] hands one signal to the
//!   current state, which returns the next state (typically by consulting
//!   the table through its [`Context`]).
//! - **Queue-driven**: [`StateMachine::enqueue`] admits signals with a
//!   [`Priority`], and [`StateMachine::tick`] drains one per call, routing
//!   via the table and feeding any follow-up signal a state emits back into
//!   the queue. An empty queue is the run loop's termination condition.
//!
//! # Example
//!
//! ```rust
//! use ministate::{Context, Outcome, Signal, State, StateMachine, TransitionTable};
//!
//! struct Counter {
//!     value: i64,
//! }
//!
//! struct Adding;
//!
//! impl State<Counter> for Adding {
//!     fn name(&self) -> &str {
//!         "Adding"
//!     }
//!
//!     fn process(&mut self, cx: &mut Context<'_, Counter>) -> Outcome {
//!         cx.model.value += 1;
//!         Outcome::goto(cx.route())
//!     }
//! }
//!
//! struct Subtracting;
//!
//! impl State<Counter> for Subtracting {
//!     fn name(&self) -> &str {
//!         "Subtracting"
//!     }
//!
//!     fn process(&mut self, cx: &mut Context<'_, Counter>) -> Outcome {
//!         cx.model.value -= 1;
//!         Outcome::goto(cx.route())
//!     }
//! }
//!
//! let table = TransitionTable::new()
//!     .route("Adding", "less", "Subtracting")
//!     .route("Subtracting", "more", "Adding");
//!
//! let mut machine = StateMachine::new(Counter { value: 0 });
//! machine.add_state(Adding);
//! machine.add_state(Subtracting);
//! machine.set_transitions(table).unwrap();
//! machine.set_current("Adding").unwrap();
//!
//! // "more" has no route from Adding: the machine stays put.
//! machine.process(&Signal::new("more"));
//! assert_eq!(machine.current_state(), Some("Adding"));
//!
//! machine.process(&Signal::new("less"));
//! assert_eq!(machine.current_state(), Some("Subtracting"));
//! assert_eq!(machine.model().value, 2);
//! ```

pub mod builder;
pub mod core;
pub mod queue;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use core::{
    Context, MachineError, Next, Outcome, Signal, SignalRegistry, State, StateMachine,
    TransitionLog, TransitionRecord, TransitionTable,
};
pub use queue::{DispatchQueue, Priority};
