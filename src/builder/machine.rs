//! Builder for constructing seeded state machines.

use crate::builder::error::BuildError;
use crate::core::{State, StateMachine, TransitionTable};

/// Builder for a machine seeded with states, a table, and an initial state.
///
/// Construction-time invariants (the table's targets and the initial state
/// referring only to registered states) are checked once in
/// [`build`](StateMachineBuilder::build) instead of being spread across
/// host setup code.
///
/// # Example
///
/// ```rust
/// use ministate::{Context, Outcome, State, StateMachineBuilder};
///
/// struct Idle;
///
/// impl State<()> for Idle {
///     fn name(&self) -> &str {
///         "Idle"
///     }
///
///     fn process(&mut self, cx: &mut Context<'_, ()>) -> Outcome {
///         Outcome::goto(cx.route())
///     }
/// }
///
/// let machine = StateMachineBuilder::new(())
///     .state(Idle)
///     .route("Idle", "noop", "Idle")
///     .initial("Idle")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), Some("Idle"));
/// ```
pub struct StateMachineBuilder<M> {
    machine: StateMachine<M>,
    table: TransitionTable,
    initial: Option<String>,
}

impl<M> StateMachineBuilder<M> {
    /// Start a builder around the shared model.
    pub fn new(model: M) -> Self {
        Self {
            machine: StateMachine::new(model),
            table: TransitionTable::new(),
            initial: None,
        }
    }

    /// Register a state. Duplicate names follow the machine's
    /// last-write-wins policy.
    pub fn state(mut self, state: impl State<M> + 'static) -> Self {
        self.machine.add_state(state);
        self
    }

    /// Add one route to the table being built.
    pub fn route(
        mut self,
        state: impl Into<String>,
        signal: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        self.table.add_route(state, signal, target);
        self
    }

    /// Replace the table being built wholesale, for instance with one from
    /// the [`routes!`](crate::routes) macro. Routes added earlier via
    /// [`route`](StateMachineBuilder::route) are discarded.
    pub fn table(mut self, table: TransitionTable) -> Self {
        self.table = table;
        self
    }

    /// Set the initial state by name. Optional: a machine may be built
    /// with no current state and pointed somewhere later.
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Validate and produce the machine.
    pub fn build(mut self) -> Result<StateMachine<M>, BuildError> {
        self.machine.set_transitions(self.table)?;
        if let Some(initial) = self.initial {
            self.machine
                .set_current(&initial)
                .map_err(|_| BuildError::UnknownInitialState(initial))?;
        }
        Ok(self.machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Context, MachineError, Outcome};

    struct Named(&'static str);

    impl State<()> for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn process(&mut self, cx: &mut Context<'_, ()>) -> Outcome {
            Outcome::goto(cx.route())
        }
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = StateMachineBuilder::new(())
            .state(Named("Idle"))
            .state(Named("Running"))
            .route("Idle", "start", "Running")
            .route("Running", "relax", "Idle")
            .initial("Idle")
            .build()
            .unwrap();

        assert_eq!(machine.current_state(), Some("Idle"));
        assert_eq!(machine.state_names().count(), 2);
        assert_eq!(machine.transitions().resolve("Idle", "start"), "Running");
    }

    #[test]
    fn initial_state_is_optional() {
        let machine = StateMachineBuilder::new(())
            .state(Named("Idle"))
            .build()
            .unwrap();

        assert_eq!(machine.current_state(), None);
    }

    #[test]
    fn unknown_initial_state_is_rejected() {
        let result = StateMachineBuilder::new(())
            .state(Named("Idle"))
            .initial("Running")
            .build();

        assert!(matches!(result, Err(BuildError::UnknownInitialState(name)) if name == "Running"));
    }

    #[test]
    fn dangling_route_target_is_rejected() {
        let result = StateMachineBuilder::new(())
            .state(Named("Idle"))
            .route("Idle", "start", "Running")
            .build();

        assert!(matches!(
            result,
            Err(BuildError::InvalidTable(MachineError::UnregisteredTarget { target, .. }))
                if target == "Running"
        ));
    }

    #[test]
    fn table_replaces_accumulated_routes() {
        let machine = StateMachineBuilder::new(())
            .state(Named("Idle"))
            .route("Idle", "start", "Missing")
            .table(TransitionTable::new().route("Idle", "noop", "Idle"))
            .build()
            .unwrap();

        assert_eq!(machine.transitions().lookup("Idle", "start"), None);
        assert_eq!(machine.transitions().lookup("Idle", "noop"), Some("Idle"));
    }
}
