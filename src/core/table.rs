//! Transition tables: which signal, in which state, leads where.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A mapping from `(state name, signal name)` to a target state name.
///
/// Unmapped keys resolve to the current state: an unknown signal is a
/// no-op transition, not an error. The default is part of the contract,
/// not a hidden fallback; [`TransitionTable::lookup`] exposes the raw
/// mapping so callers can tell a mapped self-loop from the default.
///
/// Tables are plain data. Target validation against a machine's registered
/// states happens when a table is assigned with
/// [`StateMachine::set_transitions`], never during lookup.
///
/// # Example
///
/// ```rust
/// use ministate::TransitionTable;
///
/// let table = TransitionTable::new()
///     .route("Idle", "start", "Running")
///     .route("Running", "relax", "Idle");
///
/// assert_eq!(table.resolve("Idle", "start"), "Running");
/// // Unmapped: stay.
/// assert_eq!(table.resolve("Running", "start"), "Running");
/// assert_eq!(table.lookup("Running", "start"), None);
/// ```
///
/// [`StateMachine::set_transitions`]: crate::StateMachine::set_transitions
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTable {
    routes: HashMap<String, HashMap<String, String>>,
}

impl TransitionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route, chainable for literal table construction.
    pub fn route(
        mut self,
        state: impl Into<String>,
        signal: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        self.add_route(state, signal, target);
        self
    }

    /// Add a route in place. An existing route for the same key is
    /// replaced.
    pub fn add_route(
        &mut self,
        state: impl Into<String>,
        signal: impl Into<String>,
        target: impl Into<String>,
    ) {
        self.routes
            .entry(state.into())
            .or_default()
            .insert(signal.into(), target.into());
    }

    /// Remove a route, returning the previous target if one was mapped.
    pub fn remove_route(&mut self, state: &str, signal: &str) -> Option<String> {
        let targets = self.routes.get_mut(state)?;
        let removed = targets.remove(signal);
        if targets.is_empty() {
            self.routes.remove(state);
        }
        removed
    }

    /// The raw mapping for a key, without the stay default.
    pub fn lookup(&self, state: &str, signal: &str) -> Option<&str> {
        self.routes
            .get(state)
            .and_then(|targets| targets.get(signal))
            .map(String::as_str)
    }

    /// The target for a key with the stay default applied: unmapped keys
    /// resolve to `state` itself.
    pub fn resolve<'a>(&'a self, state: &'a str, signal: &str) -> &'a str {
        self.lookup(state, signal).unwrap_or(state)
    }

    /// Iterate over `(state, signal, target)` triples.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.routes.iter().flat_map(|(state, targets)| {
            targets
                .iter()
                .map(move |(signal, target)| (state.as_str(), signal.as_str(), target.as_str()))
        })
    }

    /// Iterate over every target the table references.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.routes
            .values()
            .flat_map(|targets| targets.values().map(String::as_str))
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.values().map(HashMap::len).sum()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
