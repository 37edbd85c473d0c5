//! Interning of well-known signal names.

use crate::core::Signal;
use std::collections::HashMap;
use std::ops::Index;

/// A caller-owned registry of canonical signals.
///
/// Hosts that refer to the same signals from many places register the names
/// once at setup and read canonical instances afterwards, instead of
/// constructing fresh `Signal` values everywhere. Because signal identity is
/// the name alone, an independently constructed `Signal::new("start")` is
/// equal to the registered `registry["start"]`.
///
/// The registry is deliberately an explicit object with no process-wide
/// state: `register` takes `&mut self`, lookups take `&self`, so the
/// populate-once-then-read lifecycle falls out of the borrow rules.
///
/// # Example
///
/// ```rust
/// use ministate::{Signal, SignalRegistry};
///
/// let mut registry = SignalRegistry::new();
/// registry.register(["start", "relax"]);
///
/// assert_eq!(registry["start"], Signal::new("start"));
/// assert!(registry.get("sprint").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SignalRegistry {
    signals: HashMap<String, Signal>,
}

impl SignalRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a canonical signal for each name.
    ///
    /// Re-registering a name is idempotent with last-write-wins; repeated
    /// setup calls are harmless.
    pub fn register<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            let signal = Signal::new(name.clone());
            self.signals.insert(name, signal);
        }
    }

    /// Look up the canonical signal for a name.
    pub fn get(&self, name: &str) -> Option<&Signal> {
        self.signals.get(name)
    }

    /// Whether a name has been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.signals.contains_key(name)
    }

    /// Iterate over the registered names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.signals.keys().map(String::as_str)
    }

    /// Number of registered signals.
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

impl Index<&str> for SignalRegistry {
    type Output = Signal;

    /// Panics if the name was never registered; use [`SignalRegistry::get`]
    /// for a fallible lookup.
    fn index(&self, name: &str) -> &Signal {
        self.get(name)
            .unwrap_or_else(|| panic!("signal '{name}' is not registered"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_names_are_reachable() {
        let mut registry = SignalRegistry::new();
        registry.register(["start", "relax"]);

        assert!(registry.contains("start"));
        assert!(registry.contains("relax"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn canonical_instance_equals_fresh_construction() {
        let mut registry = SignalRegistry::new();
        registry.register(["start"]);

        assert_eq!(registry["start"], Signal::new("start"));
    }

    #[test]
    fn re_registration_is_idempotent() {
        let mut registry = SignalRegistry::new();
        registry.register(["start"]);
        registry.register(["start", "start"]);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry["start"].name(), "start");
    }

    #[test]
    fn unknown_name_is_none() {
        let registry = SignalRegistry::new();
        assert!(registry.get("missing").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    #[should_panic(expected = "not registered")]
    fn indexing_unknown_name_panics() {
        let registry = SignalRegistry::new();
        let _ = &registry["missing"];
    }
}
