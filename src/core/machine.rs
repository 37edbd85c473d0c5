//! The state machine: registered states, routing, and both dispatch modes.

use crate::core::state::{Context, Next, Outcome, State};
use crate::core::{MachineError, Signal, TransitionLog, TransitionRecord, TransitionTable};
use crate::queue::{DispatchQueue, Priority};
use chrono::Utc;
use std::collections::HashMap;

/// A finite state machine over a shared model.
///
/// The machine exclusively owns its states (boxed, keyed by name), the
/// current-state pointer, the transition table, a priority dispatch queue,
/// a transition log, and the model `M` that all states read and mutate.
///
/// Execution is single-threaded and cooperative: [`process`] and [`tick`]
/// run to completion before returning, and there is no reentrancy into the
/// queue within one tick. Hosts that want concurrent machines give each its
/// own `StateMachine`.
///
/// Configuration can fail ([`set_transitions`], [`set_current`]); dispatch
/// cannot. Dispatching with no current state is a recoverable no-op, an
/// unmapped signal stays in the current state, and an empty queue is simply
/// the run loop's termination condition.
///
/// [`process`]: StateMachine::process
/// [`tick`]: StateMachine::tick
/// [`set_transitions`]: StateMachine::set_transitions
/// [`set_current`]: StateMachine::set_current
pub struct StateMachine<M> {
    states: HashMap<String, Box<dyn State<M>>>,
    order: Vec<String>,
    current: Option<String>,
    transitions: TransitionTable,
    queue: DispatchQueue,
    log: TransitionLog,
    model: M,
}

impl<M> StateMachine<M> {
    /// Create a machine with no states around the given model.
    pub fn new(model: M) -> Self {
        Self {
            states: HashMap::new(),
            order: Vec::new(),
            current: None,
            transitions: TransitionTable::new(),
            queue: DispatchQueue::new(),
            log: TransitionLog::new(),
            model,
        }
    }

    /// Register a state under its own name.
    ///
    /// The state moves into the machine, so it can never belong to two
    /// machines at once. Registering a second state with the same name
    /// replaces the first (last write wins); the current-state pointer is
    /// unaffected and keeps referring to the name.
    pub fn add_state(&mut self, state: impl State<M> + 'static) {
        let name = state.name().to_string();
        if self.states.insert(name.clone(), Box::new(state)).is_some() {
            tracing::debug!(name = %name, "replacing registered state");
        } else {
            self.order.push(name);
        }
    }

    /// Assign the transition table.
    ///
    /// Every target the table references must already be registered;
    /// validation happens here so a dangling route can never surface
    /// during dispatch.
    pub fn set_transitions(&mut self, table: TransitionTable) -> Result<(), MachineError> {
        for (state, signal, target) in table.routes() {
            if !self.states.contains_key(target) {
                return Err(MachineError::UnregisteredTarget {
                    state: state.to_string(),
                    signal: signal.to_string(),
                    target: target.to_string(),
                });
            }
        }
        self.transitions = table;
        Ok(())
    }

    /// Point the machine at a registered state.
    pub fn set_current(&mut self, name: &str) -> Result<(), MachineError> {
        if !self.states.contains_key(name) {
            return Err(MachineError::UnknownState {
                name: name.to_string(),
            });
        }
        self.current = Some(name.to_string());
        Ok(())
    }

    /// Name of the current state, if one has been set.
    pub fn current_state(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Names of the registered states, in registration order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Whether a state with this name is registered.
    pub fn contains_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Borrow a registered state by name.
    pub fn state(&self, name: &str) -> Option<&dyn State<M>> {
        self.states.get(name).map(|state| state.as_ref())
    }

    /// The transition table.
    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    /// The shared model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the shared model, for the host between dispatches.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// The log of state changes performed so far.
    pub fn log(&self) -> &TransitionLog {
        &self.log
    }

    /// Number of signals waiting in the dispatch queue.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// The queued signals in pop order.
    pub fn queued(&self) -> impl Iterator<Item = &Signal> {
        self.queue.iter()
    }

    /// Single-step dispatch: hand one signal to the current state and apply
    /// its outcome.
    ///
    /// With no current state set this is a recoverable no-op. Afterwards the
    /// current state is always a registered state: a `Goto` naming an
    /// unregistered state is ignored with a warning, and `Stay` means stay.
    /// A follow-up signal in the outcome is admitted to the queue.
    pub fn process(&mut self, signal: &Signal) {
        let Some(current) = self.current.clone() else {
            tracing::debug!(signal = %signal, "no current state set, ignoring signal");
            return;
        };
        let Some(state) = self.states.get_mut(&current) else {
            return;
        };
        let mut cx = Context::new(&mut self.model, signal, &self.transitions, &current);
        let outcome = state.process(&mut cx);
        self.apply(&current, signal, outcome);
    }

    /// Admit a signal to the dispatch queue.
    pub fn enqueue(&mut self, signal: Signal, priority: Priority) {
        tracing::trace!(signal = %signal, ?priority, "enqueue");
        self.queue.enqueue(signal, priority);
    }

    /// Queue-driven dispatch: drain one signal.
    ///
    /// Returns `true` when the queue is empty, the run loop's termination
    /// condition; no transition occurs in that case. Otherwise the popped
    /// signal is routed through the transition table (unmapped: stay), the
    /// machine advances, and the state it landed in runs. A follow-up
    /// signal in the outcome is enqueued before the next tick.
    ///
    /// A queued signal with no current state set is dropped with a warning
    /// so that injected queues still drain.
    pub fn tick(&mut self) -> bool {
        let Some(signal) = self.queue.pop() else {
            return true;
        };
        let Some(current) = self.current.clone() else {
            tracing::warn!(signal = %signal, "no current state set, dropping queued signal");
            return false;
        };

        // Route first, then run the state the machine lands in.
        let target = self
            .transitions
            .resolve(&current, signal.name())
            .to_string();
        self.advance(&current, &signal, target);

        let Some(landed) = self.current.clone() else {
            return false;
        };
        let Some(state) = self.states.get_mut(&landed) else {
            return false;
        };
        let mut cx = Context::new(&mut self.model, &signal, &self.transitions, &landed);
        let outcome = state.process(&mut cx);
        self.apply(&landed, &signal, outcome);
        false
    }

    /// Call [`tick`](StateMachine::tick) until the queue is exhausted.
    ///
    /// Returns the number of signals dispatched. A state that always
    /// re-enqueues a follow-up produces an infinite loop; bounding it (for
    /// instance with a resource counter in the model) is the host's
    /// responsibility.
    pub fn run(&mut self) -> usize {
        let mut ticks = 0;
        while !self.tick() {
            ticks += 1;
        }
        ticks
    }

    fn apply(&mut self, from: &str, signal: &Signal, outcome: Outcome) {
        let (next, follow_up) = outcome.into_parts();
        match next {
            Next::Stay => {}
            Next::Goto(target) => self.advance(from, signal, target),
        }
        if let Some((follow_up, priority)) = follow_up {
            self.enqueue(follow_up, priority);
        }
    }

    fn advance(&mut self, from: &str, signal: &Signal, target: String) {
        if !self.states.contains_key(&target) {
            tracing::warn!(
                from,
                target = %target,
                signal = %signal,
                "transition target is not registered, staying put"
            );
            return;
        }
        if target != from {
            tracing::debug!(from, to = %target, signal = %signal, "transition");
            self.log.push(TransitionRecord {
                from: from.to_string(),
                to: target.clone(),
                signal: signal.name().to_string(),
                timestamp: Utc::now(),
            });
        }
        self.current = Some(target);
    }
}
