//! The priority dispatch queue driving run-to-completion execution.
//!
//! Signals are admitted with one of two priorities and drained one per
//! tick, always from the head. Normal admissions append to the tail,
//! preserving FIFO order among themselves; high admissions insert at the
//! head, ahead of everything already queued, so the latest high insert is
//! always the very next signal processed.

use crate::core::Signal;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Admission-order hint for a signal entering the queue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Append to the tail; FIFO among normal signals.
    #[default]
    Normal,
    /// Insert at the head, ahead of everything queued so far, including
    /// earlier high-priority insertions.
    High,
}

/// An ordered buffer of pending signals.
///
/// Owned by a [`StateMachine`]; it grows on dispatch-produced follow-ups
/// and external injections, shrinks by exactly one per tick, and its
/// emptiness is the run loop's termination signal.
///
/// # Example
///
/// ```rust
/// use ministate::{DispatchQueue, Priority, Signal};
///
/// let mut queue = DispatchQueue::new();
/// queue.enqueue(Signal::new("a"), Priority::Normal);
/// queue.enqueue(Signal::new("b"), Priority::Normal);
/// queue.enqueue(Signal::new("c"), Priority::High);
///
/// assert_eq!(queue.pop(), Some(Signal::new("c")));
/// assert_eq!(queue.pop(), Some(Signal::new("a")));
/// assert_eq!(queue.pop(), Some(Signal::new("b")));
/// assert_eq!(queue.pop(), None);
/// ```
///
/// [`StateMachine`]: crate::StateMachine
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchQueue {
    signals: VecDeque<Signal>,
}

impl DispatchQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a signal according to its priority.
    pub fn enqueue(&mut self, signal: Signal, priority: Priority) {
        match priority {
            Priority::Normal => self.signals.push_back(signal),
            Priority::High => self.signals.push_front(signal),
        }
    }

    /// Remove and return the head of the queue, or `None` when empty.
    pub fn pop(&mut self) -> Option<Signal> {
        self.signals.pop_front()
    }

    /// The queued signals in pop order, without draining them.
    pub fn iter(&self) -> impl Iterator<Item = &Signal> {
        self.signals.iter()
    }

    /// Number of pending signals.
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pop_names(queue: &mut DispatchQueue) -> Vec<String> {
        let mut names = Vec::new();
        while let Some(signal) = queue.pop() {
            names.push(signal.name().to_string());
        }
        names
    }

    #[test]
    fn normal_admissions_are_fifo() {
        let mut queue = DispatchQueue::new();
        queue.enqueue(Signal::new("a"), Priority::Normal);
        queue.enqueue(Signal::new("b"), Priority::Normal);

        assert_eq!(pop_names(&mut queue), vec!["a", "b"]);
    }

    #[test]
    fn high_jumps_ahead_of_queued_normals() {
        let mut queue = DispatchQueue::new();
        queue.enqueue(Signal::new("a"), Priority::Normal);
        queue.enqueue(Signal::new("b"), Priority::Normal);
        queue.enqueue(Signal::new("c"), Priority::High);

        assert_eq!(pop_names(&mut queue), vec!["c", "a", "b"]);
    }

    #[test]
    fn each_high_insert_lands_ahead_of_the_previous() {
        let mut queue = DispatchQueue::new();
        queue.enqueue(Signal::new("a"), Priority::Normal);
        queue.enqueue(Signal::new("b"), Priority::High);
        queue.enqueue(Signal::new("c"), Priority::High);

        assert_eq!(pop_names(&mut queue), vec!["c", "b", "a"]);
    }

    #[test]
    fn pop_on_empty_queue_is_none() {
        let mut queue = DispatchQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn iter_matches_pop_order() {
        let mut queue = DispatchQueue::new();
        queue.enqueue(Signal::new("a"), Priority::Normal);
        queue.enqueue(Signal::new("b"), Priority::High);

        let peeked: Vec<&str> = queue.iter().map(Signal::name).collect();
        assert_eq!(peeked, vec!["b", "a"]);
        assert_eq!(queue.len(), 2);

        assert_eq!(pop_names(&mut queue), vec!["b", "a"]);
    }
}
