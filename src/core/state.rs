//! The behavior contract implemented by every state.

use crate::core::{Signal, TransitionTable};
use crate::queue::Priority;

/// A unit of behavior bound to one machine.
///
/// A state performs side effects against the shared model and decides what
/// happens next: the next state, an optional follow-up signal for the
/// dispatch queue, or both. The one required operation is [`State::process`];
/// [`State::name`] identifies the state in the machine's registry and in
/// transition tables.
///
/// States never hold references to other states; they reach them only
/// through the transition table (via [`Context::route`]) or by name. The
/// machine exclusively owns its states, so binding a state to a second
/// machine is impossible once it has been registered.
///
/// # Example
///
/// ```rust
/// use ministate::{Context, Outcome, State};
///
/// struct Inbox {
///     messages: Vec<String>,
/// }
///
/// struct Receiving;
///
/// impl State<Inbox> for Receiving {
///     fn name(&self) -> &str {
///         "Receiving"
///     }
///
///     fn process(&mut self, cx: &mut Context<'_, Inbox>) -> Outcome {
///         if let Some(body) = cx.signal().payload().and_then(|p| p.as_str()) {
///             cx.model.messages.push(body.to_string());
///         }
///         Outcome::goto(cx.route())
///     }
/// }
/// ```
pub trait State<M>: Send {
    /// The state's name, used for registration and table lookup.
    fn name(&self) -> &str;

    /// React to a signal.
    ///
    /// Called by the owning machine with a [`Context`] lending the shared
    /// model, the signal being dispatched, and read access to the
    /// transition table. Side effects on the model are the state's own
    /// responsibility and are visible as soon as `process` returns.
    fn process(&mut self, cx: &mut Context<'_, M>) -> Outcome;
}

/// Everything a state may consult while processing a signal.
///
/// A `Context` is constructed only by the owning [`StateMachine`] during
/// dispatch, which is what makes "process is callable only after
/// registration" a structural guarantee rather than a runtime check.
///
/// [`StateMachine`]: crate::StateMachine
pub struct Context<'a, M> {
    /// The shared model, mutable for the duration of one `process` call.
    pub model: &'a mut M,
    signal: &'a Signal,
    table: &'a TransitionTable,
    current: &'a str,
}

impl<'a, M> Context<'a, M> {
    pub(crate) fn new(
        model: &'a mut M,
        signal: &'a Signal,
        table: &'a TransitionTable,
        current: &'a str,
    ) -> Self {
        Self {
            model,
            signal,
            table,
            current,
        }
    }

    /// The signal being dispatched.
    pub fn signal(&self) -> &Signal {
        self.signal
    }

    /// Name of the state currently processing the signal.
    pub fn current(&self) -> &str {
        self.current
    }

    /// The machine's transition table.
    pub fn table(&self) -> &TransitionTable {
        self.table
    }

    /// The table's target for the current state and signal, with the
    /// stay default applied: an unmapped signal routes back to the
    /// current state.
    pub fn route(&self) -> &str {
        self.table.resolve(self.current, self.signal.name())
    }
}

/// Where dispatch goes after a state has processed a signal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Next {
    /// Remain in the current state.
    #[default]
    Stay,
    /// Move to the named state.
    Goto(String),
}

/// What a state's [`process`](State::process) call produced.
///
/// An outcome carries a [`Next`] routing decision and, for queue-driven
/// dispatch, at most one follow-up signal with its admission priority.
/// Single-step dispatch consumes the routing decision; queue dispatch
/// additionally feeds the follow-up back into the machine's queue.
///
/// # Example
///
/// ```rust
/// use ministate::{Outcome, Priority, Signal};
///
/// // Stay put, but schedule more work ahead of everything queued.
/// let outcome = Outcome::stay().emit(Signal::new("start"), Priority::High);
/// assert!(outcome.follow_up().is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outcome {
    next: Next,
    follow_up: Option<(Signal, Priority)>,
}

impl Outcome {
    /// Remain in the current state.
    pub fn stay() -> Self {
        Self::default()
    }

    /// Move to the named state.
    pub fn goto(name: impl Into<String>) -> Self {
        Self {
            next: Next::Goto(name.into()),
            follow_up: None,
        }
    }

    /// Attach a follow-up signal to be enqueued with the given priority.
    pub fn emit(mut self, signal: Signal, priority: Priority) -> Self {
        self.follow_up = Some((signal, priority));
        self
    }

    /// The routing decision.
    pub fn next(&self) -> &Next {
        &self.next
    }

    /// The follow-up signal, if any.
    pub fn follow_up(&self) -> Option<&(Signal, Priority)> {
        self.follow_up.as_ref()
    }

    pub(crate) fn into_parts(self) -> (Next, Option<(Signal, Priority)>) {
        (self.next, self.follow_up)
    }
}
