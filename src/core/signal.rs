//! Named signals consumed by states during dispatch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A named, optionally payload-bearing message.
///
/// Signals serve both as input events and, in queue-driven dispatch, as
/// self-describing transition requests. Identity is the name alone: two
/// signals with the same name are equal and hash identically regardless of
/// payload, so signals can key transition tables. The payload is carried
/// for the receiving state's use only and is never compared.
///
/// Signals are immutable after construction and owned by nobody in
/// particular; they are transient messages, not resources.
///
/// # Example
///
/// ```rust
/// use ministate::Signal;
/// use serde_json::json;
///
/// let bare = Signal::new("message_received");
/// let loaded = Signal::with_payload("message_received", json!("Hello, World!"));
///
/// assert_eq!(bare, loaded);
/// assert_eq!(loaded.payload(), Some(&json!("Hello, World!")));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Signal {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<serde_json::Value>,
}

impl Signal {
    /// Create a signal with no payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: None,
        }
    }

    /// Create a signal carrying a payload.
    pub fn with_payload(name: impl Into<String>, payload: impl Into<serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            payload: Some(payload.into()),
        }
    }

    /// The signal's name, which is its identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The payload, if any.
    pub fn payload(&self) -> Option<&serde_json::Value> {
        self.payload.as_ref()
    }
}

impl PartialEq for Signal {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Signal {}

impl Hash for Signal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
