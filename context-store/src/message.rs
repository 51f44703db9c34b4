use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// A single role-tagged message. Immutable once created.
///
/// The role is whatever tag the caller supplied ("user", "assistant", or
/// anything else); it is stored verbatim, as is the content, empty or not.
#[derive(Clone, Debug, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Builds a message with a fresh timestamp.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered messages plus open metadata for one session. Insertion order is
/// significant and never rewritten.
#[derive(Clone, Debug, Default)]
pub struct Conversation {
    pub(crate) messages: Vec<Message>,
    pub(crate) metadata: HashMap<String, Value>,
}
