//! The session registry itself.

use std::collections::HashMap;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, trace};

use crate::message::{Conversation, Message};

/// Number of most-recent messages handed to the generation step when the
/// caller does not ask for a specific window.
pub const DEFAULT_CONTEXT_WINDOW: usize = 10;

/// Process-wide map from session id to conversation.
///
/// Construct once, wrap in `Arc`, and pass clones to dependents. The write
/// lock serializes appends, so concurrent turns against the same session
/// cannot interleave a user/assistant pair. None of the methods perform
/// I/O, so the lock is never held across an external call.
#[derive(Default)]
pub struct ContextStore {
    conversations: RwLock<HashMap<String, Conversation>>,
}

impl ContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty conversation for `id` if absent. Idempotent; an
    /// existing session keeps its messages and metadata.
    pub async fn create_session(&self, id: &str) {
        let mut map = self.conversations.write().await;
        map.entry(id.to_string()).or_default();
    }

    /// Appends a message with a fresh timestamp, creating the session on
    /// first write. Role and content are accepted verbatim.
    pub async fn add_message(
        &self,
        id: &str,
        role: impl Into<String>,
        content: impl Into<String>,
    ) {
        let message = Message::new(role, content);
        let mut map = self.conversations.write().await;
        let convo = map.entry(id.to_string()).or_default();
        convo.messages.push(message);
        trace!(session = id, total = convo.messages.len(), "message appended");
    }

    /// Returns the last `max_messages` messages in chronological order
    /// (oldest of the window first), or all of them when the session is
    /// shorter. Unknown ids yield an empty vector and are not created.
    ///
    /// The result is an owned snapshot; later appends never alter it.
    pub async fn get_context(&self, id: &str, max_messages: usize) -> Vec<Message> {
        let map = self.conversations.read().await;
        match map.get(id) {
            Some(convo) => {
                let start = convo.messages.len().saturating_sub(max_messages);
                convo.messages[start..].to_vec()
            }
            None => Vec::new(),
        }
    }

    /// Removes the session entirely. No-op for unknown ids.
    pub async fn clear_session(&self, id: &str) {
        let mut map = self.conversations.write().await;
        if map.remove(id).is_some() {
            debug!(session = id, "session cleared");
        }
    }

    /// Merge-updates the session metadata, creating the session if absent.
    /// Existing keys are overwritten, others are left untouched.
    pub async fn update_metadata(&self, id: &str, entries: HashMap<String, Value>) {
        let mut map = self.conversations.write().await;
        let convo = map.entry(id.to_string()).or_default();
        convo.metadata.extend(entries);
    }

    /// Snapshot of the session metadata; empty for unknown ids, which are
    /// not created by this read.
    pub async fn get_metadata(&self, id: &str) -> HashMap<String, Value> {
        let map = self.conversations.read().await;
        map.get(id).map(|c| c.metadata.clone()).unwrap_or_default()
    }
}
