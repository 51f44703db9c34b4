//! In-memory conversation context for the payment-support backend.
//!
//! One [`ContextStore`] owns every conversation for the lifetime of the
//! process. Sessions are keyed by an opaque string id, hold an append-only
//! message list plus free-form metadata, and disappear on restart by
//! design. There is no expiry: memory grows with the number of live
//! sessions, which is acceptable for this deployment and documented as a
//! known limitation.

mod message;
mod store;

pub use message::{Conversation, Message};
pub use store::{ContextStore, DEFAULT_CONTEXT_WINDOW};
