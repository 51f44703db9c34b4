//! Core data models used by the gateway.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A payment-support document as stored in the vector-store payload.
///
/// The conversation store never looks inside this; only the search
/// gateway and the generation chain consume it. Fields are returned
/// verbatim on search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportDoc {
    pub title: String,
    pub content: String,
    pub category: String,
    pub help_url: String,
}

/// Parses a search-hit payload back into a [`SupportDoc`].
///
/// Missing fields default to empty strings; a payload that is not a JSON
/// object yields `None`.
pub(crate) fn payload_to_doc(payload: &Value) -> Option<SupportDoc> {
    if !payload.is_object() {
        return None;
    }
    serde_json::from_value(payload.clone()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_a_full_payload() {
        let payload = json!({
            "title": "Card Payment Declined",
            "content": "Common reasons for card payment failures...",
            "category": "card_payments",
            "help_url": "https://help.deriv.com/payments/card-payments",
        });

        let doc = payload_to_doc(&payload).unwrap();
        assert_eq!(doc.title, "Card Payment Declined");
        assert_eq!(doc.category, "card_payments");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let payload = json!({ "title": "Bank Transfer Issues" });
        let doc = payload_to_doc(&payload).unwrap();
        assert_eq!(doc.title, "Bank Transfer Issues");
        assert_eq!(doc.content, "");
        assert_eq!(doc.help_url, "");
    }

    #[test]
    fn non_object_payloads_are_rejected() {
        assert!(payload_to_doc(&json!("just a string")).is_none());
        assert!(payload_to_doc(&json!(null)).is_none());
    }
}
