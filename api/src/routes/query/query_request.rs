use serde::{Deserialize, Serialize};

/// Request payload for `POST /query`.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// The user's question, passed to retrieval and generation verbatim.
    pub query: String,
    /// Existing session to continue; a fresh id is minted when absent.
    #[serde(default)]
    pub session_id: Option<String>,
    /// How many documents to retrieve for the prompt.
    #[serde(default = "default_context_size")]
    pub context_size: u64,
}

fn default_context_size() -> u64 {
    5
}

/// Response payload for `POST /query`.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub session_id: String,
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_size_defaults_to_five() {
        let req: QueryRequest =
            serde_json::from_str(r#"{"query":"Why was my card payment declined?"}"#).unwrap();
        assert_eq!(req.context_size, 5);
        assert!(req.session_id.is_none());
    }

    #[test]
    fn explicit_fields_are_honored() {
        let req: QueryRequest = serde_json::from_str(
            r#"{"query":"q","session_id":"s1","context_size":3}"#,
        )
        .unwrap();
        assert_eq!(req.session_id.as_deref(), Some("s1"));
        assert_eq!(req.context_size, 3);
    }

    #[test]
    fn missing_query_is_rejected() {
        assert!(serde_json::from_str::<QueryRequest>(r#"{"session_id":"s1"}"#).is_err());
    }
}
