use uuid::Uuid;

/// Deterministic UUIDv5 derived from an arbitrary string id.
///
/// Used for vector-store point ids: re-seeding a document with the same
/// title produces the same point id, so the upsert replaces it in place.
pub fn stable_uuid(id: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, id.as_bytes())
}

/// Mints an opaque session identifier for callers that did not supply one.
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_uuid_is_deterministic() {
        assert_eq!(
            stable_uuid("Card Payment Declined"),
            stable_uuid("Card Payment Declined")
        );
        assert_ne!(
            stable_uuid("Card Payment Declined"),
            stable_uuid("Bank Transfer Issues")
        );
    }

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(new_session_id(), new_session_id());
    }
}
