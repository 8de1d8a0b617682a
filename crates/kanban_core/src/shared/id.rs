//! Opaque identifier generation.

use uuid::Uuid;

/// Opaque entity identifier.
///
/// Generated ids are UUID v4 strings, but stored ids may be any string
/// (legacy data used other schemes), so nothing may depend on the format.
pub type Id = String;

/// Returns a fresh, never-before-issued identifier.
pub fn new_id() -> Id {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::new_id;
    use std::collections::HashSet;

    #[test]
    fn new_id_is_unique_across_calls() {
        let ids: HashSet<_> = (0..256).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 256);
    }

    #[test]
    fn new_id_is_non_empty() {
        assert!(!new_id().is_empty());
    }
}
