use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of unique instance ids for select widgets.
///
/// The embedding application owns the generator and hands it to each widget
/// it creates, so ids are unique per application rather than per process.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Counter-backed generator producing `1`, `2`, `3`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let id = self.last.fetch_add(1, Ordering::Relaxed) + 1;
        id.to_string()
    }
}

/// Generator producing random UUID v4 strings
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        generate_uuid()
    }
}

/// Generate a UUID v4
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_increment() {
        let ids = SequentialIds::new();
        assert_eq!(ids.next_id(), "1");
        assert_eq!(ids.next_id(), "2");
        assert_eq!(ids.next_id(), "3");
    }

    #[test]
    fn test_sequential_ids_are_local_to_generator() {
        let a = SequentialIds::new();
        let b = SequentialIds::new();
        assert_eq!(a.next_id(), "1");
        assert_eq!(b.next_id(), "1");
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let ids = UuidIds;
        let first = ids.next_id();
        let second = ids.next_id();
        assert_eq!(first.len(), 36);
        assert_ne!(first, second);
    }
}
