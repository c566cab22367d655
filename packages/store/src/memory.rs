use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::profile::DeviceStore;

/// In-memory DeviceStore for testing and server-side rendering.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeviceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;

    #[test]
    fn test_poster_name_unset_by_default() {
        let profile = Profile::new(MemoryStore::new());
        assert_eq!(profile.poster_name(), None);
    }

    #[test]
    fn test_register_trims_and_persists() {
        let profile = Profile::new(MemoryStore::new());

        let registered = profile.register_poster_name("  匿名太郎  ");
        assert_eq!(registered.as_deref(), Some("匿名太郎"));
        assert_eq!(profile.poster_name().as_deref(), Some("匿名太郎"));
    }

    #[test]
    fn test_register_empty_is_a_noop() {
        let profile = Profile::new(MemoryStore::new());

        assert_eq!(profile.register_poster_name("   "), None);
        assert_eq!(profile.poster_name(), None);

        // An empty candidate never clobbers an existing name either.
        profile.register_poster_name("anonymous");
        assert_eq!(profile.register_poster_name(""), None);
        assert_eq!(profile.poster_name().as_deref(), Some("anonymous"));
    }

    #[test]
    fn test_register_overwrites_on_new_input() {
        let profile = Profile::new(MemoryStore::new());

        profile.register_poster_name("first");
        profile.register_poster_name("first");
        assert_eq!(profile.poster_name().as_deref(), Some("first"));

        profile.register_poster_name("second");
        assert_eq!(profile.poster_name().as_deref(), Some("second"));
    }

    #[test]
    fn test_last_post_at_roundtrip() {
        let profile = Profile::new(MemoryStore::new());

        assert_eq!(profile.last_post_at(), None);

        profile.mark_posted(1_700_000_000_123);
        assert_eq!(profile.last_post_at(), Some(1_700_000_000_123));
    }

    #[test]
    fn test_garbage_timestamp_reads_as_unset() {
        let store = MemoryStore::new();
        store.set(crate::LAST_POST_AT_KEY, "not-a-number");

        let profile = Profile::new(store);
        assert_eq!(profile.last_post_at(), None);
    }

    #[test]
    fn test_whitespace_only_stored_name_reads_as_unset() {
        let store = MemoryStore::new();
        store.set(crate::POSTER_NAME_KEY, "   ");

        let profile = Profile::new(store);
        assert_eq!(profile.poster_name(), None);
    }
}
