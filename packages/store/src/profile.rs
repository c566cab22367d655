//! # Device-local profile — poster name and post throttle
//!
//! The board keeps two values on the device itself, outside any user
//! account: the display name shown on the user's posts and the timestamp of
//! their last successful post. Both survive restarts and are deliberately
//! independent of the anonymous session identity — clearing cookies changes
//! who you are to the server, not what the device remembers.
//!
//! ## Keys
//!
//! | Key | Value | Used by |
//! |-----|-------|---------|
//! | [`POSTER_NAME_KEY`] = `"posterName"` | display name | name registration, submission |
//! | [`LAST_POST_AT_KEY`] = `"lastPostAt"` | epoch milliseconds as a string | post rate limiting |
//!
//! [`Profile`] is the typed wrapper over a raw [`DeviceStore`]. Backends:
//! browser localStorage ([`crate::LocalStore`], web), the filesystem
//! ([`crate::FileStore`], native), and memory ([`crate::MemoryStore`],
//! tests and server-side rendering where no device state exists).
//!
//! Reads are forgiving: a missing key, an all-whitespace name, or a
//! timestamp that fails to parse all read back as "unset".

/// Key under which the poster display name is persisted.
pub const POSTER_NAME_KEY: &str = "posterName";

/// Key under which the last-post timestamp is persisted.
pub const LAST_POST_AT_KEY: &str = "lastPostAt";

/// String key/value persistence scoped to the device.
pub trait DeviceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Typed view over a [`DeviceStore`] for the two board-owned values.
#[derive(Clone, Debug)]
pub struct Profile<S: DeviceStore> {
    store: S,
}

impl<S: DeviceStore> Profile<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The registered poster name, or `None` when no usable name is stored.
    pub fn poster_name(&self) -> Option<String> {
        self.store
            .get(POSTER_NAME_KEY)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
    }

    /// Register a poster name.
    ///
    /// The candidate is trimmed first; an empty result is a no-op and
    /// returns `None`. Otherwise the trimmed name is persisted (overwriting
    /// any previous name) and returned.
    pub fn register_poster_name(&self, candidate: &str) -> Option<String> {
        let name = candidate.trim();
        if name.is_empty() {
            return None;
        }
        self.store.set(POSTER_NAME_KEY, name);
        Some(name.to_string())
    }

    /// Epoch milliseconds of the last successful post, if one is recorded.
    pub fn last_post_at(&self) -> Option<u64> {
        self.store.get(LAST_POST_AT_KEY)?.trim().parse().ok()
    }

    /// Record a successful post at `now_ms` (epoch milliseconds).
    pub fn mark_posted(&self, now_ms: u64) {
        self.store.set(LAST_POST_AT_KEY, &now_ms.to_string());
    }
}
