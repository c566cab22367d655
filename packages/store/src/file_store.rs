//! # Filesystem-backed device store
//!
//! [`FileStore`] persists each profile key as a plain file under a base
//! directory. It is the [`DeviceStore`] used on native builds, where there
//! is no browser localStorage.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── posterName      # display name
//! └── lastPostAt      # epoch milliseconds as a string
//! ```
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base, e.g.
//! `~/.local/share/quotewall/` on Linux or
//! `~/Library/Application Support/quotewall/` on macOS.

use std::path::PathBuf;

use crate::profile::DeviceStore;

/// Filesystem-backed DeviceStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl DeviceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let content = std::fs::read_to_string(self.value_path(key)).ok()?;
        Some(content.trim_end().to_string())
    }

    fn set(&self, key: &str, value: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.value_path(key), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("quotewall_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let profile = Profile::new(FileStore::new(dir.clone()));
        profile.register_poster_name("file-backed");
        profile.mark_posted(42);

        // Re-open from the same directory
        let profile2 = Profile::new(FileStore::new(dir.clone()));
        assert_eq!(profile2.poster_name().as_deref(), Some("file-backed"));
        assert_eq!(profile2.last_post_at(), Some(42));

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }
}
