//! Shared device profile constructor for all platforms.
//!
//! Returns a [`store::Profile`] backed by the appropriate
//! [`store::DeviceStore`]:
//! - **Web** (WASM + `web` feature): browser localStorage via [`store::LocalStore`]
//! - **Native**: filesystem via [`store::FileStore`]

/// Create a platform-appropriate device profile.
pub fn device_profile() -> store::Profile<impl store::DeviceStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::Profile::new(store::LocalStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::Profile::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("quotewall");
        store::Profile::new(store::FileStore::new(base))
    }
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
