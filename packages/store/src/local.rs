//! # localStorage-backed device store — browser persistence
//!
//! [`LocalStore`] is the [`DeviceStore`] implementation used on the **web
//! platform**. It reads and writes the browser's `window.localStorage`,
//! which gives the poster name and post throttle the device-scoped,
//! survives-a-reload lifetime the board expects.
//!
//! All methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). A browser with storage disabled degrades to "no
//! device state" — the user is prompted for a name again and the post
//! throttle never engages — rather than crashing the UI.

use crate::profile::DeviceStore;

/// localStorage-backed DeviceStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl DeviceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(key, value);
        }
    }
}
