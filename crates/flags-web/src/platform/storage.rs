//! `localStorage` preference store

use flags_app::PreferenceStore;
use flags_core::prelude::*;
use web_sys::Storage;

/// Preferences backed by `window.localStorage`.
///
/// Missing storage (privacy modes, sandboxed frames) reads as empty and
/// fails every write.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("localStorage unavailable, preferences will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| Error::storage("localStorage unavailable"))?;

        storage
            .set_item(key, value)
            .map_err(|err| Error::storage(format!("writing {key}: {err:?}")))
    }
}
