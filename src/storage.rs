use centaur_core::store::KeyValueStore;
use web_sys::Storage;

/// The browser's local storage. Reads and writes degrade to no-ops when the
/// page has no storage (private browsing, sandboxed frames).
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("local storage unavailable, settings will not persist");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("could not write {key} to local storage: {e:?}");
        }
    }
}
