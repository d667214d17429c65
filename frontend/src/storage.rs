use shared::player::SpinStore;
use web_sys::{window, Storage};

/// `SpinStore` backed by browser local storage. Storage being unavailable
/// (private mode, blocked cookies) degrades every operation to a no-op, so
/// the wheel still plays within the current page load.
pub struct LocalSpinStore {
    storage: Option<Storage>,
}

impl LocalSpinStore {
    pub fn new() -> Self {
        Self {
            storage: window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }
}

impl Default for LocalSpinStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinStore for LocalSpinStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to persist {}", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(key);
        }
    }
}
