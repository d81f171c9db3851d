use contracts::system::profile::{ProfileStore, StoreError};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Profile snapshot storage backed by `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageProfileStore;

impl ProfileStore for LocalStorageProfileStore {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = get_local_storage()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not available".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}
