//! Local user profile snapshot
//!
//! Written after a successful submission and read at every form mount to
//! seed the form and to find the identity key for the existence check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::validation::formats::normalize_cnic;

/// Key under which the snapshot is stored
pub const USER_PROFILE_KEY: &str = "user_profile";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cnic: String,
    /// ISO date, `YYYY-MM-DD`
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(rename = "lastUpdated", default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// CNIC without dashes, `None` when the profile has none
    pub fn identity_key(&self) -> Option<String> {
        let key = normalize_cnic(self.cnic.trim());
        if key.is_empty() {
            None
        } else {
            Some(key)
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("profile storage is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to serialize profile: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key-value storage injected into the use cases
pub trait ProfileStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Read and parse the snapshot; unreadable data counts as "no profile"
pub fn load_profile<S: ProfileStore + ?Sized>(store: &S) -> Option<UserProfile> {
    let raw = store.get(USER_PROFILE_KEY)?;
    match serde_json::from_str::<UserProfile>(&raw) {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::warn!("Error parsing stored user profile: {}", e);
            None
        }
    }
}

pub fn save_profile<S: ProfileStore + ?Sized>(
    store: &S,
    profile: &UserProfile,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(profile)?;
    store.set(USER_PROFILE_KEY, &raw)
}

#[cfg(test)]
pub(crate) mod memory {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MemoryStore {
        pub items: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        pub fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.items.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }
    }

    impl ProfileStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    #[test]
    fn test_round_trip_uses_wire_names() {
        let store = MemoryStore::default();
        let profile = UserProfile {
            name: "Ayesha Khan".into(),
            cnic: "3520212345672".into(),
            last_updated: Some(Utc::now()),
            ..Default::default()
        };
        save_profile(&store, &profile).unwrap();

        let raw = store.get(USER_PROFILE_KEY).unwrap();
        assert!(raw.contains("\"lastUpdated\""));
        assert!(!raw.contains("\"course\""));
        assert_eq!(load_profile(&store), Some(profile));
    }

    #[test]
    fn test_partial_profile_parses() {
        let store = MemoryStore::with(USER_PROFILE_KEY, r#"{"name":"Sana","cnic":"35202-1234567-2"}"#);
        let profile = load_profile(&store).unwrap();
        assert_eq!(profile.name, "Sana");
        assert_eq!(profile.identity_key().as_deref(), Some("3520212345672"));
    }

    #[test]
    fn test_garbage_is_no_profile() {
        let store = MemoryStore::with(USER_PROFILE_KEY, "{not json");
        assert!(load_profile(&store).is_none());
    }

    #[test]
    fn test_blank_cnic_has_no_identity_key() {
        let profile = UserProfile {
            cnic: "  ".into(),
            ..Default::default()
        };
        assert!(profile.identity_key().is_none());
    }
}
