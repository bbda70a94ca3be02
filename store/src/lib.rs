//! Session-snapshot persistence.
//!
//! The only thing the clients persist is a serialized copy of the logged-in
//! user's profile, so surviving a page reload is a matter of one well-known
//! key. Handlers never touch the browser's storage directly; they go through
//! [`SessionStore`], which keeps the web backend swappable for an in-memory
//! one on native targets and in tests.

use serde::{de::DeserializeOwned, Serialize};

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

/// Key under which the profile snapshot lives.
pub const SESSION_KEY: &str = "currentUser";

/// A string key/value store scoped to this application.
pub trait SessionStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn clear(&self, key: &str);
}

/// Load and deserialize the session snapshot. A missing or corrupt snapshot
/// reads as no session at all.
pub fn load_snapshot<T: DeserializeOwned>(store: &impl SessionStore) -> Option<T> {
    let raw = store.load(SESSION_KEY)?;
    serde_json::from_str(&raw).ok()
}

/// Serialize and persist the session snapshot, replacing any previous one.
pub fn save_snapshot<T: Serialize>(store: &impl SessionStore, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        store.save(SESSION_KEY, &raw);
    }
}

pub fn clear_snapshot(store: &impl SessionStore) {
    store.clear(SESSION_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Snapshot {
        username: String,
        privilege: i64,
    }

    #[test]
    fn snapshot_round_trip() {
        let store = MemoryStore::new();
        assert!(load_snapshot::<Snapshot>(&store).is_none());

        let snapshot = Snapshot {
            username: "alice".to_string(),
            privilege: 10,
        };
        save_snapshot(&store, &snapshot);
        assert_eq!(load_snapshot::<Snapshot>(&store), Some(snapshot));

        clear_snapshot(&store);
        assert!(load_snapshot::<Snapshot>(&store).is_none());
    }

    #[test]
    fn corrupt_snapshot_reads_as_none() {
        let store = MemoryStore::new();
        store.save(SESSION_KEY, "not json {");
        assert!(load_snapshot::<Snapshot>(&store).is_none());
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let store = MemoryStore::new();
        save_snapshot(
            &store,
            &Snapshot {
                username: "alice".to_string(),
                privilege: 1,
            },
        );
        save_snapshot(
            &store,
            &Snapshot {
                username: "bob".to_string(),
                privilege: 3,
            },
        );
        let loaded: Snapshot = load_snapshot(&store).unwrap();
        assert_eq!(loaded.username, "bob");
    }
}
