use std::sync::{Arc, Mutex};

use crate::credential::{CredentialStore, StoredCredential};

/// In-memory CredentialStore for testing and incognito-style fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<StoredCredential>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    async fn load(&self) -> Option<StoredCredential> {
        self.slot.lock().unwrap().clone()
    }

    async fn save(&self, cred: &StoredCredential) {
        *self.slot.lock().unwrap() = Some(cred.clone());
    }

    async fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_load() {
        let store = MemoryStore::new();
        assert!(store.load().await.is_none());

        let cred = StoredCredential {
            token: "tok-123".to_string(),
            user_json: r#"{"id":"u1"}"#.to_string(),
        };
        store.save(&cred).await;

        assert_eq!(store.load().await, Some(cred));
    }

    #[tokio::test]
    async fn test_clear_removes_both_slots() {
        let store = MemoryStore::new();
        store
            .save(&StoredCredential {
                token: "tok".to_string(),
                user_json: "{}".to_string(),
            })
            .await;

        store.clear().await;
        assert!(store.load().await.is_none());

        // Clearing an already-empty store is a no-op
        store.clear().await;
        assert!(store.load().await.is_none());
    }
}
