//! # Filesystem-backed credential store
//!
//! [`FileStore`] persists the credential pair as two files under a base
//! directory, for desktop builds where `localStorage` does not exist.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── token        # bearer token string
//! └── user.json    # serialised user record
//! ```
//!
//! Callers obtain a platform-appropriate base via `dirs::data_dir()`
//! (e.g. `~/.local/share/weaversong/` on Linux).

use std::path::PathBuf;

use crate::credential::{CredentialStore, StoredCredential};

/// Filesystem-backed CredentialStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join("token")
    }

    fn user_path(&self) -> PathBuf {
        self.base.join("user.json")
    }
}

impl CredentialStore for FileStore {
    async fn load(&self) -> Option<StoredCredential> {
        let token = std::fs::read_to_string(self.token_path()).ok()?;
        let user_json = std::fs::read_to_string(self.user_path()).ok()?;
        if token.is_empty() {
            return None;
        }
        Some(StoredCredential { token, user_json })
    }

    async fn save(&self, cred: &StoredCredential) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.token_path(), &cred.token);
        let _ = std::fs::write(self.user_path(), &cred.user_json);
    }

    async fn clear(&self) {
        let _ = std::fs::remove_file(self.token_path());
        let _ = std::fs::remove_file(self.user_path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_base() -> PathBuf {
        std::env::temp_dir().join(format!("weaversong_test_{}", std::process::id()))
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = temp_base().join("roundtrip");
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        let cred = StoredCredential {
            token: "tok-abc".to_string(),
            user_json: r#"{"id":"u42"}"#.to_string(),
        };
        store.save(&cred).await;

        // Re-open from the same directory, as a page reload would
        let store2 = FileStore::new(dir.clone());
        assert_eq!(store2.load().await, Some(cred));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_half_present_pair_is_absent() {
        let dir = temp_base().join("half");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        // Token without a user copy must not rehydrate
        std::fs::write(dir.join("token"), "orphan").unwrap();
        let store = FileStore::new(dir.clone());
        assert!(store.load().await.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_clear_removes_both_files() {
        let dir = temp_base().join("clear");
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        store
            .save(&StoredCredential {
                token: "tok".to_string(),
                user_json: "{}".to_string(),
            })
            .await;
        store.clear().await;

        assert!(store.load().await.is_none());
        assert!(!dir.join("token").exists());
        assert!(!dir.join("user.json").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
