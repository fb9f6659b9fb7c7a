//! # Browser credential store — `localStorage`
//!
//! [`LocalStore`] is the [`CredentialStore`] used on the **web platform**.
//! The persisted state is two string slots (token + serialised user), which
//! maps directly onto `window.localStorage` entries keyed by
//! [`TOKEN_KEY`](crate::credential::TOKEN_KEY) and
//! [`USER_KEY`](crate::credential::USER_KEY).
//!
//! `LocalStore` is a zero-size struct that reaches for the window's storage
//! on every operation; the browser hands back the same object each time, so
//! there is nothing to cache. A missing window or a storage access error
//! (private browsing, disabled storage) degrades to "no credential".

use crate::credential::{CredentialStore, StoredCredential, TOKEN_KEY, USER_KEY};

/// `localStorage`-backed CredentialStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl CredentialStore for LocalStore {
    async fn load(&self) -> Option<StoredCredential> {
        let storage = Self::storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let user_json = storage.get_item(USER_KEY).ok().flatten()?;
        Some(StoredCredential { token, user_json })
    }

    async fn save(&self, cred: &StoredCredential) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, &cred.token);
            let _ = storage.set_item(USER_KEY, &cred.user_json);
        }
    }

    async fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
