//! # Credential persistence — the durable half of the session
//!
//! A logged-in session survives page reloads through exactly two string
//! slots: the bearer token and a JSON-serialised copy of the user record.
//! [`CredentialStore`] is the async interface over those slots; the session
//! layer is its only writer. Implementations live in sibling modules:
//! [`crate::memory`] (tests and fallback), [`crate::local`] (browser
//! `localStorage`, behind the `web` feature) and [`crate::file_store`]
//! (desktop filesystem).
//!
//! The two slots are written and cleared as a pair — a store never holds a
//! token without its user copy or vice versa. `load` treats a half-present
//! pair as absent.
//!
//! ## Error handling
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes). Broken or unavailable client storage degrades
//! to "not logged in"; the backend remains the authority on the session.

use serde::{Deserialize, Serialize};

/// Storage key for the bearer token slot.
pub const TOKEN_KEY: &str = "weaversong.auth.token";
/// Storage key for the serialised user slot.
pub const USER_KEY: &str = "weaversong.auth.user";

/// The persisted credential pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCredential {
    /// Opaque bearer token, attached to every authenticated request.
    pub token: String,
    /// JSON-serialised user record, used for optimistic rehydration.
    pub user_json: String,
}

/// Async interface over the two credential slots.
pub trait CredentialStore {
    /// Read the pair. `None` when either slot is missing or unreadable.
    async fn load(&self) -> Option<StoredCredential>;
    /// Write both slots.
    async fn save(&self, cred: &StoredCredential);
    /// Remove both slots.
    async fn clear(&self);
}
