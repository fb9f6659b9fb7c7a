//! # Session lifecycle — hydration, login, logout
//!
//! [`SessionManager`] is the single writer of both the in-memory session and
//! the persisted credential pair. It is generic over the network seam
//! ([`AuthBackend`]) and the storage seam ([`CredentialStore`]) so the whole
//! lifecycle runs under test with a stub backend and an in-memory store.
//!
//! ## Phases
//!
//! ```text
//! Unknown ──restore_cached──▶ Hydrating ──┬─▶ Authenticated(cached)
//!                                         │        │ revalidate
//!                                         │        ├─ ok ──▶ Authenticated(fresh)
//!                                         │        └─ err ─▶ Anonymous (credential cleared)
//!                                         └─▶ Anonymous (no stored pair)
//! ```
//!
//! Startup is optimistic: a stored token + user pair is trusted immediately
//! so the UI renders the signed-in shell without a round trip, then
//! `/auth/me` replaces the cached copy with the authoritative record. Any
//! revalidation failure — bad token or unreachable network alike — drops the
//! session and the stored pair. No retry, no error surfaced.
//!
//! ## Epochs
//!
//! Revalidation and refresh run concurrently with user actions. Every
//! login/logout bumps an epoch counter; an in-flight revalidation captures
//! the epoch when it starts and applies nothing if the epoch moved while it
//! was on the wire. Late responses from a superseded session are discarded
//! rather than clobbering the new one.

use std::sync::{Arc, Mutex};

use store::{CredentialStore, StoredCredential};

use crate::error::ApiError;
use crate::models::UserInfo;

use super::backend::{AuthBackend, Credentials, SignupRequest};

/// Hydration state machine for the current identity.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionPhase {
    /// Startup, before anyone looked at storage.
    #[default]
    Unknown,
    /// Storage is being read / the cached copy awaits revalidation kickoff.
    Hydrating,
    Authenticated(UserInfo),
    Anonymous,
}

/// Read-only snapshot of the session. The derived booleans are computed
/// from the phase on every call, never cached separately.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub phase: SessionPhase,
}

impl SessionState {
    pub fn user(&self) -> Option<&UserInfo> {
        match &self.phase {
            SessionPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    pub fn is_premium(&self) -> bool {
        self.user().is_some_and(|u| u.is_premium)
    }

    /// True until hydration settles into Authenticated or Anonymous.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Unknown | SessionPhase::Hydrating)
    }
}

#[derive(Debug, Default)]
struct Inner {
    phase: SessionPhase,
    token: Option<String>,
    epoch: u64,
}

/// Owns the session phase, the bearer token, and the credential slots.
#[derive(Clone, Debug)]
pub struct SessionManager<B, S> {
    backend: B,
    store: S,
    inner: Arc<Mutex<Inner>>,
}

impl<B: AuthBackend, S: CredentialStore> SessionManager<B, S> {
    pub fn new(backend: B, store: S) -> Self {
        Self {
            backend,
            store,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    pub fn state(&self) -> SessionState {
        SessionState {
            phase: self.inner.lock().unwrap().phase.clone(),
        }
    }

    fn epoch(&self) -> u64 {
        self.inner.lock().unwrap().epoch
    }

    /// Set the phase (and token), bumping the epoch so in-flight background
    /// work from the previous identity gets discarded.
    fn transition(&self, phase: SessionPhase, token: Option<String>) {
        let mut inner = self.inner.lock().unwrap();
        inner.phase = phase;
        inner.token = token;
        inner.epoch += 1;
    }

    /// Set the phase only if the epoch is still the one the caller captured.
    /// Returns whether the update applied.
    fn transition_if(&self, started: u64, phase: SessionPhase, token: Option<String>) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.epoch != started {
            return false;
        }
        inner.phase = phase;
        inner.token = token;
        true
    }

    fn set_phase(&self, phase: SessionPhase) {
        self.inner.lock().unwrap().phase = phase;
    }

    fn current_token(&self) -> Option<String> {
        self.inner.lock().unwrap().token.clone()
    }

    async fn persist(&self, token: &str, user: &UserInfo) {
        match serde_json::to_string(user) {
            Ok(user_json) => {
                self.store
                    .save(&StoredCredential {
                        token: token.to_string(),
                        user_json,
                    })
                    .await;
            }
            Err(err) => {
                tracing::warn!("could not serialize user for persistence: {err}");
            }
        }
    }

    /// `POST /auth/login`. On success the token is installed, the pair is
    /// persisted, and the session becomes authenticated.
    pub async fn login(&self, credentials: &Credentials) -> Result<UserInfo, ApiError> {
        let response = self.backend.login(credentials).await?;
        self.backend.install_token(Some(&response.access_token));
        self.persist(&response.access_token, &response.user).await;
        self.transition(
            SessionPhase::Authenticated(response.user.clone()),
            Some(response.access_token),
        );
        Ok(response.user)
    }

    /// `POST /auth/signup`, then login with the same credentials.
    pub async fn signup(&self, request: &SignupRequest) -> Result<UserInfo, ApiError> {
        self.backend.signup(request).await?;
        self.login(&request.credentials()).await
    }

    /// Log out. The server call is best-effort; local teardown happens on
    /// every path, so the user always ends up signed out.
    pub async fn logout(&self) {
        if let Err(err) = self.backend.logout().await {
            tracing::debug!("logout request failed, clearing local session anyway: {err}");
        }
        self.store.clear().await;
        self.backend.install_token(None);
        self.transition(SessionPhase::Anonymous, None);
    }

    /// Phase one of startup: trust the stored pair if it parses, otherwise
    /// settle into Anonymous. Callers follow up with [`revalidate`].
    ///
    /// [`revalidate`]: SessionManager::revalidate
    pub async fn restore_cached(&self) -> SessionState {
        self.set_phase(SessionPhase::Hydrating);

        let Some(cred) = self.store.load().await else {
            self.set_phase(SessionPhase::Anonymous);
            return self.state();
        };

        match serde_json::from_str::<UserInfo>(&cred.user_json) {
            Ok(user) => {
                self.backend.install_token(Some(&cred.token));
                let mut inner = self.inner.lock().unwrap();
                inner.phase = SessionPhase::Authenticated(user);
                inner.token = Some(cred.token);
            }
            Err(err) => {
                tracing::warn!("discarding unreadable cached user: {err}");
                self.store.clear().await;
                self.set_phase(SessionPhase::Anonymous);
            }
        }
        self.state()
    }

    /// Phase two of startup: replace the optimistic cached user with the
    /// authoritative `/auth/me` record, or fail closed. Any failure —
    /// expired token, network down — clears the session and the stored
    /// pair identically.
    pub async fn revalidate(&self) -> SessionState {
        if !self.state().is_authenticated() {
            return self.state();
        }
        let started = self.epoch();

        match self.backend.current_user().await {
            Ok(user) => {
                let token = self.current_token();
                if self.transition_if(started, SessionPhase::Authenticated(user.clone()), token.clone()) {
                    if let Some(token) = token {
                        self.persist(&token, &user).await;
                    }
                }
            }
            Err(err) => {
                tracing::debug!("session revalidation failed, signing out: {err}");
                if self.transition_if(started, SessionPhase::Anonymous, None) {
                    self.store.clear().await;
                    self.backend.install_token(None);
                }
            }
        }
        self.state()
    }

    /// Swap the bearer token for a fresh one and re-persist it. A failure
    /// changes nothing; the old token keeps working until it expires.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let state = self.state();
        let Some(user) = state.user() else {
            return Ok(());
        };
        let started = self.epoch();

        let token = self.backend.refresh().await?.access_token;
        if self.transition_if(started, state.phase.clone(), Some(token.clone())) {
            self.backend.install_token(Some(&token));
            self.persist(&token, user).await;
        }
        Ok(())
    }
}
