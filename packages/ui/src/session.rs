//! Session context and provider for the UI.
//!
//! [`SessionProvider`] owns the [`SessionManager`] and mirrors its state into
//! a signal; everything else reads through [`use_session`]. The manager is
//! the single writer of session state and the persisted credential — the
//! context only forwards actions to it and re-publishes the result.

use std::sync::Arc;

use api::auth::{Credentials, RestBackend, SessionManager, SessionState, SignupRequest};
use api::{ApiClient, ApiConfig, ApiError, UserInfo};
use dioxus::prelude::*;

/// Seconds between background token refreshes while signed in.
const TOKEN_REFRESH_SECS: u64 = 15 * 60;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
type PlatformStore = store::LocalStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
type PlatformStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
type PlatformStore = store::FileStore;

pub type AppSessionManager = SessionManager<RestBackend, PlatformStore>;

fn platform_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("weaversong");
        store::FileStore::new(base)
    }
}

async fn sleep_secs(secs: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
}

/// Handle to the current session: a reactive state signal plus the actions
/// that mutate it. Cloning is cheap; all clones share one manager.
#[derive(Clone)]
pub struct SessionCx {
    state: Signal<SessionState>,
    manager: Arc<AppSessionManager>,
}

impl SessionCx {
    /// Current snapshot. Reading inside a component subscribes it.
    pub fn state(&self) -> SessionState {
        (self.state)()
    }

    pub fn signal(&self) -> Signal<SessionState> {
        self.state
    }

    fn publish(&self) {
        let mut state = self.state;
        state.set(self.manager.state());
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<UserInfo, ApiError> {
        let result = self.manager.login(credentials).await;
        self.publish();
        result
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<UserInfo, ApiError> {
        let result = self.manager.signup(request).await;
        self.publish();
        result
    }

    pub async fn logout(&self) {
        self.manager.logout().await;
        self.publish();
    }
}

/// Get the current session context.
pub fn use_session() -> SessionCx {
    use_context::<SessionCx>()
}

/// Provider component that manages session state.
/// Wrap the app with this component; there is exactly one per process.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(SessionState::default);
    let cx = use_hook(|| {
        let client = ApiClient::new(ApiConfig::from_env());
        let manager = SessionManager::new(RestBackend::new(client), platform_store());
        SessionCx {
            state,
            manager: Arc::new(manager),
        }
    });
    use_context_provider(|| cx.clone());

    // Two-phase rehydration on mount: cached copy first, then the
    // authoritative record. Dropping the resource on unmount plus the
    // manager's epoch guard keeps a late response from applying.
    let restore_cx = cx.clone();
    let _ = use_resource(move || {
        let cx = restore_cx.clone();
        async move {
            let mut state = cx.state;
            state.set(cx.manager.restore_cached().await);
            state.set(cx.manager.revalidate().await);
        }
    });

    // Background token refresh while signed in
    let refresh_cx = cx.clone();
    use_effect(move || {
        let cx = refresh_cx.clone();
        spawn(async move {
            loop {
                sleep_secs(TOKEN_REFRESH_SECS).await;
                let snapshot = cx.manager.state();
                if !snapshot.is_authenticated() {
                    continue;
                }
                if let Err(err) = cx.manager.refresh().await {
                    tracing::debug!("token refresh failed: {err}");
                }
            }
        });
    });

    rsx! {
        {children}
    }
}
