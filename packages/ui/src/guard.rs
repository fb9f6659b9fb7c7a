//! Action gating: one place that decides whether a protected action runs,
//! defers behind a modal, or redirects.
//!
//! The decision itself is the pure [`evaluate`] function; [`ActionGuard`]
//! wires it to the live session, the modal coordinator, and the browser
//! location. Buttons call [`ActionGuard::require_auth`] instead of
//! scattering their own auth checks.

use api::auth::SessionState;
use dioxus::prelude::*;

use crate::modal::{ModalCx, PendingAction};
use crate::session::{use_session, SessionCx};

/// The one route that prefers a hard redirect over a login modal. Kept as a
/// single hard-coded path on purpose; no per-route policy table exists.
pub const INCIDENT_BOARD_PATH: &str = "/citypulse";

/// Outcome of evaluating a protected action against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Run the action now.
    Run,
    /// Defer behind the login modal.
    ShowLogin,
    /// Full navigation to the login page, no modal.
    RedirectLogin,
    /// Authenticated but the action needs premium the user lacks.
    ShowUpgrade,
}

/// Strict short-circuit order: authentication first (with the incident-board
/// redirect special case), then the premium requirement, then run.
pub fn evaluate(
    session: &SessionState,
    requires_premium: bool,
    on_incident_board: bool,
) -> GuardDecision {
    if !session.is_authenticated() {
        if on_incident_board {
            return GuardDecision::RedirectLogin;
        }
        return GuardDecision::ShowLogin;
    }
    if requires_premium && !session.is_premium() {
        return GuardDecision::ShowUpgrade;
    }
    GuardDecision::Run
}

/// Guard handle bound to the current session and modal coordinator.
#[derive(Clone, Copy)]
pub struct ActionGuard {
    session: Signal<SessionState>,
    modals: ModalCx,
}

/// Get an [`ActionGuard`] for the current scope.
pub fn use_action_guard() -> ActionGuard {
    let session = use_session().signal();
    let modals = crate::modal::use_modals();
    ActionGuard { session, modals }
}

impl ActionGuard {
    /// Gate `action`. Either it runs synchronously, or exactly one of the
    /// modals opens with the action stored for replay, or the page
    /// navigates to the login route. Never fails; whatever `action` does
    /// once it runs is the caller's concern.
    pub fn require_auth(&self, action: Callback<()>, requires_premium: bool) {
        let state = (self.session)();
        match evaluate(&state, requires_premium, on_incident_board()) {
            GuardDecision::Run => action.call(()),
            GuardDecision::ShowLogin => {
                self.modals.defer(PendingAction {
                    action,
                    requires_premium,
                });
                self.modals.show_login();
            }
            GuardDecision::ShowUpgrade => {
                self.modals.defer(PendingAction {
                    action,
                    requires_premium,
                });
                self.modals.show_upgrade();
            }
            GuardDecision::RedirectLogin => redirect_to_login(),
        }
    }
}

/// What happens to a deferred action once the login modal resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replay {
    /// The fresh session permits it; run it now.
    Run,
    /// Still needs premium the user lacks; hand off to the upgrade modal.
    Escalate,
    /// The session did not end up permitting it; forget it.
    Drop,
}

/// Decide the fate of a deferred action against the fresh session. The
/// incident-board redirect never applies here: the user already went
/// through the login modal, so the location special case is moot.
pub fn resolve_pending(session: &SessionState, requires_premium: bool) -> Replay {
    match evaluate(session, requires_premium, false) {
        GuardDecision::Run => Replay::Run,
        GuardDecision::ShowUpgrade => Replay::Escalate,
        GuardDecision::ShowLogin | GuardDecision::RedirectLogin => Replay::Drop,
    }
}

/// Re-evaluate the deferred action after a successful login. Runs it if the
/// fresh session permits it, escalates to the upgrade modal if it still
/// needs premium, and drops it otherwise.
pub(crate) fn replay_pending(session: &SessionCx, modals: &ModalCx) {
    let Some(pending) = modals.take_pending() else {
        return;
    };
    match resolve_pending(&session.state(), pending.requires_premium) {
        Replay::Run => pending.action.call(()),
        Replay::Escalate => {
            modals.defer(pending);
            modals.show_upgrade();
        }
        Replay::Drop => {}
    }
}

fn on_incident_board() -> bool {
    current_path().is_some_and(|path| path == INCIDENT_BOARD_PATH)
}

fn current_path() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.location().pathname().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Full navigation to the login page.
pub(crate) fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("redirect to /login requested");
    }
}

#[cfg(test)]
mod tests {
    use api::auth::SessionPhase;
    use api::{UserInfo, UserRole};

    use super::*;

    fn anonymous() -> SessionState {
        SessionState {
            phase: SessionPhase::Anonymous,
        }
    }

    fn authenticated(premium: bool) -> SessionState {
        SessionState {
            phase: SessionPhase::Authenticated(UserInfo {
                id: "u1".to_string(),
                email: "ana@example.com".to_string(),
                name: "Ana".to_string(),
                role: UserRole::User,
                is_premium: premium,
                show_premium_badge: false,
            }),
        }
    }

    #[test]
    fn test_authenticated_non_premium_action_runs() {
        assert_eq!(evaluate(&authenticated(false), false, false), GuardDecision::Run);
        assert_eq!(evaluate(&authenticated(false), false, true), GuardDecision::Run);
    }

    #[test]
    fn test_premium_action_needs_premium() {
        assert_eq!(
            evaluate(&authenticated(false), true, false),
            GuardDecision::ShowUpgrade
        );
        assert_eq!(evaluate(&authenticated(true), true, false), GuardDecision::Run);
    }

    #[test]
    fn test_unauthenticated_on_incident_board_redirects() {
        assert_eq!(evaluate(&anonymous(), false, true), GuardDecision::RedirectLogin);
        // The premium requirement never reorders the checks
        assert_eq!(evaluate(&anonymous(), true, true), GuardDecision::RedirectLogin);
    }

    #[test]
    fn test_unauthenticated_elsewhere_gets_login_modal() {
        assert_eq!(evaluate(&anonymous(), false, false), GuardDecision::ShowLogin);
        assert_eq!(evaluate(&anonymous(), true, false), GuardDecision::ShowLogin);
    }

    #[test]
    fn test_loading_session_counts_as_unauthenticated() {
        let hydrating = SessionState {
            phase: SessionPhase::Hydrating,
        };
        assert_eq!(evaluate(&hydrating, false, false), GuardDecision::ShowLogin);
    }

    #[test]
    fn test_permitted_pending_action_runs() {
        assert_eq!(resolve_pending(&authenticated(false), false), Replay::Run);
        assert_eq!(resolve_pending(&authenticated(true), true), Replay::Run);
    }

    #[test]
    fn test_pending_premium_action_escalates_without_premium() {
        assert_eq!(resolve_pending(&authenticated(false), true), Replay::Escalate);
    }

    #[test]
    fn test_pending_action_dropped_when_still_unauthenticated() {
        assert_eq!(resolve_pending(&anonymous(), false), Replay::Drop);
        assert_eq!(resolve_pending(&anonymous(), true), Replay::Drop);
    }

    #[test]
    fn test_replay_never_redirects_from_the_incident_board() {
        // A login that fails revalidation drops the action even where an
        // un-gated click would have redirected
        assert_eq!(resolve_pending(&anonymous(), false), Replay::Drop);
        // while a fresh click on the board would have redirected
        assert_eq!(
            evaluate(&anonymous(), false, true),
            GuardDecision::RedirectLogin
        );
    }
}
