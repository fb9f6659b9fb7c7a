//! This crate contains the shared UI for the workspace: the session
//! provider, the modal coordinator, the action guard, and the components
//! built on top of them.

mod session;
pub use session::{use_session, AppSessionManager, SessionCx, SessionProvider};

mod modal;
pub use modal::{use_modals, ModalCx, ModalProvider, ModalState, PendingAction};

mod guard;
pub use guard::{
    evaluate, resolve_pending, use_action_guard, ActionGuard, GuardDecision, Replay,
    INCIDENT_BOARD_PATH,
};

mod route_gate;
pub use route_gate::RouteGate;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod login_modal;
pub use login_modal::LoginModal;

mod upgrade_modal;
pub use upgrade_modal::UpgradeModal;

mod navbar;
pub use navbar::Navbar;
