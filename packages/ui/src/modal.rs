//! Modal coordination: process-wide flags for the login and upgrade modals,
//! plus the deferred action that triggered them.
//!
//! Any component can request a gate through [`use_modals`] without the
//! session layer knowing; the flags are pure UI state with no persistence.

use dioxus::prelude::*;

/// Flag state for the two gating modals. Each transition flips exactly one
/// flag and is idempotent; the guard opens at most one modal per trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    pub login_open: bool,
    pub upgrade_open: bool,
}

impl ModalState {
    pub fn show_login(&mut self) {
        self.login_open = true;
    }

    pub fn show_upgrade(&mut self) {
        self.upgrade_open = true;
    }

    pub fn close_login(&mut self) {
        self.login_open = false;
    }

    pub fn close_upgrade(&mut self) {
        self.upgrade_open = false;
    }
}

/// A gated action captured as a value, so the pending work is inspectable
/// instead of hiding in a closure. Stored by the guard when a modal opens
/// and replayed (or escalated, or dropped) when the modal resolves.
#[derive(Clone, Copy)]
pub struct PendingAction {
    pub action: Callback<()>,
    pub requires_premium: bool,
}

/// Handle to the modal coordinator.
#[derive(Clone, Copy)]
pub struct ModalCx {
    state: Signal<ModalState>,
    pending: Signal<Option<PendingAction>>,
}

impl ModalCx {
    pub fn state(&self) -> ModalState {
        (self.state)()
    }

    pub fn show_login(&self) {
        let mut state = self.state;
        state.with_mut(|m| m.show_login());
    }

    pub fn show_upgrade(&self) {
        let mut state = self.state;
        state.with_mut(|m| m.show_upgrade());
    }

    pub fn close_login(&self) {
        let mut state = self.state;
        state.with_mut(|m| m.close_login());
    }

    pub fn close_upgrade(&self) {
        let mut state = self.state;
        state.with_mut(|m| m.close_upgrade());
    }

    /// Remember the action that was gated behind the modal.
    pub fn defer(&self, action: PendingAction) {
        let mut pending = self.pending;
        pending.set(Some(action));
    }

    /// Take the deferred action, leaving nothing behind.
    pub fn take_pending(&self) -> Option<PendingAction> {
        let mut pending = self.pending;
        pending.with_mut(|p| p.take())
    }

    /// Drop the deferred action, e.g. when the user dismisses the modal.
    pub fn clear_pending(&self) {
        let mut pending = self.pending;
        pending.set(None);
    }

    pub fn has_pending(&self) -> bool {
        (self.pending)().is_some()
    }
}

/// Get the modal coordinator.
pub fn use_modals() -> ModalCx {
    use_context::<ModalCx>()
}

/// Provider component for the modal coordinator. Sits next to
/// [`SessionProvider`](crate::SessionProvider) at the top of the app.
#[component]
pub fn ModalProvider(children: Element) -> Element {
    let state = use_signal(ModalState::default);
    let pending = use_signal(|| Option::<PendingAction>::None);
    use_context_provider(|| ModalCx { state, pending });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions_are_idempotent() {
        let mut state = ModalState::default();

        state.show_login();
        state.show_login();
        assert!(state.login_open);
        assert!(!state.upgrade_open);

        state.close_login();
        state.close_login();
        assert_eq!(state, ModalState::default());
    }

    #[test]
    fn test_close_when_already_closed_stays_closed() {
        let mut state = ModalState::default();
        state.close_login();
        state.close_upgrade();
        assert_eq!(state, ModalState::default());
    }

    #[test]
    fn test_each_transition_touches_one_flag() {
        let mut state = ModalState::default();
        state.show_upgrade();
        assert!(!state.login_open);
        assert!(state.upgrade_open);

        state.close_upgrade();
        state.show_login();
        assert!(state.login_open);
        assert!(!state.upgrade_open);
    }
}
