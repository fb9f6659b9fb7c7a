//! The gate modal for premium-only actions. There is no in-app purchase
//! flow; the modal explains the gate and points at the profile page, and
//! dismissing it drops the deferred action.

use dioxus::prelude::*;

use crate::modal::use_modals;
use crate::modal_overlay::ModalOverlay;

#[component]
pub fn UpgradeModal() -> Element {
    let modals = use_modals();

    if !modals.state().upgrade_open {
        return rsx! {};
    }

    let dismiss = Callback::new(move |()| {
        modals.close_upgrade();
        modals.clear_pending();
    });

    rsx! {
        ModalOverlay {
            title: "Premium required",
            on_close: move |_| dismiss.call(()),

            div {
                class: "modal-body",
                p {
                    class: "modal-text",
                    "This action is part of Weaversong Premium. Manage your subscription from your profile."
                }
                div {
                    class: "modal-actions",
                    a {
                        class: "btn btn-primary",
                        href: "/profile",
                        "View profile"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-outline",
                        onclick: move |_| dismiss.call(()),
                        "Maybe later"
                    }
                }
            }
        }
    }
}
