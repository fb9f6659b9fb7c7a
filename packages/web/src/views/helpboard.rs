//! Helpboard: the local-help marketplace. Browsing requests is public;
//! responding is gated behind the login modal, and the personal view is a
//! protected route.

use dioxus::prelude::*;
use ui::{use_action_guard, RouteGate};

/// Public request browser.
#[component]
pub fn Helpboard() -> Element {
    let guard = use_action_guard();
    let mut notice = use_signal(|| Option::<String>::None);

    let offer_help = Callback::new(move |()| {
        notice.set(Some("Response composer opened.".to_string()));
    });

    rsx! {
        section {
            class: "board",
            h1 { "Helpboard" }
            p { class: "board-subtitle", "Neighbours asking for a hand." }

            if let Some(msg) = notice() {
                div { class: "board-notice", "{msg}" }
            }

            ul {
                class: "board-list",
                li {
                    "Need help moving a couch on Saturday"
                    button {
                        class: "btn btn-small",
                        onclick: move |_| guard.require_auth(offer_help, false),
                        "Offer help"
                    }
                }
                li {
                    "Looking for someone to water plants next week"
                    button {
                        class: "btn btn-small",
                        onclick: move |_| guard.require_auth(offer_help, false),
                        "Offer help"
                    }
                }
            }
        }
    }
}

/// The signed-in user's own requests and responses.
#[component]
pub fn HelpboardMine() -> Element {
    rsx! {
        RouteGate {
            section {
                class: "board",
                h1 { "My Helpboard" }
                p { class: "board-subtitle", "Your open requests and the responses you've sent." }
                p { class: "board-empty", "Nothing here yet." }
            }
        }
    }
}
