//! CityPulse: the community incident board. The board itself is public;
//! reporting and promoting are gated. This is the one surface where an
//! unauthenticated action redirects to the login page instead of opening
//! the modal.

use dioxus::prelude::*;
use ui::use_action_guard;

/// Incident board page.
#[component]
pub fn CityPulse() -> Element {
    let guard = use_action_guard();
    let mut notice = use_signal(|| Option::<String>::None);

    let report = Callback::new(move |()| {
        notice.set(Some("Incident report composer opened.".to_string()));
    });
    let promote = Callback::new(move |()| {
        notice.set(Some("Event promotion composer opened.".to_string()));
    });

    rsx! {
        section {
            class: "board",
            h1 { "CityPulse" }
            p { class: "board-subtitle", "Incidents and events reported around the city." }

            div {
                class: "board-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| guard.require_auth(report, false),
                    "Report incident"
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| guard.require_auth(promote, true),
                    "Promote event"
                }
            }

            if let Some(msg) = notice() {
                div { class: "board-notice", "{msg}" }
            }

            ul {
                class: "board-list",
                li { "Broken streetlight on Calea Victoriei — reported 2h ago" }
                li { "Pop-up flea market this weekend in Sector 3" }
                li { "Water main work, expect detours near Piața Unirii" }
            }
        }
    }
}
