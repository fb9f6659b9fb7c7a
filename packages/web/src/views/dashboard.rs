use dioxus::prelude::*;
use ui::{use_session, RouteGate};

use crate::Route;

/// Signed-in landing page.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        RouteGate {
            DashboardContent {}
        }
    }
}

#[component]
fn DashboardContent() -> Element {
    let session = use_session();
    let state = session.state();
    let name = state
        .user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        section {
            class: "board",
            h1 { "Welcome back, {name}" }
            p { class: "board-subtitle", "Pick up where you left off." }

            ul {
                class: "board-list",
                li { Link { to: Route::HelpboardMine {}, "My Helpboard activity" } }
                li { Link { to: Route::Pedestrian {}, "Pedestrian analytics" } }
                li { Link { to: Route::Settings {}, "Account settings" } }
            }
        }
    }
}
