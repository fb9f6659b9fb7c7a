use dioxus::prelude::*;
use ui::{use_session, RouteGate};

/// The signed-in user's profile card. Protected route; also the landing
/// page for the upgrade modal's call to action.
#[component]
pub fn Profile() -> Element {
    rsx! {
        RouteGate {
            ProfileContent {}
        }
    }
}

#[component]
fn ProfileContent() -> Element {
    let session = use_session();
    let state = session.state();

    rsx! {
        section {
            class: "board",
            h1 { "Profile" }

            if let Some(user) = state.user() {
                div {
                    class: "profile-card",
                    h2 {
                        "{user.display_name()}"
                        if user.premium_badge() {
                            span { class: "premium-badge", "★ Premium" }
                        }
                    }
                    p { "{user.email}" }

                    if !user.is_premium {
                        div {
                            class: "board-notice",
                            "Upgrade to Premium to promote events and unlock analytics."
                        }
                    }
                }
            }
        }
    }
}
