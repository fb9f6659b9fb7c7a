use dioxus::prelude::*;
use ui::{use_session, RouteGate};

/// Account settings. Protected route.
#[component]
pub fn Settings() -> Element {
    rsx! {
        RouteGate {
            SettingsContent {}
        }
    }
}

#[component]
fn SettingsContent() -> Element {
    let session = use_session();
    let state = session.state();

    rsx! {
        section {
            class: "board",
            h1 { "Settings" }

            if let Some(user) = state.user() {
                dl {
                    class: "settings-list",
                    dt { "Email" }
                    dd { "{user.email}" }
                    dt { "Name" }
                    dd { "{user.display_name()}" }
                    dt { "Role" }
                    dd { "{user.role:?}" }
                    dt { "Premium badge" }
                    dd {
                        if user.show_premium_badge { "Shown" } else { "Hidden" }
                    }
                }
            }
        }
    }
}
