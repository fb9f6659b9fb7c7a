use dioxus::prelude::*;

use crate::guard::redirect_to_login;
use crate::session::use_session;

/// Wraps a protected page. While rehydration is in flight a neutral pending
/// state renders; once the session settles, anonymous visitors get a full
/// navigation to the login route and everyone else sees the page.
#[component]
pub fn RouteGate(children: Element) -> Element {
    let session = use_session();
    let state = session.state();

    if state.is_loading() {
        return rsx! {
            div {
                class: "route-gate-pending",
                "Loading…"
            }
        };
    }

    if !state.is_authenticated() {
        redirect_to_login();
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
