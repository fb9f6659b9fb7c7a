use dioxus::prelude::*;

use crate::modal::use_modals;
use crate::session::use_session;

/// Top navigation bar. The host app passes its router links as children;
/// the right-hand side renders the session chip — user name, premium badge,
/// and the login / logout controls.
#[component]
pub fn Navbar(children: Element) -> Element {
    let session = use_session();
    let modals = use_modals();
    let state = session.state();

    let logout_session = session.clone();
    let handle_logout = move |_| {
        let session = logout_session.clone();
        spawn(async move {
            session.logout().await;
        });
    };

    rsx! {
        div {
            class: "navbar",
            a { class: "navbar-brand", href: "/", "Weaversong" }

            nav {
                class: "navbar-links",
                {children}
            }

            div {
                class: "navbar-session",
                if let Some(user) = state.user() {
                    span {
                        class: "navbar-user",
                        "{user.display_name()}"
                        if user.premium_badge() {
                            span { class: "premium-badge", "★ Premium" }
                        }
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: handle_logout,
                        "Log out"
                    }
                } else if state.is_loading() {
                    span { class: "navbar-user", "…" }
                } else {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| modals.show_login(),
                        "Log in"
                    }
                    a { class: "btn btn-outline", href: "/signup", "Sign up" }
                }
            }
        }
    }
}
