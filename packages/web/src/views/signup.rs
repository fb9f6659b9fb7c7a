//! Signup page. A successful signup chains straight into a login with the
//! same credentials, so the user lands on the dashboard already signed in.

use api::auth::SignupRequest;
use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

/// Signup page component.
#[component]
pub fn Signup() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let state = session.state();
    if !state.is_loading() && state.is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let submit_session = session.clone();
    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let session = submit_session.clone();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 6 {
                error.set(Some("Password must be at least 6 characters".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            match session
                .signup(&SignupRequest {
                    email: e,
                    password: p,
                    name: n,
                })
                .await
            {
                Ok(_) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Create account" }
            p { class: "auth-subtitle", "Join the Weaversong community" }

            form {
                onsubmit: handle_signup,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: loading(),
                    if loading() { "Creating account…" } else { "Sign up" }
                }
            }

            p {
                class: "auth-footnote",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
