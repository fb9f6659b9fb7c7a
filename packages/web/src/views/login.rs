//! Login page with an email/password form.

use api::auth::Credentials;
use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: nothing to do here
    let state = session.state();
    if !state.is_loading() && state.is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let submit_session = session.clone();
    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session = submit_session.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            match session
                .login(&Credentials {
                    email: e,
                    password: p,
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

            h1 { "Weaversong" }
            p { class: "auth-subtitle", "Sign in to your account" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
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

                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: loading(),
                    if loading() { "Signing in…" } else { "Sign in" }
                }
            }

            p {
                class: "auth-footnote",
                "Don't have an account? "
                Link { to: Route::Signup {}, "Sign up" }
            }
        }
    }
}
