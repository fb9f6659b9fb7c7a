//! The gate modal for unauthenticated users: an inline email/password form.
//! A successful login closes the modal and replays the deferred action.

use api::auth::Credentials;
use dioxus::prelude::*;

use crate::guard::replay_pending;
use crate::modal::use_modals;
use crate::modal_overlay::ModalOverlay;
use crate::session::use_session;

#[component]
pub fn LoginModal() -> Element {
    let session = use_session();
    let modals = use_modals();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if !modals.state().login_open {
        return rsx! {};
    }

    let submit_session = session.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = submit_session.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Please enter your email and password".to_string()));
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
                    loading.set(false);
                    email.set(String::new());
                    password.set(String::new());
                    modals.close_login();
                    replay_pending(&session, &modals);
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let dismiss = Callback::new(move |()| {
        modals.close_login();
        modals.clear_pending();
        error.set(None);
    });

    rsx! {
        ModalOverlay {
            title: "Sign in to continue",
            on_close: move |_| dismiss.call(()),

            div {
                class: "modal-body",

                form {
                    onsubmit: handle_submit,
                    class: "modal-form",

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

                    div {
                        class: "modal-actions",
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: loading(),
                            if loading() { "Signing in…" } else { "Sign in" }
                        }
                        button {
                            r#type: "button",
                            class: "btn btn-outline",
                            onclick: move |_| dismiss.call(()),
                            "Cancel"
                        }
                    }
                }

                p {
                    class: "modal-footnote",
                    "No account yet? "
                    a { href: "/signup", "Sign up" }
                }
            }
        }
    }
}
