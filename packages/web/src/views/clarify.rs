//! ClarifAI: the document-simplification assistant. The page is public;
//! submitting a document is gated.

use dioxus::prelude::*;
use ui::use_action_guard;

#[component]
pub fn Clarify() -> Element {
    let guard = use_action_guard();
    let mut document = use_signal(String::new);
    let mut notice = use_signal(|| Option::<String>::None);

    let simplify = Callback::new(move |()| {
        notice.set(Some("Document submitted for simplification.".to_string()));
    });

    rsx! {
        section {
            class: "board",
            h1 { "ClarifAI" }
            p { class: "board-subtitle", "Paste an official document and get a plain-language summary." }

            textarea {
                class: "clarify-input",
                placeholder: "Paste your document here…",
                value: document(),
                oninput: move |evt: FormEvent| document.set(evt.value()),
            }

            button {
                class: "btn btn-primary",
                onclick: move |_| guard.require_auth(simplify, false),
                "Simplify"
            }

            if let Some(msg) = notice() {
                div { class: "board-notice", "{msg}" }
            }
        }
    }
}
