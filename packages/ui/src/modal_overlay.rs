use dioxus::prelude::*;

/// Chrome shared by the gating modals: a full-screen backdrop, a centered
/// card with a title bar, and the three dismissal paths (backdrop click,
/// Escape, and the ✕ button) all routed through `on_close`. Clicks inside
/// the card stay inside it.
///
/// The backdrop grabs focus on mount so Escape works without the user
/// clicking into the modal first.
#[component]
pub fn ModalOverlay(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            tabindex: "-1",
            onmounted: move |evt| {
                spawn(async move {
                    let _ = evt.set_focus(true).await;
                });
            },
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                div {
                    class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        r#type: "button",
                        class: "modal-close",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                {children}
            }
        }
    }
}
