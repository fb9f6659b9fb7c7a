use dioxus::prelude::*;
use ui::RouteGate;

/// Pedestrian-traffic analytics. Protected route.
#[component]
pub fn Pedestrian() -> Element {
    rsx! {
        RouteGate {
            section {
                class: "board",
                h1 { "Pedestrian analytics" }
                p { class: "board-subtitle", "Foot-traffic trends around your area." }
                p { class: "board-empty", "No measurements collected yet." }
            }
        }
    }
}
