use dioxus::prelude::*;

use ui::{LoginModal, ModalProvider, Navbar, SessionProvider, UpgradeModal};
use views::{
    CityPulse, Clarify, Dashboard, Helpboard, HelpboardMine, Login, Pedestrian, Profile,
    Settings, Signup,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/settings")]
        Settings {},
        #[route("/profile")]
        Profile {},
        #[route("/citypulse")]
        CityPulse {},
        #[route("/helpboard")]
        Helpboard {},
        #[route("/helpboard/mine")]
        HelpboardMine {},
        #[route("/clarify")]
        Clarify {},
        #[route("/pedestrian")]
        Pedestrian {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            ModalProvider {
                Router::<Route> {}
            }
        }
    }
}

/// App chrome shared by every route: navbar, page outlet, and the two
/// gating modals floating above whatever page is active.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::CityPulse {}, "CityPulse" }
            Link { to: Route::Helpboard {}, "Helpboard" }
            Link { to: Route::Clarify {}, "ClarifAI" }
            Link { to: Route::Pedestrian {}, "Pedestrian" }
            Link { to: Route::Dashboard {}, "Dashboard" }
        }

        main {
            class: "page",
            Outlet::<Route> {}
        }

        LoginModal {}
        UpgradeModal {}
    }
}

/// Redirect `/` to the dashboard.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
