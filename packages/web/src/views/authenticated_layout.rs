//! Shell for every signed-in route: the header above the routed view.

use dioxus::prelude::*;
use ui::{use_session, Header};

use crate::Route;

#[component]
pub fn AuthenticatedLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // Re-runs on every session change, so logging out lands on the login page.
    if !session.read().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        Header {
            on_dashboard: move |_| {
                nav.push(Route::Profile {});
            },
            on_create: move |_| {
                nav.push(Route::CreateRecord {});
            },
            on_translate: move |_| {
                nav.push(Route::Translation {});
            },
            on_upload: move |_| {
                nav.push(Route::Upload {});
            },
        }
        main {
            class: "app-main",
            Outlet::<Route> {}
        }
    }
}
