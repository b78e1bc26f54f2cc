use dioxus::prelude::*;
use ui::use_session;
use ui::views::LoginView;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // Already signed in: straight to the dashboard.
    if session.read().is_authenticated() {
        nav.replace(Route::Profile {});
    }

    rsx! {
        LoginView {
            on_logged_in: move |_| {
                nav.push(Route::Profile {});
            },
            on_signup: move |_| {
                nav.push(Route::Signup {});
            },
        }
    }
}
