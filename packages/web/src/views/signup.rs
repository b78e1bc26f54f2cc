use dioxus::prelude::*;
use ui::use_session;
use ui::views::SignupView;

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let session = use_session();
    let nav = use_navigator();

    if session.read().is_authenticated() {
        nav.replace(Route::Profile {});
    }

    rsx! {
        SignupView {
            on_signed_up: move |_| {
                nav.replace(Route::Login {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
