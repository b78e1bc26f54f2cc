use dioxus::prelude::*;
use ui::views::ProfileView;

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();

    rsx! {
        ProfileView {
            on_create_record: move |_| {
                nav.push(Route::CreateRecord {});
            },
            on_translate: move |_| {
                nav.push(Route::Translation {});
            },
        }
    }
}
