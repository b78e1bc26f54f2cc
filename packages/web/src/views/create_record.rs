use dioxus::prelude::*;
use ui::views::CreateRecordView;

use crate::Route;

#[component]
pub fn CreateRecord() -> Element {
    let nav = use_navigator();

    rsx! {
        CreateRecordView {
            on_cancel: move |_| {
                nav.push(Route::Profile {});
            },
        }
    }
}
