use dioxus::prelude::*;
use ui::views::UploadView;

#[component]
pub fn Upload() -> Element {
    rsx! {
        UploadView {}
    }
}
