use dioxus::prelude::*;
use ui::views::TranslationView;

#[component]
pub fn Translation() -> Element {
    rsx! {
        TranslationView {}
    }
}
