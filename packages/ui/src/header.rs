use dioxus::prelude::*;

use crate::icons::{FaLayerGroup, FaRightFromBracket};
use crate::session::{use_api, use_session, LogoutButton};
use crate::Icon;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// App bar shown above every signed-in view. Loads the current user for the
/// avatar; a failed load falls back to the generic `User` label.
#[component]
pub fn Header(
    on_dashboard: EventHandler<()>,
    on_create: EventHandler<()>,
    on_translate: EventHandler<()>,
    on_upload: EventHandler<()>,
) -> Element {
    let session = use_session();
    let client = use_api();
    let user = use_resource(move || {
        let client = client.clone();
        async move { api::dashboard::load_user(&client).await.ok() }
    });
    let profile = user().flatten().unwrap_or_default();

    rsx! {
        document::Stylesheet { href: HEADER_CSS }

        header {
            class: "app-header",

            div {
                class: "header-logo",
                onclick: move |_| on_dashboard.call(()),
                Icon { icon: FaLayerGroup, width: 24, height: 24 }
                span { class: "header-title", "Corpus Dashboard" }
            }

            nav {
                class: "header-nav",
                button { class: "nav-item", onclick: move |_| on_dashboard.call(()), "Dashboard" }
                button { class: "nav-item", onclick: move |_| on_create.call(()), "Create" }
                button { class: "nav-item", onclick: move |_| on_translate.call(()), "Translate" }
                button { class: "nav-item", onclick: move |_| on_upload.call(()), "Upload" }
            }

            if session.read().is_authenticated() {
                div {
                    class: "header-user",
                    span { class: "user-avatar", "{profile.initial()}" }
                    span { class: "user-name", "{profile.display_name()}" }
                    LogoutButton {
                        class: "logout-button",
                        Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}
