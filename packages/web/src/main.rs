use dioxus::prelude::*;

use store::CorpusConfig;
use views::{AuthenticatedLayout, CreateRecord, Login, Profile, Signup, Translation, Upload};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[layout(AuthenticatedLayout)]
        #[route("/profile")]
        Profile {},
        #[route("/create-record")]
        CreateRecord {},
        #[route("/upload")]
        Upload {},
        #[route("/translation")]
        Translation {},
}

fn main() {
    // Already initialised when launched through `dx serve`.
    let _ = dioxus::logger::init(tracing::Level::INFO);
    dioxus::launch(App);
}

/// The bundled `corpus.toml`, with the API host overridable at build time.
fn app_config() -> CorpusConfig {
    let config = CorpusConfig::from_toml(include_str!("../corpus.toml")).unwrap_or_else(|e| {
        tracing::warn!("invalid bundled corpus.toml, using defaults: {e}");
        CorpusConfig::default()
    });
    match option_env!("CORPUS_API_BASE_URL") {
        Some(base_url) if !base_url.is_empty() => config.with_base_url(base_url),
        _ => config,
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        ui::SessionProvider {
            config: app_config(),
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the dashboard or the login page.
#[component]
fn Root() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();

    if session.read().is_authenticated() {
        nav.replace(Route::Profile {});
    } else {
        nav.replace(Route::Login {});
    }

    rsx! {}
}
