//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] restores the persisted token once at startup and shares
//! it as a `Signal<Session>`. Views read it through [`use_session`] and build
//! an authenticated client with [`use_api`].

use api::CorpusClient;
use dioxus::prelude::*;
use store::{AuthSession, CorpusConfig};

/// Token persistence for the current platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformTokenStore = store::LocalStorageTokenStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformTokenStore = store::MemoryTokenStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTokenStore = store::FileTokenStore;

pub type Session = AuthSession<PlatformTokenStore>;

/// Create the platform-appropriate token store.
///
/// - **Web** (WASM + `web` feature): `localStorage` under `session.storage_key`
/// - **Desktop** (native): `<data_dir>/corpus-dashboard/<storage_key>`
pub fn make_token_store(config: &CorpusConfig) -> PlatformTokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageTokenStore::new(config.session.storage_key.clone())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        let _ = config;
        store::MemoryTokenStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("corpus-dashboard")
            .join(&config.session.storage_key);
        store::FileTokenStore::new(path)
    }
}

/// Get the session. Writing to it is reserved for login and logout.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

pub fn use_config() -> CorpusConfig {
    use_context::<CorpusConfig>()
}

/// A client for the configured API, carrying the current bearer token.
pub fn use_api() -> CorpusClient {
    let config = use_config();
    let session = use_session();
    let token = session.read().token().map(str::to_string);
    CorpusClient::new(&config.api).with_token(token)
}

/// Provider component for the configuration and the session.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(config: CorpusConfig, children: Element) -> Element {
    let session = use_signal({
        let config = config.clone();
        move || Session::restore(make_token_store(&config))
    });
    use_context_provider(|| config);
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button that ends the session. Guarded routes redirect to login once the
/// token is gone.
#[component]
pub fn LogoutButton(
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| {
        if let Err(e) = session.write().clear() {
            tracing::error!("Failed to clear stored token: {}", e);
        }
        tracing::info!("signed out");
    };

    rsx! {
        button {
            class: "{class}",
            title: "Logout",
            onclick: onclick,
            {children}
        }
    }
}
