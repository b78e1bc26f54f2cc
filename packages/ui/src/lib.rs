//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub mod clock;
mod file_input;

mod session;
pub use session::{
    make_token_store, use_api, use_config, use_session, LogoutButton, PlatformTokenStore,
    Session, SessionProvider,
};

mod header;
pub use header::Header;

mod response_box;
pub use response_box::{Notice, NoticeBox, ResponseBox, ResponseTone, Spinner};
