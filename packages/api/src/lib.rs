//! # API crate: the corpus backend, seen from the dashboard
//!
//! Everything that touches the network lives here. The views never call
//! `reqwest` directly; they clone the relevant `store` state, hand it to a
//! driver from this crate and apply what comes back.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`CorpusApi`] trait and its `reqwest` implementation [`CorpusClient`] |
//! | [`error`] | [`ApiError`] (one failed call) and [`FlowError`] (validation or call failure) |
//! | [`auth`] | Password login, OTP login, two-step signup |
//! | [`dashboard`] | Profile load, lazy record/category load, category deletion |
//! | [`create`] | Record (multipart) and category (JSON) creation |
//! | [`upload`] | Single-chunk file upload |
//! | [`translation`] | Translate, detect language, language catalog |

pub mod auth;
pub mod client;
pub mod create;
pub mod dashboard;
pub mod error;
pub mod translation;
pub mod upload;
mod wire;

#[cfg(test)]
mod mock;

pub use client::{CorpusApi, CorpusClient};
pub use dashboard::{Deletion, LoadedResource};
pub use error::{detail_from_body, ApiError, FlowError};
pub use wire::ChunkedUpload;
