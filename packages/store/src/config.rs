//! # Client configuration (`corpus.toml`)
//!
//! Settings the web client needs before it can talk to the corpus API. The web
//! binary parses a bundled `corpus.toml` and may override the API base URL at
//! build time.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://api.corpus.swecha.org"
//!
//! [session]
//! storage_key = "authToken"
//!
//! [translation]
//! history_limit = 10
//! source_language = "en"
//! target_language = "te"
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`CorpusConfig`] | Top-level config with a builder helper and TOML parsing. |
//! | [`ApiConfig`] | Remote API location. [`ApiConfig::api_root`] appends the `/api/v1` prefix. |
//! | [`SessionConfig`] | Local-storage key under which the bearer token is persisted. |
//! | [`TranslationConfig`] | History bound and the initial language pair of the translation view. |
//!
//! Every section has `#[serde(default)]`, so a missing or partial file is
//! equivalent to the defaults.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `corpus.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
}

/// Where the corpus REST API lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host, without the `/api/v1` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://api.corpus.swecha.org".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Versioned API root every endpoint path is appended to.
    pub fn api_root(&self) -> String {
        format!("{}/api/v1", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    "authToken".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Maximum number of entries kept in the recent-translations list.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

fn default_history_limit() -> usize {
    10
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "te".to_string()
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            source_language: default_source_language(),
            target_language: default_target_language(),
        }
    }
}

impl CorpusConfig {
    /// Builder method to point the client at another API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
