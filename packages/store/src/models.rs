//! # Data models mirrored from the corpus API
//!
//! Read-only copies of what the server returns. None of these are mutated
//! locally except by removal from a list (see [`crate::Dashboard`]).
//!
//! | Struct | Source endpoint |
//! |--------|-----------------|
//! | [`UserProfile`] | `GET /auth/me` |
//! | [`Category`] | `GET /categories` |
//! | [`Record`] | `GET /corpus` (wrapped in [`CorpusPage`]) |
//! | [`SupportedLanguage`] | `GET /translation/supported-languages` (wrapped in [`LanguageCatalog`]) |
//!
//! Fields the server may omit are `Option` with `#[serde(default)]` so a sparse
//! response still deserialises. Display names (`Category::name`,
//! `Record::title`) read as empty when missing or null.

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Profile of the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub id: Option<String>,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub place: Option<String>,
    pub member_since: Option<String>,
    pub last_login: Option<String>,
}

impl UserProfile {
    /// Username, falling back to `"User"`.
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or("User")
    }

    /// Upper-cased first letter of the username, `'U'` when there is none.
    pub fn initial(&self) -> char {
        self.username
            .as_deref()
            .and_then(|name| name.chars().next())
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }
}

/// A user-defined record category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A contributed corpus record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Body of `GET /corpus`; a missing `items` field means no records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusPage {
    #[serde(default)]
    pub items: Vec<Record>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupportedLanguage {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub native_name: String,
}

impl SupportedLanguage {
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.native_name)
    }
}

/// Body of `GET /translation/supported-languages`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageCatalog {
    #[serde(default)]
    pub languages: Vec<SupportedLanguage>,
}

/// Human label for a language code: `"Name (Native)"` when the code is in
/// `languages`, otherwise the upper-cased code.
pub fn language_label(languages: &[SupportedLanguage], code: &str) -> String {
    languages
        .iter()
        .find(|lang| lang.code == code)
        .map(SupportedLanguage::label)
        .unwrap_or_else(|| code.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_profile_deserialises() {
        let user: UserProfile = toml::from_str(r#"username = "ravi""#).unwrap();
        assert_eq!(user.display_name(), "ravi");
        assert_eq!(user.initial(), 'R');
        assert!(user.phone.is_none());
    }

    #[test]
    fn test_untitled_record_and_unnamed_category_deserialise() {
        let record: Record = toml::from_str(r#"id = "r-1""#).unwrap();
        assert_eq!(record.title, "");
        assert!(record.language.is_none());

        let category: Category = toml::from_str(r#"id = "c-1""#).unwrap();
        assert_eq!(category.name, "");
    }

    #[test]
    fn test_profile_fallbacks() {
        let user = UserProfile::default();
        assert_eq!(user.display_name(), "User");
        assert_eq!(user.initial(), 'U');
    }

    #[test]
    fn test_language_label() {
        let languages = vec![SupportedLanguage {
            code: "te".to_string(),
            name: "Telugu".to_string(),
            native_name: "తెలుగు".to_string(),
        }];
        assert_eq!(language_label(&languages, "te"), "Telugu (తెలుగు)");
        assert_eq!(language_label(&languages, "hi"), "HI");
    }
}
