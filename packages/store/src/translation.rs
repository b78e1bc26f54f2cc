//! # Translation state
//!
//! [`TranslationDraft`] is the editable part of the translation view: the two
//! text panes, the language pair and the last result. [`TranslationHistory`]
//! keeps the most recent successful translations, newest first, bounded by
//! [`crate::config::TranslationConfig::history_limit`].

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::TranslationConfig;
use crate::forms::FormError;

/// Body of `POST /translation/translate`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

/// Response of `POST /translation/translate`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Translation {
    pub translated_text: String,
    pub original_text: String,
    pub source_language: String,
    pub target_language: String,
    #[serde(default)]
    pub confidence: f64,
}

/// Response of `POST /translation/detect-language`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Detection {
    pub detected_language: String,
    #[serde(default)]
    pub confidence: f64,
}

/// Render a `0.0..=1.0` confidence as a percentage with one decimal.
pub fn confidence_percent(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TranslationDraft {
    pub source_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub detected_language: Option<String>,
    pub confidence: Option<f64>,
    pub error: Option<String>,
}

impl TranslationDraft {
    pub fn from_config(config: &TranslationConfig) -> Self {
        Self {
            source_language: config.source_language.clone(),
            target_language: config.target_language.clone(),
            ..Default::default()
        }
    }

    /// Exchange the language pair. Texts are exchanged only when both panes
    /// hold text.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source_language, &mut self.target_language);
        if !self.source_text.is_empty() && !self.translated_text.is_empty() {
            std::mem::swap(&mut self.source_text, &mut self.translated_text);
        }
    }

    /// Empty both panes and forget the last result. The language pair stays.
    pub fn clear(&mut self) {
        self.source_text.clear();
        self.translated_text.clear();
        self.detected_language = None;
        self.confidence = None;
        self.error = None;
    }

    /// Drop the previous failure before a new translate or detect request.
    pub fn begin_request(&mut self) {
        self.error = None;
    }

    pub fn can_translate(&self) -> bool {
        self.source_language != self.target_language
    }

    pub fn request(&self) -> Result<TranslationRequest, FormError> {
        if self.source_text.trim().is_empty() {
            return Err(FormError::NothingToTranslate);
        }
        if !self.can_translate() {
            return Err(FormError::SameLanguages);
        }
        Ok(TranslationRequest {
            text: self.source_text.clone(),
            source_language: self.source_language.clone(),
            target_language: self.target_language.clone(),
        })
    }

    pub fn detect_text(&self) -> Result<&str, FormError> {
        if self.source_text.trim().is_empty() {
            return Err(FormError::NothingToDetect);
        }
        Ok(&self.source_text)
    }

    pub fn apply_translation(&mut self, translation: &Translation) {
        self.translated_text = translation.translated_text.clone();
        self.confidence = Some(translation.confidence);
        self.error = None;
    }

    pub fn apply_detection(&mut self, detection: &Detection) {
        self.source_language = detection.detected_language.clone();
        self.detected_language = Some(detection.detected_language.clone());
        self.confidence = Some(detection.confidence);
        self.error = None;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TranslationHistoryItem {
    pub id: u64,
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub confidence: f64,
    pub timestamp: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TranslationHistory {
    items: VecDeque<TranslationHistoryItem>,
    limit: usize,
    next_id: u64,
}

impl Default for TranslationHistory {
    fn default() -> Self {
        Self::with_limit(TranslationConfig::default().history_limit)
    }
}

impl TranslationHistory {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(limit),
            limit,
            next_id: 1,
        }
    }

    /// Prepend a translation, evicting the oldest entries past the limit.
    pub fn record(&mut self, translation: &Translation, timestamp: impl Into<String>) {
        let item = TranslationHistoryItem {
            id: self.next_id,
            original_text: translation.original_text.clone(),
            translated_text: translation.translated_text.clone(),
            source_language: translation.source_language.clone(),
            target_language: translation.target_language.clone(),
            confidence: translation.confidence,
            timestamp: timestamp.into(),
        };
        self.next_id += 1;
        self.items.push_front(item);
        self.items.truncate(self.limit);
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &TranslationHistoryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
