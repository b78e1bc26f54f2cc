//! Translation and language detection.

use store::{Detection, SupportedLanguage, Translation, TranslationDraft};

use crate::client::CorpusApi;
use crate::error::FlowError;

pub const TRANSLATION_FAILED: &str = "Translation failed";
pub const DETECTION_FAILED: &str = "Language detection failed";
pub const NETWORK_ERROR: &str = "Network error occurred";

/// Load the language catalog. Failures are logged and yield an empty list.
pub async fn load_languages<A: CorpusApi>(api: &A) -> Vec<SupportedLanguage> {
    match api.supported_languages().await {
        Ok(languages) => languages,
        Err(e) => {
            tracing::error!("failed to fetch supported languages: {e}");
            Vec::new()
        }
    }
}

pub async fn translate<A: CorpusApi>(
    api: &A,
    draft: &TranslationDraft,
) -> Result<Translation, FlowError> {
    let request = draft.request()?;
    Ok(api.translate(&request).await?)
}

pub async fn detect<A: CorpusApi>(api: &A, draft: &TranslationDraft) -> Result<Detection, FlowError> {
    let text = draft.detect_text()?;
    Ok(api.detect_language(text).await?)
}
