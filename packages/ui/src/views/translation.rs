//! Translation workbench: language pair, detect, translate, recent history.

use api::translation::{self, DETECTION_FAILED, NETWORK_ERROR, TRANSLATION_FAILED};
use dioxus::prelude::*;
use store::{
    confidence_percent, language_label, SupportedLanguage, TranslationDraft, TranslationHistory,
    TranslationHistoryItem,
};

use crate::clock::timestamp;
use crate::components::{Button, ButtonVariant};
use crate::icons::FaRightLeft;
use crate::response_box::{ResponseBox, ResponseTone, Spinner};
use crate::session::{use_api, use_config};
use crate::Icon;

#[component]
fn LanguageSelect(
    label: &'static str,
    value: String,
    languages: Vec<SupportedLanguage>,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "language-selector",
            label { "{label}" }
            select {
                class: "input",
                value: "{value}",
                onchange: move |evt| onchange.call(evt.value()),
                for language in languages.iter() {
                    option {
                        key: "{language.code}",
                        value: "{language.code}",
                        selected: language.code == value,
                        "{language.label()}"
                    }
                }
            }
        }
    }
}

#[component]
fn HistoryEntry(item: TranslationHistoryItem, source: String, target: String) -> Element {
    let percent = confidence_percent(item.confidence);
    rsx! {
        div {
            class: "history-item",
            div {
                class: "history-header",
                span { class: "history-languages", "{source} → {target}" }
                span { class: "history-timestamp", "{item.timestamp}" }
            }
            div {
                class: "history-content",
                div { class: "history-original", "{item.original_text}" }
                div { class: "history-translation", "{item.translated_text}" }
            }
            div { class: "history-confidence", "Confidence: {percent}" }
        }
    }
}

#[component]
pub fn TranslationView() -> Element {
    let client = use_api();
    let config = use_config();
    let mut draft = use_signal(|| TranslationDraft::from_config(&config.translation));
    let mut history = use_signal(|| TranslationHistory::with_limit(config.translation.history_limit));
    let mut translating = use_signal(|| false);
    let mut detecting = use_signal(|| false);

    let languages = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { translation::load_languages(&client).await }
        }
    });

    let handle_translate = {
        let client = client.clone();
        move |_: MouseEvent| {
            let client = client.clone();
            spawn(async move {
                draft.write().begin_request();
                translating.set(true);
                let result = translation::translate(&client, &draft()).await;
                translating.set(false);
                match result {
                    Ok(done) => {
                        draft.write().apply_translation(&done);
                        history.write().record(&done, timestamp());
                    }
                    Err(e) => {
                        draft.write().error = Some(e.user_message(TRANSLATION_FAILED, NETWORK_ERROR))
                    }
                }
            });
        }
    };

    let handle_detect = move |_: MouseEvent| {
        let client = client.clone();
        spawn(async move {
            draft.write().begin_request();
            detecting.set(true);
            let result = translation::detect(&client, &draft()).await;
            detecting.set(false);
            match result {
                Ok(detection) => draft.write().apply_detection(&detection),
                Err(e) => draft.write().error = Some(e.user_message(DETECTION_FAILED, NETWORK_ERROR)),
            }
        });
    };

    let catalog = languages().unwrap_or_default();
    let current = draft();
    let char_count = current.source_text.chars().count();
    let detected = current
        .detected_language
        .as_deref()
        .map(|code| language_label(&catalog, code));
    let confidence = current.confidence.map(confidence_percent);
    let recent: Vec<TranslationHistoryItem> = history.read().iter().cloned().collect();

    rsx! {
        div {
            class: "translation-page",
            div {
                class: "translation-header",
                h1 { "Language Translation" }
                p { "Translate text between different languages using our corpus translation service" }
            }

            div {
                class: "translation-container",
                div {
                    class: "translation-controls",
                    div {
                        class: "language-selectors",
                        LanguageSelect {
                            label: "From:",
                            value: current.source_language.clone(),
                            languages: catalog.clone(),
                            onchange: move |code: String| draft.write().source_language = code,
                        }
                        button {
                            class: "swap-button",
                            title: "Swap languages",
                            onclick: move |_| draft.write().swap(),
                            Icon { icon: FaRightLeft, width: 16, height: 16 }
                        }
                        LanguageSelect {
                            label: "To:",
                            value: current.target_language.clone(),
                            languages: catalog.clone(),
                            onchange: move |code: String| draft.write().target_language = code,
                        }
                    }

                    if let (Some(language), Some(percent)) = (detected, confidence.clone()) {
                        div {
                            class: "detection-result",
                            span { class: "detection-label", "Detected Language: " }
                            span { class: "detected-lang", "{language}" }
                            span { class: "confidence", " ({percent} confidence)" }
                        }
                    }
                }

                div {
                    class: "translation-panels",
                    div {
                        class: "input-panel",
                        div {
                            class: "panel-header",
                            h3 { "Source Text" }
                            div {
                                class: "panel-actions",
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    disabled: detecting(),
                                    onclick: handle_detect,
                                    if detecting() { Spinner {} " Detecting..." } else { "Detect Language" }
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    onclick: move |_| draft.write().clear(),
                                    "Clear All"
                                }
                            }
                        }
                        textarea {
                            class: "input source-textarea",
                            rows: "8",
                            placeholder: "Enter text to translate...",
                            value: "{current.source_text}",
                            oninput: move |evt| draft.write().source_text = evt.value(),
                        }
                        div { class: "character-count", "{char_count} characters" }
                    }

                    div {
                        class: "output-panel",
                        div {
                            class: "panel-header",
                            h3 { "Translation" }
                            if let Some(percent) = confidence {
                                div { class: "confidence-indicator", "Confidence: {percent}" }
                            }
                        }
                        textarea {
                            class: "input translation-textarea",
                            rows: "8",
                            readonly: true,
                            placeholder: "Translation will appear here...",
                            value: "{current.translated_text}",
                        }
                    }
                }

                div {
                    class: "action-buttons",
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: translating() || !current.can_translate(),
                        onclick: handle_translate,
                        if translating() { Spinner {} " Translating..." } else { "Translate" }
                    }
                }

                if let Some(message) = current.error.clone() {
                    ResponseBox { text: message, tone: ResponseTone::Error }
                }

                if !recent.is_empty() {
                    div {
                        class: "translation-history",
                        h3 { "Recent Translations" }
                        div {
                            class: "history-list",
                            for item in recent {
                                HistoryEntry {
                                    key: "{item.id}",
                                    source: language_label(&catalog, &item.source_language),
                                    target: language_label(&catalog, &item.target_language),
                                    item: item.clone(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
