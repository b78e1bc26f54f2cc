use dioxus::prelude::*;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum ResponseTone {
    #[default]
    Info,
    Success,
    Error,
}

impl ResponseTone {
    fn class(&self) -> &'static str {
        match self {
            ResponseTone::Info => "response-box",
            ResponseTone::Success => "response-box success",
            ResponseTone::Error => "response-box error",
        }
    }
}

/// Server reply or status message, rendered preformatted.
#[component]
pub fn ResponseBox(text: String, #[props(default)] tone: ResponseTone) -> Element {
    if text.is_empty() {
        return rsx! {};
    }
    rsx! {
        pre {
            class: tone.class(),
            "{text}"
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        span { class: "spinner", role: "status", aria_label: "Loading" }
    }
}

/// A message for a [`ResponseBox`], with its tone.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub tone: ResponseTone,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            tone: ResponseTone::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            tone: ResponseTone::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            tone: ResponseTone::Error,
            text: text.into(),
        }
    }
}

/// Renders `notice` if there is one.
#[component]
pub fn NoticeBox(notice: Option<Notice>) -> Element {
    match notice {
        Some(Notice { tone, text }) => rsx! { ResponseBox { text, tone } },
        None => rsx! {},
    }
}
