//! Form primitives shared by every view. Each one spreads the attributes of
//! the element it wraps, so call sites can set `r#type`, `value`,
//! `placeholder`, `disabled` and friends directly.

use dioxus::prelude::*;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "button",
            "data-style": variant.class(),
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn Input(
    oninput: Option<EventHandler<FormEvent>>,
    onchange: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        input {
            class: "input",
            oninput: move |e| _ = oninput.map(|callback| callback(e)),
            onchange: move |e| _ = onchange.map(|callback| callback(e)),
            ..attributes,
        }
    }
}

#[component]
pub fn Textarea(
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = textarea)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        textarea {
            class: "input textarea",
            oninput: move |e| _ = oninput.map(|callback| callback(e)),
            ..attributes,
        }
    }
}

/// A labelled `<select>` over fixed string options.
#[component]
pub fn Select(
    label: String,
    value: String,
    options: Vec<String>,
    #[props(default)] disabled: bool,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { "{label}" }
            select {
                class: "input",
                disabled: disabled,
                value: "{value}",
                onchange: move |evt| onchange.call(evt.value()),
                for choice in options.iter() {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: *choice == value,
                        "{choice}"
                    }
                }
            }
        }
    }
}
