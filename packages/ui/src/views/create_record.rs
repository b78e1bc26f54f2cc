//! Record and category creation, one tab each.

use api::create::{self, CATEGORY_FAILED, RECORD_FAILED};
use dioxus::prelude::*;
use store::{
    CategoryForm, RecordForm, ACCEPTED_FILE_TYPES, MEDIA_TYPES, RECORD_CATEGORIES,
    RECORD_LANGUAGES, RELEASE_RIGHTS,
};

use crate::components::{Button, ButtonVariant, Input, Select, Textarea};
use crate::file_input::read_picked_file;
use crate::response_box::{ResponseBox, ResponseTone, Spinner};
use crate::session::use_api;

#[derive(Clone, Copy, Debug, PartialEq)]
enum CreateTab {
    Record,
    Category,
}

impl CreateTab {
    fn noun(&self) -> &'static str {
        match self {
            CreateTab::Record => "Record",
            CreateTab::Category => "Category",
        }
    }
}

fn choices(options: &[&str]) -> Vec<String> {
    options.iter().map(|o| o.to_string()).collect()
}

#[component]
pub fn CreateRecordView(on_cancel: EventHandler<()>) -> Element {
    let client = use_api();
    let mut tab = use_signal(|| CreateTab::Record);
    let mut record = use_signal(RecordForm::default);
    let mut category = use_signal(CategoryForm::default);
    // Bumped on reset; a new key remounts the file input with no selection.
    let mut file_input_key = use_signal(|| 0u32);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut created = use_signal(|| Option::<String>::None);

    let handle_record = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                error.set(None);
                created.set(None);
                loading.set(true);
                let result = create::create_record(&client, &record()).await;
                loading.set(false);
                match result {
                    Ok(reply) => {
                        created.set(Some(create::pretty(&reply)));
                        record.set(RecordForm::default());
                        file_input_key += 1;
                    }
                    Err(e) => error.set(Some(e.user_message(RECORD_FAILED, RECORD_FAILED))),
                }
            });
        }
    };

    let handle_category = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            created.set(None);
            loading.set(true);
            let result = create::create_category(&client, &category()).await;
            loading.set(false);
            match result {
                Ok(reply) => {
                    created.set(Some(create::pretty(&reply)));
                    category.set(CategoryForm::default());
                }
                Err(e) => error.set(Some(e.user_message(CATEGORY_FAILED, CATEGORY_FAILED))),
            }
        });
    };

    let mut switch_tab = move |next: CreateTab| {
        tab.set(next);
        error.set(None);
        created.set(None);
    };

    let tab_class = move |t: CreateTab| if tab() == t { "tab active" } else { "tab" };
    let noun = tab().noun();

    rsx! {
        div {
            class: "create-record-container",
            div {
                class: "create-record-header",
                h1 { "Create New {noun}" }
            }

            div {
                class: "dashboard-tabs",
                button {
                    class: tab_class(CreateTab::Record),
                    onclick: move |_| switch_tab(CreateTab::Record),
                    "Record"
                }
                button {
                    class: tab_class(CreateTab::Category),
                    onclick: move |_| switch_tab(CreateTab::Category),
                    "Category"
                }
            }

            if tab() == CreateTab::Record {
                form {
                    class: "create-record-form",
                    onsubmit: handle_record,

                    div {
                        class: "form-field",
                        label { "Title:" }
                        Input {
                            r#type: "text",
                            placeholder: "Enter title",
                            value: record.read().title.clone(),
                            oninput: move |evt: FormEvent| record.write().title = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Description:" }
                        Textarea {
                            placeholder: "Enter description",
                            value: record.read().description.clone(),
                            oninput: move |evt: FormEvent| record.write().description = evt.value(),
                        }
                    }
                    Select {
                        label: "Media Type:",
                        value: record.read().media_type.clone(),
                        options: choices(MEDIA_TYPES),
                        disabled: loading(),
                        onchange: move |v: String| record.write().media_type = v,
                    }
                    Select {
                        label: "Language:",
                        value: record.read().language.clone(),
                        options: choices(RECORD_LANGUAGES),
                        disabled: loading(),
                        onchange: move |v: String| record.write().language = v,
                    }
                    Select {
                        label: "Release Rights:",
                        value: record.read().release_rights.clone(),
                        options: choices(RELEASE_RIGHTS),
                        disabled: loading(),
                        onchange: move |v: String| record.write().release_rights = v,
                    }
                    Select {
                        label: "Category:",
                        value: record.read().category.clone(),
                        options: choices(RECORD_CATEGORIES),
                        disabled: loading(),
                        onchange: move |v: String| record.write().category = v,
                    }
                    div {
                        class: "form-field",
                        label { "File (optional):" }
                        for generation in std::iter::once(file_input_key()) {
                            input {
                                key: "{generation}",
                                class: "input",
                                r#type: "file",
                                accept: ACCEPTED_FILE_TYPES,
                                onchange: move |evt: FormEvent| async move {
                                    record.write().file = read_picked_file(evt).await;
                                },
                            }
                        }
                    }

                    div {
                        class: "form-buttons",
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { Spinner {} } else { "Create Record" }
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            r#type: "button",
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                    }
                }
            } else {
                form {
                    class: "create-record-form",
                    onsubmit: handle_category,

                    div {
                        class: "form-field",
                        label { "Category Name:" }
                        Input {
                            r#type: "text",
                            placeholder: "Enter category name",
                            value: category.read().name.clone(),
                            oninput: move |evt: FormEvent| category.write().name = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Description:" }
                        Textarea {
                            placeholder: "Enter category description",
                            value: category.read().description.clone(),
                            oninput: move |evt: FormEvent| category.write().description = evt.value(),
                        }
                    }

                    div {
                        class: "form-buttons",
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { Spinner {} } else { "Create Category" }
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            r#type: "button",
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                    }
                }
            }

            if let Some(message) = error() {
                ResponseBox { text: message, tone: ResponseTone::Error }
            }
            if let Some(reply) = created() {
                div {
                    class: "success-message",
                    h3 { "{noun} Created Successfully!" }
                    ResponseBox { text: reply, tone: ResponseTone::Success }
                }
            }
        }
    }
}
