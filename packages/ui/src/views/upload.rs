//! Standalone file upload into one of the server's categories.

use api::{dashboard, upload};
use dioxus::prelude::*;
use store::{LazyResource, UploadForm};

use crate::components::{Button, ButtonVariant};
use crate::file_input::read_picked_file;
use crate::icons::FaUpload;
use crate::response_box::{Notice, NoticeBox, Spinner};
use crate::session::use_api;
use crate::Icon;

#[component]
pub fn UploadView() -> Element {
    let client = use_api();
    let mut form = use_signal(UploadForm::default);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut loading = use_signal(|| false);

    let user = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { dashboard::load_user(&client).await.ok() }
        }
    });

    let categories = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match dashboard::load(&client, LazyResource::Categories).await {
                    api::LoadedResource::Categories(Ok(list)) => list,
                    _ => Vec::new(),
                }
            }
        }
    });

    let handle_upload = move |_: MouseEvent| {
        let client = client.clone();
        spawn(async move {
            notice.set(None);
            let profile = user().flatten().unwrap_or_default();
            loading.set(true);
            let result = upload::upload_file(&client, &form(), &profile).await;
            loading.set(false);
            notice.set(Some(match result {
                Ok(reply) => Notice::success(upload::success_message(&reply)),
                Err(e) => Notice::error(upload::failure_message(&e)),
            }));
        });
    };

    let options = categories().unwrap_or_default();

    rsx! {
        div {
            class: "upload-container",
            h2 {
                Icon { icon: FaUpload, width: 20, height: 20 }
                " Upload Records"
            }

            div {
                class: "form-field",
                label { "File:" }
                input {
                    class: "input",
                    r#type: "file",
                    onchange: move |evt: FormEvent| async move {
                        form.write().file = read_picked_file(evt).await;
                    },
                }
            }

            div {
                class: "form-field",
                label { "Category:" }
                select {
                    class: "input",
                    value: form.read().category_id.clone(),
                    onchange: move |evt| form.write().category_id = evt.value(),
                    option { value: "", "Select a category" }
                    for category in options.iter() {
                        option {
                            key: "{category.id}",
                            value: "{category.id}",
                            selected: form.read().category_id == category.id,
                            "{category.name}"
                        }
                    }
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                disabled: loading(),
                onclick: handle_upload,
                if loading() { Spinner {} " Uploading..." } else { "Upload" }
            }

            NoticeBox { notice: notice() }
        }
    }
}
