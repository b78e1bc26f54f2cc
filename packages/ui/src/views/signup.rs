//! Two-step signup: fill the fields and request a code, then verify it.

use std::time::Duration;

use api::{auth, FlowError};
use dioxus::prelude::*;
use store::SignupForm;

use crate::clock::pause;
use crate::components::{Button, ButtonVariant, Input};
use crate::response_box::{Notice, NoticeBox, Spinner};
use crate::session::use_api;

const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Validation messages read as-is; server failures get an `Error:` prefix.
fn signup_error(error: &FlowError, fallback: &str) -> String {
    match error {
        FlowError::Api(e) if e.is_network() => "Error connecting to server.".to_string(),
        FlowError::Api(_) => format!("Error: {}", error.user_message(fallback, fallback)),
        other => other.to_string(),
    }
}

#[component]
pub fn SignupView(on_signed_up: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let client = use_api();
    let mut form = use_signal(SignupForm::default);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            notice.set(None);
            loading.set(true);
            let snapshot = form();
            if snapshot.stage.is_awaiting_verification() {
                let result = auth::create_account(&client, &snapshot).await;
                loading.set(false);
                match result {
                    Ok(()) => {
                        notice.set(Some(Notice::success(auth::SIGNUP_SUCCEEDED)));
                        pause(REDIRECT_DELAY).await;
                        on_signed_up.call(());
                    }
                    Err(e) => {
                        notice.set(Some(Notice::error(signup_error(&e, auth::SIGNUP_FAILED))))
                    }
                }
            } else {
                let result = auth::send_signup_otp(&client, &snapshot).await;
                loading.set(false);
                match result {
                    Ok(stage) => {
                        form.write().stage = stage;
                        notice.set(Some(Notice::info(auth::SIGNUP_OTP_SENT)));
                    }
                    Err(e) => notice.set(Some(Notice::error(signup_error(
                        &e,
                        auth::SIGNUP_OTP_FAILED,
                    )))),
                }
            }
        });
    };

    let verifying = form.read().stage.is_awaiting_verification();

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h2 { class: "auth-title", "Sign Up" }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    Input {
                        r#type: "text",
                        placeholder: "Phone number (e.g., +919876543210)",
                        value: form.read().phone.clone(),
                        disabled: loading() || verifying,
                        oninput: move |evt: FormEvent| form.write().phone = evt.value(),
                    }

                    if verifying {
                        Input {
                            r#type: "text",
                            placeholder: "Enter OTP",
                            value: form.read().otp.clone(),
                            disabled: loading(),
                            oninput: move |evt: FormEvent| form.write().otp = evt.value(),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { Spinner {} } else { "Verify OTP and Create Account" }
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            r#type: "button",
                            disabled: loading(),
                            onclick: move |_| {
                                form.write().stage.back();
                                notice.set(None);
                            },
                            "Back to fields"
                        }
                    } else {
                        Input {
                            r#type: "text",
                            placeholder: "Full Name",
                            value: form.read().name.clone(),
                            disabled: loading(),
                            oninput: move |evt: FormEvent| form.write().name = evt.value(),
                        }
                        Input {
                            r#type: "email",
                            placeholder: "Email (Optional)",
                            value: form.read().email.clone(),
                            disabled: loading(),
                            oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        }
                        Input {
                            r#type: "password",
                            placeholder: "Password (min 8 characters)",
                            value: form.read().password.clone(),
                            disabled: loading(),
                            oninput: move |evt: FormEvent| form.write().password = evt.value(),
                        }
                        Input {
                            r#type: "password",
                            placeholder: "Confirm Password",
                            value: form.read().confirm_password.clone(),
                            disabled: loading(),
                            oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                        }
                        label {
                            class: "consent",
                            input {
                                r#type: "checkbox",
                                checked: form.read().consent,
                                disabled: loading(),
                                onchange: move |evt: FormEvent| form.write().consent = evt.checked(),
                            }
                            "I agree to the terms and conditions."
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { Spinner {} } else { "Send OTP for Signup" }
                        }
                    }
                }

                NoticeBox { notice: notice() }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    a {
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_login.call(());
                        },
                        "Login"
                    }
                }
            }
        }
    }
}
