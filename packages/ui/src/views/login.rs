//! Login page with password and OTP tabs.

use api::auth;
use dioxus::prelude::*;
use store::{FlowStage, OtpLoginForm, PasswordLoginForm};

use crate::components::{Button, ButtonVariant, Input};
use crate::response_box::{Notice, NoticeBox, Spinner};
use crate::session::{use_api, use_session, Session};

#[derive(Clone, Copy, Debug, PartialEq)]
enum LoginTab {
    Password,
    Otp,
}

fn adopt_token(session: &mut Signal<Session>, token: String) {
    if let Err(e) = session.write().set(token) {
        tracing::warn!("Signed in, but the token was not persisted: {}", e);
    }
}

#[component]
pub fn LoginView(on_logged_in: EventHandler<()>, on_signup: EventHandler<()>) -> Element {
    let mut session = use_session();
    let client = use_api();
    let mut tab = use_signal(|| LoginTab::Password);
    let mut password_form = use_signal(PasswordLoginForm::default);
    let mut otp_form = use_signal(OtpLoginForm::default);
    let mut password_notice = use_signal(|| Option::<Notice>::None);
    let mut otp_notice = use_signal(|| Option::<Notice>::None);
    let mut loading = use_signal(|| false);

    let handle_password_login = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                password_notice.set(None);
                loading.set(true);
                let result = auth::sign_in(&client, &password_form()).await;
                loading.set(false);
                match result {
                    Ok(token) => {
                        password_notice.set(Some(Notice::success(auth::LOGIN_SUCCEEDED)));
                        adopt_token(&mut session, token);
                        on_logged_in.call(());
                    }
                    Err(e) => password_notice.set(Some(Notice::error(
                        e.user_message(auth::LOGIN_FAILED, auth::CONNECTION_ERROR),
                    ))),
                }
            });
        }
    };

    let handle_otp = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                otp_notice.set(None);
                loading.set(true);
                let form = otp_form();
                if form.stage.is_awaiting_verification() {
                    let result = auth::verify_login_otp(&client, &form).await;
                    loading.set(false);
                    match result {
                        Ok(token) => {
                            otp_notice.set(Some(Notice::success(auth::OTP_VERIFIED)));
                            adopt_token(&mut session, token);
                            on_logged_in.call(());
                        }
                        Err(e) => otp_notice.set(Some(Notice::error(
                            e.user_message(auth::VERIFY_OTP_FAILED, auth::CONNECTION_ERROR),
                        ))),
                    }
                } else {
                    let result = auth::request_login_otp(&client, &form).await;
                    loading.set(false);
                    match result {
                        Ok(stage) => {
                            otp_form.write().stage = stage;
                            otp_notice.set(Some(Notice::success(auth::OTP_SENT)));
                        }
                        Err(e) => otp_notice.set(Some(Notice::error(
                            e.user_message(auth::SEND_OTP_FAILED, auth::CONNECTION_ERROR),
                        ))),
                    }
                }
            });
        }
    };

    let tab_class = move |t: LoginTab| if tab() == t { "tab active" } else { "tab" };
    let awaiting_otp = otp_form.read().stage == FlowStage::AwaitingVerification;

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h2 { class: "auth-title", "Welcome" }

                div {
                    class: "tabs",
                    button {
                        class: tab_class(LoginTab::Password),
                        disabled: loading(),
                        onclick: move |_| {
                            tab.set(LoginTab::Password);
                            password_notice.set(None);
                        },
                        "Password"
                    }
                    button {
                        class: tab_class(LoginTab::Otp),
                        disabled: loading(),
                        onclick: move |_| {
                            tab.set(LoginTab::Otp);
                            otp_notice.set(None);
                        },
                        "OTP"
                    }
                }

                if tab() == LoginTab::Password {
                    form {
                        class: "auth-form",
                        onsubmit: handle_password_login,
                        Input {
                            r#type: "text",
                            placeholder: "Phone number",
                            value: password_form.read().phone.clone(),
                            disabled: loading(),
                            oninput: move |evt: FormEvent| password_form.write().phone = evt.value(),
                        }
                        Input {
                            r#type: "password",
                            placeholder: "Password",
                            value: password_form.read().password.clone(),
                            disabled: loading(),
                            oninput: move |evt: FormEvent| password_form.write().password = evt.value(),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { Spinner {} } else { "Login" }
                        }
                        NoticeBox { notice: password_notice() }
                    }
                } else {
                    form {
                        class: "auth-form",
                        onsubmit: handle_otp,
                        Input {
                            r#type: "text",
                            placeholder: "Phone number",
                            value: otp_form.read().phone.clone(),
                            disabled: loading() || awaiting_otp,
                            oninput: move |evt: FormEvent| otp_form.write().phone = evt.value(),
                        }
                        if awaiting_otp {
                            Input {
                                r#type: "text",
                                placeholder: "Enter OTP",
                                value: otp_form.read().otp.clone(),
                                disabled: loading(),
                                oninput: move |evt: FormEvent| otp_form.write().otp = evt.value(),
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: loading(),
                            if loading() {
                                Spinner {}
                            } else if awaiting_otp {
                                "Verify OTP"
                            } else {
                                "Send OTP"
                            }
                        }
                        NoticeBox { notice: otp_notice() }
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    a {
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_signup.call(());
                        },
                        "Signup"
                    }
                }
            }
        }
    }
}
