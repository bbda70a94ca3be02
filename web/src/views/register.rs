//! Registration modal. `cur_username` stays empty when bootstrapping the
//! first account; otherwise it names the operator performing the creation.

use api::RegisterForm;
use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant, Input, Label};
use ui::{show_toast, use_toast, ModalOverlay, ToastLevel};

use crate::views::failure_toast;

#[component]
pub fn RegisterModal(on_close: EventHandler<()>) -> Element {
    let toasts = use_toast();
    let mut cur_username = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut mail_addr = use_signal(String::new);
    let mut privilege = use_signal(|| "1".to_string());
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let form = RegisterForm {
                cur_username: cur_username(),
                username: username(),
                password: password(),
                name: name(),
                mail_addr: mail_addr(),
                privilege: privilege().parse().unwrap_or(1),
            };

            loading.set(true);
            let result = api::Client::new().register(&form).await;
            loading.set(false);

            match result {
                Ok(()) => {
                    on_close.call(());
                    show_toast(
                        toasts,
                        ToastLevel::Success,
                        "Success",
                        "Account created successfully. Please log in.",
                    );
                }
                Err(err) => {
                    failure_toast(
                        toasts,
                        &err,
                        "Registration Failed",
                        "Username already exists or insufficient privileges",
                    );
                }
            }
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            form {
                class: "modal-form",
                onsubmit: handle_register,
                h2 { "Register" }
                div {
                    class: "form-row",
                    Label { html_for: "reg-cur-username", "Operator (blank for first account)" }
                    Input {
                        id: "reg-cur-username",
                        value: cur_username(),
                        oninput: move |evt: FormEvent| cur_username.set(evt.value()),
                    }
                }
                div {
                    class: "form-row",
                    Label { html_for: "reg-username", "Username" }
                    Input {
                        id: "reg-username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }
                div {
                    class: "form-row",
                    Label { html_for: "reg-password", "Password" }
                    Input {
                        id: "reg-password",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                div {
                    class: "form-row",
                    Label { html_for: "reg-name", "Name" }
                    Input {
                        id: "reg-name",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }
                div {
                    class: "form-row",
                    Label { html_for: "reg-email", "Email" }
                    Input {
                        id: "reg-email",
                        r#type: "email",
                        value: mail_addr(),
                        oninput: move |evt: FormEvent| mail_addr.set(evt.value()),
                    }
                }
                div {
                    class: "form-row",
                    Label { html_for: "reg-privilege", "Privilege" }
                    Input {
                        id: "reg-privilege",
                        r#type: "number",
                        value: privilege(),
                        oninput: move |evt: FormEvent| privilege.set(evt.value()),
                    }
                }
                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Register" }
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
