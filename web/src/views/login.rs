//! Login modal: establish a session, then fetch and cache the profile.

use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant, Input, Label};
use ui::{establish_session, show_toast, use_session, use_toast, ModalOverlay, ToastLevel};

use crate::views::failure_toast;

#[component]
pub fn LoginModal(on_close: EventHandler<()>) -> Element {
    let mut session = use_session();
    let toasts = use_toast();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            loading.set(true);
            // The session only flips on if the login AND the follow-up
            // profile fetch both succeed; sign_in sequences the two.
            let result = api::Client::new().sign_in(&username(), &password()).await;
            loading.set(false);

            match result {
                Ok(profile) => {
                    establish_session(&mut session, profile);
                    on_close.call(());
                    show_toast(toasts, ToastLevel::Success, "Success", "Logged in successfully");
                }
                Err(err) => {
                    failure_toast(toasts, &err, "Login Failed", "Invalid username or password");
                }
            }
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            form {
                class: "modal-form",
                onsubmit: handle_login,
                h2 { "Login" }
                div {
                    class: "form-row",
                    Label { html_for: "login-username", "Username" }
                    Input {
                        id: "login-username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }
                div {
                    class: "form-row",
                    Label { html_for: "login-password", "Password" }
                    Input {
                        id: "login-password",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Login" }
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
