//! Application chrome: navbar, auth modals, toast slot, routed content.

use dioxus::prelude::*;

use ui::{clear_session, show_toast, use_session, use_toast, Navbar, ToastHost, ToastLevel};

use crate::views::{LoginModal, RegisterModal};
use crate::Route;

#[component]
pub fn Shell() -> Element {
    let mut session = use_session();
    let toasts = use_toast();
    let mut show_login = use_signal(|| false);
    let mut show_register = use_signal(|| false);

    let state = session();
    let username = state.username().unwrap_or_default().to_string();
    let logged_in = state.is_logged_in();

    let handle_logout = move |_| async move {
        let Some(username) = session().username().map(str::to_string) else {
            return;
        };
        let result = api::Client::new().logout(&username).await;
        // Local state is dropped no matter what the server said.
        clear_session(&mut session);
        if result.is_ok() {
            show_toast(toasts, ToastLevel::Success, "Success", "Logged out successfully");
        } else {
            show_toast(toasts, ToastLevel::Info, "Signed out", "Logged out locally");
        }
    };

    rsx! {
        Navbar {
            div { class: "navbar-brand", "Railway Ticket System" }
            nav {
                class: "navbar-links",
                Link { class: "nav-link", to: Route::Search {}, "Search" }
                Link { class: "nav-link", to: Route::Orders {}, "Orders" }
                Link { class: "nav-link", to: Route::Profile {}, "Profile" }
                if logged_in {
                    Link { class: "nav-link", to: Route::Admin {}, "Admin" }
                }
            }
            div {
                class: "navbar-auth",
                if logged_in {
                    span { class: "navbar-user", "{username}" }
                    button {
                        class: "btn btn-secondary",
                        onclick: handle_logout,
                        "Logout"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_login.set(true),
                        "Login"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| show_register.set(true),
                        "Register"
                    }
                }
            }
        }

        main {
            class: "content",
            Outlet::<Route> {}
        }

        if show_login() {
            LoginModal { on_close: move |_| show_login.set(false) }
        }
        if show_register() {
            RegisterModal { on_close: move |_| show_register.set(false) }
        }

        ToastHost {}
    }
}
