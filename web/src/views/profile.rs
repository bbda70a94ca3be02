//! Profile view rendering the cached session profile.

use dioxus::prelude::*;

use ui::use_session;

#[component]
pub fn Profile() -> Element {
    let session = use_session();

    let Some(profile) = session().profile else {
        return rsx! {
            div {
                class: "empty-state",
                p { "Please login to view your profile." }
            }
        };
    };

    rsx! {
        div {
            class: "card",
            h3 { "Profile Information" }
            div {
                class: "profile-grid",
                div {
                    class: "info-item",
                    div { class: "info-label", "Username" }
                    div { class: "info-value", "{profile.username}" }
                }
                div {
                    class: "info-item",
                    div { class: "info-label", "Name" }
                    div { class: "info-value", "{profile.name}" }
                }
                div {
                    class: "info-item",
                    div { class: "info-label", "Email" }
                    div { class: "info-value", "{profile.mail_addr}" }
                }
                div {
                    class: "info-item",
                    div { class: "info-label", "Privilege Level" }
                    div { class: "info-value", "{profile.privilege}" }
                }
            }
        }
    }
}
