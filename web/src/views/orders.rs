//! Order list with per-order refund.

use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant};
use ui::{confirm, show_toast, use_session, use_toast, ToastLevel};

use crate::views::failure_toast;

#[component]
pub fn Orders() -> Element {
    let session = use_session();
    let toasts = use_toast();

    // Reading the session inside the closure keeps the resource subscribed to
    // it, so logging in or out while this route is mounted re-runs the fetch.
    let mut orders = use_resource(move || async move {
        let username = session().username().map(str::to_string);
        match username {
            Some(username) => api::Client::new().orders(&username).await.unwrap_or_default(),
            None => Vec::new(),
        }
    });

    // Refund index is 1-based from the top of the order list.
    let refund = move |index: usize| async move {
        let Some(username) = session().username().map(str::to_string) else {
            return;
        };
        if !confirm("Are you sure you want to refund this ticket?") {
            return;
        }
        match api::Client::new().refund(&username, index as u32 + 1).await {
            Ok(()) => {
                show_toast(toasts, ToastLevel::Success, "Success", "Ticket refunded successfully");
                orders.restart();
            }
            Err(err) => {
                failure_toast(toasts, &err, "Refund Failed", "Unable to refund ticket");
            }
        }
    };

    if !session().is_logged_in() {
        return rsx! {
            div {
                class: "empty-state",
                p { "Please login to view your orders." }
            }
        };
    }

    let body = match orders() {
        Some(list) if !list.is_empty() => rsx! {
            for (index, order) in list.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "order-card",
                    div {
                        class: "order-header",
                        span { class: "train-id", "{order.train_id}" }
                        span { class: "order-status status-{order.status}", "{order.status}" }
                    }
                    div {
                        class: "order-details",
                        div { "Route: {order.from_station_name} → {order.to_station_name}" }
                        div { "Departure: {order.departure}" }
                        div { "Arrival: {order.arrival}" }
                        div { "Price: ${order.price}" }
                        div { "Tickets: {order.num}" }
                    }
                    if order.refundable() {
                        div {
                            class: "ticket-actions",
                            Button {
                                variant: ButtonVariant::Danger,
                                onclick: move |_| refund(index),
                                "Refund"
                            }
                        }
                    }
                }
            }
        },
        Some(_) => rsx! {
            div { class: "empty-state", p { "No orders found." } }
        },
        None => rsx! {
            div { class: "empty-state", p { "Loading orders..." } }
        },
    };

    rsx! {
        div {
            class: "card",
            h3 { "My Orders" }
            {body}
        }
    }
}
