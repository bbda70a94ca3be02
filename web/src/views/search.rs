//! Ticket and transfer search, plus the buy/queue actions on each result.

use api::{PurchaseOutcome, Ticket};
use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant, Input, Label};
use ui::{show_toast, use_session, use_toast, ToastLevel};

use crate::views::failure_toast;

#[component]
pub fn Search() -> Element {
    let session = use_session();
    let toasts = use_toast();
    let mut from = use_signal(String::new);
    let mut to = use_signal(String::new);
    let mut date = use_signal(ui::today_iso);
    let mut sort = use_signal(|| "time".to_string());
    let mut tickets = use_signal(Vec::<Ticket>::new);
    let mut transfers = use_signal(Vec::<Ticket>::new);

    let validate = move || {
        if api::search_is_complete(&from(), &to(), &date()) {
            true
        } else {
            show_toast(
                toasts,
                ToastLevel::Error,
                "Validation Error",
                "Please fill all search fields",
            );
            false
        }
    };

    let search_tickets = move |_| async move {
        if !validate() {
            return;
        }
        match api::Client::new()
            .search_tickets(&from(), &to(), &date(), &sort())
            .await
        {
            Ok(found) => {
                let message = format!("Found {} tickets", found.len());
                tickets.set(found);
                show_toast(toasts, ToastLevel::Success, "Success", &message);
            }
            Err(err) => {
                tickets.set(Vec::new());
                failure_toast(toasts, &err, "Search Failed", "No tickets found for this route");
            }
        }
    };

    let search_transfers = move |_| async move {
        if !validate() {
            return;
        }
        match api::Client::new()
            .search_transfers(&from(), &to(), &date(), &sort())
            .await
        {
            Ok(found) => {
                let message = format!("Found {} transfer options", found.len());
                transfers.set(found);
                show_toast(toasts, ToastLevel::Success, "Success", &message);
            }
            Err(err) => {
                transfers.set(Vec::new());
                failure_toast(
                    toasts,
                    &err,
                    "Search Failed",
                    "No transfer options found for this route",
                );
            }
        }
    };

    let buy = move |train_id: String, queue: bool| async move {
        let Some(username) = session().username().map(str::to_string) else {
            show_toast(toasts, ToastLevel::Info, "Login required", "Please login to buy tickets");
            return;
        };
        match api::Client::new()
            .buy(&username, &train_id, &date(), 1, &from(), &to(), queue)
            .await
        {
            Ok(PurchaseOutcome::Queued) => {
                show_toast(toasts, ToastLevel::Success, "Success", "Ticket added to queue");
            }
            Ok(PurchaseOutcome::Cost(cost)) => {
                let message = format!("Tickets purchased. Total: ${cost}");
                show_toast(toasts, ToastLevel::Success, "Success", &message);
            }
            Err(err) => {
                failure_toast(toasts, &err, "Purchase Failed", "Unable to purchase ticket");
            }
        }
    };

    let logged_in = session().is_logged_in();

    rsx! {
        div {
            class: "card",
            h3 { "Search Tickets" }
            div {
                class: "form-grid",
                div {
                    Label { html_for: "from-station", "From" }
                    Input {
                        id: "from-station",
                        placeholder: "Departure station",
                        value: from(),
                        oninput: move |evt: FormEvent| from.set(evt.value()),
                    }
                }
                div {
                    Label { html_for: "to-station", "To" }
                    Input {
                        id: "to-station",
                        placeholder: "Arrival station",
                        value: to(),
                        oninput: move |evt: FormEvent| to.set(evt.value()),
                    }
                }
                div {
                    Label { html_for: "travel-date", "Date" }
                    Input {
                        id: "travel-date",
                        r#type: "date",
                        value: date(),
                        oninput: move |evt: FormEvent| date.set(evt.value()),
                    }
                }
                div {
                    Label { html_for: "sort-by", "Sort by" }
                    select {
                        id: "sort-by",
                        class: "form-input",
                        value: sort(),
                        onchange: move |evt| sort.set(evt.value()),
                        option { value: "time", "Time" }
                        option { value: "cost", "Cost" }
                    }
                }
            }
            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: search_tickets,
                    "Search Direct Tickets"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: search_transfers,
                    "Search Transfers"
                }
            }
        }

        if !tickets().is_empty() {
            div {
                class: "card",
                h3 { "Direct Tickets" }
                for ticket in tickets() {
                    div {
                        key: "{ticket.raw}",
                        class: "ticket-card",
                        div {
                            class: "ticket-header",
                            span { class: "train-id", "{ticket.train_id}" }
                            span { class: "train-type", "{ticket.train_type}" }
                        }
                        for line in &ticket.detail {
                            div { class: "ticket-detail", "{line}" }
                        }
                        if logged_in {
                            div {
                                class: "ticket-actions",
                                Button {
                                    variant: ButtonVariant::Primary,
                                    onclick: {
                                        let train_id = ticket.train_id.clone();
                                        move |_| buy(train_id.clone(), false)
                                    },
                                    "Buy Ticket"
                                }
                                Button {
                                    variant: ButtonVariant::Warning,
                                    onclick: {
                                        let train_id = ticket.train_id.clone();
                                        move |_| buy(train_id.clone(), true)
                                    },
                                    "Queue"
                                }
                            }
                        }
                    }
                }
            }
        }

        if !transfers().is_empty() {
            div {
                class: "card",
                h3 { "Transfer Options" }
                for transfer in transfers() {
                    div {
                        key: "{transfer.raw}",
                        class: "ticket-card",
                        div {
                            class: "ticket-header",
                            span { class: "train-id", "{transfer.train_id}" }
                            span { class: "train-type", "{transfer.train_type}" }
                        }
                        for line in &transfer.detail {
                            div { class: "ticket-detail", "{line}" }
                        }
                    }
                }
            }
        }

        if tickets().is_empty() && transfers().is_empty() {
            div {
                class: "empty-state",
                p { "No tickets found. Try searching with different criteria." }
            }
        }
    }
}
