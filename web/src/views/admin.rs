//! Admin panel: train management and destructive system operations.
//!
//! Only reachable through the tab shown to logged-in users; real
//! authorization is the server's job.

use api::TrainSpec;
use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant, Input, Label};
use ui::{confirm, show_toast, use_session, use_toast, ToastLevel};

use crate::views::failure_toast;

#[component]
pub fn Admin() -> Element {
    let session = use_session();
    let toasts = use_toast();

    let mut train_id = use_signal(String::new);
    let mut station_num = use_signal(String::new);
    let mut seat_num = use_signal(String::new);
    let mut stations = use_signal(String::new);
    let mut prices = use_signal(String::new);
    let mut start_time = use_signal(String::new);
    let mut travel_times = use_signal(String::new);
    let mut stopover_times = use_signal(String::new);
    let mut sale_date = use_signal(String::new);
    let mut train_type = use_signal(|| "G".to_string());

    let mut manage_id = use_signal(String::new);

    let add_train = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let spec = TrainSpec {
                train_id: train_id(),
                station_num: station_num().parse().unwrap_or(0),
                seat_num: seat_num().parse().unwrap_or(0),
                stations: stations(),
                prices: prices(),
                start_time: start_time(),
                travel_times: travel_times(),
                stopover_times: stopover_times(),
                sale_date: sale_date(),
                train_type: train_type(),
            };
            match api::Client::new().add_train(&spec).await {
                Ok(()) => {
                    show_toast(toasts, ToastLevel::Success, "Success", "Train added successfully")
                }
                Err(err) => failure_toast(toasts, &err, "Failed", "Unable to add train"),
            }
        });
    };

    let release_train = move |_| async move {
        match api::Client::new().release_train(&manage_id()).await {
            Ok(()) => {
                show_toast(toasts, ToastLevel::Success, "Success", "Train released successfully")
            }
            Err(err) => failure_toast(toasts, &err, "Failed", "Unable to release train"),
        }
    };

    let delete_train = move |_| async move {
        if !confirm("Are you sure you want to delete this train?") {
            return;
        }
        match api::Client::new().delete_train(&manage_id()).await {
            Ok(()) => {
                show_toast(toasts, ToastLevel::Success, "Success", "Train deleted successfully")
            }
            Err(err) => failure_toast(toasts, &err, "Failed", "Unable to delete train"),
        }
    };

    let clean_system = move |_| async move {
        if !confirm("Are you sure you want to clean the system? This will remove all data.") {
            return;
        }
        match api::Client::new().clean_system().await {
            Ok(()) => {
                show_toast(toasts, ToastLevel::Success, "Success", "System cleaned successfully")
            }
            Err(err) => failure_toast(toasts, &err, "Failed", "Unable to clean system"),
        }
    };

    let exit_system = move |_| async move {
        if !confirm("Are you sure you want to exit the system?") {
            return;
        }
        // The server may go down mid-reply; either way the request was made.
        let _ = api::Client::new().exit_system().await;
        show_toast(toasts, ToastLevel::Info, "Success", "System exit requested");
    };

    if !session().is_logged_in() {
        return rsx! {
            div {
                class: "empty-state",
                p { "Please login with admin privileges." }
            }
        };
    }

    rsx! {
        div {
            class: "card",
            h3 { "Add Train" }
            form {
                onsubmit: add_train,
                div {
                    class: "form-grid",
                    div {
                        Label { html_for: "train-id", "Train ID" }
                        Input {
                            id: "train-id",
                            value: train_id(),
                            oninput: move |evt: FormEvent| train_id.set(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "station-num", "Station Number" }
                        Input {
                            id: "station-num",
                            r#type: "number",
                            value: station_num(),
                            oninput: move |evt: FormEvent| station_num.set(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "seat-num", "Seat Number" }
                        Input {
                            id: "seat-num",
                            r#type: "number",
                            value: seat_num(),
                            oninput: move |evt: FormEvent| seat_num.set(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "train-type", "Type" }
                        Input {
                            id: "train-type",
                            value: train_type(),
                            oninput: move |evt: FormEvent| train_type.set(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "stations", "Stations (pipe-separated)" }
                        Input {
                            id: "stations",
                            placeholder: "StationA|StationB|StationC",
                            value: stations(),
                            oninput: move |evt: FormEvent| stations.set(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "prices", "Prices (pipe-separated)" }
                        Input {
                            id: "prices",
                            placeholder: "100|200",
                            value: prices(),
                            oninput: move |evt: FormEvent| prices.set(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "start-time", "Start Time" }
                        Input {
                            id: "start-time",
                            r#type: "time",
                            value: start_time(),
                            oninput: move |evt: FormEvent| start_time.set(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "sale-date", "Sale Date" }
                        Input {
                            id: "sale-date",
                            placeholder: "06-01|08-17",
                            value: sale_date(),
                            oninput: move |evt: FormEvent| sale_date.set(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "travel-times", "Travel Times (minutes)" }
                        Input {
                            id: "travel-times",
                            placeholder: "60|90",
                            value: travel_times(),
                            oninput: move |evt: FormEvent| travel_times.set(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "stopover-times", "Stopover Times (minutes)" }
                        Input {
                            id: "stopover-times",
                            placeholder: "5",
                            value: stopover_times(),
                            oninput: move |evt: FormEvent| stopover_times.set(evt.value()),
                        }
                    }
                }
                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        "Add Train"
                    }
                }
            }
        }

        div {
            class: "card",
            h3 { "Train Management" }
            div {
                class: "form-actions",
                Input {
                    id: "manage-train-id",
                    placeholder: "Train ID",
                    value: manage_id(),
                    oninput: move |evt: FormEvent| manage_id.set(evt.value()),
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: release_train,
                    "Release Train"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: delete_train,
                    "Delete Train"
                }
            }
        }

        div {
            class: "card",
            h3 { class: "danger-heading", "System Management" }
            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Warning,
                    onclick: clean_system,
                    "Clean System"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: exit_system,
                    "Exit System"
                }
            }
        }
    }
}
