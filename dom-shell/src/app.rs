//! Browser wiring: event listeners, section switching, modal management and
//! the handlers behind every form in `static/index.html`.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

use api::{ApiError, Client, Profile, PurchaseOutcome, RegisterForm, TrainSpec};

use crate::render;

const MODAL_IDS: [&str; 4] = [
    "login-modal",
    "register-modal",
    "add-train-modal",
    "buy-ticket-modal",
];

thread_local! {
    static SESSION: RefCell<Option<Profile>> = const { RefCell::new(None) };
    // Handlers on injected result/order buttons live here; re-rendering a
    // section swaps in a fresh batch and drops the old closures with the
    // markup they were attached to, instead of leaking one per render.
    static SEARCH_HANDLERS: RefCell<Vec<Closure<dyn FnMut(Event)>>> =
        const { RefCell::new(Vec::new()) };
    static ORDER_HANDLERS: RefCell<Vec<Closure<dyn FnMut(Event)>>> =
        const { RefCell::new(Vec::new()) };
}

fn current_username() -> Option<String> {
    SESSION.with(|s| s.borrow().as_ref().map(|p| p.username.clone()))
}

fn set_session(profile: Option<Profile>) {
    let store = store::LocalStore::new();
    match &profile {
        Some(profile) => store::save_snapshot(&store, profile),
        None => store::clear_snapshot(&store),
    }
    SESSION.with(|s| *s.borrow_mut() = profile);
    update_auth_ui();
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    // A snapshot in localStorage survives reloads.
    let restored = store::load_snapshot::<Profile>(&store::LocalStore::new());
    SESSION.with(|s| *s.borrow_mut() = restored);

    init_navigation();
    init_modals();
    init_forms();
    set_default_date();
    update_auth_ui();
    show_section("search");
}

// -- DOM helpers ----------------------------------------------------------

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

fn attach(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Closure<dyn FnMut(Event)> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure
}

/// For listeners on elements that live as long as the page.
fn listen(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    attach(target, event, handler).forget();
}

fn on_click(id: &str, handler: impl FnMut(Event) + 'static) {
    if let Some(el) = by_id(id) {
        listen(&el, "click", handler);
    }
}

fn on_submit(id: &str, handler: impl FnMut(Event) + 'static) {
    if let Some(el) = by_id(id) {
        listen(&el, "submit", handler);
    }
}

fn field_value(id: &str) -> String {
    let Some(el) = by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return select.value();
    }
    String::new()
}

fn checkbox_checked(id: &str) -> bool {
    by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.checked())
        .unwrap_or(false)
}

fn set_html(id: &str, html: &str) {
    if let Some(el) = by_id(id) {
        el.set_inner_html(html);
    }
}

fn reset_form(id: &str) {
    if let Some(form) = by_id(id).and_then(|el| el.dyn_into::<HtmlFormElement>().ok()) {
        form.reset();
    }
}

fn set_display(id: &str, display: &str) {
    if let Some(el) = by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
        let _ = el.style().set_property("display", display);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

fn for_each_selected(selector: &str, mut f: impl FnMut(Element)) {
    let Some(doc) = document() else {
        return;
    };
    let Ok(nodes) = doc.query_selector_all(selector) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            f(el);
        }
    }
}

// -- notification ---------------------------------------------------------

fn notify(message: &str, kind: &str) {
    let Some(el) = by_id("notification") else {
        return;
    };
    el.set_text_content(Some(message));
    el.set_class_name(&format!("notification {kind} show"));
    let el = el.clone();
    spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(3_000)).await;
        let _ = el.class_list().remove_1("show");
    });
}

fn notify_failure(err: &ApiError, rejected_message: &str) {
    if err.is_network() {
        notify("Network error. Please try again.", "error");
    } else {
        notify(rejected_message, "error");
    }
}

// -- navigation & sections ------------------------------------------------

fn init_navigation() {
    for_each_selected(".nav-link", |link| {
        let section = link.get_attribute("data-section").unwrap_or_default();
        let link_el = link.clone();
        listen(&link, "click", move |evt| {
            evt.prevent_default();
            show_section(&section);
            for_each_selected(".nav-link", |other| {
                let _ = other.class_list().remove_1("active");
            });
            let _ = link_el.class_list().add_1("active");
        });
    });
}

fn show_section(name: &str) {
    for_each_selected(".section", |section| {
        let _ = section.class_list().remove_1("active");
    });
    if let Some(section) = by_id(&format!("{name}-section")) {
        let _ = section.class_list().add_1("active");
    }
    match name {
        "orders" => load_orders(),
        "profile" => load_profile(),
        "admin" => load_admin_panel(),
        _ => {}
    }
}

// -- modals ---------------------------------------------------------------

fn init_modals() {
    for id in MODAL_IDS {
        let Some(modal) = by_id(id) else {
            continue;
        };
        if let Ok(Some(close)) = modal.query_selector(".close") {
            listen(&close, "click", move |_| close_modal(id));
        }
        let modal_el = modal.clone();
        listen(&modal, "click", move |evt| {
            // Backdrop clicks close; clicks inside the card bubble here too,
            // so only an exact hit on the backdrop counts.
            if evt
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|t| t == modal_el)
            {
                close_modal(id);
            }
        });
    }

    on_click("login-btn", |_| open_modal("login-modal"));
    on_click("register-btn", |_| open_modal("register-modal"));
    on_click("add-train-btn", |_| open_modal("add-train-modal"));
    on_click("logout-btn", |_| logout());

    if let Some(doc) = document() {
        listen(&doc, "keydown", |evt| {
            if let Some(key_evt) = evt.dyn_ref::<web_sys::KeyboardEvent>() {
                if key_evt.key() == "Escape" {
                    for id in MODAL_IDS {
                        close_modal(id);
                    }
                }
            }
        });
    }
}

fn open_modal(id: &str) {
    set_display(id, "block");
}

fn close_modal(id: &str) {
    set_display(id, "none");
}

// -- forms ----------------------------------------------------------------

fn init_forms() {
    on_submit("login-form", |evt| {
        evt.prevent_default();
        handle_login();
    });
    on_submit("register-form", |evt| {
        evt.prevent_default();
        handle_register();
    });
    on_submit("add-train-form", |evt| {
        evt.prevent_default();
        handle_add_train();
    });
    on_submit("buy-ticket-form", |evt| {
        evt.prevent_default();
        handle_buy_ticket();
    });
    on_click("search-btn", |_| search_tickets());
    on_click("search-transfer-btn", |_| search_transfers());
    on_click("release-train-btn", |_| release_train());
    on_click("delete-train-btn", |_| delete_train());
    on_click("clean-system-btn", |_| clean_system());
    on_click("exit-system-btn", |_| exit_system());
}

fn set_default_date() {
    if let Some(input) = by_id("travel-date").and_then(|el| el.dyn_into::<HtmlInputElement>().ok()) {
        let date = js_sys::Date::new_0();
        input.set_value(&format!(
            "{:04}-{:02}-{:02}",
            date.get_full_year(),
            date.get_month() + 1,
            date.get_date()
        ));
    }
}

// -- auth -----------------------------------------------------------------

fn update_auth_ui() {
    let logged_in = current_username().is_some();
    set_display("auth-section", if logged_in { "none" } else { "flex" });
    set_display("logout-btn", if logged_in { "block" } else { "none" });
    if let (Some(el), Some(username)) = (by_id("logout-btn"), current_username()) {
        el.set_text_content(Some(&format!("Logout ({username})")));
    }
}

fn handle_login() {
    let username = field_value("login-username");
    let password = field_value("login-password");

    spawn_local(async move {
        match Client::new().sign_in(&username, &password).await {
            Ok(profile) => {
                set_session(Some(profile));
                close_modal("login-modal");
                reset_form("login-form");
                notify("Login successful!", "success");
            }
            Err(err) => {
                notify_failure(&err, "Login failed. Please check your credentials.");
            }
        }
    });
}

fn handle_register() {
    let form = RegisterForm {
        cur_username: field_value("reg-cur-username"),
        username: field_value("reg-username"),
        password: field_value("reg-password"),
        name: field_value("reg-name"),
        mail_addr: field_value("reg-email"),
        privilege: field_value("reg-privilege").parse().unwrap_or(1),
    };

    spawn_local(async move {
        match Client::new().register(&form).await {
            Ok(()) => {
                close_modal("register-modal");
                reset_form("register-form");
                notify("Registration successful! Please login.", "success");
            }
            Err(err) => {
                notify_failure(&err, "Registration failed. Please check your information.");
            }
        }
    });
}

fn logout() {
    let Some(username) = current_username() else {
        return;
    };
    spawn_local(async move {
        let result = Client::new().logout(&username).await;
        // Cached state goes away whether or not the server acknowledged.
        set_session(None);
        show_section("search");
        match result {
            Ok(()) => notify("Logged out successfully!", "success"),
            Err(_) => notify("Logged out locally.", "info"),
        }
    });
}

// -- search & purchase ----------------------------------------------------

fn search_tickets() {
    let from = field_value("from-station");
    let to = field_value("to-station");
    let date = field_value("travel-date");
    let sort = field_value("sort-by");

    if !api::search_is_complete(&from, &to, &date) {
        notify("Please fill in all search fields.", "error");
        return;
    }

    spawn_local(async move {
        match Client::new().search_tickets(&from, &to, &date, &sort).await {
            Ok(tickets) => display_search_results(&tickets),
            Err(err) => {
                display_search_results(&[]);
                notify_failure(&err, "No tickets found for the specified route.");
            }
        }
    });
}

fn search_transfers() {
    let from = field_value("from-station");
    let to = field_value("to-station");
    let date = field_value("travel-date");
    let sort = field_value("sort-by");

    if !api::search_is_complete(&from, &to, &date) {
        notify("Please fill in all search fields.", "error");
        return;
    }

    spawn_local(async move {
        match Client::new().search_transfers(&from, &to, &date, &sort).await {
            Ok(tickets) => display_search_results(&tickets),
            Err(err) => {
                display_search_results(&[]);
                notify_failure(&err, "No transfer routes found.");
            }
        }
    });
}

fn display_search_results(tickets: &[api::Ticket]) {
    set_display("search-results", "block");
    set_html(
        "results-container",
        &render::ticket_list(tickets, current_username().is_some()),
    );

    // Buy buttons are injected with the results; wire them up after the
    // fact, retiring the previous batch of handlers.
    SEARCH_HANDLERS.with_borrow_mut(Vec::clear);
    for_each_selected(".buy-btn", |button| {
        let train_id = button.get_attribute("data-train-id").unwrap_or_default();
        let handler = attach(&button, "click", move |_| open_buy_modal(&train_id));
        SEARCH_HANDLERS.with_borrow_mut(|live| live.push(handler));
    });
}

fn open_buy_modal(train_id: &str) {
    let Some(modal) = by_id("buy-ticket-modal") else {
        return;
    };
    let date = field_value("travel-date");
    let from = field_value("from-station");
    let to = field_value("to-station");

    set_html(
        "ticket-details",
        &format!(
            "<div class=\"form-group\"><strong>Train:</strong> {}<br><strong>Date:</strong> {}<br><strong>From:</strong> {}<br><strong>To:</strong> {}</div>",
            render::escape(train_id),
            render::escape(&date),
            render::escape(&from),
            render::escape(&to),
        ),
    );

    // The selection rides on the modal until the form is submitted.
    let _ = modal.set_attribute("data-train-id", train_id);
    let _ = modal.set_attribute("data-date", &date);
    let _ = modal.set_attribute("data-from", &from);
    let _ = modal.set_attribute("data-to", &to);

    open_modal("buy-ticket-modal");
}

fn handle_buy_ticket() {
    let Some(username) = current_username() else {
        notify("Please login to buy tickets.", "error");
        return;
    };
    let Some(modal) = by_id("buy-ticket-modal") else {
        return;
    };
    let train_id = modal.get_attribute("data-train-id").unwrap_or_default();
    let date = modal.get_attribute("data-date").unwrap_or_default();
    let from = modal.get_attribute("data-from").unwrap_or_default();
    let to = modal.get_attribute("data-to").unwrap_or_default();
    let num: u32 = field_value("ticket-num").parse().unwrap_or(1);
    let queue = checkbox_checked("queue-option");

    spawn_local(async move {
        match Client::new()
            .buy(&username, &train_id, &date, num, &from, &to, queue)
            .await
        {
            Ok(outcome) => {
                close_modal("buy-ticket-modal");
                reset_form("buy-ticket-form");
                match outcome {
                    PurchaseOutcome::Queued => {
                        notify("Ticket purchase successful! Added to queue.", "success")
                    }
                    PurchaseOutcome::Cost(cost) => notify(
                        &format!("Ticket purchase successful! Total cost: {cost}"),
                        "success",
                    ),
                }
            }
            Err(err) => {
                notify_failure(&err, "Ticket purchase failed. Please try again.");
            }
        }
    });
}

// -- orders ---------------------------------------------------------------

fn load_orders() {
    let Some(username) = current_username() else {
        set_html(
            "orders-container",
            "<p class=\"login-required\">Please login to view your orders.</p>",
        );
        return;
    };

    spawn_local(async move {
        match Client::new().orders(&username).await {
            Ok(orders) => {
                set_html("orders-container", &render::order_list(&orders));
                ORDER_HANDLERS.with_borrow_mut(Vec::clear);
                for_each_selected(".refund-btn", |button| {
                    let index: u32 = button
                        .get_attribute("data-index")
                        .and_then(|raw| raw.parse().ok())
                        .unwrap_or(1);
                    let handler = attach(&button, "click", move |_| refund_ticket(index));
                    ORDER_HANDLERS.with_borrow_mut(|live| live.push(handler));
                });
            }
            Err(_) => set_html("orders-container", "<p>Failed to load orders.</p>"),
        }
    });
}

fn refund_ticket(index: u32) {
    let Some(username) = current_username() else {
        return;
    };
    if !confirm("Are you sure you want to refund this ticket?") {
        return;
    }
    spawn_local(async move {
        match Client::new().refund(&username, index).await {
            Ok(()) => {
                notify("Ticket refunded successfully!", "success");
                load_orders();
            }
            Err(err) => notify_failure(&err, "Refund failed. Please try again."),
        }
    });
}

// -- profile --------------------------------------------------------------

fn load_profile() {
    let Some(username) = current_username() else {
        set_html(
            "profile-container",
            "<p class=\"login-required\">Please login to view your profile.</p>",
        );
        return;
    };

    spawn_local(async move {
        match Client::new().profile(&username).await {
            Ok(profile) => set_html("profile-container", &render::profile_card(&profile)),
            Err(_) => set_html("profile-container", "<p>Failed to load profile.</p>"),
        }
    });
}

// -- admin ----------------------------------------------------------------

fn load_admin_panel() {
    if current_username().is_none() {
        set_html(
            "admin-container",
            "<p class=\"login-required\">Please login with admin privileges.</p>",
        );
        set_display("admin-actions", "none");
        return;
    }
    set_html("admin-container", "");
    set_display("admin-actions", "grid");
}

fn handle_add_train() {
    let spec = TrainSpec {
        train_id: field_value("train-id"),
        station_num: field_value("station-num").parse().unwrap_or(0),
        seat_num: field_value("seat-num").parse().unwrap_or(0),
        stations: field_value("stations"),
        prices: field_value("prices"),
        start_time: field_value("start-time"),
        travel_times: field_value("travel-times"),
        stopover_times: field_value("stopover-times"),
        sale_date: field_value("sale-date"),
        train_type: field_value("train-type"),
    };

    spawn_local(async move {
        match Client::new().add_train(&spec).await {
            Ok(()) => {
                close_modal("add-train-modal");
                reset_form("add-train-form");
                notify("Train added successfully!", "success");
            }
            Err(err) => {
                notify_failure(&err, "Failed to add train. Please check the information.");
            }
        }
    });
}

fn release_train() {
    let train_id = field_value("manage-train-id");
    if train_id.is_empty() {
        notify("Please enter a train ID.", "error");
        return;
    }
    spawn_local(async move {
        match Client::new().release_train(&train_id).await {
            Ok(()) => notify("Train released successfully!", "success"),
            Err(err) => notify_failure(&err, "Unable to release train."),
        }
    });
}

fn delete_train() {
    let train_id = field_value("manage-train-id");
    if train_id.is_empty() {
        notify("Please enter a train ID.", "error");
        return;
    }
    if !confirm("Are you sure you want to delete this train?") {
        return;
    }
    spawn_local(async move {
        match Client::new().delete_train(&train_id).await {
            Ok(()) => notify("Train deleted successfully!", "success"),
            Err(err) => notify_failure(&err, "Unable to delete train."),
        }
    });
}

fn clean_system() {
    if !confirm("Are you sure you want to clean the system? This will remove all data.") {
        return;
    }
    spawn_local(async move {
        match Client::new().clean_system().await {
            Ok(()) => notify("System cleaned successfully!", "success"),
            Err(err) => notify_failure(&err, "Failed to clean system."),
        }
    });
}

fn exit_system() {
    if !confirm("Are you sure you want to exit the system?") {
        return;
    }
    spawn_local(async move {
        // The server may be gone before it can answer.
        let _ = Client::new().exit_system().await;
        notify("System shutdown initiated.", "info");
    });
}
