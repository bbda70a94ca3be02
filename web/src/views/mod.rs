use dioxus::prelude::*;

use api::ApiError;
use ui::{show_toast, Toast, ToastLevel};

mod shell;
pub use shell::Shell;

mod search;
pub use search::Search;

mod orders;
pub use orders::Orders;

mod profile;
pub use profile::Profile;

mod admin;
pub use admin::Admin;

mod login;
pub use login::LoginModal;

mod register;
pub use register::RegisterModal;

/// Surface a failed action: rejections get the action's own message, every
/// transport-tier failure collapses to a generic network toast.
pub(crate) fn failure_toast(
    toasts: Signal<Option<Toast>>,
    err: &ApiError,
    title: &str,
    rejected_message: &str,
) {
    if err.is_network() {
        show_toast(toasts, ToastLevel::Error, "Error", "Network error occurred");
    } else {
        show_toast(toasts, ToastLevel::Error, title, rejected_message);
    }
}
