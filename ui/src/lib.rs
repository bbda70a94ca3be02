//! This crate contains all shared UI for the workspace.

pub mod components;

mod session;
pub use session::{
    clear_session, establish_session, session_store, use_session, SessionProvider, SessionState,
};

mod toast;
pub use toast::{show_toast, use_toast, Toast, ToastHost, ToastLevel, ToastProvider};

mod modal;
pub use modal::ModalOverlay;

mod navbar;
pub use navbar::Navbar;

/// Ask the user to confirm a destructive action. Browser-native dialog on
/// wasm; native targets (used only for tests and type checks) answer yes.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|window| window.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        true
    }
}

/// Today's date as `YYYY-MM-DD`, for seeding the search form.
pub fn today_iso() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        format!(
            "{:04}-{:02}-{:02}",
            date.get_full_year(),
            date.get_month() + 1,
            date.get_date()
        )
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}
