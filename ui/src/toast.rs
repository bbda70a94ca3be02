//! Transient notifications: one toast at a time, auto-dismissed after a
//! fixed delay. Showing a new toast replaces the current one.

use dioxus::prelude::*;

const TOAST_MILLIS: u64 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
            Self::Info => "toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub message: String,
}

pub fn use_toast() -> Signal<Option<Toast>> {
    use_context::<Signal<Option<Toast>>>()
}

/// Provider component for the toast slot. Mount once, near the root.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(|| Option::<Toast>::None);
    use_context_provider(|| toasts);

    rsx! {
        {children}
    }
}

/// Show a toast and arm its dismiss timer.
pub fn show_toast(mut toasts: Signal<Option<Toast>>, level: ToastLevel, title: &str, message: &str) {
    let toast = Toast {
        level,
        title: title.to_string(),
        message: message.to_string(),
    };
    toasts.set(Some(toast.clone()));

    spawn(async move {
        sleep_millis(TOAST_MILLIS).await;
        // Leave a newer toast alone; its own timer will clear it.
        let still_current = { toasts.peek().as_ref() == Some(&toast) };
        if still_current {
            toasts.set(None);
        }
    });
}

async fn sleep_millis(millis: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(millis)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(millis)).await;
}

/// Renders the current toast, if any.
#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toast();

    let Some(toast) = toasts() else {
        return rsx! {};
    };
    let class = toast.level.class();

    rsx! {
        div {
            class: "toast {class}",
            div { class: "toast-title", "{toast.title}" }
            div { class: "toast-message", "{toast.message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_classes_are_distinct() {
        assert_eq!(ToastLevel::Success.class(), "toast-success");
        assert_eq!(ToastLevel::Error.class(), "toast-error");
        assert_eq!(ToastLevel::Info.class(), "toast-info");
    }
}
