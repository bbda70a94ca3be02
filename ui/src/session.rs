//! Session context and hooks for the UI.

use api::Profile;
use dioxus::prelude::*;
use store::SessionStore;

/// Session state for the application. The profile doubles as the logged-in
/// flag: `Some` means a user is signed in.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub profile: Option<Profile>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            profile: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.profile.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.username.as_str())
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// The persistence backend for the session snapshot.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn session_store() -> impl SessionStore {
    store::LocalStore::new()
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn session_store() -> impl SessionStore {
    store::MemoryStore::new()
}

/// Provider component that manages session state.
/// Wrap your app with this component to enable login/logout handling.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session = use_signal(SessionState::default);

    // Restore a persisted snapshot on mount
    use_effect(move || {
        let profile = store::load_snapshot::<Profile>(&session_store());
        session.set(SessionState {
            profile,
            loading: false,
        });
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Flip the session on and persist the profile snapshot.
pub fn establish_session(session: &mut Signal<SessionState>, profile: Profile) {
    tracing::info!(username = %profile.username, "session established");
    store::save_snapshot(&session_store(), &profile);
    session.set(SessionState {
        profile: Some(profile),
        loading: false,
    });
}

/// Clear the session state and the persisted snapshot. Callers run this
/// whether or not the server acknowledged the logout.
pub fn clear_session(session: &mut Signal<SessionState>) {
    tracing::debug!("session cleared");
    store::clear_snapshot(&session_store());
    session.set(SessionState {
        profile: None,
        loading: false,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            username: "alice".to_string(),
            name: "Alice".to_string(),
            mail_addr: "alice@example.com".to_string(),
            privilege: 10,
        }
    }

    #[test]
    fn default_state_is_logged_out() {
        let state = SessionState::default();
        assert!(!state.is_logged_in());
        assert!(state.username().is_none());
        assert!(state.loading);
    }

    #[test]
    fn profile_presence_drives_login_flag() {
        let state = SessionState {
            profile: Some(profile()),
            loading: false,
        };
        assert!(state.is_logged_in());
        assert_eq!(state.username(), Some("alice"));
    }
}
