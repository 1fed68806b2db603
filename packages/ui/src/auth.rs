//! Authentication context and hooks for the UI.

use api::User;
use dioxus::prelude::*;

/// Session state for the application.
///
/// `loading` is true until the initial session probe resolves, so route
/// guards can hold off redirecting while a cookie session is re-validated.
/// Admin status comes from the server-returned [`User::is_admin`] field, not
/// from inspecting the username.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_admin)
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.username.as_str())
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages session state.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Re-validate any existing cookie session on mount, so a page reload
    // keeps the user signed in instead of silently dropping the session.
    let _ = use_resource(move || async move {
        match api::fetch_session().await {
            Ok(Some(user)) => auth_state.set(AuthState::signed_in(user)),
            Ok(None) => auth_state.set(AuthState::signed_out()),
            Err(err) => {
                tracing::error!("session probe failed: {err}");
                auth_state.set(AuthState::signed_out());
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button that clears the session state and returns to the login page.
///
/// The backend exposes no logout endpoint; the HttpOnly session cookie is
/// left to expire server-side while the client forgets the session.
#[component]
pub fn LogoutButton(
    #[props(default = "Se déconnecter".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| {
        auth_state.set(AuthState::signed_out());
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str, is_admin: bool) -> User {
        User {
            id: 1,
            username: username.to_string(),
            is_admin,
            disabled: false,
        }
    }

    #[test]
    fn default_state_is_loading_and_unauthenticated() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
        assert!(!state.is_admin());
        assert_eq!(state.username(), None);
    }

    #[test]
    fn admin_flag_comes_from_the_server_record() {
        // The username string carries no privileges on its own.
        let impostor = AuthState::signed_in(user("admin", false));
        assert!(!impostor.is_admin());

        let real = AuthState::signed_in(user("alice", true));
        assert!(real.is_admin());
        assert_eq!(real.username(), Some("alice"));
    }

    #[test]
    fn signing_out_clears_the_user() {
        let state = AuthState::signed_in(user("bob", false));
        assert!(state.is_authenticated());

        let state = AuthState::signed_out();
        assert!(!state.loading);
        assert!(!state.is_authenticated());
        assert_eq!(state.username(), None);
    }
}
