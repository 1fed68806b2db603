use dioxus::prelude::*;

use ui::{use_auth, AuthProvider, AuthState};
use views::{Accounts, AdminUsers, Dashboard, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[layout(RequireAuth)]
        #[route("/")]
        Dashboard {},
        #[route("/accounts")]
        Accounts {},
        #[route("/admin/users")]
        AdminUsers {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// What the auth guard does for a protected route in a given session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardDecision {
    /// Session probe still in flight; render a placeholder, don't redirect.
    Wait,
    RedirectLogin,
    Allow,
}

fn guard_decision(state: &AuthState) -> GuardDecision {
    if state.loading {
        GuardDecision::Wait
    } else if !state.is_authenticated() {
        GuardDecision::RedirectLogin
    } else {
        GuardDecision::Allow
    }
}

/// Layout guarding everything behind authentication. Only checks that a
/// session exists; role checks belong to the pages that need them.
#[component]
fn RequireAuth() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let state = auth();
    match guard_decision(&state) {
        // Hold off while the session probe is in flight, otherwise a reload
        // of a protected page would bounce to /login before the cookie is
        // checked.
        GuardDecision::Wait => rsx! {
            div { class: "page",
                p { class: "muted", "Chargement…" }
            }
        },
        GuardDecision::RedirectLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        GuardDecision::Allow => rsx! {
            Outlet::<Route> {}
        },
    }
}

/// Unknown paths land back on the dashboard.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("unknown route: /{}", segments.join("/"));
    nav.replace(Route::Dashboard {});
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::User;

    fn user(is_admin: bool) -> User {
        User {
            id: 7,
            username: "claire".to_string(),
            is_admin,
            disabled: false,
        }
    }

    #[test]
    fn probe_in_flight_holds_instead_of_redirecting() {
        assert_eq!(guard_decision(&AuthState::default()), GuardDecision::Wait);
    }

    #[test]
    fn unauthenticated_session_redirects_to_login_once_resolved() {
        assert_eq!(
            guard_decision(&AuthState::signed_out()),
            GuardDecision::RedirectLogin
        );
    }

    #[test]
    fn authenticated_session_reaches_protected_routes() {
        assert_eq!(
            guard_decision(&AuthState::signed_in(user(false))),
            GuardDecision::Allow
        );
        assert_eq!(
            guard_decision(&AuthState::signed_in(user(true))),
            GuardDecision::Allow
        );
    }
}
