//! User-management page, reserved for admins.
//!
//! The `RequireAuth` layout only checks that a session exists, so this page
//! re-checks the role itself: a non-admin navigating
//! here directly is sent back to the dashboard.

use api::{ApiError, CreateUserRequest, User};
use dioxus::prelude::*;
use ui::{use_auth, AuthState};

use crate::Route;

/// The outer auth layout only checks for a session; the role gate is here.
fn is_admin_session(state: &AuthState) -> bool {
    state.is_admin()
}

/// What the page does after a creation attempt. The created record is never
/// merged into the local list; a successful submit re-fetches the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitAction {
    ReloadUsers,
    ShowError(&'static str),
}

fn after_submit(result: Result<User, ApiError>) -> SubmitAction {
    match result {
        Ok(_) => SubmitAction::ReloadUsers,
        Err(_) => SubmitAction::ShowError("Erreur lors de la création de l'utilisateur"),
    }
}

#[component]
pub fn AdminUsers() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_admin = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // Only fetched once the session reports an admin; re-runs if that changes.
    let mut users = use_resource(move || {
        let admin = is_admin_session(&auth());
        async move {
            if !admin {
                return Ok(Vec::new());
            }
            api::fetch_users().await
        }
    });

    if !is_admin_session(&auth()) {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            let request = CreateUserRequest {
                username: username(),
                password: password(),
                is_admin: is_admin(),
            };
            let result = api::create_user(&request).await;
            if let Err(err) = &result {
                tracing::error!("user creation failed: {err}");
            }
            match after_submit(result) {
                SubmitAction::ReloadUsers => {
                    username.set(String::new());
                    password.set(String::new());
                    is_admin.set(false);
                    // Same full-reload refresh policy as the accounts page.
                    users.restart();
                }
                SubmitAction::ShowError(message) => error.set(Some(message.to_string())),
            }
        });
    };

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Gestion des utilisateurs" }
                Link { to: Route::Dashboard {}, class: "secondary", "Retour" }
            }

            if let Some(err) = error() {
                p { class: "error", "{err}" }
            }

            form { class: "inline-form", onsubmit: handle_submit,
                input {
                    r#type: "text",
                    placeholder: "Nom d'utilisateur",
                    value: username(),
                    oninput: move |evt| username.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Mot de passe",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
                label { class: "checkbox-label",
                    input {
                        r#type: "checkbox",
                        checked: is_admin(),
                        onchange: move |evt| is_admin.set(evt.checked()),
                    }
                    "Admin"
                }
                button { class: "primary", r#type: "submit", "Créer" }
            }

            {match &*users.read_unchecked() {
                None => rsx! {
                    p { class: "muted", "Chargement…" }
                },
                Some(Err(_)) => rsx! {
                    p { class: "error", "Impossible de charger les utilisateurs" }
                },
                Some(Ok(list)) => rsx! {
                    table { class: "user-table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Nom" }
                                th { "Admin" }
                                th { "Actif" }
                            }
                        }
                        tbody {
                            for user in list.iter() {
                                tr { key: "{user.id}",
                                    td { "{user.id}" }
                                    td { "{user.username}" }
                                    td { if user.is_admin { "Oui" } else { "Non" } }
                                    td { if user.disabled { "Non" } else { "Oui" } }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::StatusCode;

    fn user(username: &str, is_admin: bool) -> User {
        User {
            id: 7,
            username: username.to_string(),
            is_admin,
            disabled: false,
        }
    }

    #[test]
    fn non_admin_sessions_are_sent_back_to_the_dashboard() {
        assert!(!is_admin_session(&AuthState::signed_in(user("bob", false))));
        // The username carries no privileges; only the server flag counts.
        assert!(!is_admin_session(&AuthState::signed_in(user("admin", false))));
        assert!(is_admin_session(&AuthState::signed_in(user("alice", true))));
    }

    #[test]
    fn successful_creation_reloads_the_full_list() {
        // The created record is discarded; the page re-fetches instead of
        // appending it locally.
        assert_eq!(
            after_submit(Ok(user("bob", false))),
            SubmitAction::ReloadUsers
        );
    }

    #[test]
    fn failed_creation_maps_to_the_static_message() {
        assert_eq!(
            after_submit(Err(ApiError::Status(StatusCode::BAD_REQUEST))),
            SubmitAction::ShowError("Erreur lors de la création de l'utilisateur")
        );
    }
}
