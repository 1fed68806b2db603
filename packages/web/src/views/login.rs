//! Login page view with the username/password form.

use api::Credentials;
use dioxus::prelude::*;
use ui::{use_auth, AuthState};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let nav = use_navigator();

    // Already signed in: straight to the dashboard.
    let state = auth();
    if !state.loading && state.is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let credentials = Credentials {
                username: username(),
                password: password(),
            };
            // The login response body is ignored; the session cookie is what
            // matters. The probe pulls the server-verified user (and role).
            let session = match api::login(&credentials).await {
                Ok(()) => api::fetch_session().await,
                Err(err) => Err(err),
            };

            match session {
                Ok(Some(user)) => {
                    auth.set(AuthState::signed_in(user));
                    nav.push(Route::Dashboard {});
                }
                Ok(None) => {
                    loading.set(false);
                    error.set(Some("Invalid credentials".to_string()));
                }
                Err(err) => {
                    tracing::error!("login failed: {err}");
                    loading.set(false);
                    error.set(Some("Invalid credentials".to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "login-screen",
            form { class: "card login-card", onsubmit: handle_submit,
                h2 { "Connexion" }

                if let Some(err) = error() {
                    p { class: "error", "{err}" }
                }

                div { class: "form-field",
                    label { r#for: "username", "Nom d'utilisateur" }
                    input {
                        id: "username",
                        r#type: "text",
                        value: username(),
                        oninput: move |evt| username.set(evt.value()),
                    }
                }

                div { class: "form-field",
                    label { r#for: "password", "Mot de passe" }
                    input {
                        id: "password",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Connexion…" } else { "Se connecter" }
                }
            }
        }
    }
}
