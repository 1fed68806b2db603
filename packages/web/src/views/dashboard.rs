use dioxus::prelude::*;
use ui::{use_auth, LogoutButton};

use crate::Route;

/// Landing page: links to the sub-pages, with the user-management link shown
/// to admins only. Hiding the link is cosmetic; the AdminUsers page re-checks
/// the role itself.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let state = auth();

    let greeting = match state.username() {
        Some(name) => format!("Bienvenue dans votre espace personnel, {name}."),
        None => "Bienvenue dans votre espace personnel.".to_string(),
    };

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { "Tableau de bord" }
                LogoutButton { class: "secondary" }
            }

            p { "{greeting}" }

            nav { class: "dashboard-links",
                Link { to: Route::Accounts {}, "Gérer mes comptes" }
                if state.is_admin() {
                    Link { to: Route::AdminUsers {}, "Gestion des utilisateurs" }
                }
            }
        }
    }
}
