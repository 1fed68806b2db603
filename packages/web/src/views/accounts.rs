//! Accounts page: fetch-on-mount list plus the creation form.

use api::{AccountType, CreateAccountRequest};
use dioxus::prelude::*;

use crate::Route;

/// Creation-form state, kept as one value so a submit can reset it wholesale.
#[derive(Debug, Clone, PartialEq)]
struct AccountForm {
    name: String,
    bank: String,
    account_number: String,
    initial_balance: String,
    kind: AccountType,
}

impl Default for AccountForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            bank: String::new(),
            account_number: String::new(),
            initial_balance: "0".to_string(),
            kind: AccountType::Personal,
        }
    }
}

impl AccountForm {
    fn to_request(&self) -> CreateAccountRequest {
        CreateAccountRequest {
            name: self.name.clone(),
            bank: Some(self.bank.clone()),
            account_number: Some(self.account_number.clone()),
            initial_balance: parse_balance(&self.initial_balance),
            kind: self.kind,
        }
    }
}

/// Unparsable input silently becomes zero, matching the form's default.
fn parse_balance(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

#[component]
pub fn Accounts() -> Element {
    let mut form = use_signal(AccountForm::default);
    let mut error = use_signal(|| Option::<String>::None);

    // Bound to the component's lifetime: a response arriving after unmount or
    // after a restart is dropped rather than applied.
    let mut accounts = use_resource(move || async move { api::fetch_accounts().await });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            let request = form().to_request();
            match api::create_account(&request).await {
                Ok(_) => {
                    form.set(AccountForm::default());
                    // Full-reload refresh: re-fetch instead of merging locally.
                    accounts.restart();
                }
                Err(err) => {
                    tracing::error!("account creation failed: {err}");
                    error.set(Some("Erreur lors de la création du compte".to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { "Mes comptes" }
                Link { to: Route::Dashboard {}, class: "secondary", "Retour" }
            }

            if let Some(err) = error() {
                p { class: "error", "{err}" }
            }

            form { class: "card", onsubmit: handle_submit,
                h2 { "Créer un compte" }

                div { class: "form-field",
                    label { r#for: "name", "Nom" }
                    input {
                        id: "name",
                        r#type: "text",
                        value: form().name,
                        oninput: move |evt| form.with_mut(|f| f.name = evt.value()),
                    }
                }

                div { class: "form-field",
                    label { r#for: "bank", "Banque" }
                    input {
                        id: "bank",
                        r#type: "text",
                        value: form().bank,
                        oninput: move |evt| form.with_mut(|f| f.bank = evt.value()),
                    }
                }

                div { class: "form-field",
                    label { r#for: "account_number", "Numéro de compte" }
                    input {
                        id: "account_number",
                        r#type: "text",
                        value: form().account_number,
                        oninput: move |evt| form.with_mut(|f| f.account_number = evt.value()),
                    }
                }

                div { class: "form-field",
                    label { r#for: "initial_balance", "Solde initial" }
                    input {
                        id: "initial_balance",
                        r#type: "number",
                        step: "0.01",
                        value: form().initial_balance,
                        oninput: move |evt| form.with_mut(|f| f.initial_balance = evt.value()),
                    }
                }

                div { class: "form-field",
                    label { r#for: "type", "Type" }
                    select {
                        id: "type",
                        value: form().kind.as_str(),
                        onchange: move |evt| {
                            form.with_mut(|f| f.kind = AccountType::from_value(&evt.value()))
                        },
                        option { value: "PERSONAL", "Personnel" }
                        option { value: "JOINT", "Joint" }
                    }
                }

                button { class: "primary", r#type: "submit", "Ajouter" }
            }

            h2 { "Liste des comptes" }
            {match &*accounts.read_unchecked() {
                None => rsx! {
                    p { class: "muted", "Chargement…" }
                },
                Some(Err(_)) => rsx! {
                    p { class: "error", "Impossible de charger les comptes" }
                },
                Some(Ok(list)) => rsx! {
                    ul { class: "account-list",
                        for account in list.iter() {
                            li { key: "{account.id}",
                                span { class: "account-name", "{account.name}" }
                                " — {account.kind.label()}"
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
    use serde_json::json;

    #[test]
    fn balance_parsing_defaults_to_zero() {
        assert_eq!(parse_balance("1200"), 1200.0);
        assert_eq!(parse_balance(" 12.50 "), 12.5);
        assert_eq!(parse_balance(""), 0.0);
        assert_eq!(parse_balance("abc"), 0.0);
    }

    #[test]
    fn submitted_form_serializes_to_the_expected_body() {
        let form = AccountForm {
            name: "Rent".to_string(),
            bank: String::new(),
            account_number: String::new(),
            initial_balance: "1200".to_string(),
            kind: AccountType::Personal,
        };
        let body = serde_json::to_value(form.to_request()).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Rent",
                "bank": "",
                "account_number": "",
                "initial_balance": 1200.0,
                "type": "PERSONAL"
            })
        );
    }

    #[test]
    fn form_resets_to_defaults() {
        let defaults = AccountForm::default();
        assert_eq!(defaults.name, "");
        assert_eq!(defaults.bank, "");
        assert_eq!(defaults.account_number, "");
        assert_eq!(defaults.initial_balance, "0");
        assert_eq!(defaults.kind, AccountType::Personal);
    }
}
