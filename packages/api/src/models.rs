//! Request and response shapes exchanged with the backend.

use serde::{Deserialize, Serialize};

/// Login request body. Ephemeral; only lives for the duration of the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Whether an account belongs to one person or is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccountType {
    #[default]
    #[serde(rename = "PERSONAL")]
    Personal,
    #[serde(rename = "JOINT")]
    Joint,
}

impl AccountType {
    /// Wire value, also used for `<select>` option values.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Personal => "PERSONAL",
            AccountType::Joint => "JOINT",
        }
    }

    /// User-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Personal => "Personnel",
            AccountType::Joint => "Joint",
        }
    }

    /// Parse a `<select>` value, falling back to [`AccountType::Personal`].
    pub fn from_value(value: &str) -> Self {
        match value {
            "JOINT" => AccountType::Joint,
            _ => AccountType::Personal,
        }
    }
}

/// A bank account as returned by the backend. The client holds a read-only
/// copy per page load, replaced wholesale after each fetch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub bank: Option<String>,
    pub account_number: Option<String>,
    pub initial_balance: f64,
    pub owner_id: i64,
    #[serde(rename = "type")]
    pub kind: AccountType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateAccountRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    pub initial_balance: f64,
    #[serde(rename = "type")]
    pub kind: AccountType,
}

/// A user as returned by the backend. Only visible to admin sessions, except
/// through the session probe which returns the caller's own record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub is_admin: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn account_deserializes_from_backend_shape() {
        let body = json!({
            "id": 3,
            "name": "Courant",
            "bank": "Boursorama",
            "account_number": null,
            "initial_balance": 1250.5,
            "owner_id": 2,
            "type": "JOINT"
        });
        let account: Account = serde_json::from_value(body).unwrap();
        assert_eq!(account.id, 3);
        assert_eq!(account.bank.as_deref(), Some("Boursorama"));
        assert_eq!(account.account_number, None);
        assert_eq!(account.kind, AccountType::Joint);
    }

    #[test]
    fn create_account_request_matches_wire_body() {
        let request = CreateAccountRequest {
            name: "Rent".to_string(),
            bank: Some(String::new()),
            account_number: Some(String::new()),
            initial_balance: 1200.0,
            kind: AccountType::Personal,
        };
        let body = serde_json::to_value(&request).unwrap();
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
    fn create_account_request_omits_absent_optionals() {
        let request = CreateAccountRequest {
            name: "Épargne".to_string(),
            bank: None,
            account_number: None,
            initial_balance: 0.0,
            kind: AccountType::Personal,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({ "name": "Épargne", "initial_balance": 0.0, "type": "PERSONAL" })
        );
    }

    #[test]
    fn user_deserializes_from_backend_shape() {
        let body = json!({ "id": 1, "username": "admin", "is_admin": true, "disabled": false });
        let user: User = serde_json::from_value(body).unwrap();
        assert!(user.is_admin);
        assert!(!user.disabled);
    }

    #[test]
    fn account_type_select_round_trip() {
        assert_eq!(AccountType::from_value("JOINT"), AccountType::Joint);
        assert_eq!(AccountType::from_value("PERSONAL"), AccountType::Personal);
        // Unknown values fall back to the form default.
        assert_eq!(AccountType::from_value("garbage"), AccountType::Personal);
        assert_eq!(AccountType::Joint.as_str(), "JOINT");
    }
}
