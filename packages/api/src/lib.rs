//! # API crate — typed HTTP client for the account-management backend
//!
//! Every frontend call to the backend goes through this crate. It exposes one
//! async function per backend operation, each performing exactly one HTTP
//! request under the `/api` base path and returning the parsed body or an
//! [`ApiError`]. The session rides an HttpOnly cookie set by the server at
//! login; on wasm every request opts into credentialed fetch so the cookie
//! travels automatically. There are no retries and no timeout overrides.
//!
//! | Function | Method & path | Notes |
//! |----------|---------------|-------|
//! | [`login`] | POST `/api/login` | body ignored beyond success/failure |
//! | [`fetch_session`] | GET `/api/me` | `Ok(None)` when not signed in |
//! | [`fetch_accounts`] | GET `/api/accounts` | |
//! | [`create_account`] | POST `/api/accounts` | |
//! | [`fetch_users`] | GET `/api/users` | server enforces admin |
//! | [`create_user`] | POST `/api/users` | server enforces admin |

mod client;
pub mod models;

pub use client::{ApiClient, ApiError};
pub use reqwest::StatusCode;
pub use models::{
    Account, AccountType, CreateAccountRequest, CreateUserRequest, Credentials, User,
};

/// Authenticate against the backend. On success the server sets the session
/// cookie; the response body is not used by this client.
pub async fn login(credentials: &Credentials) -> Result<(), ApiError> {
    ApiClient::new().login(credentials).await
}

/// Fetch the user behind the current session cookie, if any.
pub async fn fetch_session() -> Result<Option<User>, ApiError> {
    ApiClient::new().fetch_session().await
}

/// List the accounts visible to the current session.
pub async fn fetch_accounts() -> Result<Vec<Account>, ApiError> {
    ApiClient::new().fetch_accounts().await
}

/// Create an account owned by the current user.
pub async fn create_account(request: &CreateAccountRequest) -> Result<Account, ApiError> {
    ApiClient::new().create_account(request).await
}

/// List all users. The server rejects non-admin sessions.
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    ApiClient::new().fetch_users().await
}

/// Create a new user. The server rejects non-admin sessions.
pub async fn create_user(request: &CreateUserRequest) -> Result<User, ApiError> {
    ApiClient::new().create_user(request).await
}
