//! Low-level HTTP plumbing shared by the operation functions in the crate root.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{Account, CreateAccountRequest, CreateUserRequest, Credentials, User};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(StatusCode),
}

impl ApiError {
    /// True when the server rejected the session (not signed in or disabled).
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Status(code)
                if *code == StatusCode::UNAUTHORIZED || *code == StatusCode::FORBIDDEN
        )
    }
}

/// Thin wrapper around a [`reqwest::Client`] pinned to the backend base path.
///
/// The free functions in the crate root build one per call; tests point it at
/// a different base with [`ApiClient::with_base`].
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base(default_base())
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
        }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let response = with_credentials(self.http.post(self.url("/login")))
            .json(credentials)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }

    /// `Ok(None)` on 401/403 so callers can treat "not signed in" as a normal
    /// state rather than an error.
    pub async fn fetch_session(&self) -> Result<Option<User>, ApiError> {
        let response = with_credentials(self.http.get(self.url("/me")))
            .send()
            .await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(Some(response.json().await?))
    }

    pub async fn fetch_accounts(&self) -> Result<Vec<Account>, ApiError> {
        self.get_json("/accounts").await
    }

    pub async fn create_account(
        &self,
        request: &CreateAccountRequest,
    ) -> Result<Account, ApiError> {
        self.post_json("/accounts", request).await
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/users").await
    }

    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User, ApiError> {
        self.post_json("/users", request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = with_credentials(self.http.get(self.url(path)))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = with_credentials(self.http.post(self.url(path)))
            .json(body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Send the session cookie with cross-origin fetches on wasm. Native builds
/// (tests) go through unchanged.
fn with_credentials(request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    #[cfg(target_arch = "wasm32")]
    let request = request.fetch_credentials_include();
    request
}

fn default_base() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default();
        format!("{origin}/api")
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // The backend's development address; tests override via `with_base`.
        "http://127.0.0.1:8000/api".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = ApiClient::with_base("http://example.test/api");
        assert_eq!(client.url("/accounts"), "http://example.test/api/accounts");
        assert_eq!(client.url("/me"), "http://example.test/api/me");
    }

    #[test]
    fn unauthorized_statuses_are_flagged() {
        assert!(ApiError::Status(StatusCode::UNAUTHORIZED).is_unauthorized());
        assert!(ApiError::Status(StatusCode::FORBIDDEN).is_unauthorized());
        assert!(!ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR).is_unauthorized());
    }

    #[test]
    fn status_error_displays_code() {
        let err = ApiError::Status(StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "unexpected status: 502 Bad Gateway");
    }
}
