use serde::Deserialize;
use serde_json::json;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{LoginResponse, Registration, UserInfo, VerifyResponse};
use crate::session::SessionStore;
use crate::transport::{ApiRequest, Transport};

#[derive(Deserialize)]
struct RegisterResponse {
    #[serde(default)]
    message: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    /// Ask the server whether the session's token is still valid and whom it
    /// belongs to.
    pub async fn verify(&self, session: &SessionStore) -> Result<UserInfo, ApiError> {
        let request = self.authorize(session, ApiRequest::post("/api/verify").json(json!({})))?;
        let body: VerifyResponse = self.fetch(request, "Session is no longer valid").await?;
        Ok(body.user)
    }

    /// Exchange credentials for a bearer token. The caller stores the result
    /// in its session.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = ApiRequest::post("/api/auth/login").json(json!({
            "username": username,
            "password": password,
        }));
        let body: LoginResponse = self
            .fetch(request, "Could not sign in. Please try again.")
            .await?;
        if body.token.trim().is_empty() {
            return Err(ApiError::Malformed("login returned an empty token".to_string()));
        }
        Ok(body)
    }

    /// Create an account. Returns the server's confirmation text.
    pub async fn register(&self, registration: &Registration) -> Result<String, ApiError> {
        let body = serde_json::to_value(registration)?;
        let request = ApiRequest::post("/api/auth/register").json(body);
        let response = self.call(request, "Registration failed").await?;
        let message = serde_json::from_slice::<RegisterResponse>(&response.body)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| "Registration successful".to_string());
        Ok(message)
    }
}
