//! # API gateway — one async method per server operation
//!
//! [`ApiClient`] wraps a [`Transport`] and gives every server operation a
//! typed method. All of them follow the same contract:
//!
//! 1. Authenticated operations take the [`SessionStore`] and read the bearer
//!    token from it at call time. No token → [`ApiError::MissingToken`]
//!    before anything is sent.
//! 2. The request goes out exactly once: no retries, no timeouts, no
//!    idempotency keys.
//! 3. A non-success status becomes [`ApiError::Server`] with the server's
//!    `message`, or the operation's generic fallback text.
//! 4. A success body is validated into the operation's record type; a
//!    mismatch is [`ApiError::Malformed`].
//!
//! Nothing is cached and nothing is written back into the session apart from
//! what [`login`](ApiClient::login)'s caller chooses to store. Views patch
//! their own state on success.
//!
//! Operations are grouped by area in submodules: `auth`, `posts`,
//! `friends`, `admin`.

mod admin;
mod auth;
mod friends;
mod posts;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::session::SessionStore;
use crate::transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};

/// Typed gateway over a [`Transport`].
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
}

/// The gateway as used by the running client.
pub type HttpClient = ApiClient<ReqwestTransport>;

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Attach the session's bearer token to `request`.
    fn authorize(
        &self,
        session: &SessionStore,
        request: ApiRequest,
    ) -> Result<ApiRequest, ApiError> {
        Ok(request.bearer(session.bearer()?))
    }

    /// Send `request` and turn a non-success status into an error.
    async fn call(&self, request: ApiRequest, fallback: &str) -> Result<ApiResponse, ApiError> {
        let method = request.method;
        let path = request.path();
        tracing::debug!(?method, %path, "api request");

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e @ ApiError::InvalidUrl(_)) => {
                tracing::error!(?method, %path, "server url misconfigured: {e}");
                return Err(e);
            }
            Err(e) => {
                tracing::warn!(?method, %path, "api request failed: {e}");
                return Err(e);
            }
        };

        if response.is_success() {
            Ok(response)
        } else {
            let err = ApiError::from_response(&response, fallback);
            tracing::warn!(?method, %path, status = response.status, "api error: {err}");
            Err(err)
        }
    }

    /// Send `request` and validate the body as `R`.
    async fn fetch<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
        fallback: &str,
    ) -> Result<R, ApiError> {
        let response = self.call(request, fallback).await?;
        response.decode().inspect_err(|e| {
            tracing::warn!("malformed response: {e}");
        })
    }

    /// Send `request` and validate the body as a list, bare or under `key`.
    async fn fetch_list<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
        key: &str,
        fallback: &str,
    ) -> Result<Vec<R>, ApiError> {
        let value: serde_json::Value = self.fetch(request, fallback).await?;
        crate::models::listing(value, key).map_err(|e| {
            tracing::warn!("malformed {key} listing: {e}");
            ApiError::from(e)
        })
    }
}
