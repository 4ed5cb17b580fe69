//! Error type shared by every gateway call.

use serde::Deserialize;

use crate::transport::ApiResponse;

/// Failure of a gateway call.
///
/// Every operation returns `Result<T, ApiError>`; nothing is swallowed inside
/// the gateway. Views decide whether to show the message inline or redirect.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No bearer token in the session. Raised before any request is sent.
    #[error("You are not signed in")]
    MissingToken,

    /// The request was rejected locally before being sent.
    #[error("{0}")]
    Invalid(String),

    /// The configured server origin cannot be turned into a URL.
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Network failure, CORS rejection, or an unreadable response stream.
    #[error("Could not reach the server: {0}")]
    Transport(String),

    /// Non-success status. `message` is the server's own text when the body
    /// carried one, otherwise the operation's generic fallback.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// A success response whose body does not match the expected schema.
    #[error("Unexpected response from the server: {0}")]
    Malformed(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    /// Build a [`ApiError::Server`] from a non-success response, preferring
    /// the `message` (or `error`) field of a JSON body over `fallback`.
    pub(crate) fn from_response(response: &ApiResponse, fallback: &str) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.message.or(body.error))
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());

        ApiError::Server {
            status: response.status,
            message,
        }
    }

    /// HTTP status for server-reported errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure means the credential is missing or was refused.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::MissingToken) || matches!(self.status(), Some(401 | 403))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Malformed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_preferred() {
        let response = ApiResponse::new(409, r#"{"message":"User already exists"}"#);
        let err = ApiError::from_response(&response, "Registration failed");
        assert_eq!(
            err,
            ApiError::Server {
                status: 409,
                message: "User already exists".to_string()
            }
        );
        assert_eq!(err.to_string(), "User already exists");
    }

    #[test]
    fn test_fallback_when_body_has_no_message() {
        for body in ["", "<html>Bad gateway</html>", r#"{"message":""}"#, "{}"] {
            let response = ApiResponse::new(502, body);
            let err = ApiError::from_response(&response, "Failed to load posts");
            assert_eq!(err.to_string(), "Failed to load posts");
            assert_eq!(err.status(), Some(502));
        }
    }

    #[test]
    fn test_error_field_accepted() {
        let response = ApiResponse::new(400, r#"{"error":"Bad query"}"#);
        let err = ApiError::from_response(&response, "fallback");
        assert_eq!(err.to_string(), "Bad query");
    }

    #[test]
    fn test_is_unauthorized() {
        assert!(ApiError::MissingToken.is_unauthorized());
        assert!(ApiError::Server { status: 401, message: String::new() }.is_unauthorized());
        assert!(ApiError::Server { status: 403, message: String::new() }.is_unauthorized());
        assert!(!ApiError::Server { status: 500, message: String::new() }.is_unauthorized());
        assert!(!ApiError::Transport("offline".into()).is_unauthorized());
    }
}
