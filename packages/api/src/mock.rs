//! Scripted transport for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// In-memory [`Transport`] that replays queued responses in order and keeps
/// every request it was asked to send.
///
/// When the queue is empty, `send` fails with [`ApiError::Transport`], the
/// same way an unreachable server would.
#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<Result<ApiResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response.
    pub fn respond(&self, status: u16, body: serde_json::Value) -> &Self {
        self.push(Ok(ApiResponse::json(status, &body)))
    }

    /// Queue a response with a raw (possibly empty) body.
    pub fn respond_raw(&self, status: u16, body: &str) -> &Self {
        self.push(Ok(ApiResponse::new(status, body)))
    }

    /// Queue a transport failure.
    pub fn fail(&self, error: ApiError) -> &Self {
        self.push(Err(error))
    }

    fn push(&self, response: Result<ApiResponse, ApiError>) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests sent so far.
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("connection refused".to_string())))
    }
}
