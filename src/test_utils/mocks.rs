//! Mock implementations for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::{AppError, Transport, TransportError, TransportRequest, TransportResponse};

/// Configuration for mock behavior
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    pub should_fail: bool,
    pub error_message: Option<String>,
}

impl MockConfig {
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            should_fail: true,
            error_message: Some(message.into()),
        }
    }
}

/// Transport that records requests and replays queued responses in order.
///
/// With nothing queued it answers with the default response if one is set,
/// otherwise with a network error.
pub struct MockTransport {
    requests: Mutex<Vec<TransportRequest>>,
    responses: Mutex<VecDeque<TransportResponse>>,
    default_response: Option<TransportResponse>,
    config: MockConfig,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MockConfig::success())
    }

    #[must_use]
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
            default_response: None,
            config,
        }
    }

    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_config(MockConfig::failure(message))
    }

    /// Answer every request with the same response.
    #[must_use]
    pub fn always(response: TransportResponse) -> Self {
        Self {
            default_response: Some(response),
            ..Self::new()
        }
    }

    pub fn push_response(&self, response: TransportResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Queue a response with a JSON body.
    pub fn push_json(&self, status: u16, body: &str) {
        let mut response = TransportResponse::new(status, body.as_bytes().to_vec());
        response
            .headers
            .push(("content-type".to_string(), "application/json".to_string()));
        self.push_response(response);
    }

    /// All requests received so far (for assertions)
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<TransportRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn check_should_fail(&self) -> Result<(), AppError> {
        if self.config.should_fail {
            let msg = self
                .config
                .error_message
                .clone()
                .unwrap_or_else(|| "Mock error".to_string());
            return Err(AppError::Transport(TransportError::Connection(msg)));
        }
        Ok(())
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, AppError> {
        self.requests.lock().unwrap().push(request);
        self.check_should_fail()?;

        if let Some(response) = self.responses.lock().unwrap().pop_front() {
            return Ok(response);
        }

        self.default_response.clone().ok_or_else(|| {
            AppError::Transport(TransportError::Network(
                "no mock response queued".to_string(),
            ))
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
