//! Default HTTP transport backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};

use crate::domain::{AppError, Transport, TransportError, TransportRequest, TransportResponse};

/// Default request timeout for the HTTP transport.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(80);

/// Transport that executes requests with a `reqwest::Client`.
///
/// Each instance owns its client; nothing is shared across instances unless
/// the caller passes the same client to [`HttpTransport::with_client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    /// Build a transport with its own client and the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Transport(TransportError::InvalidRequest(e.to_string())))?;

        debug!(timeout_secs = timeout.as_secs(), "HTTP transport initialized");
        Ok(Self { http_client })
    }

    /// Build a transport with the default 80 second timeout.
    pub fn with_default_timeout() -> Result<Self, AppError> {
        Self::new(DEFAULT_HTTP_TIMEOUT)
    }

    /// Wrap a caller-configured client.
    #[must_use]
    pub fn with_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, AppError> {
        let mut builder = self
            .http_client
            .request(request.method.into(), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!(error = %e, "HTTP request failed");
            AppError::Transport(TransportError::from(e))
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        let body = response.bytes().await.map_err(|e| {
            error!(error = %e, status, "Failed to read response body");
            AppError::Transport(TransportError::Body(e.to_string()))
        })?;

        debug!(status, body_len = body.len(), "HTTP response received");

        Ok(TransportResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}
