//! Domain traits defining contracts for external systems.

use async_trait::async_trait;

use super::error::AppError;
use super::types::{TransportRequest, TransportResponse};

/// HTTP transport used by the wallet gateway.
///
/// Implementations execute exactly one request per call and report any
/// status code as a successful [`TransportResponse`]; interpreting status
/// codes is the gateway's job. Timeouts and TLS are the implementation's
/// concern.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a request and return the raw response.
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, AppError>;

    /// Short name reported in request logs and in the gateway's `Debug` output.
    fn name(&self) -> &'static str {
        "transport"
    }
}
