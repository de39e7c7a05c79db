//! Application layer: request validation, endpoint construction, and the wallet gateway.

pub mod config;
pub mod endpoint;
pub mod gateway;
pub mod validation;

pub use config::{DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT, GatewayConfig};
pub use gateway::WalletGateway;
pub use validation::{LABEL_MAX_LENGTH, ValidateParams};
