//! Client library for the BitHub wallet-as-a-service REST API.
//!
//! The [`WalletGateway`] validates operation parameters, builds endpoint
//! paths for the configured network, and exchanges JSON with the service
//! through an injected [`Transport`]. [`HttpTransport`] is the default
//! reqwest-backed transport.
//!
//! ```rust,ignore
//! use bithub_client::{AddressParams, CoinType, Credentials, WalletGateway};
//!
//! let gateway = WalletGateway::testnet(Credentials::new("api-key", "pin"))?;
//! let address = gateway
//!     .create_address(&AddressParams::new(CoinType::TESTNET_BITCOIN).with_label("savings"))
//!     .await?;
//! ```

pub mod app;
pub mod domain;
pub mod infra;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use app::{GatewayConfig, WalletGateway};
pub use domain::{
    Address, AddressParams, ApiError, AppError, AppResult, Balance, BalanceParams, CoinType,
    ConfigError, Credentials, NetType, SendParams, Transaction, Transport, TransportError,
    TransportRequest, TransportResponse, UnknownCurrencyCode, ValidationError,
    parse_currency_code,
};
pub use infra::HttpTransport;
