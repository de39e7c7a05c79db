//! Domain layer containing the coin registry, value types, traits, and error definitions.

pub mod coin;
pub mod error;
pub mod traits;
pub mod types;

pub use coin::{CoinInfo, CoinType, NetType, parse_currency_code};
pub use error::{
    ApiError, AppError, AppResult, ConfigError, TransportError, UnknownCurrencyCode,
    ValidationError,
};
pub use traits::Transport;
pub use types::{
    Address, AddressParams, Balance, BalanceParams, BalanceResponse, CreateAddressRequest,
    Credentials, ErrorEnvelope, HttpMethod, ListAddressesResponse, SendParams, SendRequest,
    Transaction, TransportRequest, TransportResponse,
};
