//! Gateway configuration.

use std::env;
use std::time::Duration;

use tracing::debug;

use crate::domain::{ConfigError, Credentials, NetType};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.bithub.com";

pub use crate::infra::http::DEFAULT_HTTP_TIMEOUT;

pub const ENV_API_KEY: &str = "BITHUB_API_KEY";
pub const ENV_PIN_CODE: &str = "BITHUB_PIN_CODE";
pub const ENV_BASE_URL: &str = "BITHUB_BASE_URL";
pub const ENV_NETWORK: &str = "BITHUB_NETWORK";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "BITHUB_HTTP_TIMEOUT_SECS";

/// Construction-time settings for a [`WalletGateway`](super::WalletGateway).
#[derive(Debug)]
pub struct GatewayConfig {
    pub credentials: Credentials,
    pub base_url: String,
    pub net: NetType,
    /// Used only when the gateway builds its own transport.
    pub timeout: Duration,
}

impl GatewayConfig {
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            net: NetType::Main,
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_net(mut self, net: NetType) -> Self {
        self.net = net;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn mainnet(self) -> Self {
        self.with_net(NetType::Main)
    }

    #[must_use]
    pub fn testnet(self) -> Self {
        self.with_net(NetType::Test)
    }

    /// Load configuration from the process environment, reading `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Parse configuration from an arbitrary key lookup. Empty values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key =
            get(ENV_API_KEY).ok_or_else(|| ConfigError::MissingVariable(ENV_API_KEY.to_string()))?;
        let pin_code = get(ENV_PIN_CODE)
            .ok_or_else(|| ConfigError::MissingVariable(ENV_PIN_CODE.to_string()))?;

        let mut config = Self::new(Credentials::new(api_key, pin_code));

        if let Some(base_url) = get(ENV_BASE_URL) {
            config.base_url = base_url;
        }

        if let Some(net) = get(ENV_NETWORK) {
            config.net = net
                .parse::<NetType>()
                .map_err(|message| ConfigError::InvalidValue {
                    name: ENV_NETWORK.to_string(),
                    message,
                })?;
        }

        if let Some(secs) = get(ENV_HTTP_TIMEOUT_SECS) {
            let secs = secs
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidValue {
                    name: ENV_HTTP_TIMEOUT_SECS.to_string(),
                    message: e.to_string(),
                })?;
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    name: ENV_HTTP_TIMEOUT_SECS.to_string(),
                    message: "timeout must be at least 1 second".to_string(),
                });
            }
            config.timeout = Duration::from_secs(secs);
        }

        debug!(
            base_url = %config.base_url,
            net = %config.net,
            timeout_secs = config.timeout.as_secs(),
            "Gateway configuration loaded"
        );

        Ok(config)
    }
}
