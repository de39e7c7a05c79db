//! Wallet gateway: validates parameters, builds endpoints, and maps
//! request/response bodies for the four wallet operations.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, warn};

use crate::domain::{
    Address, AddressParams, ApiError, AppError, Balance, BalanceParams, BalanceResponse,
    CreateAddressRequest, Credentials, ErrorEnvelope, HttpMethod, ListAddressesResponse, NetType,
    SendParams, SendRequest, Transaction, Transport, TransportRequest, TransportResponse,
    ValidationError,
};
use crate::infra::HttpTransport;

use super::config::GatewayConfig;
use super::endpoint;
use super::validation::ValidateParams;

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_PIN_CODE: &str = "X-Pin-Code";
pub const HEADER_CONTENT_TYPE: &str = "Content-type";
const CONTENT_TYPE_JSON: &str = "application/json";

/// Authenticated client for the wallet API.
///
/// Holds only immutable state, so one instance can serve concurrent callers
/// as long as the transport allows it.
pub struct WalletGateway {
    transport: Arc<dyn Transport>,
    credentials: Credentials,
    base_url: String,
    net: NetType,
}

impl std::fmt::Debug for WalletGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletGateway")
            .field("transport", &self.transport.name())
            .field("base_url", &self.base_url)
            .field("net", &self.net)
            .finish_non_exhaustive()
    }
}

impl WalletGateway {
    /// Create a gateway using an injected transport.
    #[must_use]
    pub fn new(config: GatewayConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            credentials: config.credentials,
            base_url: endpoint::normalize_base_url(&config.base_url),
            net: config.net,
        }
    }

    /// Create a gateway with a freshly built [`HttpTransport`].
    pub fn with_default_transport(config: GatewayConfig) -> Result<Self, AppError> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    /// Production-network gateway against the default base URL.
    pub fn mainnet(credentials: Credentials) -> Result<Self, AppError> {
        Self::with_default_transport(GatewayConfig::new(credentials).mainnet())
    }

    /// Test-network gateway against the default base URL.
    pub fn testnet(credentials: Credentials) -> Result<Self, AppError> {
        Self::with_default_transport(GatewayConfig::new(credentials).testnet())
    }

    pub fn net(&self) -> NetType {
        self.net
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a new deposit address.
    #[instrument(skip(self, params), fields(coin = %params.coin.currency_code(), net = %self.net))]
    pub async fn create_address(&self, params: &AddressParams) -> Result<Address, AppError> {
        validate(params)?;

        let currency_code = params.coin.currency_code();
        let payload = CreateAddressRequest {
            label: params.label.as_deref().unwrap_or_default(),
            currency_code,
        };

        let path = endpoint::create_address_path(self.net, currency_code);
        let address: Address = self
            .send_request(HttpMethod::Post, &path, Some(&payload))
            .await?;

        debug!(address = %address.address, "Address created");
        Ok(address)
    }

    /// List addresses, optionally filtered by label. Order is the server's.
    #[instrument(skip(self, params), fields(coin = %params.coin.currency_code(), net = %self.net))]
    pub async fn list_addresses(&self, params: &AddressParams) -> Result<Vec<Address>, AppError> {
        validate(params)?;

        let path = endpoint::list_addresses_path(
            self.net,
            params.coin.currency_code(),
            params.label.as_deref(),
        );
        let response: ListAddressesResponse = self
            .send_request(HttpMethod::Get, &path, None::<&()>)
            .await?;

        debug!(count = response.data.len(), "Addresses listed");
        Ok(response.data)
    }

    /// Fetch the wallet balance for a coin.
    #[instrument(skip(self, params), fields(coin = %params.coin.currency_code(), net = %self.net))]
    pub async fn get_balance(&self, params: &BalanceParams) -> Result<Balance, AppError> {
        validate(params)?;

        let path = endpoint::balance_path(self.net, params.coin.currency_code());
        let response: BalanceResponse = self
            .send_request(HttpMethod::Get, &path, None::<&()>)
            .await?;

        Ok(response.data)
    }

    /// Send funds to an address.
    #[instrument(skip(self, params), fields(coin = %params.coin.currency_code(), net = %self.net))]
    pub async fn send(&self, params: &SendParams) -> Result<Transaction, AppError> {
        validate(params)?;

        let currency_code = params.coin.currency_code();
        let payload = SendRequest {
            currency_code,
            address: &params.address,
            amount: params.amount,
        };

        let path = endpoint::send_path(self.net, currency_code);
        let transaction: Transaction = self
            .send_request(HttpMethod::Post, &path, Some(&payload))
            .await?;

        debug!(tx_id = %transaction.tx_id, "Transaction submitted");
        Ok(transaction)
    }

    /// Build, execute and decode one authenticated request.
    async fn send_request<B, T>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = body
            .map(|payload| {
                serde_json::to_string(payload).map_err(|e| {
                    error!(error = %e, "Failed to encode request payload");
                    AppError::Serialization(e.to_string())
                })
            })
            .transpose()?;

        let request = self.build_request(method, path, body);
        debug!(
            method = %method,
            path = %path,
            transport = self.transport.name(),
            "Sending wallet API request"
        );

        let response = self.transport.execute(request).await?;

        if response.is_error() {
            return Err(response_to_error(&response));
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            error!(
                error = %e,
                status = response.status,
                "Failed to parse wallet API response"
            );
            AppError::Deserialization(e.to_string())
        })
    }

    fn build_request(&self, method: HttpMethod, path: &str, body: Option<String>) -> TransportRequest {
        let mut headers = Vec::with_capacity(3);
        if body.is_some() {
            headers.push((
                HEADER_CONTENT_TYPE.to_string(),
                CONTENT_TYPE_JSON.to_string(),
            ));
        }
        headers.push((
            HEADER_AUTHORIZATION.to_string(),
            format!("Bearer {}", self.credentials.api_key.expose_secret()),
        ));
        headers.push((
            HEADER_PIN_CODE.to_string(),
            self.credentials.pin_code.expose_secret().to_string(),
        ));

        TransportRequest {
            method,
            url: endpoint::join_url(&self.base_url, path),
            headers,
            body,
        }
    }
}

fn validate<P: ValidateParams>(params: &P) -> Result<(), ValidationError> {
    params.validate_params().map_err(|e| {
        warn!(error = %e, "Validation failed");
        e
    })
}

/// Decode a status >= 400 body into an [`ApiError`], or report the envelope
/// itself as malformed.
fn response_to_error(response: &TransportResponse) -> AppError {
    match serde_json::from_slice::<ErrorEnvelope>(&response.body) {
        Ok(envelope) => {
            error!(
                status = response.status,
                message = %envelope.error,
                "Wallet API rejected request"
            );
            AppError::Api(ApiError::new(response.status, envelope.error))
        }
        Err(e) => {
            error!(
                status = response.status,
                error = %e,
                body = %response.body_text(),
                "Wallet API returned an unreadable error body"
            );
            AppError::MalformedErrorResponse {
                status_code: response.status,
                message: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CoinType;
    use crate::test_utils::MockTransport;

    fn gateway(net: NetType, transport: Arc<MockTransport>) -> WalletGateway {
        let config = GatewayConfig::new(Credentials::new("test-key", "1234"))
            .with_base_url("https://api.example.com/")
            .with_net(net);
        WalletGateway::new(config, transport)
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let gw = gateway(NetType::Main, Arc::new(MockTransport::new()));
        assert_eq!(gw.base_url(), "https://api.example.com");
        assert_eq!(gw.net(), NetType::Main);
    }

    #[test]
    fn test_debug_hides_credentials() {
        let gw = gateway(NetType::Test, Arc::new(MockTransport::new()));
        let debug = format!("{:?}", gw);
        assert!(!debug.contains("test-key"));
        assert!(!debug.contains("1234"));
        assert!(debug.contains("testnet") || debug.contains("Test"));
        assert!(debug.contains("mock"));
    }

    #[test]
    fn test_build_request_headers_without_body() {
        let gw = gateway(NetType::Main, Arc::new(MockTransport::new()));
        let request = gw.build_request(HttpMethod::Get, "wallets/mainnet/BTC/balance", None);

        assert_eq!(
            request.url,
            "https://api.example.com/wallets/mainnet/BTC/balance"
        );
        assert_eq!(request.header("Authorization"), Some("Bearer test-key"));
        assert_eq!(request.header("X-Pin-Code"), Some("1234"));
        assert_eq!(request.header("Content-type"), None);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_build_request_sets_content_type_with_body() {
        let gw = gateway(NetType::Main, Arc::new(MockTransport::new()));
        let request = gw.build_request(
            HttpMethod::Post,
            "wallets/mainnet/BTC/send",
            Some("{}".to_string()),
        );
        assert_eq!(request.header("content-type"), Some("application/json"));
    }

    #[test]
    fn test_response_to_error_variants() {
        let err = response_to_error(&TransportResponse::new(404, r#"{"error":"not found"}"#));
        match err {
            AppError::Api(api) => {
                assert_eq!(api.status_code, 404);
                assert_eq!(api.message(), "not found");
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let err = response_to_error(&TransportResponse::new(502, "<html>Bad Gateway</html>"));
        assert!(matches!(
            err,
            AppError::MalformedErrorResponse {
                status_code: 502,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_validation_failure_skips_transport() {
        let transport = Arc::new(MockTransport::new());
        let gw = gateway(NetType::Main, Arc::clone(&transport));

        let result = gw
            .send(&SendParams::new(CoinType::BITCOIN, "1A2b3C", 0.0))
            .await;
        assert!(matches!(
            result,
            Err(AppError::Validation(ValidationError::InvalidAmount(_)))
        ));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_network_segment_follows_gateway_not_coin() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, r#"{"data":{"amount":0.0,"amount_usd":0.0}}"#);
        let gw = gateway(NetType::Test, Arc::clone(&transport));

        gw.get_balance(&BalanceParams::new(CoinType::BITCOIN))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(
            request.url,
            "https://api.example.com/wallets/testnet/BTC/balance"
        );
    }
}
