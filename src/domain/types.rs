//! Domain types: operation parameters, result entities and wire records.

use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};

use super::coin::CoinType;

/// HTTP methods used by the wallet API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

/// API key and PIN code attached to every request.
///
/// Both values are held as secrets and only exposed when headers are built.
#[derive(Debug)]
pub struct Credentials {
    pub api_key: SecretString,
    pub pin_code: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(api_key: impl Into<String>, pin_code: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            pin_code: SecretString::from(pin_code.into()),
        }
    }
}

/// Parameters for creating or listing addresses.
///
/// `label: None` means no label was supplied, which differs from `Some("")`
/// only in that an empty label is still validated and sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressParams {
    pub coin: CoinType,
    pub label: Option<String>,
}

impl AddressParams {
    #[must_use]
    pub fn new(coin: CoinType) -> Self {
        Self { coin, label: None }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Parameters for fetching a wallet balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceParams {
    pub coin: CoinType,
}

impl BalanceParams {
    #[must_use]
    pub fn new(coin: CoinType) -> Self {
        Self { coin }
    }
}

/// Parameters for sending funds to an address.
#[derive(Debug, Clone, PartialEq)]
pub struct SendParams {
    pub coin: CoinType,
    pub address: String,
    pub amount: f64,
}

impl SendParams {
    #[must_use]
    pub fn new(coin: CoinType, address: impl Into<String>, amount: f64) -> Self {
        Self {
            coin,
            address: address.into(),
            amount,
        }
    }
}

/// Amount held plus its USD equivalent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Balance {
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub amount_usd: f64,
}

/// A deposit address issued by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub label: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Balance>,
}

/// Result of a send operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    #[serde(rename = "txid")]
    pub tx_id: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// WIRE RECORDS
// ============================================================================

/// Body of `POST /wallets/{net}/{code}/addresses`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CreateAddressRequest<'a> {
    pub label: &'a str,
    pub currency_code: &'a str,
}

/// Body of `POST /wallets/{net}/{code}/send`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SendRequest<'a> {
    pub currency_code: &'a str,
    pub address: &'a str,
    pub amount: f64,
}

/// Success body of the address listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListAddressesResponse {
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub data: Vec<Address>,
}

fn null_as_empty_vec<'de, D>(deserializer: D) -> Result<Vec<Address>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Address>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Success body of the balance query.
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceResponse {
    pub data: Balance,
}

/// Error body returned with status >= 400.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub error: String,
}

// ============================================================================
// TRANSPORT RECORDS
// ============================================================================

/// A fully built HTTP request handed to a transport.
#[derive(Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl TransportRequest {
    /// First header value with the given name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

// Header values carry credentials.
impl std::fmt::Debug for TransportRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header_names: Vec<&str> = self.headers.iter().map(|(k, _)| k.as_str()).collect();
        f.debug_struct("TransportRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &header_names)
            .field("body", &self.body)
            .finish()
    }
}

/// Raw response returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl TransportResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status >= 400
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
