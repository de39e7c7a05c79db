//! Endpoint path construction for the wallet API.
//!
//! Paths are `wallets/{net}/{code}/{operation}`; the net segment comes from
//! the gateway's configured network, not from the coin.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::domain::NetType;

pub const WALLET_SERVICE_SEGMENT: &str = "wallets";
pub const ADDRESSES_SEGMENT: &str = "addresses";
pub const BALANCE_SEGMENT: &str = "balance";
pub const SEND_SEGMENT: &str = "send";

/// Everything except RFC 3986 unreserved characters is escaped, so a space
/// becomes `%20`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn wallet_path(net: NetType, currency_code: &str, operation: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        WALLET_SERVICE_SEGMENT,
        net.as_str(),
        currency_code,
        operation
    )
}

/// Path for address creation.
pub fn create_address_path(net: NetType, currency_code: &str) -> String {
    wallet_path(net, currency_code, ADDRESSES_SEGMENT)
}

/// Path for address listing, with an optional `label` filter.
///
/// The label is trimmed; a blank label adds no query string.
pub fn list_addresses_path(net: NetType, currency_code: &str, label: Option<&str>) -> String {
    let path = wallet_path(net, currency_code, ADDRESSES_SEGMENT);

    match label.map(str::trim).filter(|l| !l.is_empty()) {
        Some(label) => format!("{}?label={}", path, utf8_percent_encode(label, QUERY_VALUE)),
        None => path,
    }
}

pub fn balance_path(net: NetType, currency_code: &str) -> String {
    wallet_path(net, currency_code, BALANCE_SEGMENT)
}

pub fn send_path(net: NetType, currency_code: &str) -> String {
    wallet_path(net, currency_code, SEND_SEGMENT)
}

/// Strip trailing slashes from a configured base URL.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Join a normalized base URL and a relative path.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url, path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_paths() {
        assert_eq!(
            create_address_path(NetType::Main, "BTC"),
            "wallets/mainnet/BTC/addresses"
        );
        assert_eq!(
            balance_path(NetType::Test, "TLTC"),
            "wallets/testnet/TLTC/balance"
        );
        assert_eq!(send_path(NetType::Main, "ETH"), "wallets/mainnet/ETH/send");
    }

    #[test]
    fn test_list_path_escapes_label() {
        let path = list_addresses_path(NetType::Test, "BTC", Some("my wallet"));
        assert_eq!(path, "wallets/testnet/BTC/addresses?label=my%20wallet");
        assert!(path.ends_with("?label=my%20wallet"));

        let path = list_addresses_path(NetType::Main, "BTC", Some("a&b=c/d"));
        assert_eq!(path, "wallets/mainnet/BTC/addresses?label=a%26b%3Dc%2Fd");

        let path = list_addresses_path(NetType::Main, "BTC", Some("cold-storage_1.x~"));
        assert!(path.ends_with("?label=cold-storage_1.x~"));
    }

    #[test]
    fn test_list_path_without_label_has_no_query() {
        for label in [None, Some(""), Some("   ")] {
            let path = list_addresses_path(NetType::Test, "BTC", label);
            assert_eq!(path, "wallets/testnet/BTC/addresses");
            assert!(!path.contains('?'));
        }
    }

    #[test]
    fn test_list_path_trims_label() {
        let path = list_addresses_path(NetType::Main, "LTC", Some("  savings "));
        assert_eq!(path, "wallets/mainnet/LTC/addresses?label=savings");
    }

    #[test]
    fn test_list_path_escapes_non_ascii() {
        let path = list_addresses_path(NetType::Main, "BTC", Some("café"));
        assert!(path.ends_with("?label=caf%C3%A9"));
    }

    #[test]
    fn test_base_url_normalization() {
        assert_eq!(
            normalize_base_url("https://api.bithub.com/"),
            "https://api.bithub.com"
        );
        assert_eq!(
            normalize_base_url("https://api.bithub.com//"),
            "https://api.bithub.com"
        );
        assert_eq!(
            normalize_base_url("http://localhost:8080"),
            "http://localhost:8080"
        );
        assert_eq!(
            join_url("https://api.bithub.com", "wallets/mainnet/BTC/send"),
            "https://api.bithub.com/wallets/mainnet/BTC/send"
        );
    }
}
