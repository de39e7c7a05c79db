//! Coin registry: static mapping from coin identifiers to currency codes,
//! display names and networks.
//!
//! Testnet assets use their own identifiers (mainnet id + 1_000_000), so a
//! single [`CoinType`] value fully determines both asset and network.

use serde::{Deserialize, Serialize};

use super::error::UnknownCurrencyCode;

/// Production vs. test network designation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum NetType {
    #[default]
    #[serde(rename = "mainnet")]
    Main,
    #[serde(rename = "testnet")]
    Test,
}

impl NetType {
    /// Path segment used by the wallet endpoints.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "mainnet",
            Self::Test => "testnet",
        }
    }
}

impl std::str::FromStr for NetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Self::Main),
            "testnet" | "test" => Ok(Self::Test),
            _ => Err(format!("Invalid network: {}", s)),
        }
    }
}

impl std::fmt::Display for NetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifier of an asset on a specific network.
///
/// Any `u32` can be wrapped; values outside the registry report an empty
/// currency code and display name and are rejected by validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CoinType(u32);

const TESTNET_OFFSET: u32 = 1_000_000;

impl CoinType {
    pub const BITCOIN: Self = Self(0);
    pub const LITECOIN: Self = Self(1);
    pub const ETHEREUM: Self = Self(60);
    pub const ZCASH: Self = Self(133);
    pub const BITCOIN_CASH: Self = Self(145);

    pub const TESTNET_BITCOIN: Self = Self(TESTNET_OFFSET);
    pub const TESTNET_LITECOIN: Self = Self(TESTNET_OFFSET + 1);
    pub const TESTNET_ETHEREUM: Self = Self(TESTNET_OFFSET + 60);
    pub const TESTNET_ZCASH: Self = Self(TESTNET_OFFSET + 133);
    pub const TESTNET_BITCOIN_CASH: Self = Self(TESTNET_OFFSET + 145);

    #[must_use]
    pub const fn from_id(id: u32) -> Self {
        Self(id)
    }

    pub const fn id(&self) -> u32 {
        self.0
    }

    /// Registry entry for this coin, if it is recognized.
    pub fn lookup(&self) -> Option<&'static CoinInfo> {
        REGISTRY.iter().find(|info| info.coin == *self)
    }

    pub fn is_known(&self) -> bool {
        self.lookup().is_some()
    }

    /// Ticker used in paths and payloads; empty for unknown coins.
    pub fn currency_code(&self) -> &'static str {
        self.lookup().map(|info| info.code).unwrap_or("")
    }

    /// Human-readable name; empty for unknown coins.
    pub fn display_name(&self) -> &'static str {
        self.lookup().map(|info| info.name).unwrap_or("")
    }

    pub fn net(&self) -> Option<NetType> {
        self.lookup().map(|info| info.net)
    }

    /// All registered coins in id order.
    pub fn all() -> impl Iterator<Item = CoinType> {
        REGISTRY.iter().map(|info| info.coin)
    }
}

impl std::fmt::Display for CoinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for CoinType {
    type Err = UnknownCurrencyCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_currency_code(s)
    }
}

/// Static description of a registered coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinInfo {
    pub coin: CoinType,
    pub name: &'static str,
    pub code: &'static str,
    pub net: NetType,
}

static REGISTRY: &[CoinInfo] = &[
    CoinInfo {
        coin: CoinType::BITCOIN,
        name: "Bitcoin",
        code: "BTC",
        net: NetType::Main,
    },
    CoinInfo {
        coin: CoinType::LITECOIN,
        name: "Litecoin",
        code: "LTC",
        net: NetType::Main,
    },
    CoinInfo {
        coin: CoinType::ETHEREUM,
        name: "Ethereum",
        code: "ETH",
        net: NetType::Main,
    },
    CoinInfo {
        coin: CoinType::ZCASH,
        name: "Zcash",
        code: "ZEC",
        net: NetType::Main,
    },
    CoinInfo {
        coin: CoinType::BITCOIN_CASH,
        name: "Bitcoin Cash",
        code: "BCH",
        net: NetType::Main,
    },
    CoinInfo {
        coin: CoinType::TESTNET_BITCOIN,
        name: "Testnet Bitcoin",
        code: "TBTC",
        net: NetType::Test,
    },
    CoinInfo {
        coin: CoinType::TESTNET_LITECOIN,
        name: "Testnet Litecoin",
        code: "TLTC",
        net: NetType::Test,
    },
    CoinInfo {
        coin: CoinType::TESTNET_ETHEREUM,
        name: "Testnet Ethereum",
        code: "TETH",
        net: NetType::Test,
    },
    CoinInfo {
        coin: CoinType::TESTNET_ZCASH,
        name: "Testnet Zcash",
        code: "TZEC",
        net: NetType::Test,
    },
    CoinInfo {
        coin: CoinType::TESTNET_BITCOIN_CASH,
        name: "Testnet Bitcoin Cash",
        code: "TBCH",
        net: NetType::Test,
    },
];

/// Case-insensitive reverse lookup of a currency code.
pub fn parse_currency_code(code: &str) -> Result<CoinType, UnknownCurrencyCode> {
    let trimmed = code.trim();
    REGISTRY
        .iter()
        .find(|info| info.code.eq_ignore_ascii_case(trimmed))
        .map(|info| info.coin)
        .ok_or_else(|| UnknownCurrencyCode(code.to_string()))
}
