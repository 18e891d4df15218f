//! Currencies supported by the exchange and the pairs derived from them.

use serde::Serialize;

use crate::error::ErrorEnvelope;
use crate::mapping::{FieldSpec, ListRecord, Record};

/// Exchange availability of a coin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinStatus {
    /// The coin can be exchanged.
    Available,
    /// The coin is temporarily disabled, e.g. during updates.
    #[default]
    Unavailable,
}

impl CoinStatus {
    /// Decode the wire value: `"available"` or anything else.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "available" => Self::Available,
            _ => Self::Unavailable,
        }
    }
}

impl std::fmt::Display for CoinStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoinStatus::Available => write!(f, "available"),
            CoinStatus::Unavailable => write!(f, "unavailable"),
        }
    }
}

/// A currency supported by the exchange.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Coin {
    /// Formal name of the currency.
    pub name: String,
    /// Ticker symbol, the natural key within one catalog.
    pub symbol: String,
    /// Link to the currency icon.
    pub image_link: String,
    /// Exchange availability.
    pub status: CoinStatus,
    /// Error reported by the service, if any.
    pub error: Option<String>,
}

impl Coin {
    /// Check if the coin can currently be exchanged.
    pub fn is_available(&self) -> bool {
        self.status == CoinStatus::Available
    }
}

impl Record for Coin {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::new("name", |coin, raw| {
            coin.name = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("symbol", |coin, raw| {
            coin.symbol = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("image", |coin, raw| {
            coin.image_link = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("status", |coin, raw| {
            coin.status = CoinStatus::from_wire(raw);
            Ok(())
        }),
    ];

    fn error_slot(&mut self) -> &mut Option<String> {
        &mut self.error
    }
}

impl ListRecord for Coin {
    fn presence_marker(&self) -> &str {
        &self.name
    }
}

impl ErrorEnvelope for Coin {
    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// A directed exchange pair, derived from the coin catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TradingPair {
    /// Pair token used by the API, `"{ticker1}_{ticker2}"`.
    pub pair: String,
    /// Ticker of the currency to convert from.
    pub ticker1: String,
    /// Ticker of the currency to convert to.
    pub ticker2: String,
}

impl TradingPair {
    /// Create a pair from two tickers.
    pub fn new(ticker1: impl Into<String>, ticker2: impl Into<String>) -> Self {
        let ticker1 = ticker1.into();
        let ticker2 = ticker2.into();
        Self {
            pair: pair_token(&ticker1, &ticker2),
            ticker1,
            ticker2,
        }
    }
}

impl std::fmt::Display for TradingPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pair)
    }
}

/// Build the pair token for a directed exchange from `ticker1` to `ticker2`.
pub fn pair_token(ticker1: &str, ticker2: &str) -> String {
    format!("{ticker1}_{ticker2}")
}
