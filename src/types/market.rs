//! Per-pair market data: rates, limits and market info.

use serde::Serialize;

use crate::error::ErrorEnvelope;
use crate::mapping::{FieldSpec, ListRecord, Record, coerce};

/// Exchange rate for a pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TradingRate {
    /// Pair token, e.g. `btc_ltc`.
    pub pair: String,
    /// Units of the output coin per unit of the input coin.
    pub rate: f64,
    /// Error reported by the service, if any.
    pub error: Option<String>,
}

impl Record for TradingRate {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::new("pair", |rate, raw| {
            rate.pair = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("rate", |rate, raw| {
            rate.rate = coerce::float("rate", raw)?;
            Ok(())
        }),
    ];

    fn error_slot(&mut self) -> &mut Option<String> {
        &mut self.error
    }
}

impl ListRecord for TradingRate {
    fn presence_marker(&self) -> &str {
        &self.pair
    }
}

impl ErrorEnvelope for TradingRate {
    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Maximum deposit accepted for a pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TradingLimit {
    /// Pair token.
    pub pair: String,
    /// Deposit limit, in units of the input coin.
    pub limit: f64,
    /// Error reported by the service, if any.
    pub error: Option<String>,
}

impl Record for TradingLimit {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::new("pair", |limit, raw| {
            limit.pair = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("limit", |limit, raw| {
            limit.limit = coerce::float("limit", raw)?;
            Ok(())
        }),
    ];

    fn error_slot(&mut self) -> &mut Option<String> {
        &mut self.error
    }
}

impl ListRecord for TradingLimit {
    fn presence_marker(&self) -> &str {
        &self.pair
    }
}

impl ErrorEnvelope for TradingLimit {
    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Rate, limits and miner fee for a pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TradingMarketInfo {
    /// Pair token.
    pub pair: String,
    /// Exchange rate.
    pub rate: f64,
    /// Deposit limit.
    pub limit: f64,
    /// Minimum deposit.
    pub min: f64,
    /// Fee paid to miners for the outgoing transaction.
    pub miner_fee: f64,
    /// Error reported by the service, if any.
    pub error: Option<String>,
}

impl Record for TradingMarketInfo {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::new("pair", |info, raw| {
            info.pair = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("rate", |info, raw| {
            info.rate = coerce::float("rate", raw)?;
            Ok(())
        }),
        FieldSpec::new("limit", |info, raw| {
            info.limit = coerce::float("limit", raw)?;
            Ok(())
        }),
        FieldSpec::new("min", |info, raw| {
            info.min = coerce::float("min", raw)?;
            Ok(())
        }),
        FieldSpec::new("minerFee", |info, raw| {
            info.miner_fee = coerce::float("minerFee", raw)?;
            Ok(())
        }),
    ];

    fn error_slot(&mut self) -> &mut Option<String> {
        &mut self.error
    }
}

impl ListRecord for TradingMarketInfo {
    fn presence_marker(&self) -> &str {
        &self.pair
    }
}

impl ErrorEnvelope for TradingMarketInfo {
    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
