//! Market data: coins, pairs, rates, limits and market info.

use crate::aggregate::fan_out;
use crate::catalog::{derive_pairs, find_coin};
use crate::client::{ShapeShiftClient, endpoint_path};
use crate::error::ShapeShiftError;
use crate::transport::Transport;
use crate::transport::endpoints::{GET_COINS, LIMIT, MARKET_INFO, RATE};
use crate::types::{Coin, TradingLimit, TradingMarketInfo, TradingPair, TradingRate, pair_token};

impl<T: Transport> ShapeShiftClient<T> {
    /// Get every coin the exchange lists, in catalog order.
    pub async fn get_all_coins(&self) -> Result<Vec<Coin>, ShapeShiftError> {
        let coins: Vec<Coin> = self.get_list(GET_COINS).await?;
        tracing::debug!(coins = coins.len(), "fetched coin catalog");
        Ok(coins)
    }

    /// Look up a coin by exact ticker symbol.
    ///
    /// There is no single-coin endpoint; this fetches the whole catalog.
    pub async fn get_coin(&self, symbol: &str) -> Result<Option<Coin>, ShapeShiftError> {
        Ok(find_coin(self.get_all_coins().await?, symbol))
    }

    /// Derive every directed pair between available coins.
    pub async fn get_all_pairs(&self) -> Result<Vec<TradingPair>, ShapeShiftError> {
        let coins = self.get_all_coins().await?;
        Ok(derive_pairs(&coins))
    }

    /// Get the exchange rate for a pair token such as `btc_ltc`.
    pub async fn get_rate(&self, pair: &str) -> Result<TradingRate, ShapeShiftError> {
        self.get_record(&endpoint_path(RATE, &[("pair", pair)])?)
            .await
    }

    /// Get the exchange rate from `ticker1` to `ticker2`.
    pub async fn get_rate_for(
        &self,
        ticker1: &str,
        ticker2: &str,
    ) -> Result<TradingRate, ShapeShiftError> {
        self.get_rate(&pair_token(ticker1, ticker2)).await
    }

    /// Get the rate for every derived pair.
    ///
    /// Sends one request per pair, sequentially; fails as a whole on the
    /// first error.
    pub async fn get_all_rates(&self) -> Result<Vec<TradingRate>, ShapeShiftError> {
        let pairs = self.get_all_pairs().await?;
        fan_out(&pairs, &self.cancellation, |pair| async move {
            self.get_rate(&pair).await
        })
        .await
    }

    /// Get the deposit limit for a pair token.
    pub async fn get_limit(&self, pair: &str) -> Result<TradingLimit, ShapeShiftError> {
        self.get_record(&endpoint_path(LIMIT, &[("pair", pair)])?)
            .await
    }

    /// Get the deposit limit from `ticker1` to `ticker2`.
    pub async fn get_limit_for(
        &self,
        ticker1: &str,
        ticker2: &str,
    ) -> Result<TradingLimit, ShapeShiftError> {
        self.get_limit(&pair_token(ticker1, ticker2)).await
    }

    /// Get the deposit limit for every derived pair.
    ///
    /// Sends one request per pair, sequentially; fails as a whole on the
    /// first error.
    pub async fn get_all_limits(&self) -> Result<Vec<TradingLimit>, ShapeShiftError> {
        let pairs = self.get_all_pairs().await?;
        fan_out(&pairs, &self.cancellation, |pair| async move {
            self.get_limit(&pair).await
        })
        .await
    }

    /// Get rate, limits and miner fee for a pair token.
    pub async fn get_market_info(&self, pair: &str) -> Result<TradingMarketInfo, ShapeShiftError> {
        self.get_record(&endpoint_path(MARKET_INFO, &[("pair", pair)])?)
            .await
    }

    /// Get market info from `ticker1` to `ticker2`.
    pub async fn get_market_info_for(
        &self,
        ticker1: &str,
        ticker2: &str,
    ) -> Result<TradingMarketInfo, ShapeShiftError> {
        self.get_market_info(&pair_token(ticker1, ticker2)).await
    }

    /// Get market info for every derived pair.
    ///
    /// Sends one request per pair, sequentially; fails as a whole on the
    /// first error.
    pub async fn get_all_market_infos(&self) -> Result<Vec<TradingMarketInfo>, ShapeShiftError> {
        let pairs = self.get_all_pairs().await?;
        fan_out(&pairs, &self.cancellation, |pair| async move {
            self.get_market_info(&pair).await
        })
        .await
    }
}
