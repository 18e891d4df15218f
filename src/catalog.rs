//! Coin catalog lookups and trading pair derivation.
//!
//! The exchange has no endpoint that lists pairs, so the full set is derived
//! from the coin catalog: every ordered pair of distinct available coins.

use crate::types::{Coin, TradingPair};

/// Find a coin by its exact (case-sensitive) ticker symbol.
///
/// Returns the first match in catalog order.
pub fn find_coin(coins: Vec<Coin>, symbol: &str) -> Option<Coin> {
    coins.into_iter().find(|coin| coin.symbol == symbol)
}

/// Derive every directed pair between distinct available coins.
///
/// For `n` available coins this yields `n * (n - 1)` pairs in catalog order:
/// both `A_B` and `B_A` are emitted, and unavailable coins never appear.
/// Coins are told apart by position, so a catalog listing the same symbol
/// twice pairs the two entries with each other.
///
/// # Example
///
/// ```rust
/// use shapeshift_api_client::catalog::derive_pairs;
/// use shapeshift_api_client::types::{Coin, CoinStatus};
///
/// let coin = |symbol: &str| Coin {
///     name: symbol.to_string(),
///     symbol: symbol.to_string(),
///     status: CoinStatus::Available,
///     ..Default::default()
/// };
/// let pairs = derive_pairs(&[coin("BTC"), coin("LTC")]);
/// let tokens: Vec<_> = pairs.iter().map(|p| p.pair.as_str()).collect();
/// assert_eq!(tokens, ["BTC_LTC", "LTC_BTC"]);
/// ```
pub fn derive_pairs(coins: &[Coin]) -> Vec<TradingPair> {
    let available: Vec<&Coin> = coins.iter().filter(|coin| coin.is_available()).collect();
    let mut pairs = Vec::with_capacity(available.len() * available.len().saturating_sub(1));

    for (i, from) in available.iter().enumerate() {
        for (j, to) in available.iter().enumerate() {
            if i != j {
                pairs.push(TradingPair::new(from.symbol.as_str(), to.symbol.as_str()));
            }
        }
    }
    pairs
}
