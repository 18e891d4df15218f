//! Sequential per-pair fan-out.
//!
//! Limits, rates and market info have no "get all" endpoint, so aggregate
//! operations issue one request per derived pair. Requests are strictly
//! sequential: each is awaited before the next is sent, results come back in
//! pair order, and the first failure aborts the whole aggregate without
//! returning partial results. Expect `O(n²)` requests for `n` available coins.

use std::future::Future;

use crate::cancel::Cancellation;
use crate::error::ShapeShiftError;
use crate::types::TradingPair;

/// Call `fetch` once per pair, in order, and collect the results.
///
/// The cancellation token is checked before every request. On the first
/// error, remaining pairs are skipped and the error is returned.
pub async fn fan_out<R, F, Fut>(
    pairs: &[TradingPair],
    cancellation: &Cancellation,
    mut fetch: F,
) -> Result<Vec<R>, ShapeShiftError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<R, ShapeShiftError>>,
{
    tracing::debug!(pairs = pairs.len(), "starting per-pair fan-out");
    let mut results = Vec::with_capacity(pairs.len());

    for (index, pair) in pairs.iter().enumerate() {
        cancellation.check()?;
        let record = fetch(pair.pair.clone()).await.inspect_err(|err| {
            tracing::warn!(pair = %pair, index, error = %err, "fan-out aborted");
        })?;
        results.push(record);
    }

    tracing::debug!(results = results.len(), "fan-out complete");
    Ok(results)
}
