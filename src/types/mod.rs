//! Typed records returned by the ShapeShift API, and request bodies.

pub mod coin;
pub mod market;
pub mod serde_helpers;
pub mod shift;
pub mod transaction;

pub use coin::{Coin, CoinStatus, TradingPair, pair_token};
pub use market::{TradingLimit, TradingMarketInfo, TradingRate};
pub use shift::{
    CancelParams, CancelResult, EmailParams, EmailReceipt, EmailStatus, QuoteRequest,
    SendAmountParams, SendAmountRequest, ShiftParams, ShiftResult,
};
pub use transaction::{RecentTx, TimeRemaining, TimeStatus, Tx, TxState, TxStatus, ValidateAddress};
