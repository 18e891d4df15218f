//! Transaction history, deposit status and address validation.

use serde::Serialize;

use crate::error::ErrorEnvelope;
use crate::mapping::{FieldSpec, ListRecord, Record, coerce};

/// State of a shift.
///
/// The status endpoint and the history endpoints use different vocabularies
/// and different fallbacks for unknown text; see [`TxState::from_status`] and
/// [`TxState::from_history`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TxState {
    /// No deposit has been seen yet.
    #[default]
    NoDeposits,
    /// A deposit was seen but not yet processed.
    Received,
    /// The deposit was returned to the sender.
    Returned,
    /// The exchange completed.
    Complete,
    /// The exchange failed.
    Failed,
}

impl TxState {
    /// Decode a `txStat` status. Unknown text decodes as [`TxState::Returned`].
    pub fn from_status(raw: &str) -> Self {
        match raw {
            "no_deposits" => Self::NoDeposits,
            "received" => Self::Received,
            "complete" => Self::Complete,
            "failed" => Self::Failed,
            other => {
                if other != "returned" {
                    tracing::trace!(status = other, "unknown transaction status, using returned");
                }
                Self::Returned
            }
        }
    }

    /// Decode a status from the transaction history endpoints. Unknown text
    /// decodes as [`TxState::NoDeposits`].
    pub fn from_history(raw: &str) -> Self {
        match raw {
            "received" => Self::Received,
            "complete" => Self::Complete,
            "returned" => Self::Returned,
            "failed" => Self::Failed,
            other => {
                tracing::trace!(status = other, "unknown history status, using no_deposits");
                Self::NoDeposits
            }
        }
    }
}

impl std::fmt::Display for TxState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TxState::NoDeposits => "no_deposits",
            TxState::Received => "received",
            TxState::Returned => "returned",
            TxState::Complete => "complete",
            TxState::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// A shift recorded against an affiliate key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tx {
    /// Transaction id of the deposit into the exchange.
    pub input_txid: String,
    /// Address the deposit was paid to.
    pub input_address: String,
    /// Currency of the deposit.
    pub input_coin: String,
    /// Amount deposited.
    pub input_amount: f64,
    /// Transaction id of the payout to the user.
    pub output_txid: String,
    /// Address the payout was sent to.
    pub output_address: String,
    /// Currency of the payout.
    pub output_coin: String,
    /// Amount paid out.
    pub output_amount: f64,
    /// Effective rate of the shift.
    pub shift_rate: f64,
    /// State of the shift.
    pub status: TxState,
    /// Error reported by the service, if any.
    pub error: Option<String>,
}

impl Record for Tx {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::new("inputTXID", |tx, raw| {
            tx.input_txid = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("inputAddress", |tx, raw| {
            tx.input_address = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("inputCurrency", |tx, raw| {
            tx.input_coin = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("inputAmount", |tx, raw| {
            tx.input_amount = coerce::float("inputAmount", raw)?;
            Ok(())
        }),
        FieldSpec::new("outputTXID", |tx, raw| {
            tx.output_txid = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("outputAddress", |tx, raw| {
            tx.output_address = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("outputCurrency", |tx, raw| {
            tx.output_coin = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("outputAmount", |tx, raw| {
            tx.output_amount = coerce::float("outputAmount", raw)?;
            Ok(())
        }),
        FieldSpec::new("shiftRate", |tx, raw| {
            tx.shift_rate = coerce::float("shiftRate", raw)?;
            Ok(())
        }),
        FieldSpec::new("status", |tx, raw| {
            tx.status = TxState::from_history(raw);
            Ok(())
        }),
    ];

    fn error_slot(&mut self) -> &mut Option<String> {
        &mut self.error
    }
}

impl ListRecord for Tx {
    fn presence_marker(&self) -> &str {
        &self.input_txid
    }
}

impl ErrorEnvelope for Tx {
    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Status of the deposit made to an address.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TxStatus {
    /// Deposit state.
    pub status: TxState,
    /// Deposit address that was looked up.
    pub address: String,
    /// Withdrawal address.
    pub withdrawal_address: String,
    /// Amount deposited.
    pub incoming_amount: f64,
    /// Currency deposited.
    pub incoming_coin: String,
    /// Amount sent to the withdrawal address.
    pub outgoing_amount: f64,
    /// Currency sent to the withdrawal address.
    pub outgoing_coin: String,
    /// Transaction id of the payout.
    pub txid: String,
    /// Error reported by the service, if any.
    pub error: Option<String>,
}

impl Record for TxStatus {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::new("status", |status, raw| {
            status.status = TxState::from_status(raw);
            Ok(())
        }),
        FieldSpec::new("address", |status, raw| {
            status.address = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("withdraw", |status, raw| {
            status.withdrawal_address = raw.to_string();
            Ok(())
        }),
        // The wire names are swapped: `incomingCoin` carries the amount and
        // `incomingType` the currency.
        FieldSpec::new("incomingCoin", |status, raw| {
            status.incoming_amount = coerce::float("incomingCoin", raw)?;
            Ok(())
        }),
        FieldSpec::new("incomingType", |status, raw| {
            status.incoming_coin = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("outgoingCoin", |status, raw| {
            status.outgoing_amount = coerce::float("outgoingCoin", raw)?;
            Ok(())
        }),
        FieldSpec::new("outgoingType", |status, raw| {
            status.outgoing_coin = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("transaction", |status, raw| {
            status.txid = raw.to_string();
            Ok(())
        }),
    ];

    fn error_slot(&mut self) -> &mut Option<String> {
        &mut self.error
    }
}

impl ErrorEnvelope for TxStatus {
    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// A recently completed exchange.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecentTx {
    /// Currency sent to the exchange.
    pub currency_input: String,
    /// Currency requested from the exchange.
    pub currency_output: String,
    /// Amount sent to the withdrawal address.
    pub amount: f64,
    /// Unix timestamp of the exchange, in seconds.
    pub timestamp: f64,
    /// Error reported by the service, if any.
    pub error: Option<String>,
}

impl Record for RecentTx {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::new("curIn", |tx, raw| {
            tx.currency_input = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("curOut", |tx, raw| {
            tx.currency_output = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("amount", |tx, raw| {
            tx.amount = coerce::float("amount", raw)?;
            Ok(())
        }),
        FieldSpec::new("timestamp", |tx, raw| {
            tx.timestamp = coerce::float("timestamp", raw)?;
            Ok(())
        }),
    ];

    fn error_slot(&mut self) -> &mut Option<String> {
        &mut self.error
    }
}

impl ListRecord for RecentTx {
    fn presence_marker(&self) -> &str {
        &self.currency_input
    }
}

impl ErrorEnvelope for RecentTx {
    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Whether a deposit address is still waiting for funds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeStatus {
    /// The address still accepts a deposit.
    Pending,
    /// The deposit window has closed.
    #[default]
    Expired,
}

impl TimeStatus {
    /// Decode the wire value: `"pending"` or anything else.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "pending" => Self::Pending,
            _ => Self::Expired,
        }
    }
}

/// Time left to deposit to an address.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeRemaining {
    /// Deposit window state.
    pub status: TimeStatus,
    /// Seconds until the deposit window closes; `0` once expired.
    pub seconds_remaining: f64,
    /// Error reported by the service, if any.
    pub error: Option<String>,
}

impl Record for TimeRemaining {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::new("status", |remaining, raw| {
            remaining.status = TimeStatus::from_wire(raw);
            Ok(())
        }),
        FieldSpec::new("seconds_remaining", |remaining, raw| {
            remaining.seconds_remaining = coerce::float("seconds_remaining", raw)?;
            Ok(())
        }),
    ];

    fn error_slot(&mut self) -> &mut Option<String> {
        &mut self.error
    }
}

impl ErrorEnvelope for TimeRemaining {
    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Result of validating an address for a coin.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidateAddress {
    /// Whether the address is valid for the coin.
    pub is_valid: bool,
    /// Why the address is invalid, when it is not.
    pub error: Option<String>,
}

impl Record for ValidateAddress {
    const FIELDS: &'static [FieldSpec<Self>] = &[FieldSpec::new("isValid", |result, raw| {
        result.is_valid = coerce::flag(raw);
        Ok(())
    })];

    fn error_slot(&mut self) -> &mut Option<String> {
        &mut self.error
    }
}

impl ErrorEnvelope for ValidateAddress {
    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
