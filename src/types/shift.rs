//! Shifts, quotes and the requests that create them.

use serde::Serialize;

use crate::error::ErrorEnvelope;
use crate::mapping::{FieldSpec, Record, coerce};
use crate::types::serde_helpers::display_string;

/// Result of opening a shift.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShiftResult {
    /// Address to send the deposit to (or memo for BTS/BITUSD).
    pub deposit_address: String,
    /// Symbol of the deposit coin.
    pub deposit_coin: String,
    /// Withdrawal address, as submitted.
    pub withdrawal_address: String,
    /// Symbol of the withdrawal coin.
    pub withdrawal_coin: String,
    /// Ripple destination tag, if the deposit coin is XRP.
    pub ripple_tag: String,
    /// NXT RS-address public key, if the deposit coin is NXT.
    pub nxt_rs_address: String,
    /// Affiliate public key attached to the shift.
    pub api_key: String,
    /// Error reported by the service, if any.
    pub error: Option<String>,
}

impl Record for ShiftResult {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::new("deposit", |shift, raw| {
            shift.deposit_address = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("depositType", |shift, raw| {
            shift.deposit_coin = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("withdrawal", |shift, raw| {
            shift.withdrawal_address = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("withdrawalType", |shift, raw| {
            shift.withdrawal_coin = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("public", |shift, raw| {
            shift.nxt_rs_address = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("xrpDestTag", |shift, raw| {
            shift.ripple_tag = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("apiPubKey", |shift, raw| {
            shift.api_key = raw.to_string();
            Ok(())
        }),
    ];

    fn error_slot(&mut self) -> &mut Option<String> {
        &mut self.error
    }
}

impl ErrorEnvelope for ShiftResult {
    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// A quote for an exchange, without committing to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuoteRequest {
    /// Pair token.
    pub pair: String,
    /// Amount of the output coin that would be received.
    pub withdrawal_amount: f64,
    /// Exact amount of the input coin to send.
    pub deposit_amount: f64,
    /// Unix timestamp at which the quote expires.
    pub expiration: f64,
    /// Rate the exchange would honour.
    pub quoted_rate: f64,
    /// Miner fee for the outgoing transaction.
    pub miner_fee: f64,
    /// Error reported by the service, if any.
    pub error: Option<String>,
}

impl Record for QuoteRequest {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::new("pair", |quote, raw| {
            quote.pair = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("withdrawalAmount", |quote, raw| {
            quote.withdrawal_amount = coerce::float("withdrawalAmount", raw)?;
            Ok(())
        }),
        FieldSpec::new("depositAmount", |quote, raw| {
            quote.deposit_amount = coerce::float("depositAmount", raw)?;
            Ok(())
        }),
        FieldSpec::new("expiration", |quote, raw| {
            quote.expiration = coerce::float("expiration", raw)?;
            Ok(())
        }),
        FieldSpec::new("quotedRate", |quote, raw| {
            quote.quoted_rate = coerce::float("quotedRate", raw)?;
            Ok(())
        }),
        FieldSpec::new("minerFee", |quote, raw| {
            quote.miner_fee = coerce::float("minerFee", raw)?;
            Ok(())
        }),
    ];

    fn error_slot(&mut self) -> &mut Option<String> {
        &mut self.error
    }
}

impl ErrorEnvelope for QuoteRequest {
    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// A pending fixed-amount exchange.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendAmountRequest {
    /// Pair token.
    pub pair: String,
    /// Withdrawal address, as submitted.
    pub withdrawal_address: String,
    /// Amount of the output coin that will be received.
    pub withdrawal_amount: f64,
    /// Address to send the deposit to (or memo for BTS/BITUSD).
    pub deposit_address: String,
    /// Exact amount of the input coin to send.
    pub deposit_amount: f64,
    /// Unix timestamp at which the offer expires.
    pub expiration: f64,
    /// Rate the exchange will honour.
    pub quoted_rate: f64,
    /// Affiliate public key attached to the exchange.
    pub api_key: String,
    /// Error reported by the service, if any.
    pub error: Option<String>,
}

impl Record for SendAmountRequest {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::new("pair", |send, raw| {
            send.pair = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("withdrawal", |send, raw| {
            send.withdrawal_address = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("withdrawalAmount", |send, raw| {
            send.withdrawal_amount = coerce::float("withdrawalAmount", raw)?;
            Ok(())
        }),
        FieldSpec::new("deposit", |send, raw| {
            send.deposit_address = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("depositAmount", |send, raw| {
            send.deposit_amount = coerce::float("depositAmount", raw)?;
            Ok(())
        }),
        FieldSpec::new("expiration", |send, raw| {
            send.expiration = coerce::float("expiration", raw)?;
            Ok(())
        }),
        FieldSpec::new("quotedRate", |send, raw| {
            send.quoted_rate = coerce::float("quotedRate", raw)?;
            Ok(())
        }),
        FieldSpec::new("apiPubKey", |send, raw| {
            send.api_key = raw.to_string();
            Ok(())
        }),
    ];

    fn error_slot(&mut self) -> &mut Option<String> {
        &mut self.error
    }
}

impl ErrorEnvelope for SendAmountRequest {
    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Result of cancelling a pending exchange.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CancelResult {
    /// Whether the service confirmed the cancellation.
    pub success: bool,
    /// Confirmation message.
    pub message: String,
    /// Error reported by the service, if any.
    pub error: Option<String>,
}

impl Record for CancelResult {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::new("success", |result, raw| {
            result.success = true;
            result.message = raw.to_string();
            Ok(())
        }),
        FieldSpec::new("error", |result, raw| {
            result.success = false;
            result.error = Some(raw.to_string());
            Ok(())
        }),
    ];

    fn error_slot(&mut self) -> &mut Option<String> {
        &mut self.error
    }
}

impl ErrorEnvelope for CancelResult {
    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Outcome of an email receipt request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailStatus {
    /// The receipt was sent.
    Success,
    /// The receipt was not sent.
    #[default]
    Failure,
}

impl EmailStatus {
    /// Decode the wire value: `"success"` or anything else.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "success" => Self::Success,
            _ => Self::Failure,
        }
    }
}

/// Result of requesting an email receipt.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmailReceipt {
    /// Whether the receipt was sent.
    pub status: EmailStatus,
    /// Message from the service.
    pub message: String,
    /// Error reported by the service, if any.
    pub error: Option<String>,
}

impl Record for EmailReceipt {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::new("status", |receipt, raw| {
            receipt.status = EmailStatus::from_wire(raw);
            Ok(())
        }),
        FieldSpec::new("message", |receipt, raw| {
            receipt.message = raw.to_string();
            Ok(())
        }),
    ];

    fn error_slot(&mut self) -> &mut Option<String> {
        &mut self.error
    }
}

impl ErrorEnvelope for EmailReceipt {
    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

// Request bodies.

/// Body of a `sendamount` request.
///
/// Without a withdrawal address this is a quote request; with one it opens a
/// fixed-amount exchange.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendAmountParams {
    /// Amount of the output coin to receive.
    #[serde(with = "display_string")]
    pub amount: f64,
    /// Address to send the output coin to.
    #[serde(rename = "withdrawal", skip_serializing_if = "String::is_empty")]
    pub withdrawal_address: String,
    /// Pair token.
    pub pair: String,
    /// Address to return the deposit to if the exchange fails.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub return_address: String,
    /// Ripple destination tag for the payout.
    #[serde(rename = "destTag", skip_serializing_if = "String::is_empty")]
    pub ripple_tag: String,
    /// NXT RS-address for funding a new NXT account.
    #[serde(rename = "rsAddress", skip_serializing_if = "String::is_empty")]
    pub nxt_rs_address: String,
    /// Affiliate public key.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_key: String,
}

impl SendAmountParams {
    /// Create a quote request: no withdrawal address.
    pub fn quote(pair: impl Into<String>, amount: f64) -> Self {
        Self {
            amount,
            pair: pair.into(),
            ..Default::default()
        }
    }

    /// Create a fixed-amount exchange request.
    pub fn new(amount: f64, withdrawal_address: impl Into<String>, pair: impl Into<String>) -> Self {
        Self {
            amount,
            withdrawal_address: withdrawal_address.into(),
            pair: pair.into(),
            ..Default::default()
        }
    }

    /// Set the return address.
    pub fn return_address(mut self, address: impl Into<String>) -> Self {
        self.return_address = address.into();
        self
    }

    /// Set the Ripple destination tag.
    pub fn ripple_tag(mut self, tag: impl Into<String>) -> Self {
        self.ripple_tag = tag.into();
        self
    }

    /// Set the NXT RS-address.
    pub fn nxt_rs_address(mut self, address: impl Into<String>) -> Self {
        self.nxt_rs_address = address.into();
        self
    }

    /// Set the affiliate public key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }
}

/// Body of a `shift` request.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftParams {
    /// Address to send the output coin to.
    #[serde(rename = "withdrawal")]
    pub withdrawal_address: String,
    /// Pair token.
    pub pair: String,
    /// Address to return the deposit to if the exchange fails.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub return_address: String,
    /// Ripple destination tag for the payout.
    #[serde(rename = "destTag", skip_serializing_if = "String::is_empty")]
    pub ripple_tag: String,
    /// NXT RS-address for funding a new NXT account.
    #[serde(rename = "rsAddress", skip_serializing_if = "String::is_empty")]
    pub nxt_rs_address: String,
    /// Affiliate public key.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_key: String,
}

impl ShiftParams {
    /// Create a shift request.
    pub fn new(withdrawal_address: impl Into<String>, pair: impl Into<String>) -> Self {
        Self {
            withdrawal_address: withdrawal_address.into(),
            pair: pair.into(),
            ..Default::default()
        }
    }

    /// Set the return address.
    pub fn return_address(mut self, address: impl Into<String>) -> Self {
        self.return_address = address.into();
        self
    }

    /// Set the Ripple destination tag.
    pub fn ripple_tag(mut self, tag: impl Into<String>) -> Self {
        self.ripple_tag = tag.into();
        self
    }

    /// Set the NXT RS-address.
    pub fn nxt_rs_address(mut self, address: impl Into<String>) -> Self {
        self.nxt_rs_address = address.into();
        self
    }

    /// Set the affiliate public key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }
}

/// Body of a `cancelpending` request.
#[derive(Debug, Clone, Serialize)]
pub struct CancelParams<'a> {
    /// Deposit address of the pending exchange.
    pub address: &'a str,
}

/// Body of a `mail` request.
#[derive(Debug, Clone, Serialize)]
pub struct EmailParams<'a> {
    /// Address to send the receipt to.
    pub email: &'a str,
    /// Transaction id of the payout to the user.
    pub txid: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_body_omits_withdrawal() {
        let body = serde_json::to_value(SendAmountParams::quote("btc_ltc", 1.5)).unwrap();
        assert_eq!(body, serde_json::json!({"amount": "1.5", "pair": "btc_ltc"}));
    }

    #[test]
    fn test_send_amount_body_optional_fields() {
        let params = SendAmountParams::new(2.0, "Lxyz", "btc_ltc")
            .return_address("1abc")
            .api_key("pub");
        let body = serde_json::to_value(params).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "amount": "2",
                "withdrawal": "Lxyz",
                "pair": "btc_ltc",
                "returnAddress": "1abc",
                "apiKey": "pub"
            })
        );
    }

    #[test]
    fn test_shift_body() {
        let params = ShiftParams::new("Lxyz", "btc_xrp").ripple_tag("42").nxt_rs_address("NXT-1");
        let body = serde_json::to_value(params).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "withdrawal": "Lxyz",
                "pair": "btc_xrp",
                "destTag": "42",
                "rsAddress": "NXT-1"
            })
        );
    }

    #[test]
    fn test_email_status_vocabulary() {
        assert_eq!(EmailStatus::from_wire("success"), EmailStatus::Success);
        assert_eq!(EmailStatus::from_wire("failed"), EmailStatus::Failure);
    }
}
