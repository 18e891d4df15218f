//! Opening shifts, quotes, cancellation and email receipts.

use std::borrow::Cow;

use crate::client::ShapeShiftClient;
use crate::error::ShapeShiftError;
use crate::transport::Transport;
use crate::transport::endpoints::{CANCEL_PENDING, MAIL, SEND_AMOUNT, SHIFT};
use crate::types::{
    CancelParams, CancelResult, EmailParams, EmailReceipt, QuoteRequest, SendAmountParams,
    SendAmountRequest, ShiftParams, ShiftResult,
};

impl<T: Transport> ShapeShiftClient<T> {
    /// Open a shift: the exchange returns a deposit address for the input
    /// coin and pays out to the withdrawal address.
    ///
    /// The configured affiliate public key is attached unless `params`
    /// already carries one.
    pub async fn shift(&self, params: &ShiftParams) -> Result<ShiftResult, ShapeShiftError> {
        let params = match self.affiliate_key_for(&params.api_key) {
            Some(key) => Cow::Owned(params.clone().api_key(key)),
            None => Cow::Borrowed(params),
        };
        self.post_record(SHIFT, &*params).await
    }

    /// Open a fixed-amount exchange.
    ///
    /// The configured affiliate public key is attached unless `params`
    /// already carries one.
    pub async fn get_send_amount(
        &self,
        params: &SendAmountParams,
    ) -> Result<SendAmountRequest, ShapeShiftError> {
        let params = match self.affiliate_key_for(&params.api_key) {
            Some(key) => Cow::Owned(params.clone().api_key(key)),
            None => Cow::Borrowed(params),
        };
        self.post_record(SEND_AMOUNT, &*params).await
    }

    /// Ask what it would cost to receive `amount` of the output coin of
    /// `pair`, without opening an exchange.
    pub async fn request_quote(
        &self,
        pair: &str,
        amount: f64,
    ) -> Result<QuoteRequest, ShapeShiftError> {
        self.post_record(SEND_AMOUNT, &SendAmountParams::quote(pair, amount))
            .await
    }

    /// Cancel a pending fixed-amount exchange by its deposit address.
    pub async fn cancel_pending(&self, address: &str) -> Result<CancelResult, ShapeShiftError> {
        self.post_record(CANCEL_PENDING, &CancelParams { address })
            .await
    }

    /// Ask the exchange to email a receipt for a payout transaction.
    pub async fn request_email_receipt(
        &self,
        email: &str,
        txid: &str,
    ) -> Result<EmailReceipt, ShapeShiftError> {
        self.post_record(MAIL, &EmailParams { email, txid }).await
    }

    fn affiliate_key_for(&self, current: &str) -> Option<String> {
        if !current.is_empty() {
            return None;
        }
        self.affiliate.as_ref().map(|keys| keys.public_key.clone())
    }
}
