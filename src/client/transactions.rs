//! Transaction lookups, history and address validation.

use crate::client::{ShapeShiftClient, endpoint_path};
use crate::error::ShapeShiftError;
use crate::transport::Transport;
use crate::transport::endpoints::{
    RECENT_TX, TIME_REMAINING, TX_BY_ADDRESS, TX_BY_API_KEY, TX_STATUS, VALIDATE_ADDRESS,
};
use crate::types::{RecentTx, TimeRemaining, Tx, TxStatus, ValidateAddress};

/// Largest number of recent transactions the exchange will return.
pub const RECENT_TX_MAX: u32 = 50;

impl<T: Transport> ShapeShiftClient<T> {
    /// Get the most recent exchanges, newest first.
    ///
    /// `max` must be between 1 and [`RECENT_TX_MAX`]; anything else fails
    /// with [`ShapeShiftError::Validation`] without sending a request.
    ///
    /// A service `error` body (such as an unknown key) also comes back as an
    /// empty list, not as an error.
    pub async fn get_recent_transactions(&self, max: u32) -> Result<Vec<RecentTx>, ShapeShiftError> {
        if !(1..=RECENT_TX_MAX).contains(&max) {
            return Err(ShapeShiftError::Validation(format!(
                "max must be between 1 and {RECENT_TX_MAX}, got {max}"
            )));
        }
        self.get_list(&format!("{RECENT_TX}/{max}")).await
    }

    /// Get the time left to send a deposit to a fixed-amount address.
    pub async fn get_time_remaining(&self, address: &str) -> Result<TimeRemaining, ShapeShiftError> {
        self.get_record(&endpoint_path(TIME_REMAINING, &[("address", address)])?)
            .await
    }

    /// Get the status of the most recent deposit to an address.
    pub async fn get_transaction_status(&self, address: &str) -> Result<TxStatus, ShapeShiftError> {
        self.get_record(&endpoint_path(TX_STATUS, &[("address", address)])?)
            .await
    }

    /// List every transaction made with an affiliate private key.
    ///
    /// A service `error` body (such as an unknown key) also comes back as an
    /// empty list, not as an error.
    pub async fn get_transactions_by_api_key(
        &self,
        private_key: &str,
    ) -> Result<Vec<Tx>, ShapeShiftError> {
        self.get_list(&endpoint_path(TX_BY_API_KEY, &[("private key", private_key)])?)
            .await
    }

    /// List the transactions made with an affiliate private key that paid out
    /// to `address`.
    ///
    /// A service `error` body (such as an unknown key) also comes back as an
    /// empty list, not as an error.
    pub async fn get_transactions_by_address(
        &self,
        address: &str,
        private_key: &str,
    ) -> Result<Vec<Tx>, ShapeShiftError> {
        let path = endpoint_path(
            TX_BY_ADDRESS,
            &[("address", address), ("private key", private_key)],
        )?;
        self.get_list(&path).await
    }

    /// [`get_transactions_by_api_key`](Self::get_transactions_by_api_key)
    /// with the configured affiliate keys.
    pub async fn get_affiliate_transactions(&self) -> Result<Vec<Tx>, ShapeShiftError> {
        let keys = self.require_affiliate()?;
        self.get_transactions_by_api_key(keys.expose_private_key())
            .await
    }

    /// [`get_transactions_by_address`](Self::get_transactions_by_address)
    /// with the configured affiliate keys.
    pub async fn get_affiliate_transactions_to(
        &self,
        address: &str,
    ) -> Result<Vec<Tx>, ShapeShiftError> {
        let keys = self.require_affiliate()?;
        self.get_transactions_by_address(address, keys.expose_private_key())
            .await
    }

    /// Check whether `address` is a valid deposit address for `symbol`.
    pub async fn validate_address(
        &self,
        address: &str,
        symbol: &str,
    ) -> Result<ValidateAddress, ShapeShiftError> {
        let path = endpoint_path(VALIDATE_ADDRESS, &[("address", address), ("symbol", symbol)])?;
        self.get_record(&path).await
    }
}
