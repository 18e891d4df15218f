//! # ShapeShift Client
//!
//! An async Rust client library for the ShapeShift exchange REST API.
//!
//! ## Features
//!
//! - One typed method per exchange operation
//! - Table-driven response mapping that tolerates unknown fields and field order
//! - Coin catalog, trading pair derivation and per-pair aggregates
//! - Cancellation of in-flight and aggregate operations
//! - Pluggable transport with optional client-side rate limiting
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shapeshift_api_client::ShapeShiftClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ShapeShiftClient::new();
//!     let info = client.get_market_info_for("btc", "ltc").await?;
//!     println!("rate {} limit {} fee {}", info.rate, info.limit, info.miner_fee);
//!     Ok(())
//! }
//! ```
//!
//! ## Service errors
//!
//! The exchange reports failures such as an unknown pair as an `error` field
//! in an otherwise successful response. Those are returned as data on the
//! record; use [`ErrorEnvelope::into_result`] to turn them into errors.

pub mod aggregate;
pub mod auth;
pub mod cancel;
pub mod catalog;
pub mod client;
pub mod error;
pub mod mapping;
pub mod rate_limit;
pub mod transport;
pub mod types;

// Re-export commonly used types at crate root
pub use auth::AffiliateKeys;
pub use cancel::Cancellation;
pub use client::{ShapeShiftClient, ShapeShiftClientBuilder};
pub use error::{ErrorEnvelope, ShapeShiftError};
pub use types::TradingPair;

/// Result type alias using ShapeShiftError
pub type Result<T> = std::result::Result<T, ShapeShiftError>;
