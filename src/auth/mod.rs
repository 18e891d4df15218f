//! Affiliate keys.
//!
//! ShapeShift identifies affiliates by a public key sent with shift requests,
//! and lets them list their own transactions with a private key. Neither is
//! needed for the public endpoints.

mod keys;

pub use keys::{AffiliateKeys, PRIVATE_KEY_VAR, PUBLIC_KEY_VAR};
