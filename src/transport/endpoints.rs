//! ShapeShift REST API endpoint constants.

/// Base URL for the ShapeShift REST API.
pub const SHAPESHIFT_BASE_URL: &str = "https://shapeshift.io";

/// List all supported coins.
pub const GET_COINS: &str = "/getcoins";
/// Recent exchanges, `/recenttx/{max}`.
pub const RECENT_TX: &str = "/recenttx";
/// Deposit limit for a pair, `/limit/{pair}`.
pub const LIMIT: &str = "/limit";
/// Market info for a pair, `/marketinfo/{pair}`.
pub const MARKET_INFO: &str = "/marketinfo";
/// Exchange rate for a pair, `/rate/{pair}`.
pub const RATE: &str = "/rate";
/// Deposit window for an address, `/timeremaining/{address}`.
pub const TIME_REMAINING: &str = "/timeremaining";
/// Deposit status for an address, `/txStat/{address}`.
pub const TX_STATUS: &str = "/txStat";
/// Transactions for an affiliate key, `/txbyapikey/{apiKey}`.
pub const TX_BY_API_KEY: &str = "/txbyapikey";
/// Transactions to an address, `/txbyaddress/{address}/{apiKey}`.
pub const TX_BY_ADDRESS: &str = "/txbyaddress";
/// Validate an address, `/validateaddress/{address}/{symbol}`.
pub const VALIDATE_ADDRESS: &str = "/validateaddress";
/// Cancel a pending exchange (POST).
pub const CANCEL_PENDING: &str = "/cancelpending";
/// Request an email receipt (POST).
pub const MAIL: &str = "/mail";
/// Quote or open a fixed-amount exchange (POST).
pub const SEND_AMOUNT: &str = "/sendamount";
/// Open a shift (POST).
pub const SHIFT: &str = "/shift";
