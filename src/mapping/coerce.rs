//! Conversions from raw scalar text to field types.
//!
//! Enum fields are decoded by the record types themselves (see
//! [`CoinStatus::from_wire`](crate::types::CoinStatus::from_wire) and friends);
//! unknown text falls back to a default variant instead of failing.

use crate::error::ShapeShiftError;

/// Parse a numeric field as `f64`.
pub fn float(field: &'static str, raw: &str) -> Result<f64, ShapeShiftError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|source| ShapeShiftError::numeric(field, raw, source))
}

/// A boolean field is `true` only for the literal text `"true"`.
pub fn flag(raw: &str) -> bool {
    raw == "true"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float() {
        assert_eq!(float("rate", "70.1234").unwrap(), 70.1234);
        assert_eq!(float("limit", "1").unwrap(), 1.0);
        assert_eq!(float("minerFee", "1e-4").unwrap(), 0.0001);
        assert_eq!(float("min", " 0.5 ").unwrap(), 0.5);
    }

    #[test]
    fn test_float_failure_names_field() {
        match float("rate", "n/a").unwrap_err() {
            ShapeShiftError::NumericDecode { field, value, .. } => {
                assert_eq!(field, "rate");
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_flag_is_literal() {
        assert!(flag("true"));
        assert!(!flag("True"));
        assert!(!flag("false"));
        assert!(!flag("1"));
    }
}
