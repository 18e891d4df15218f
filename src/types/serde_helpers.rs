//! Serde helpers for ShapeShift request bodies.

use std::fmt::Display;

use serde::Serializer;

/// Serialize a value as a string using its `Display` implementation.
///
/// ShapeShift expects amounts as strings in request bodies.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use shapeshift_api_client::types::serde_helpers::display_string;
///
/// #[derive(Serialize)]
/// struct Body {
///     #[serde(with = "display_string")]
///     amount: f64,
/// }
///
/// let json = serde_json::to_string(&Body { amount: 0.25 }).unwrap();
/// assert_eq!(json, r#"{"amount":"0.25"}"#);
/// ```
pub mod display_string {
    use super::*;

    /// Serialize using the Display trait.
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }
}
