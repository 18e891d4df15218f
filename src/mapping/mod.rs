//! Table-driven mapping of JSON responses onto typed records.
//!
//! Every record type declares a table of [`FieldSpec`]s: the wire name of a
//! field and a setter that stores the raw scalar text into the record. The
//! mapper walks a [`TokenStream`] and applies the table; it tolerates unknown
//! fields, any field order and an optional `error` field.
//!
//! - [`map_record`] maps a single JSON object.
//! - [`map_list`] splits a JSON array (or keyed object) into one record per element.
//!
//! ```rust
//! use shapeshift_api_client::mapping::{map_record, TokenStream};
//! use shapeshift_api_client::types::TradingRate;
//!
//! let mut tokens = TokenStream::open(r#"{"pair":"btc_ltc","rate":"70.1234"}"#).unwrap();
//! let rate: TradingRate = map_record(&mut tokens).unwrap();
//! assert_eq!(rate.pair, "btc_ltc");
//! assert_eq!(rate.rate, 70.1234);
//! ```

pub mod coerce;
mod list;
mod record;
mod tokens;

pub use list::map_list;
pub use record::map_record;
pub use tokens::{Token, TokenStream};

use crate::error::{ErrorEnvelope, ShapeShiftError};

/// Wire name of the service error field.
pub const ERROR_FIELD: &str = "error";

/// Stores one raw scalar into a record.
pub type Setter<R> = fn(&mut R, &str) -> Result<(), ShapeShiftError>;

/// A wire field name and the setter that populates it.
pub struct FieldSpec<R> {
    /// Wire name, compared case-sensitively.
    pub name: &'static str,
    /// Setter invoked with the raw scalar text.
    pub apply: Setter<R>,
}

impl<R> FieldSpec<R> {
    /// Create a field spec.
    pub const fn new(name: &'static str, apply: Setter<R>) -> Self {
        Self { name, apply }
    }
}

impl<R> std::fmt::Debug for FieldSpec<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSpec").field("name", &self.name).finish()
    }
}

/// A record that can be populated by the mapper.
///
/// Implementations start from [`Default`] (empty strings, `0.0`, the default
/// enum variant) and are filled in field by field.
pub trait Record: Default + ErrorEnvelope + 'static {
    /// The field table for this record type.
    ///
    /// Names should be unique; when they are not, only the first entry is used.
    const FIELDS: &'static [FieldSpec<Self>];

    /// Slot for a service `error` field that has no table entry.
    fn error_slot(&mut self) -> &mut Option<String>;

    /// Look up the table entry for a wire field name.
    fn field(name: &str) -> Option<&'static FieldSpec<Self>> {
        Self::FIELDS.iter().find(|spec| spec.name == name)
    }
}

/// A record that can appear as an element of a list response.
pub trait ListRecord: Record {
    /// The presence marker: the splitter considers an element complete only
    /// when this value is non-empty.
    fn presence_marker(&self) -> &str;
}
