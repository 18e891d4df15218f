//! Single-object mapping.

use crate::error::ShapeShiftError;
use crate::mapping::{ERROR_FIELD, Record, Token, TokenStream};

/// Map a JSON document onto one record.
///
/// Consumes the stream to its end. Fields of nested objects are mapped as if
/// they were top-level, which covers wrappers such as `{"success": {...}}`.
/// Unknown fields are skipped; `null` values leave the field at its default.
pub fn map_record<R: Record>(tokens: &mut TokenStream) -> Result<R, ShapeShiftError> {
    let mut record = R::default();
    while let Some(token) = tokens.advance() {
        dispatch(&mut record, token, tokens)?;
    }
    Ok(record)
}

/// Apply one token to `record`, pulling the field value from `tokens` when the
/// token names a known field.
pub(crate) fn dispatch<R: Record>(
    record: &mut R,
    token: Token,
    tokens: &mut TokenStream,
) -> Result<(), ShapeShiftError> {
    let Token::FieldName(name) = token else {
        return Ok(());
    };

    if let Some(spec) = R::field(&name) {
        if let Some(raw) = take_scalar(tokens) {
            (spec.apply)(record, &raw)?;
        }
    } else if name == ERROR_FIELD {
        if let Some(raw) = take_scalar(tokens) {
            *record.error_slot() = Some(raw);
        }
    }
    Ok(())
}

/// Consume the next token if it is a scalar.
///
/// Objects and arrays are left in the stream so the caller keeps track of
/// structure; a `null` is consumed and reported as absent.
fn take_scalar(tokens: &mut TokenStream) -> Option<String> {
    match tokens.peek() {
        Some(Token::Scalar(_)) => match tokens.advance() {
            Some(Token::Scalar(raw)) => raw,
            _ => None,
        },
        _ => None,
    }
}
