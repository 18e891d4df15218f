//! Splitting list responses into records.

use crate::error::ShapeShiftError;
use crate::mapping::ListRecord;
use crate::mapping::record::dispatch;
use crate::mapping::{Token, TokenStream};

/// Depth of the objects that start a new element: direct children of the
/// top-level array (or of a top-level keyed object such as `getcoins`).
///
/// Arrays nested below the top level are not split: every object inside them
/// maps onto the same element, later fields overwriting earlier ones. No
/// endpoint answers with that shape.
const ELEMENT_DEPTH: usize = 1;

/// Map a list response onto one record per element, in document order.
///
/// The stream carries no explicit "element complete" event, so boundaries are
/// inferred: each object that opens at element depth finishes the previous
/// record, and the last record is flushed at end of stream. Objects nested
/// deeper inside an element are mapped into that element.
///
/// A record is kept only if its [presence marker](ListRecord::presence_marker)
/// is non-empty. An element whose marker field is missing, `null` or `""` is
/// therefore dropped, and an empty array yields an empty `Vec`.
///
/// A bare `{"error": "..."}` body has no marker either, so a service error on
/// a list endpoint also yields an empty `Vec`; the message is not surfaced.
pub fn map_list<R: ListRecord>(tokens: &mut TokenStream) -> Result<Vec<R>, ShapeShiftError> {
    let mut records = Vec::new();
    let mut current = R::default();
    let mut depth = 0usize;

    while let Some(token) = tokens.advance() {
        match token {
            Token::ObjectStart => {
                if depth == ELEMENT_DEPTH && !current.presence_marker().is_empty() {
                    records.push(std::mem::take(&mut current));
                }
                depth += 1;
            }
            Token::ArrayStart => depth += 1,
            Token::ObjectEnd | Token::ArrayEnd => depth = depth.saturating_sub(1),
            other => dispatch(&mut current, other, tokens)?,
        }
    }

    if !current.presence_marker().is_empty() {
        records.push(current);
    }

    tracing::trace!(count = records.len(), "split list response");
    Ok(records)
}
