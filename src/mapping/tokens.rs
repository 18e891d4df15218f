//! Pull-based token cursor over a JSON document.

use std::iter::Peekable;
use std::vec::IntoIter;

use serde_json::Value;

use crate::error::ShapeShiftError;

/// A JSON lexical event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `{`
    ObjectStart,
    /// `}`
    ObjectEnd,
    /// `[`
    ArrayStart,
    /// `]`
    ArrayEnd,
    /// An object key.
    FieldName(String),
    /// A string, number or boolean as raw text, or `None` for `null`.
    Scalar(Option<String>),
}

/// Forward-only cursor over the tokens of one JSON document.
///
/// The document is parsed up front and flattened in document order. Numbers
/// keep their literal text and booleans surface as `"true"`/`"false"`;
/// converting them is left to the mapper.
///
/// ```rust
/// use shapeshift_api_client::mapping::{Token, TokenStream};
///
/// let mut tokens = TokenStream::open(r#"{"pair":"btc_ltc"}"#).unwrap();
/// assert_eq!(tokens.advance(), Some(Token::ObjectStart));
/// assert_eq!(tokens.advance(), Some(Token::FieldName("pair".into())));
/// assert_eq!(tokens.advance(), Some(Token::Scalar(Some("btc_ltc".into()))));
/// assert_eq!(tokens.advance(), Some(Token::ObjectEnd));
/// assert_eq!(tokens.advance(), None);
/// ```
#[derive(Debug)]
pub struct TokenStream {
    tokens: Peekable<IntoIter<Token>>,
}

impl TokenStream {
    /// Tokenize a JSON document.
    ///
    /// Fails with [`ShapeShiftError::MalformedDocument`] if `text` is not
    /// well-formed JSON.
    pub fn open(text: &str) -> Result<Self, ShapeShiftError> {
        let document: Value = serde_json::from_str(text).map_err(ShapeShiftError::MalformedDocument)?;
        let mut tokens = Vec::new();
        flatten(document, &mut tokens);
        Ok(Self {
            tokens: tokens.into_iter().peekable(),
        })
    }

    /// Consume the next token, or `None` at end of stream.
    pub fn advance(&mut self) -> Option<Token> {
        self.tokens.next()
    }

    /// Look at the next token without consuming it.
    pub fn peek(&mut self) -> Option<&Token> {
        self.tokens.peek()
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

fn flatten(value: Value, out: &mut Vec<Token>) {
    match value {
        Value::Null => out.push(Token::Scalar(None)),
        Value::Bool(flag) => out.push(Token::Scalar(Some(flag.to_string()))),
        Value::Number(number) => out.push(Token::Scalar(Some(number.to_string()))),
        Value::String(text) => out.push(Token::Scalar(Some(text))),
        Value::Array(items) => {
            out.push(Token::ArrayStart);
            for item in items {
                flatten(item, out);
            }
            out.push(Token::ArrayEnd);
        }
        Value::Object(fields) => {
            out.push(Token::ObjectStart);
            for (name, field) in fields {
                out.push(Token::FieldName(name));
                flatten(field, out);
            }
            out.push(Token::ObjectEnd);
        }
    }
}
