//!
//! ## json5-codec
//!
//! Reading and writing [JSON5](https://json5.org/).
//!
//! ```
//! use json5_codec::{parse, marshal_indent, Value};
//!
//! let value = parse("{ name: 'John Doe', /* comment */ tags: ['a', 0x10,], }").unwrap();
//! assert_eq!(value.get("name"), Some(&Value::from("John Doe")));
//!
//! let text = marshal_indent(&value, "  ").unwrap();
//! assert_eq!(parse(&text).unwrap(), value);
//! ```
//!
//! On top of standard JSON5, raw line breaks are allowed
//! inside quoted strings, and `\u{…}`-style escapes are understood.
//!

pub mod common;
pub mod emit;
pub mod error;
pub mod lexing;
pub mod syntax;
pub mod value;

pub use crate::{
    common::{LineColumn, Loc, Source, Span, Spanned},
    emit::{marshal, marshal_indent},
    error::Error,
    lexing::{LexError, LexErrorKind, Token, TokenKind},
    value::{Map, Value},
};

///
/// Parse JSON5 text into a [Value].
///
/// Empty input is [Value::Null].
///
pub fn parse(text: &str) -> Result<Value, Error> {
    syntax::parse(&Source::new(text))
}

///
/// Split JSON5 text into [Token]s, comments included.
///
/// This never fails: anything that can't be lexed
/// becomes a [TokenKind::Unknown] token.
///
pub fn tokenize(text: &str) -> Vec<Token> {
    lexing::tokenize(&Source::new(text))
}
