//!
//! ## String literals
//!
//! Quoted with either `"` or `'`.
//!
//! Unlike standard JSON5, raw line breaks are allowed inside
//! the quotes and are kept as they are.
//!

use json5_codec_macros::Spanned;

use crate::{
    common::Span,
    lexing::{LexError, LexErrorKind, LexT, SourceStream},
};

use super::escapes::unescape;

///
/// A quoted string, with its escapes already resolved.
///
#[derive(Debug, Clone, Spanned)]
pub struct QuotedString {
    span: Span,
    quote: char,
    value: String,
}

impl QuotedString {
    ///
    /// The decoded contents.
    ///
    pub fn value(&self) -> &str {
        &self.value
    }

    ///
    /// Either `"` or `'`.
    ///
    pub fn quote(&self) -> char {
        self.quote
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

fn is_quote(ch: &char) -> bool {
    matches!(ch, '"' | '\'')
}

impl LexT for QuotedString {
    fn peek(input: &SourceStream) -> bool {
        input.upcoming(is_quote)
    }

    fn lex(input: &mut SourceStream) -> Result<Self, LexError> {
        let start = input.loc();
        let Some((_, quote)) = input.take() else {
            return Err(input.error(start, LexErrorKind::Unterminated("string literal")));
        };

        let mut raw = vec![];
        loop {
            match input.take() {
                Some((_, ch)) if ch == quote => break,
                Some((_, '\\')) => {
                    // Keep the escape for `unescape`, but never
                    // let the escaped character close the string.
                    raw.push('\\');
                    if let Some((_, escaped)) = input.take() {
                        raw.push(escaped);
                    }
                }
                Some((_, ch)) => raw.push(ch),
                None => {
                    return Err(input.error(start, LexErrorKind::Unterminated("string literal")))
                }
            }
        }

        let span = Span::new(start.0..input.loc().0);
        let value = unescape(&raw).map_err(|kind| LexError::new(span, kind))?;

        Ok(Self { span, quote, value })
    }
}
