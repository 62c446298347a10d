//!
//! ## Numeric literals
//!
//! Only sliced here: the raw lexeme is kept, and decoding
//! into an integer or float happens when parsing.
//!

use json5_codec_macros::Spanned;

use crate::{
    common::Span,
    lexing::{LexError, LexT, SourceStream},
};

///
/// The raw text of a number, such as `-12`, `3.5e-2` or `0xFF`.
///
#[derive(Debug, Clone, Spanned)]
pub struct NumericLiteral {
    span: Span,
    raw: String,
}

impl NumericLiteral {
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

///
/// Does this lexeme use the `0x` / `0X` prefix?
///
pub(crate) fn is_hex_lexeme(raw: &str) -> bool {
    raw.starts_with("0x") || raw.starts_with("0X")
}

impl LexT for NumericLiteral {
    fn peek(input: &SourceStream) -> bool {
        input.upcoming(|ch: &char| ch.is_ascii_digit() || *ch == '-')
    }

    fn lex(input: &mut SourceStream) -> Result<Self, LexError> {
        let start = input.loc();

        if input.upcoming("0x") || input.upcoming("0X") {
            let _ = input.take();
            let _ = input.take();
            let _ = input.take_while(char::is_ascii_hexdigit);
        } else {
            lex_decimal(input);
        }

        Ok(Self {
            span: Span::new(start.0..input.loc().0),
            raw: input.text_since(start),
        })
    }
}

fn lex_decimal(input: &mut SourceStream) {
    if input.upcoming('-') {
        let _ = input.take();
    }

    let _ = input.take_while(char::is_ascii_digit);

    if input.upcoming('.') {
        let _ = input.take();
        let _ = input.take_while(char::is_ascii_digit);
    }

    if input.upcoming(|ch: &char| matches!(ch, 'e' | 'E')) {
        let _ = input.take();
        if input.upcoming(|ch: &char| matches!(ch, '+' | '-')) {
            let _ = input.take();
        }
        let _ = input.take_while(char::is_ascii_digit);
    }
}
