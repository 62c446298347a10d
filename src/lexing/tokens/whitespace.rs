//!
//! ## WhiteSpace
//! Empty space that doesn't contribute syntactically.
//!

use finl_unicode::categories::{CharacterCategories, MinorCategory};
use json5_codec_macros::Spanned;

use crate::{
    common::Span,
    lexing::{LexError, LexT, SourceStream},
};

///
/// A run of whitespace characters (line terminators included).
///
#[derive(Debug, Spanned)]
pub struct WhiteSpace {
    span: Span,
}

///
/// Is this character whitespace?
///
/// Space, tab, and the line terminators, along with the rest of
/// [Table 2, Section 7.2](https://262.ecma-international.org/5.1/#sec-7.2) of the ECMAScript specification.
///
pub fn is_whitespace(ch: &char) -> bool {
    use MinorCategory::Zs;

    match ch {
        ' ' | '\t' | '\n' | '\r' => true,
        '\u{000B}' | '\u{000C}' | '\u{00A0}' | '\u{FEFF}' | '\u{2028}' | '\u{2029}' => true,
        c if matches!(c.get_minor_category(), Zs) => true,
        _ => false,
    }
}

impl LexT for WhiteSpace {
    fn peek(input: &SourceStream) -> bool {
        input.upcoming(is_whitespace)
    }

    fn lex(input: &mut SourceStream) -> Result<Self, LexError> {
        let start = input.loc();
        let span = input
            .take_while(is_whitespace)
            .map(|(span, _)| span)
            .unwrap_or(Span::new(start.0..start.0));

        Ok(Self { span })
    }
}
