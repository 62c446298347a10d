//!
//! ## Identifiers
//!
//! Bare words: object keys without quotes,
//! and the keywords `true`, `false` and `null`.
//!

use finl_unicode::categories::{CharacterCategories, MinorCategory};
use json5_codec_macros::Spanned;

use crate::{
    common::Span,
    lexing::{LexError, LexT, SourceStream},
};

///
/// What a bare word turns out to be.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    True,
    False,
    Null,
}

#[derive(Debug, Clone, Spanned)]
pub struct Identifier {
    span: Span,
    name: String,
}

impl Identifier {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_name(self) -> String {
        self.name
    }

    ///
    /// Keywords are case-sensitive, so `True` is just an identifier.
    ///
    pub fn keyword(&self) -> Option<Keyword> {
        match self.name.as_str() {
            "true" => Some(Keyword::True),
            "false" => Some(Keyword::False),
            "null" => Some(Keyword::Null),
            _ => None,
        }
    }
}

fn is_letter(ch: &char) -> bool {
    use MinorCategory::*;
    matches!(ch.get_minor_category(), Lu | Ll | Lt | Lm | Lo)
}

///
/// Any Unicode letter, `_` or `$`.
///
pub fn is_identifier_start(ch: &char) -> bool {
    matches!(ch, '_' | '$') || is_letter(ch)
}

///
/// Anything allowed at the start, plus decimal digits.
///
pub fn is_identifier_part(ch: &char) -> bool {
    is_identifier_start(ch) || matches!(ch.get_minor_category(), MinorCategory::Nd)
}

impl LexT for Identifier {
    fn peek(input: &SourceStream) -> bool {
        input.upcoming(is_identifier_start)
    }

    fn lex(input: &mut SourceStream) -> Result<Self, LexError> {
        let start = input.loc();
        let (span, chars) = input
            .take_while(is_identifier_part)
            .unwrap_or_else(|| (Span::from(start), vec![]));

        Ok(Self {
            span,
            name: chars.into_iter().collect(),
        })
    }
}
