//!
//! ## Punctuators
//!
//! Pieces of punctuation: `{}[]:,`.
//!

use json5_codec_macros::Spanned;

use crate::{
    common::Span,
    lexing::{LexError, LexT, SourceStream},
};

///
/// `{ } [ ] : ,`
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Spanned)]
pub enum Punctuator {
    OpenBrace(Span),
    CloseBrace(Span),
    OpenBracket(Span),
    CloseBracket(Span),
    Colon(Span),
    Comma(Span),
}

impl Punctuator {
    pub fn as_char(&self) -> char {
        match self {
            Punctuator::OpenBrace(_) => '{',
            Punctuator::CloseBrace(_) => '}',
            Punctuator::OpenBracket(_) => '[',
            Punctuator::CloseBracket(_) => ']',
            Punctuator::Colon(_) => ':',
            Punctuator::Comma(_) => ',',
        }
    }
}

fn is_punctuator(ch: &char) -> bool {
    matches!(ch, '{' | '}' | '[' | ']' | ':' | ',')
}

impl LexT for Punctuator {
    fn peek(input: &SourceStream) -> bool {
        input.upcoming(is_punctuator)
    }

    fn lex(input: &mut SourceStream) -> Result<Self, LexError> {
        let start = input.loc();
        let taken = input.take();
        let span = Span::from(start);

        Ok(match taken {
            Some((_, '{')) => Self::OpenBrace(span),
            Some((_, '}')) => Self::CloseBrace(span),
            Some((_, '[')) => Self::OpenBracket(span),
            Some((_, ']')) => Self::CloseBracket(span),
            Some((_, ':')) => Self::Colon(span),
            Some((_, ',')) => Self::Comma(span),
            // Self::peek() -> one of the above is next.
            _ => unreachable!("punctuator lexed without peeking"),
        })
    }
}
