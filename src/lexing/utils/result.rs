use json5_codec_macros::Spanned;
use thiserror::Error;

use crate::common::Span;

///
/// What went wrong whilst lexing a token.
///
#[derive(Debug, Clone, Error, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    ///
    /// A `\u` or `\U` escape that is truncated, is not hex,
    /// or does not name a Unicode scalar value.
    ///
    #[error("invalid Unicode escape: {0}")]
    UnicodeEscape(String),

    ///
    /// A `\x` escape not followed by two hex digits.
    ///
    #[error("invalid hex escape: \\x{0}")]
    HexEscape(String),

    ///
    /// A backslash followed by a character with no escape meaning.
    ///
    #[error("invalid escape sequence: \\{0}")]
    UnknownEscape(char),

    ///
    /// A string literal or block comment still open at the end of input.
    ///
    #[error("unterminated {0}")]
    Unterminated(&'static str),
}

///
/// A lexing failure, and where it happened.
///
#[derive(Debug, Clone, Error, PartialEq, Eq, Hash, Spanned)]
#[error("{kind}")]
pub struct LexError {
    span: Span,
    kind: LexErrorKind,
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        Self { span, kind }
    }

    pub fn kind(&self) -> &LexErrorKind {
        &self.kind
    }
}

///
/// The result of attempting to lex token `L`
/// from a [super::SourceStream].
///
#[derive(Debug)]
pub enum LexResult<L> {
    ///
    /// Valid token.
    ///
    Lexed(L),

    ///
    /// An attempt was made to lex a token,
    /// but it did not fully abide by the lexical grammar.
    ///
    Errant(LexError),

    ///
    /// The token `L` was not found,
    /// so the lexing was skipped.
    ///
    Nothing,
}

impl<L> LexResult<L> {
    pub fn map<T>(self, f: impl FnOnce(L) -> T) -> LexResult<T> {
        match self {
            LexResult::Lexed(lexed) => LexResult::Lexed(f(lexed)),
            LexResult::Errant(err) => LexResult::Errant(err),
            LexResult::Nothing => LexResult::Nothing,
        }
    }

    ///
    /// Try something else, only if nothing was found.
    ///
    /// Errors are *not* recovered from.
    ///
    pub fn or(self, f: impl FnOnce() -> LexResult<L>) -> LexResult<L> {
        match self {
            LexResult::Nothing => f(),
            other => other,
        }
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, LexResult::Nothing)
    }

    #[cfg(test)]
    pub fn expect(self, msg: &str) -> L {
        match self {
            LexResult::Lexed(lexed) => lexed,
            LexResult::Errant(err) => panic!("{msg}: {err}"),
            LexResult::Nothing => panic!("{msg}: nothing to lex"),
        }
    }

    #[cfg(test)]
    pub fn expect_err(self, msg: &str) -> LexError {
        match self {
            LexResult::Errant(err) => err,
            _ => panic!("{msg}"),
        }
    }
}
