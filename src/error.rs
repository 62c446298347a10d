//!
//! Everything that can go wrong whilst
//! parsing or emitting JSON5.
//!

use thiserror::Error;

use crate::{
    common::LineColumn,
    lexing::{LexError, LexErrorKind},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    ///
    /// Ran out of tokens in the middle of a value.
    ///
    #[error("unexpected end of input")]
    UnexpectedEnd,

    ///
    /// A token of the wrong kind.
    ///
    #[error("{message} at {position}")]
    UnexpectedToken {
        message: String,
        position: LineColumn,
    },

    ///
    /// A decimal lexeme that is neither an integer nor a float.
    ///
    #[error("invalid number: '{lexeme}' at {position}")]
    InvalidNumber {
        lexeme: String,
        position: LineColumn,
    },

    ///
    /// A hex lexeme with no digits, or too big for an `i64`.
    ///
    #[error("invalid hexadecimal number: '{lexeme}' at {position}")]
    InvalidHex {
        lexeme: String,
        position: LineColumn,
    },

    ///
    /// A string literal containing a broken escape sequence.
    ///
    #[error("{message} at {position}")]
    InvalidEscape {
        message: String,
        position: LineColumn,
    },

    ///
    /// A string literal or block comment that never closes.
    ///
    #[error("{message} at {position}")]
    Unterminated {
        message: String,
        position: LineColumn,
    },

    ///
    /// Objects and arrays nested past the parser's limit.
    ///
    #[error("nesting deeper than {limit} levels at {position}")]
    TooDeep { limit: usize, position: LineColumn },

    ///
    /// A value the emitter can't write down.
    ///
    #[error("unsupported value: {0}")]
    Unsupported(String),
}

impl Error {
    ///
    /// Where in the input this error happened, if anywhere.
    ///
    pub fn position(&self) -> Option<LineColumn> {
        match self {
            Error::UnexpectedToken { position, .. }
            | Error::InvalidNumber { position, .. }
            | Error::InvalidHex { position, .. }
            | Error::InvalidEscape { position, .. }
            | Error::Unterminated { position, .. }
            | Error::TooDeep { position, .. } => Some(*position),
            Error::UnexpectedEnd | Error::Unsupported(_) => None,
        }
    }

    pub(crate) fn from_lex(err: &LexError, position: LineColumn) -> Self {
        let message = err.to_string();
        match err.kind() {
            LexErrorKind::Unterminated(_) => Error::Unterminated { message, position },
            _ => Error::InvalidEscape { message, position },
        }
    }
}
