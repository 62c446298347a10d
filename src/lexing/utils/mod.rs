//!
//! Utilities for lexing.
//!

pub mod result;
pub mod stream;

pub use self::{
    result::{LexError, LexErrorKind, LexResult},
    stream::{Lookahead, SourceStream},
};

///
/// Operations on lexical tokens:
/// * Peeking
/// * Lexing
///
pub trait LexT: Sized {
    ///
    /// Checks to see if this token is possibly upcoming.
    ///
    fn peek(input: &SourceStream) -> bool;

    ///
    /// Given that the token is potentially present,
    /// start lexing.
    ///
    /// This function has guaranteed side-effects on the input [SourceStream] (advancing it),
    /// even when it fails.
    ///
    fn lex(input: &mut SourceStream) -> Result<Self, LexError>;
}
