//!
//! Comments.
//!

use json5_codec_macros::Spanned;

use crate::{
    common::Span,
    lexing::{LexError, LexErrorKind, LexT, SourceStream},
};

use super::line_terminator::is_line_terminator;

///
/// ```js
/// // Comments
/// /* of either type. */
/// ```
///
#[derive(Debug, Spanned)]
pub enum Comment {
    Single(SingleLineComment),
    Multi(MultiLineComment),
}

///
/// ```js
/// // Single-line comment.
/// ```
///
/// Runs up to, but not including, the next line terminator.
///
#[derive(Debug, Spanned)]
pub struct SingleLineComment {
    span: Span,
    raw: String,
}

///
/// ```js
/// /* Multi-line comment. */
/// ```
///
#[derive(Debug, Spanned)]
pub struct MultiLineComment {
    span: Span,
    raw: String,
}

impl Comment {
    ///
    /// The comment's text, delimiters included.
    ///
    pub fn raw(&self) -> &str {
        match self {
            Comment::Single(single) => &single.raw,
            Comment::Multi(multi) => &multi.raw,
        }
    }
}

impl LexT for Comment {
    fn peek(input: &SourceStream) -> bool {
        <SingleLineComment as LexT>::peek(input) || <MultiLineComment as LexT>::peek(input)
    }

    fn lex(input: &mut SourceStream) -> Result<Self, LexError> {
        if <SingleLineComment as LexT>::peek(input) {
            return Ok(Self::Single(LexT::lex(input)?));
        }

        Ok(Self::Multi(LexT::lex(input)?))
    }
}

impl LexT for SingleLineComment {
    fn peek(input: &SourceStream) -> bool {
        input.upcoming("//")
    }

    fn lex(input: &mut SourceStream) -> Result<Self, LexError> {
        let start = input.loc();
        let _ = input.take();
        let _ = input.take();
        let _ = input.take_while(|ch| !is_line_terminator(ch));

        Ok(Self {
            span: Span::new(start.0..input.loc().0),
            raw: input.text_since(start),
        })
    }
}

impl LexT for MultiLineComment {
    fn peek(input: &SourceStream) -> bool {
        input.upcoming("/*")
    }

    fn lex(input: &mut SourceStream) -> Result<Self, LexError> {
        let start = input.loc();
        let _ = input.take();
        let _ = input.take();
        let _ = input.take_until(|input| input.upcoming("*/"));

        if !input.upcoming("*/") {
            return Err(input.error(start, LexErrorKind::Unterminated("block comment")));
        }

        let _ = input.take();
        let _ = input.take();

        Ok(Self {
            span: Span::new(start.0..input.loc().0),
            raw: input.text_since(start),
        })
    }
}
