//!
//! Syntax Grammar.
//!
//! Recursive descent over the [Token]s from [crate::lexing::tokenize],
//! with one token of lookahead.
//!

pub mod value;

use crate::{
    common::{LineColumn, Source, Spanned},
    error::Error,
    lexing::{tokenize, Token, TokenKind},
    value::Value,
};

pub type ParserResult<T> = Result<T, Error>;

///
/// How many objects and arrays may be open at once.
///
pub const MAX_DEPTH: usize = 128;

///
/// The tokens being parsed, and how far along we are.
///
/// Comments are dropped on the way in.
///
#[derive(Debug, Clone)]
pub struct ParseBuffer<'a> {
    source: &'a Source,
    inner: Vec<Token>,
    index: usize,
    depth: usize,
}

impl<'a> ParseBuffer<'a> {
    pub fn new(source: &'a Source, tokens: Vec<Token>) -> Self {
        Self {
            source,
            inner: tokens
                .into_iter()
                .filter(|token| !token.is(TokenKind::Comment))
                .collect(),
            index: 0,
            depth: 0,
        }
    }

    pub(crate) fn upcoming(&self) -> Option<&Token> {
        self.inner.get(self.index)
    }

    ///
    /// Is the next token of this kind?
    ///
    pub(crate) fn peek(&self, kind: TokenKind) -> bool {
        self.upcoming().map(|token| token.is(kind)).unwrap_or(false)
    }

    ///
    /// The next token, or [Error::UnexpectedEnd] if there isn't one.
    ///
    pub(crate) fn expect_token(&self) -> ParserResult<&Token> {
        self.upcoming().ok_or(Error::UnexpectedEnd)
    }

    pub(crate) fn advance(&mut self) {
        self.index += 1;
    }

    ///
    /// Step inside the container opened by `token`.
    ///
    pub(crate) fn descend(&mut self, token: &Token) -> ParserResult<()> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::TooDeep {
                limit: MAX_DEPTH,
                position: self.locate(token),
            });
        }

        self.depth += 1;
        Ok(())
    }

    pub(crate) fn ascend(&mut self) {
        self.depth -= 1;
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub(crate) fn parse<P: Parse>(&mut self) -> ParserResult<P> {
        P::parse(self)
    }

    pub(crate) fn locate(&self, token: &Token) -> LineColumn {
        self.source.locate(token.span().start())
    }

    pub(crate) fn error(&self) -> ParseErrorHelper<'_, 'a> {
        ParseErrorHelper(self)
    }
}

pub struct ParseErrorHelper<'b, 'a>(&'b ParseBuffer<'a>);

impl<'b, 'a> ParseErrorHelper<'b, 'a> {
    ///
    /// Complain about `token`.
    ///
    /// Tokens left behind by a failed literal report
    /// their lexing error instead of `message`.
    ///
    pub(crate) fn unexpected<T>(self, token: &Token, message: impl ToString) -> ParserResult<T> {
        let position = self.0.locate(token);

        if let Some(err) = token.error() {
            return Err(Error::from_lex(err, position));
        }

        Err(Error::UnexpectedToken {
            message: message.to_string(),
            position,
        })
    }
}

pub trait Parse: Sized {
    fn parse(input: &mut ParseBuffer) -> ParserResult<Self>;
}

///
/// Parse a whole [Source] into a [Value].
///
/// Empty input (or input of only whitespace and comments) is [Value::Null].
/// Anything following the first complete value is ignored.
///
pub fn parse(source: &Source) -> ParserResult<Value> {
    let mut input = ParseBuffer::new(source, tokenize(source));
    log::trace!("parsing {} tokens", input.inner.len());

    if input.is_empty() {
        return Ok(Value::Null);
    }

    let result = value::parse_document(&mut input);
    if let Err(err) = &result {
        log::debug!("parse failed: {err}");
    }

    result
}
