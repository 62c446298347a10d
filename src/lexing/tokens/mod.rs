//!
//! Lexical tokens.
//!

pub mod comment;
pub mod escapes;
pub mod identifier;
pub mod line_terminator;
pub mod number;
pub mod punctuator;
pub mod string;
pub mod whitespace;

use std::fmt;

use json5_codec_macros::Spanned;

use crate::{
    common::{Loc, Span, Spanned},
    lexing::LexError,
};

use self::{
    comment::Comment,
    identifier::{Identifier, Keyword},
    number::NumericLiteral,
    punctuator::Punctuator,
    string::QuotedString,
};

///
/// The closed set of token kinds the parser dispatches on.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Colon,
    Comma,

    ///
    /// A quoted string, or a bare identifier
    /// that isn't a keyword.
    ///
    String,
    Number,
    True,
    False,
    Null,
    Comment,

    ///
    /// A stray character, or a literal that failed to lex.
    ///
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::OpenBrace => "'{'",
            TokenKind::CloseBrace => "'}'",
            TokenKind::OpenBracket => "'['",
            TokenKind::CloseBracket => "']'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Comment => "comment",
            TokenKind::Unknown => "unknown",
        };

        f.write_str(name)
    }
}

///
/// A classified piece of the input.
///
/// The value depends on the kind:
/// * [TokenKind::String]: the decoded contents.
/// * [TokenKind::Number]: the raw lexeme.
/// * [TokenKind::Comment]: the comment, delimiters included.
/// * [TokenKind::Unknown]: the stray character, or the lexing error's message.
/// * Otherwise: the literal text.
///
#[derive(Debug, Clone, PartialEq, Spanned)]
pub struct Token {
    kind: TokenKind,
    value: String,
    span: Span,
    error: Option<LexError>,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
            error: None,
        }
    }

    ///
    /// An [TokenKind::Unknown] token standing in for
    /// a literal that failed to lex.
    ///
    pub fn errant(error: LexError) -> Self {
        Self {
            kind: TokenKind::Unknown,
            value: error.to_string(),
            span: error.span(),
            error: Some(error),
        }
    }

    ///
    /// A single stray character.
    ///
    pub fn unknown(ch: char, loc: Loc) -> Self {
        Self::new(TokenKind::Unknown, ch, Span::from(loc))
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }

    ///
    /// The lexing error, if this token is the
    /// remains of a broken literal.
    ///
    pub fn error(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl From<Punctuator> for Token {
    fn from(punct: Punctuator) -> Self {
        let kind = match punct {
            Punctuator::OpenBrace(_) => TokenKind::OpenBrace,
            Punctuator::CloseBrace(_) => TokenKind::CloseBrace,
            Punctuator::OpenBracket(_) => TokenKind::OpenBracket,
            Punctuator::CloseBracket(_) => TokenKind::CloseBracket,
            Punctuator::Colon(_) => TokenKind::Colon,
            Punctuator::Comma(_) => TokenKind::Comma,
        };

        Self::new(kind, punct.as_char(), punct.span())
    }
}

impl From<Comment> for Token {
    fn from(comment: Comment) -> Self {
        let span = comment.span();
        Self::new(TokenKind::Comment, comment.raw(), span)
    }
}

impl From<QuotedString> for Token {
    fn from(string: QuotedString) -> Self {
        let span = string.span();
        Self::new(TokenKind::String, string.into_value(), span)
    }
}

impl From<NumericLiteral> for Token {
    fn from(number: NumericLiteral) -> Self {
        let span = number.span();
        Self::new(TokenKind::Number, number.raw(), span)
    }
}

impl From<Identifier> for Token {
    fn from(ident: Identifier) -> Self {
        let span = ident.span();
        let kind = match ident.keyword() {
            Some(Keyword::True) => TokenKind::True,
            Some(Keyword::False) => TokenKind::False,
            Some(Keyword::Null) => TokenKind::Null,
            None => TokenKind::String,
        };

        Self::new(kind, ident.into_name(), span)
    }
}
