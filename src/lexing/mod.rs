//!
//! The process of lexing involves converting [char]s
//! from source code into lexical tokens according to
//! some [lexical grammar](https://en.wikipedia.org/wiki/Lexical_grammar).
//!
//! Lexing never fails as a whole: anything that can't
//! be lexed becomes a [TokenKind::Unknown] token, and
//! it's up to the parser to complain.
//!

pub mod tokens;
pub mod utils;

pub use self::{
    tokens::{Token, TokenKind},
    utils::{LexError, LexErrorKind, LexResult, LexT, Lookahead, SourceStream},
};

use crate::common::Source;

use self::tokens::{
    comment::Comment, identifier::Identifier, number::NumericLiteral, punctuator::Punctuator,
    string::QuotedString, whitespace::WhiteSpace,
};

///
/// Convert a whole [Source] into [Token]s.
///
/// Whitespace is dropped, comments are kept.
///
pub fn tokenize(source: &Source) -> Vec<Token> {
    let input = &mut source.stream();
    let mut tokens = vec![];

    loop {
        // Whitespace never fails.
        let _ = input.lex::<WhiteSpace>();

        if input.peek().is_none() {
            break;
        }

        let start = input.loc();
        let lexed = input
            .lex::<Comment>()
            .map(Token::from)
            .or(|| input.lex::<Punctuator>().map(Token::from))
            .or(|| input.lex::<QuotedString>().map(Token::from))
            .or(|| input.lex::<NumericLiteral>().map(Token::from))
            .or(|| input.lex::<Identifier>().map(Token::from));

        let token = match lexed {
            LexResult::Lexed(token) => token,
            LexResult::Errant(err) => {
                log::debug!("{err} at {}", source.locate(start));
                Token::errant(err)
            }
            LexResult::Nothing => match input.take() {
                Some((loc, ch)) => Token::unknown(ch, loc),
                None => break,
            },
        };

        tokens.push(token);
    }

    log::trace!("lexed {} tokens", tokens.len());
    tokens
}

#[cfg(test)]
mod tests {
    use crate::common::{Source, Spanned};

    use super::{tokenize, LexErrorKind, TokenKind};

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(&Source::new(src))
            .iter()
            .map(|token| token.kind())
            .collect()
    }

    #[test]
    fn object() {
        use TokenKind::*;

        assert_eq!(
            kinds("{ a: 1, 'b': [true, false, null], }"),
            vec![
                OpenBrace, String, Colon, Number, Comma, String, Colon, OpenBracket, True, Comma,
                False, Comma, Null, CloseBracket, Comma, CloseBrace
            ]
        );
    }

    #[test]
    fn values() {
        let tokens = tokenize(&Source::new(r#"["x\ty", -1.5e3, 0xFF, key]"#));
        let values: Vec<_> = tokens.iter().map(|token| token.value()).collect();

        assert_eq!(
            values,
            vec!["[", "x\ty", ",", "-1.5e3", ",", "0xFF", ",", "key", "]"]
        );
    }

    #[test]
    fn comments_are_kept() {
        let tokens = tokenize(&Source::new("/* head */ 1 // tail"));

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind(), TokenKind::Comment);
        assert_eq!(tokens[0].value(), "/* head */");
        assert_eq!(tokens[1].kind(), TokenKind::Number);
        assert_eq!(tokens[2].value(), "// tail");
    }

    #[test]
    fn empty() {
        assert!(tokenize(&Source::new("")).is_empty());
        assert!(tokenize(&Source::new(" \n\t\u{FEFF}")).is_empty());
    }

    #[test]
    fn stray_characters() {
        let tokens = tokenize(&Source::new("@ 1 #"));

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind(), TokenKind::Unknown);
        assert_eq!(tokens[0].value(), "@");
        assert!(tokens[0].error().is_none());
        assert_eq!(tokens[2].span().as_range(), 4..5);
    }

    #[test]
    fn bad_escape_becomes_unknown() {
        let tokens = tokenize(&Source::new(r#"["\q", 2]"#));

        assert_eq!(tokens[1].kind(), TokenKind::Unknown);
        assert_eq!(
            tokens[1].error().map(|err| err.kind()),
            Some(&LexErrorKind::UnknownEscape('q'))
        );
        assert_eq!(tokens[1].value(), "invalid escape sequence: \\q");

        // Lexing carries on afterwards.
        assert_eq!(tokens[2].kind(), TokenKind::Comma);
        assert_eq!(tokens[3].value(), "2");
    }

    #[test]
    fn unterminated_comment() {
        let tokens = tokenize(&Source::new("1 /* never"));

        assert_eq!(tokens.len(), 2);
        assert_eq!(
            tokens[1].error().map(|err| err.kind()),
            Some(&LexErrorKind::Unterminated("block comment"))
        );
    }
}
