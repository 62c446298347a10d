use crate::common::{Loc, Source, Span, Spanned};

use super::{LexError, LexErrorKind, LexResult, LexT};

///
/// Things that [SourceStream] can
/// check are coming up.
///
pub trait Lookahead {
    fn upcoming(self, input: &SourceStream) -> bool;
}

impl<'a> Lookahead for &'a str {
    fn upcoming(self, input: &SourceStream) -> bool {
        let mut rest = input.rest().iter();
        self.chars().all(|ch| rest.next() == Some(&ch))
    }
}

impl Lookahead for char {
    fn upcoming(self, input: &SourceStream) -> bool {
        input.peek() == Some(&self)
    }
}

impl<F: Fn(&char) -> bool> Lookahead for F {
    fn upcoming(self, input: &SourceStream) -> bool {
        input.peek().map(self).unwrap_or(false)
    }
}

///
/// A cursor over the characters of a [Source].
///
#[derive(Debug, Clone)]
pub struct SourceStream<'a> {
    index: usize,
    source: &'a Source,
}

impl<'a> SourceStream<'a> {
    ///
    /// Create a new stream from a source.
    ///
    pub fn new(source: &'a Source) -> Self {
        Self { index: 0, source }
    }

    ///
    /// Returns the source where this [SourceStream]
    /// came from.
    ///
    pub fn source(&self) -> &'a Source {
        self.source
    }

    ///
    /// The location of the next character.
    ///
    pub fn loc(&self) -> Loc {
        Loc(self.index)
    }

    ///
    /// Characters not yet taken.
    ///
    pub fn rest(&self) -> &'a [char] {
        self.source
            .characters()
            .get(self.index..)
            .unwrap_or_default()
    }

    ///
    /// Take the next character in this [SourceStream].
    ///
    pub fn take(&mut self) -> Option<(Loc, char)> {
        let start = self.index;

        if let Some(ch) = self.source.characters().get(self.index) {
            self.index += 1;
            return Some((Loc(start), *ch));
        }

        None
    }

    ///
    /// Take characters in this [SourceStream] whilst they
    /// satisfy some predicate.
    ///
    pub fn take_while(&mut self, pred: impl Fn(&char) -> bool) -> Option<(Span, Vec<char>)> {
        let start = self.index;
        let mut chars = vec![];
        while let Some(ch) = self.source.characters().get(self.index) {
            if !pred(ch) {
                break;
            }

            chars.push(*ch);
            self.index += 1;
        }

        if chars.is_empty() {
            return None;
        }

        Some((Span::new(start..self.index), chars))
    }

    ///
    /// Take characters in this [SourceStream] until
    /// the predicate returns true.
    ///
    pub fn take_until(&mut self, pred: impl Fn(&Self) -> bool) -> Option<(Span, Vec<char>)> {
        let start = self.index;
        let mut chars = vec![];
        while let Some(ch) = self.source.characters().get(self.index) {
            if pred(self) {
                break;
            }

            chars.push(*ch);
            self.index += 1;
        }

        if chars.is_empty() {
            return None;
        }

        Some((Span::new(start..self.index), chars))
    }

    ///
    /// Attempt to lex for token `L`.
    ///
    pub fn lex<L: LexT>(&mut self) -> LexResult<L> {
        if !L::peek(self) {
            return LexResult::Nothing;
        }

        match L::lex(self) {
            Ok(lexed) => LexResult::Lexed(lexed),
            Err(errant) => LexResult::Errant(errant),
        }
    }

    ///
    /// Checks if a lookahead pattern is next in the stream.
    ///
    pub fn upcoming<L: Lookahead>(&self, lookahead: L) -> bool {
        lookahead.upcoming(self)
    }

    ///
    /// Peeks at the next upcoming character.
    ///
    pub fn peek(&self) -> Option<&char> {
        self.source.characters().get(self.index)
    }

    ///
    /// The text between `start` and the current location.
    ///
    pub fn text_since(&self, start: Loc) -> String {
        self.source
            .source_at(Span::new(start.0..self.index))
            .unwrap_or_default()
    }

    ///
    /// Make a new error spanning `start` up to the stream's current location.
    ///
    pub fn error(&self, start: Loc, kind: LexErrorKind) -> LexError {
        LexError::new(Span::new(start.0..self.index), kind)
    }
}

impl<'a> Spanned for SourceStream<'a> {
    fn span(&self) -> Span {
        Span::from(self.loc())
    }
}

#[cfg(test)]
mod tests {
    use crate::common::Source;

    #[test]
    fn lookahead() {
        let source = Source::new("/* hi */");
        let mut input = source.stream();

        assert!(input.upcoming("/*"));
        assert!(!input.upcoming("//"));
        assert!(input.upcoming('/'));
        assert!(input.upcoming(|ch: &char| ch.is_ascii_punctuation()));

        let _ = input.take();
        assert_eq!(input.peek(), Some(&'*'));
        assert!(!input.upcoming("* hi */ and more"));
    }

    #[test]
    fn take_while() {
        let source = Source::new("1234abc");
        let mut input = source.stream();

        let (span, digits) = input
            .take_while(char::is_ascii_digit)
            .expect("Some digits");
        assert_eq!(span.as_range(), 0..4);
        assert_eq!(digits, vec!['1', '2', '3', '4']);

        assert!(input.take_while(char::is_ascii_digit).is_none());
        assert_eq!(input.text_since(crate::common::Loc(2)), "34");
    }
}
