//!
//! The source text being lexed and parsed.
//!

use std::fmt::Formatter;

use super::{Loc, Spanned};
use crate::lexing::SourceStream;

///
/// Line and column information for
/// a particular location in source code.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineColumn {
    line: usize,
    column: usize,
}

impl LineColumn {
    ///
    /// 1-based line number.
    ///
    pub fn line(&self) -> usize {
        self.line + 1
    }

    ///
    /// 1-based column number, counted in characters.
    ///
    pub fn column(&self) -> usize {
        self.column + 1
    }
}

///
/// Converting to 1-based only for display.
///
impl std::fmt::Display for LineColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line(), self.column())
    }
}

///
/// Finds the starting character index of all
/// lines, using any [ECMAScript LineTerminatorSequence](https://262.ecma-international.org/5.1/#sec-7.3)
/// to delimit lines.
///
fn line_starts(st: &[char]) -> Vec<usize> {
    let mut v = vec![0];
    let mut i = 0;

    while i < st.len() {
        match st[i] {
            '\u{000A}' => v.push(i + 1), // <LF>
            '\u{2028}' => v.push(i + 1), // <LS>
            '\u{2029}' => v.push(i + 1), // <PS>
            '\u{000D}' => {
                if matches!(st.get(i + 1), Some('\u{000A}')) {
                    v.push(i + 2); // <CR><LF>
                    i += 1;
                } else {
                    v.push(i + 1); // <CR>
                }
            }
            _ => (),
        }

        i += 1;
    }

    v
}

///
/// JSON5 source text.
///
/// The text is held as characters so that lexing
/// advances by whole Unicode scalar values.
///
#[derive(Debug, Clone)]
pub struct Source {
    chars: Vec<char>,
    line_starts: Vec<usize>,
}

impl Source {
    pub fn new(text: &str) -> Self {
        let chars = text.chars().collect::<Vec<_>>();
        let line_starts = line_starts(&chars);

        Self { chars, line_starts }
    }

    ///
    /// Returns the line and column of a [Loc].
    ///
    /// Locations past the end of the source
    /// are reported on the last line.
    ///
    pub fn locate(&self, loc: Loc) -> LineColumn {
        // `line_starts` always begins with 0, so `Err(0)` cannot happen.
        let line = match self.line_starts.binary_search(&loc.0) {
            Ok(line) => line,
            Err(next) => next - 1,
        };

        LineColumn {
            line,
            column: loc.0 - self.line_starts[line],
        }
    }

    ///
    /// Returns the source code at a given [super::Span], if within bounds.
    ///
    pub fn source_at(&self, span: impl Spanned) -> Option<String> {
        self.chars
            .get(span.span().as_range())
            .map(|chars| chars.iter().collect())
    }

    ///
    /// Get the characters in this [Source].
    ///
    pub fn characters(&self) -> &[char] {
        &self.chars
    }

    ///
    /// Create a stream from this source.
    ///
    pub fn stream(&self) -> SourceStream<'_> {
        SourceStream::new(self)
    }
}
