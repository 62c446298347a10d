//!
//! Things that help trace errors and tokens: [Span] and [Loc].
//!

use std::ops::{Add, Range};

///
/// Represents the index of a character in source code.
///
/// Indexes count `char`s (Unicode scalar values), not bytes.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Loc(pub(crate) usize);

impl Loc {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for Loc {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<Loc> for usize {
    fn from(value: Loc) -> Self {
        value.0
    }
}

impl<A> Add<A> for Loc
where
    usize: Add<A, Output = usize>,
{
    type Output = Loc;

    fn add(self, rhs: A) -> Self::Output {
        Self(self.0 + rhs)
    }
}

///
/// Represents the location of a token in source code.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    ///
    /// Start index: inclusive lower bound.
    ///
    pub(crate) start: Loc,

    ///
    /// End index: exclusive upper bound.
    ///
    pub(crate) end: Loc,
}

impl Span {
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: Loc(range.start),
            end: Loc(range.end),
        }
    }

    pub fn start(&self) -> Loc {
        self.start
    }

    pub fn end(&self) -> Loc {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// Return the start and end bounds as a Rust [Range]
    ///
    pub fn as_range(&self) -> Range<usize> {
        self.start.0..self.end.0
    }
}

impl From<Loc> for Span {
    fn from(loc: Loc) -> Self {
        Self {
            start: loc,
            end: loc + 1,
        }
    }
}

///
/// Returns the span attached to this
/// object.
///
pub trait Spanned {
    ///
    /// Returns the span attached to this
    /// object.
    ///
    fn span(&self) -> Span;
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::{Loc, Span};

    #[test]
    fn single_char() {
        let span = Span::from(Loc(4));
        assert_eq!(span.as_range(), 4..5);
        assert_eq!(span.len(), 1);
        assert!(!span.is_empty());
    }
}
