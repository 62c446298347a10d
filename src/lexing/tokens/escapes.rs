//!
//! ## Escape Codes
//!
//! Technically not tokens: these are decoded
//! from the inside of quoted strings.
//!
//! ```javascript
//! '\n'            // Escaped character
//! '\x1A'          // Hex code escape
//! '\u0A1B'        // Unicode escape
//! '\U0001F600'    // Long unicode escape
//! '\u{0x1F600}'   // Braced unicode escape
//! ```
//!

use crate::lexing::LexErrorKind;

use super::line_terminator::is_line_terminator;

///
/// A single decoded escape sequence (without its leading `\`).
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeSequence {
    ///
    /// An escape character, like `\t` for `HORIZONTAL TAB`.
    ///
    Single(char),

    ///
    /// `\0`, when not followed by a digit.
    ///
    Null,

    ///
    /// `\xHH`
    ///
    Hex(char),

    ///
    /// `\uXXXX`, `\UXXXXXXXX`, `\u{…}` or `\U{…}`.
    ///
    Unicode(char),

    ///
    /// A backslash right before a line terminator:
    /// both are dropped.
    ///
    LineContinuation,
}

fn is_single_escape_char(ch: &char) -> bool {
    matches!(ch, '\'' | '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' | 'v')
}

///
/// Interprets hex digits as a Unicode scalar value.
///
fn code_point(hex: &str) -> Option<char> {
    if hex.is_empty() || hex.len() > 8 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }

    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

impl EscapeSequence {
    ///
    /// Reads one escape sequence from the characters
    /// following a backslash.
    ///
    /// Returns the sequence along with how many characters it spans.
    ///
    pub fn read(rest: &[char]) -> Result<(Self, usize), LexErrorKind> {
        let Some(&first) = rest.first() else {
            return Err(LexErrorKind::UnknownEscape('\\'));
        };

        match first {
            c if is_single_escape_char(&c) => Ok((Self::Single(c), 1)),
            '0' if !matches!(rest.get(1), Some('0'..='9')) => Ok((Self::Null, 1)),
            'x' => Self::read_hex(rest),
            'u' | 'U' if rest.get(1) == Some(&'{') => Self::read_braced(first, rest),
            'u' => Self::read_fixed(first, 4, rest),
            'U' => Self::read_fixed(first, 8, rest),
            '\r' if rest.get(1) == Some(&'\n') => Ok((Self::LineContinuation, 2)),
            c if is_line_terminator(&c) => Ok((Self::LineContinuation, 1)),
            c => Err(LexErrorKind::UnknownEscape(c)),
        }
    }

    fn read_hex(rest: &[char]) -> Result<(Self, usize), LexErrorKind> {
        let digits: String = rest.iter().skip(1).take(2).collect();

        match code_point(&digits) {
            Some(ch) if digits.len() == 2 => Ok((Self::Hex(ch), 3)),
            _ => Err(LexErrorKind::HexEscape(digits)),
        }
    }

    ///
    /// `\uXXXX` or `\UXXXXXXXX`: exactly `n` hex digits.
    ///
    fn read_fixed(u: char, n: usize, rest: &[char]) -> Result<(Self, usize), LexErrorKind> {
        if rest.len() < n + 1 {
            return Err(LexErrorKind::UnicodeEscape(format!(
                "incomplete \\{u} sequence"
            )));
        }

        let digits: String = rest[1..=n].iter().collect();
        code_point(&digits)
            .map(|ch| (Self::Unicode(ch), n + 1))
            .ok_or_else(|| LexErrorKind::UnicodeEscape(format!("\\{u}{digits}")))
    }

    ///
    /// `\u{…}` or `\U{…}`, with an optional `0x` prefix inside the braces.
    ///
    fn read_braced(u: char, rest: &[char]) -> Result<(Self, usize), LexErrorKind> {
        let Some(close) = rest.iter().skip(2).position(|ch| ch == &'}') else {
            return Err(LexErrorKind::UnicodeEscape(
                "incomplete \\u or \\U sequence".to_string(),
            ));
        };

        let inner: String = rest[2..2 + close].iter().collect();
        let digits = inner
            .strip_prefix("0x")
            .or_else(|| inner.strip_prefix("0X"))
            .unwrap_or(&inner);

        code_point(digits)
            .map(|ch| (Self::Unicode(ch), close + 3))
            .ok_or_else(|| LexErrorKind::UnicodeEscape(format!("\\{u}{{{digits}}}")))
    }

    ///
    /// The character this escape sequence stands for, if any.
    ///
    pub fn character_value(&self) -> Option<char> {
        match self {
            Self::Single(raw) => Some(match raw {
                'b' => '\u{0008}', // backspace
                'f' => '\u{000C}', // form feed
                'n' => '\u{000A}', // line feed (new line)
                'r' => '\u{000D}', // carriage return
                't' => '\u{0009}', // horizontal tab
                'v' => '\u{000B}', // vertical tab
                other => *other,   // ' " \ /
            }),
            Self::Null => Some('\u{0000}'),
            Self::Hex(ch) | Self::Unicode(ch) => Some(*ch),
            Self::LineContinuation => None,
        }
    }
}

///
/// Resolves every escape sequence in the raw contents
/// of a quoted string.
///
/// Characters outside escapes (raw newlines included) are kept verbatim.
///
pub fn unescape(raw: &[char]) -> Result<String, LexErrorKind> {
    let mut value = String::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        let ch = raw[i];
        i += 1;

        if ch != '\\' {
            value.push(ch);
            continue;
        }

        let (escape, len) = EscapeSequence::read(&raw[i..])?;
        if let Some(cv) = escape.character_value() {
            value.push(cv);
        }
        i += len;
    }

    Ok(value)
}
