//!
//! ## Line Terminators
//!
//! These signify the end of lines.
//!

///
/// [LineTerminator](https://262.ecma-international.org/5.1/#sec-7.3):
/// LF, CR, LS or PS.
///
pub(crate) fn is_line_terminator(ch: &char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
