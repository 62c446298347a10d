//!
//! JSON5 Values.
//!

use crate::{
    error::Error,
    lexing::{tokens::number::is_hex_lexeme, Token, TokenKind},
    value::{Map, Value},
};

use super::{Parse, ParseBuffer, ParserResult};

///
/// The first value in the document.
///
/// Stricter than [Value]'s own parser about what may
/// come first, but otherwise the same.
///
pub(crate) fn parse_document(input: &mut ParseBuffer) -> ParserResult<Value> {
    let token = input.expect_token()?.clone();

    match token.kind() {
        TokenKind::OpenBrace
        | TokenKind::OpenBracket
        | TokenKind::String
        | TokenKind::Number
        | TokenKind::True
        | TokenKind::False
        | TokenKind::Null => input.parse(),
        _ => input.error().unexpected(
            &token,
            format!(
                "expected '{{', '[', number, null or boolean but found '{}'",
                token.value()
            ),
        ),
    }
}

impl Parse for Value {
    fn parse(input: &mut ParseBuffer) -> ParserResult<Self> {
        let token = input.expect_token()?.clone();

        let value = match token.kind() {
            TokenKind::String => Value::String(token.value().to_string()),
            TokenKind::Number => decode_number(input, &token)?,
            TokenKind::True => Value::Bool(true),
            TokenKind::False => Value::Bool(false),
            TokenKind::Null => Value::Null,
            TokenKind::OpenBrace => {
                input.descend(&token)?;
                input.advance();
                let map = input.parse();
                input.ascend();
                return Ok(Value::Object(map?));
            }
            TokenKind::OpenBracket => {
                input.descend(&token)?;
                input.advance();
                let elements = input.parse();
                input.ascend();
                return Ok(Value::Array(elements?));
            }
            _ => {
                return input
                    .error()
                    .unexpected(&token, format!("unexpected token: '{}'", token.value()))
            }
        };

        input.advance();
        Ok(value)
    }
}

///
/// An object's entries, starting just after its `{`
/// and finishing just after its `}`.
///
/// A trailing comma is allowed.
///
impl Parse for Map {
    fn parse(input: &mut ParseBuffer) -> ParserResult<Self> {
        let mut map = Map::new();

        loop {
            let key = input.expect_token()?.clone();
            match key.kind() {
                TokenKind::CloseBrace => {
                    input.advance();
                    return Ok(map);
                }
                TokenKind::String => input.advance(),
                _ => {
                    return input.error().unexpected(
                        &key,
                        format!("expected a string for key but found '{}'", key.value()),
                    )
                }
            }

            let colon = input.expect_token()?.clone();
            if !colon.is(TokenKind::Colon) {
                return input.error().unexpected(
                    &colon,
                    format!(
                        "expected ':' after key '{}' but found '{}'",
                        key.value(),
                        colon.value()
                    ),
                );
            }
            input.advance();

            let value: Value = input.parse()?;
            map.insert(key.into_value(), value);

            let next = input.expect_token()?.clone();
            match next.kind() {
                TokenKind::Comma => input.advance(),
                TokenKind::CloseBrace => {
                    input.advance();
                    return Ok(map);
                }
                _ => {
                    return input.error().unexpected(
                        &next,
                        format!("expected ',' or '}}' but found '{}'", next.value()),
                    )
                }
            }
        }
    }
}

///
/// An array's elements, starting just after its `[`
/// and finishing just after its `]`.
///
/// A trailing comma is allowed.
///
impl Parse for Vec<Value> {
    fn parse(input: &mut ParseBuffer) -> ParserResult<Self> {
        let mut elements = vec![];

        loop {
            if input.peek(TokenKind::CloseBracket) {
                input.advance();
                return Ok(elements);
            }

            elements.push(input.parse()?);

            let next = input.expect_token()?.clone();
            match next.kind() {
                TokenKind::Comma => input.advance(),
                TokenKind::CloseBracket => {
                    input.advance();
                    return Ok(elements);
                }
                _ => {
                    return input.error().unexpected(
                        &next,
                        format!("expected ',' or ']' but found '{}'", next.value()),
                    )
                }
            }
        }
    }
}

///
/// Decode a NUMBER token's lexeme.
///
/// Hex is always an [i64]. Decimals are an [i64] if they fit,
/// otherwise a finite [f64].
///
fn decode_number(input: &ParseBuffer, token: &Token) -> ParserResult<Value> {
    let lexeme = token.value();

    if is_hex_lexeme(lexeme) {
        return i64::from_str_radix(&lexeme[2..], 16)
            .map(Value::Integer)
            .map_err(|_| Error::InvalidHex {
                lexeme: lexeme.to_string(),
                position: input.locate(token),
            });
    }

    if let Ok(int) = lexeme.parse::<i64>() {
        return Ok(Value::Integer(int));
    }

    match lexeme.parse::<f64>() {
        Ok(float) if float.is_finite() => Ok(Value::Float(float)),
        _ => Err(Error::InvalidNumber {
            lexeme: lexeme.to_string(),
            position: input.locate(token),
        }),
    }
}
