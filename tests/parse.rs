use anyhow::Result;
use json5_codec::{parse, tokenize, Error, Map, TokenKind, Value};

fn object<const N: usize>(entries: [(&str, Value); N]) -> Value {
    entries.into_iter().collect()
}

#[test]
fn scenarios() -> Result<()> {
    assert_eq!(parse("")?, Value::Null);
    assert_eq!(parse("42")?, Value::Integer(42));
    assert_eq!(parse("0xdecaf")?, Value::Integer(912559));
    assert_eq!(parse("'a'")?, Value::from("a"));
    assert_eq!(
        parse(r#"["a", 'b', 1]"#)?,
        Value::from(vec![Value::from("a"), Value::from("b"), Value::from(1)])
    );
    assert_eq!(
        parse(r#"{a:1, "b": 2.5,}"#)?,
        object([("a", Value::Integer(1)), ("b", Value::Float(2.5))])
    );
    assert_eq!(
        parse(r#"{ "s": "x\n\u0041\u{0x42}" }"#)?,
        object([("s", Value::from("x\nAB"))])
    );
    assert_eq!(
        parse("{ /*c*/ x: true, // tail\n y: null }")?,
        object([("x", Value::Bool(true)), ("y", Value::Null)])
    );
    assert_eq!(
        parse(r#"{ "favs": [1,2,3,] }"#)?,
        object([("favs", Value::from(vec![1, 2, 3]))])
    );
    assert!(parse("{").is_err());

    Ok(())
}

#[test]
fn person() -> Result<()> {
    let text = r#"
        // A person.
        {
            name: 'John Doe',
            age: 42,
            "is-admin": false,
            favs: ["pizza", 'sushi',],
            address: {
                city: "Somewhere",
                zip: 0x1F4,
            },
            nickname: null,
            height: 1.8e0,
        }
    "#;

    let value = parse(text)?;
    let person = value.as_object().expect("An object");

    assert_eq!(
        person.keys().collect::<Vec<_>>(),
        vec!["name", "age", "is-admin", "favs", "address", "nickname", "height"]
    );
    assert_eq!(value.get("name").and_then(Value::as_str), Some("John Doe"));
    assert_eq!(value.get("age").and_then(Value::as_i64), Some(42));
    assert_eq!(value.get("is-admin").and_then(Value::as_bool), Some(false));
    assert_eq!(
        value.get("favs").and_then(Value::as_array).map(Vec::len),
        Some(2)
    );
    assert_eq!(
        value.get("address").and_then(|address| address.get("zip")),
        Some(&Value::Integer(500))
    );
    assert!(value.get("nickname").map(Value::is_null).unwrap_or(false));
    assert_eq!(value.get("height"), Some(&Value::Float(1.8)));

    Ok(())
}

#[test]
fn escapes() -> Result<()> {
    assert_eq!(parse(r#"'\'\"\\\/'"#)?, Value::from("'\"\\/"));
    assert_eq!(parse(r#""\b\f\v\0""#)?, Value::from("\u{8}\u{c}\u{b}\0"));
    assert_eq!(parse(r#""\x41\U0001F600""#)?, Value::from("A\u{1F600}"));
    assert_eq!(parse(r#""\U{1F600}\u{0X41}""#)?, Value::from("\u{1F600}A"));
    assert_eq!(parse("'one \\\ntwo'")?, Value::from("one two"));
    assert_eq!(parse("'raw\nnewline'")?, Value::from("raw\nnewline"));

    Ok(())
}

#[test]
fn errors() {
    assert_eq!(parse("["), Err(Error::UnexpectedEnd));
    assert_eq!(
        parse("{ a: [1, 2 }").map_err(|err| err.to_string()),
        Err("expected ',' or ']' but found '}' at 1:12".to_string())
    );
    assert!(matches!(parse(r#""\uD800""#), Err(Error::InvalidEscape { .. })));
    assert!(matches!(parse(r#""\u{110000}""#), Err(Error::InvalidEscape { .. })));
    assert!(matches!(parse(r#"'\q'"#), Err(Error::InvalidEscape { .. })));
    assert!(matches!(parse("'open"), Err(Error::Unterminated { .. })));
    assert!(matches!(parse("0x"), Err(Error::InvalidHex { .. })));

    let err = parse("{\n  a: 1,\n  b: @,\n}").expect_err("Stray character");
    assert_eq!(err.to_string(), "unexpected token: '@' at 3:6");
    assert_eq!(err.position().map(|pos| (pos.line(), pos.column())), Some((3, 6)));
}

#[test]
fn deep_nesting_is_an_error() {
    let depth = 50_000;
    let text = "[".repeat(depth) + &"]".repeat(depth);

    let err = parse(&text).expect_err("Too deep");
    assert!(matches!(err, Error::TooDeep { .. }));
    assert!(err.to_string().starts_with("nesting deeper than"));

    let objects = "{a:".repeat(depth) + "1" + &"}".repeat(depth);
    assert!(matches!(parse(&objects), Err(Error::TooDeep { .. })));
}

#[test]
fn tokens() {
    let kinds: Vec<_> = tokenize("{ /* hi */ a: 'b' }")
        .iter()
        .map(|token| token.kind())
        .collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::OpenBrace,
            TokenKind::Comment,
            TokenKind::String,
            TokenKind::Colon,
            TokenKind::String,
            TokenKind::CloseBrace
        ]
    );
}

#[test]
fn empty_map_is_empty_object() -> Result<()> {
    assert_eq!(parse("{}")?, Value::Object(Map::new()));
    assert_eq!(parse("  // nothing\n")?, Value::Null);
    Ok(())
}
