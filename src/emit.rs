//!
//! Writing [Value]s back out as JSON5 text.
//!
//! ```text
//! {
//!   name: "John Doe",
//!   "favourite colour": "green",
//!   tags: [
//!     "a",
//!     "b"
//!   ],
//! }
//! ```
//!
//! Array elements are separated by `", "` before the line break.
//!
//! Every container starts a new line for each child (even
//! without indentation), objects always have a trailing comma,
//! and keys are only quoted when they need to be.
//!
//! Containers nested more than [MAX_DEPTH] deep are refused,
//! the same limit the parser applies.
//!

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    error::Error,
    syntax::MAX_DEPTH,
    value::{Map, Value},
};

lazy_static! {
    static ref BARE_KEY: Regex = Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap();
}

///
/// Write a [Value] as JSON5 without indentation.
///
pub fn marshal(value: &Value) -> Result<String, Error> {
    marshal_indent(value, "")
}

///
/// Write a [Value] as JSON5, repeating `indent`
/// once per level of nesting.
///
pub fn marshal_indent(value: &Value, indent: &str) -> Result<String, Error> {
    let mut emitter = Emitter {
        out: String::new(),
        indent,
    };

    emitter.value(value, 0)?;
    Ok(emitter.out)
}

///
/// Can this key be written without quotes, and still
/// be read back as the same string key?
///
/// `true`, `false` and `null` would be read back as keywords.
///
pub fn is_bare_key(key: &str) -> bool {
    BARE_KEY.is_match(key) && !matches!(key, "true" | "false" | "null")
}

struct Emitter<'a> {
    out: String,
    indent: &'a str,
}

impl<'a> Emitter<'a> {
    fn value(&mut self, value: &Value, depth: usize) -> Result<(), Error> {
        if depth >= MAX_DEPTH && matches!(value, Value::Array(_) | Value::Object(_)) {
            log::debug!("refusing to write containers nested past {MAX_DEPTH}");
            return Err(Error::Unsupported(format!(
                "containers nested deeper than {MAX_DEPTH} levels"
            )));
        }

        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Integer(int) => self.out.push_str(&int.to_string()),
            Value::Float(float) => self.float(*float)?,
            Value::String(s) => self.string(s),
            Value::Array(elements) => self.array(elements, depth)?,
            Value::Object(map) => self.object(map, depth)?,
        }

        Ok(())
    }

    ///
    /// Always has a `.` or an exponent, so it reads back as a float.
    ///
    fn float(&mut self, float: f64) -> Result<(), Error> {
        if !float.is_finite() {
            log::debug!("refusing to write non-finite float {float}");
            return Err(Error::Unsupported(format!("non-finite float {float}")));
        }

        let mut buffer = ryu::Buffer::new();
        self.out.push_str(buffer.format_finite(float));
        Ok(())
    }

    fn string(&mut self, s: &str) {
        self.out.push('"');
        for ch in s.chars() {
            match ch {
                '\\' => self.out.push_str("\\\\"),
                '"' => self.out.push_str("\\\""),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                ch => self.out.push(ch),
            }
        }
        self.out.push('"');
    }

    fn key(&mut self, key: &str) {
        if is_bare_key(key) {
            self.out.push_str(key);
        } else {
            self.string(key);
        }
    }

    fn newline(&mut self, depth: usize) {
        self.out.push('\n');
        for _ in 0..depth {
            self.out.push_str(self.indent);
        }
    }

    fn array(&mut self, elements: &[Value], depth: usize) -> Result<(), Error> {
        self.out.push('[');

        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }

            self.newline(depth + 1);
            self.value(element, depth + 1)?;
        }

        self.newline(depth);
        self.out.push(']');
        Ok(())
    }

    fn object(&mut self, map: &Map, depth: usize) -> Result<(), Error> {
        self.out.push('{');

        for (key, value) in map {
            self.newline(depth + 1);
            self.key(key);
            self.out.push_str(": ");
            self.value(value, depth + 1)?;
            self.out.push(',');
        }

        self.newline(depth);
        self.out.push('}');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::Error,
        syntax::MAX_DEPTH,
        value::{Map, Value},
    };

    use super::{is_bare_key, marshal, marshal_indent};

    #[test]
    fn scalars() {
        assert_eq!(marshal(&Value::Null), Ok("null".to_string()));
        assert_eq!(marshal(&Value::Bool(true)), Ok("true".to_string()));
        assert_eq!(marshal(&Value::Integer(-42)), Ok("-42".to_string()));
        assert_eq!(marshal(&Value::Float(2.5)), Ok("2.5".to_string()));
        assert_eq!(marshal(&Value::Float(1.0)), Ok("1.0".to_string()));
        assert_eq!(marshal(&Value::Float(1e21)), Ok("1e21".to_string()));
    }

    #[test]
    fn strings() {
        assert_eq!(
            marshal(&Value::from("Hello\nWorld")),
            Ok("\"Hello\\nWorld\"".to_string())
        );
        assert_eq!(
            marshal(&Value::from("tab\t \"quote\" back\\slash\r")),
            Ok(r#""tab\t \"quote\" back\\slash\r""#.to_string())
        );
        assert_eq!(marshal(&Value::from("it's")), Ok("\"it's\"".to_string()));
    }

    #[test]
    fn non_finite() {
        assert!(matches!(
            marshal(&Value::Float(f64::NAN)),
            Err(Error::Unsupported(_))
        ));
        assert!(matches!(
            marshal(&Value::from(vec![f64::INFINITY])),
            Err(Error::Unsupported(_))
        ));
    }

    #[test]
    fn array() {
        let value = Value::from(vec![
            Value::from("a"),
            Value::from(1),
            Value::from(true),
            Value::Null,
        ]);

        assert_eq!(
            marshal(&value),
            Ok("[\n\"a\", \n1, \ntrue, \nnull\n]".to_string())
        );
        assert_eq!(
            marshal_indent(&value, "  "),
            Ok("[\n  \"a\", \n  1, \n  true, \n  null\n]".to_string())
        );
    }

    #[test]
    fn object() {
        let mut inner = Map::new();
        inner.insert("x".to_string(), Value::from(1));

        let mut map = Map::new();
        map.insert("simpleKey".to_string(), Value::from("value"));
        map.insert("complex key".to_string(), Value::Object(inner));

        assert_eq!(
            marshal_indent(&Value::Object(map), "\t"),
            Ok("{\n\tsimpleKey: \"value\",\n\t\"complex key\": {\n\t\tx: 1,\n\t},\n}".to_string())
        );
    }

    fn nested_arrays(depth: usize) -> Value {
        (0..depth).fold(Value::Null, |inner, _| Value::Array(vec![inner]))
    }

    #[test]
    fn nesting_limit() {
        assert!(marshal(&nested_arrays(MAX_DEPTH)).is_ok());
        assert!(matches!(
            marshal(&nested_arrays(MAX_DEPTH + 1)),
            Err(Error::Unsupported(_))
        ));
        assert!(matches!(
            marshal(&nested_arrays(10 * MAX_DEPTH)),
            Err(Error::Unsupported(_))
        ));

        // Scalars at the limit are fine.
        let mut object = Value::Null;
        for _ in 0..MAX_DEPTH {
            object = Value::from_iter([("x", object)]);
        }
        assert!(marshal(&object).is_ok());
    }

    #[test]
    fn empty_containers() {
        assert_eq!(marshal(&Value::Array(vec![])), Ok("[\n]".to_string()));
        assert_eq!(marshal(&Value::Object(Map::new())), Ok("{\n}".to_string()));
    }

    #[test]
    fn bare_keys() {
        assert!(is_bare_key("simpleKey"));
        assert!(is_bare_key("$_x9"));
        assert!(!is_bare_key(""));
        assert!(!is_bare_key("9lives"));
        assert!(!is_bare_key("with space"));
        assert!(!is_bare_key("ünïcödé"));
        assert!(!is_bare_key("null"));
        assert!(is_bare_key("nullable"));
    }
}
