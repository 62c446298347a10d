use json5_codec::{marshal, marshal_indent, parse, Value};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z_$][A-Za-z0-9_$]{0,8}",
        any::<String>(),
        prop_oneof![Just("true"), Just("false"), Just("null")].prop_map(String::from),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        any::<f64>()
            .prop_filter("finite floats only", |float| float.is_finite())
            .prop_map(Value::Float),
        any::<String>().prop_map(Value::String),
    ];

    leaf.prop_recursive(6, 128, 10, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..10).prop_map(Value::Array),
            prop::collection::vec((key_strategy(), inner), 0..10)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn compact(value in value_strategy()) {
        let text = marshal(&value).expect("Finite values always marshal");
        prop_assert_eq!(parse(&text).expect("Marshalled text parses"), value);
    }

    #[test]
    fn indented(value in value_strategy(), indent in "[ \t]{0,4}") {
        let text = marshal_indent(&value, &indent).expect("Finite values always marshal");
        prop_assert_eq!(parse(&text).expect("Marshalled text parses"), value);
    }

    #[test]
    fn integers_stay_integers(int in any::<i64>()) {
        prop_assert_eq!(parse(&int.to_string()).expect("Valid parse"), Value::Integer(int));
    }

    #[test]
    fn tokenize_never_panics(text in any::<String>()) {
        let _ = json5_codec::tokenize(&text);
        let _ = parse(&text);
    }
}
