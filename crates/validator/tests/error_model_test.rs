use pretty_assertions::assert_eq;
use roost_validator::object;
use roost_validator::prelude::*;
use serde_json::json;

#[test]
fn test_error_kinds_have_stable_codes() {
    let cases = [
        (ErrorKind::TypeMismatch, "type_mismatch"),
        (ErrorKind::ShapeMismatch, "shape_mismatch"),
        (ErrorKind::LiteralMismatch, "literal_mismatch"),
        (ErrorKind::PredicateFailed, "predicate_failed"),
        (ErrorKind::TransformFailed, "transform_failed"),
        (ErrorKind::UnionExhausted, "union_exhausted"),
    ];
    for (kind, code) in cases {
        assert_eq!(kind.code(), code);
    }
}

#[test]
fn test_each_kind_is_raised_by_its_validator() {
    let input = json!({"n": "x", "s": 1, "lit": "b", "p": -1, "t": "x", "u": null});
    let shape = object! {
        n: number(),
        s: array_of(string()),
        lit: exact("a"),
        p: number().refine(|n| n.as_i64().is_some_and(|v| v >= 0), "must not be negative"),
        t: string().try_map(|s| s.parse::<u8>()),
        u: either((string(), number())),
    };

    let err = shape.validate(&input).unwrap_err();
    let kinds: Vec<_> = err.nested.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        [
            ErrorKind::TypeMismatch,
            ErrorKind::ShapeMismatch,
            ErrorKind::LiteralMismatch,
            ErrorKind::PredicateFailed,
            ErrorKind::TransformFailed,
            ErrorKind::UnionExhausted,
        ]
    );
}

#[test]
fn test_display_lists_nested_errors() {
    let shape = object! { user: object! { name: string() } };
    let err = shape.validate(&json!({"user": {"name": 7}})).unwrap_err();

    let display = err.to_string();
    assert!(display.contains("Nested errors:"));
    assert!(display.contains("[user.name] type_mismatch"));
}

#[test]
fn test_json_report_shape() {
    let err = array_of(number()).validate(&json!([1, "2"])).unwrap_err();
    let report = err.to_json_value();

    assert_eq!(report["nested"][0]["path"], "[1]");
    assert_eq!(report["nested"][0]["code"], "type_mismatch");
    assert_eq!(report["nested"][0]["params"]["expected"], "number");
    assert_eq!(report["params"]["failed_indices"], "1");
}

#[test]
fn test_total_error_count_and_flatten() {
    let shape = object! { a: number(), b: array_of(string()) };
    let err = shape.validate(&json!({"a": null, "b": [1, 2]})).unwrap_err();

    // root + a + b aggregate + two items
    assert_eq!(err.total_error_count(), 5);
    assert_eq!(err.flatten().len(), 5);
    assert_eq!(err.leaves().len(), 3);
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    let err = string().validate(&json!(1)).unwrap_err();
    assert_error(&err);
}

#[test]
fn test_exact_from_rejects_unserializable_literal() {
    use std::collections::HashMap;

    let mut bad = HashMap::new();
    bad.insert(vec![1u8], "non-string key");
    assert!(matches!(exact_from(&bad), Err(SchemaError::Literal(_))));

    let ok = exact_from(&["Note", "Article"]).unwrap();
    assert!(ok.validate(&json!(["Note", "Article"])).is_ok());
}
