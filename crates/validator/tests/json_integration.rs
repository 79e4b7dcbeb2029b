//! Integration tests for schemas over serde_json::Value.

use pretty_assertions::assert_eq;
use roost_validator::prelude::*;
use roost_validator::{chain, either, object};
use rstest::rstest;
use serde_json::{Number, Value, json};

// ============================================================================
// PRIMITIVES
// ============================================================================

#[rstest]
#[case(json!(""))]
#[case(json!("hello"))]
#[case(json!("ünïcödé"))]
fn string_returns_input_unchanged(#[case] input: Value) {
    assert_eq!(Value::String(string().validate(&input).unwrap()), input);
}

#[rstest]
#[case(json!(0))]
#[case(json!(-17))]
#[case(json!(1.5))]
#[case(json!(u64::MAX))]
fn number_returns_input_unchanged(#[case] input: Value) {
    assert_eq!(Value::Number(number().validate(&input).unwrap()), input);
}

#[rstest]
#[case(json!(null), "null")]
#[case(json!(true), "boolean")]
#[case(json!(1), "number")]
#[case(json!([]), "array")]
#[case(json!({}), "object")]
fn string_rejects_other_types(#[case] input: Value, #[case] actual: &str) {
    let err = string().validate(&input).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeMismatch);
    assert_eq!(err.param("actual"), Some(actual));
}

#[rstest]
#[case(json!("1"))]
#[case(json!(null))]
#[case(json!(false))]
fn number_rejects_other_types(#[case] input: Value) {
    assert_eq!(number().validate(&input).unwrap_err().kind, ErrorKind::TypeMismatch);
}

#[test]
fn boolean_and_any() {
    assert!(boolean().validate(&json!(false)).is_ok());
    assert_eq!(boolean().validate(&json!(0)).unwrap_err().kind, ErrorKind::TypeMismatch);

    for input in [json!(null), json!(1), json!({"a": [1]})] {
        assert_eq!(any().validate(&input).unwrap(), input);
    }
}

#[test]
fn exact_is_deep_value_equality() {
    let context = exact(json!(["https://www.w3.org/ns/activitystreams", {"sensitive": "as:sensitive"}]));
    assert!(context
        .validate(&json!(["https://www.w3.org/ns/activitystreams", {"sensitive": "as:sensitive"}]))
        .is_ok());

    let err = context.validate(&json!(["https://www.w3.org/ns/activitystreams"])).unwrap_err();
    assert_eq!(err.kind, ErrorKind::LiteralMismatch);
}

// ============================================================================
// STRUCTURAL
// ============================================================================

#[test]
fn object_strips_undeclared_keys() {
    let shape = object! { a: number() };
    let record = shape.validate(&json!({"a": 1, "extra": "x"})).unwrap();
    assert_eq!(Value::Object(record), json!({"a": 1}));
}

#[test]
fn object_reports_every_failing_field() {
    let shape = object! { a: number(), b: string() };
    let err = shape.validate(&json!({"a": "x", "b": 1})).unwrap_err();

    assert_eq!(err.nested.len(), 2);
    assert_eq!(err.nested[0].path_string(), "a");
    assert_eq!(err.nested[1].path_string(), "b");
}

#[test]
fn object_of_keeps_all_keys() {
    let counts = object_of(number());
    let parsed = counts.validate(&json!({"x": 1, "y": 2})).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed["y"], Number::from(2));
}

// ============================================================================
// CONTROL
// ============================================================================

#[rstest]
#[case(json!("oops"))]
#[case(json!(null))]
#[case(json!({}))]
fn fallback_absorbs_any_failure(#[case] input: Value) {
    let v = fallback(number(), || Number::from(0));
    assert_eq!(v.validate(&input).unwrap(), Number::from(0));
}

#[test]
fn fallback_passes_success_through() {
    let v = fallback(number(), || Number::from(0));
    assert_eq!(v.validate(&json!(5)).unwrap(), Number::from(5));
}

#[test]
fn either_returns_first_matching_alternative() {
    let v = either!(string(), number());

    assert_eq!(v.validate(&json!("x")).unwrap(), Union2::First("x".to_owned()));
    assert_eq!(v.validate(&json!(5)).unwrap(), Union2::Second(Number::from(5)));

    let err = v.validate(&json!(true)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnionExhausted);
    assert_eq!(err.nested.len(), 2);
}

#[test]
fn chain_decodes_then_validates() {
    let body = chain!(
        string(),
        transform(|s: &String| serde_json::from_str::<Value>(s)),
        object! { a: number() },
    );

    let record = body.validate(&json!("{\"a\":1}")).unwrap();
    assert_eq!(Value::Object(record), json!({"a": 1}));

    let err = body.validate(&json!("not json")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TransformFailed);
}

#[test]
fn json_helper_matches_manual_chain() {
    let body = json(object! { a: number() });
    assert!(body.validate(&json!("{\"a\":1}")).is_ok());
    assert_eq!(
        body.validate(&json!("{\"a\":\"1\"}")).unwrap_err().leaves()[0].path_string(),
        "a"
    );
    assert_eq!(body.validate(&json!(1)).unwrap_err().kind, ErrorKind::TypeMismatch);
}

#[test]
fn predicate_refines_typed_values() {
    let username = string().refine(
        |s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
        "username must be alphanumeric",
    );
    assert!(username.validate(&json!("ada_l")).is_ok());

    let err = username.validate(&json!("ada l")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::PredicateFailed);
    assert_eq!(err.message, "username must be alphanumeric");
}

// ============================================================================
// IDEMPOTENCE
// ============================================================================

#[test]
fn revalidating_output_is_stable() {
    let shape = object! {
        name: string(),
        tags: array_of(string()),
        summary: fallback(string(), String::new),
        counters: object_of(number()),
    };
    let input = json!({"name": "ada", "tags": ["a"], "counters": {"x": 1}, "junk": true});

    let first = Value::Object(shape.validate(&input).unwrap());
    let second = Value::Object(shape.validate(&first).unwrap());
    assert_eq!(first, second);
}

// ============================================================================
// REALISTIC PAYLOAD
// ============================================================================

fn note() -> Object {
    object! {
        "id" => string(),
        "type" => exact("Note"),
        "content" => string(),
        "inReplyTo" => optional(string()),
        "tag" => fallback(array_of(object! { "type" => string(), "name" => string() }), Vec::new),
        "sensitive" => fallback(boolean(), || false),
    }
}

#[test]
fn federated_note_is_normalised() {
    let input = json!({
        "id": "https://a.example/notes/1",
        "type": "Note",
        "content": "<p>hi</p>",
        "tag": [{"type": "Hashtag", "name": "#rust", "href": "https://a.example/tags/rust"}],
        "attributedTo": "https://a.example/users/ada",
    });

    let record = note().validate(&input).unwrap();
    assert_eq!(
        Value::Object(record),
        json!({
            "id": "https://a.example/notes/1",
            "type": "Note",
            "content": "<p>hi</p>",
            "inReplyTo": null,
            "tag": [{"type": "Hashtag", "name": "#rust"}],
            "sensitive": false,
        })
    );
}

#[test]
fn federated_note_errors_carry_paths() {
    let input = json!({
        "id": 1,
        "type": "Article",
        "content": "x",
        "tag": [{"type": "Mention"}],
    });

    let err = note().validate(&input).unwrap_err();
    let paths: Vec<_> = err.leaves().iter().map(|e| e.path_string()).collect();
    // `tag` is absorbed by its fallback
    assert_eq!(paths, ["id", "type"]);
}
