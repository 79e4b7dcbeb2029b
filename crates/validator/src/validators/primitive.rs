//! Primitive JSON type checks
//!
//! Each check succeeds iff the input has the expected JSON type and returns
//! the input unchanged, typed; any other input is a `type_mismatch` naming the
//! expected kind.

use serde_json::{Number, Value};

use crate::foundation::{Validate, ValidationResult};

crate::primitive! {
    /// Validates that the input is a JSON string. Infers `String`.
    pub Str -> String, "string";
    extract(input) { input.as_str().map(str::to_owned) }
    fn string();
}

crate::primitive! {
    /// Validates that the input is a JSON number. Infers `serde_json::Number`,
    /// which keeps the integer/float representation of the input.
    pub Num -> Number, "number";
    extract(input) {
        match input {
            Value::Number(n) => Some(n.clone()),
            _ => None,
        }
    }
    fn number();
}

crate::primitive! {
    /// Validates that the input is a JSON boolean. Infers `bool`.
    pub Bool -> bool, "boolean";
    extract(input) { input.as_bool() }
    fn boolean();
}

/// Accepts any value and passes it through unchanged.
///
/// Infers the open type `serde_json::Value`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AnyValue;

impl Validate for AnyValue {
    type Input = Value;
    type Output = Value;

    fn validate(&self, input: &Value) -> ValidationResult<Value> {
        Ok(input.clone())
    }
}

/// Creates a validator that accepts anything.
#[must_use]
pub const fn any() -> AnyValue {
    AnyValue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_string_passes_through() {
        assert_eq!(string().validate(&json!("hello")).unwrap(), "hello");
        assert_eq!(string().validate(&json!("")).unwrap(), "");
    }

    #[test]
    fn test_number_keeps_representation() {
        assert_eq!(number().validate(&json!(5)).unwrap(), Number::from(5));
        let float = number().validate(&json!(1.5)).unwrap();
        assert_eq!(float.as_f64(), Some(1.5));
        assert!(float.is_f64());
    }

    #[test]
    fn test_boolean_passes_through() {
        assert!(boolean().validate(&json!(true)).unwrap());
        assert!(!boolean().validate(&json!(false)).unwrap());
    }

    #[rstest]
    #[case(json!(null), "null")]
    #[case(json!(1), "number")]
    #[case(json!(true), "boolean")]
    #[case(json!([]), "array")]
    #[case(json!({}), "object")]
    fn test_string_rejects(#[case] input: Value, #[case] actual: &str) {
        let err = string().validate(&input).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
        assert_eq!(err.param("expected"), Some("string"));
        assert_eq!(err.param("actual"), Some(actual));
        assert!(err.path.is_empty());
    }

    #[rstest]
    #[case(json!("5"))]
    #[case(json!(null))]
    #[case(json!([5]))]
    fn test_number_rejects(#[case] input: Value) {
        let err = number().validate(&input).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
        assert_eq!(err.param("expected"), Some("number"));
    }

    #[rstest]
    #[case(json!("true"))]
    #[case(json!(0))]
    #[case(json!(null))]
    fn test_boolean_rejects(#[case] input: Value) {
        let err = boolean().validate(&input).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
        assert_eq!(err.param("expected"), Some("boolean"));
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!({"nested": [1, 2, {"deep": true}]}))]
    #[case(json!("text"))]
    fn test_any_passes_everything(#[case] input: Value) {
        assert_eq!(any().validate(&input).unwrap(), input);
    }
}
