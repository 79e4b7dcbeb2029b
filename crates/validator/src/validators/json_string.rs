//! JSON text decoding.
//!
//! Request bodies often arrive as raw text. [`parse_json`] decodes a JSON
//! string into a value so it can be checked by a structural schema, and
//! [`json`] chains the two.

use serde_json::Value;

use crate::combinators::Chain;
use crate::foundation::{Validate, ValidationError, ValidationResult};

// ============================================================================
// JSON TEXT DECODER
// ============================================================================

/// Decodes a JSON string into a `serde_json::Value`.
///
/// The input must be a JSON string (`type_mismatch` otherwise). Malformed text
/// is a `transform_failed` error carrying the parser's line and column; it
/// never panics. Nesting depth is bounded by `serde_json`'s recursion limit
/// (128 levels).
///
/// # Examples
///
/// ```
/// use roost_validator::validators::JsonText;
/// use roost_validator::foundation::Validate;
/// use serde_json::json;
///
/// let decoder = JsonText::new();
/// assert_eq!(decoder.validate(&json!("[1, 2]")).unwrap(), json!([1, 2]));
/// assert!(decoder.validate(&json!("{\"name\": ")).is_err());
///
/// // Objects and arrays only
/// let strict = JsonText::new().objects_only();
/// assert!(strict.validate(&json!("42")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonText {
    allow_primitives: bool,
}

impl JsonText {
    /// Creates a new decoder that accepts any JSON document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allow_primitives: true,
        }
    }

    /// Require the document to be an object or array (no primitives).
    #[must_use = "builder methods must be chained or built"]
    pub fn objects_only(mut self) -> Self {
        self.allow_primitives = false;
        self
    }
}

impl Default for JsonText {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for JsonText {
    type Input = Value;
    type Output = Value;

    fn validate(&self, input: &Value) -> ValidationResult<Value> {
        let Some(text) = input.as_str() else {
            return Err(ValidationError::type_mismatch("string", input));
        };

        let parsed: Value = serde_json::from_str(text).map_err(|e| {
            tracing::debug!(line = e.line(), column = e.column(), "rejected malformed JSON text");
            ValidationError::transform_failed(format!("Invalid JSON: {e}"))
                .with_param("line", e.line().to_string())
                .with_param("column", e.column().to_string())
        })?;

        if !self.allow_primitives && !(parsed.is_object() || parsed.is_array()) {
            return Err(ValidationError::transform_failed(
                "JSON must be an object or array",
            ));
        }

        Ok(parsed)
    }
}

/// Creates a [`JsonText`] decoder.
#[must_use]
pub fn parse_json() -> JsonText {
    JsonText::new()
}

/// Decodes JSON text, then validates the decoded value with `schema`.
///
/// Shorthand for `chain(parse_json(), schema)`.
///
/// # Examples
///
/// ```
/// use roost_validator::prelude::*;
/// use roost_validator::object;
/// use serde_json::json;
///
/// let body = json(object! { a: number() });
/// assert!(body.validate(&json!(r#"{"a": 1}"#)).is_ok());
///
/// let err = body.validate(&json!("not json")).unwrap_err();
/// assert_eq!(err.kind, ErrorKind::TransformFailed);
/// ```
pub fn json<V>(schema: V) -> Chain<JsonText, V>
where
    V: Validate<Input = Value>,
{
    Chain::new(JsonText::new(), schema)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use crate::validators::string;
    use serde_json::json;

    #[test]
    fn test_valid_documents() {
        let decoder = parse_json();
        assert_eq!(decoder.validate(&json!(r#"{"a":1}"#)).unwrap(), json!({"a": 1}));
        assert_eq!(decoder.validate(&json!("\"s\"")).unwrap(), json!("s"));
        assert_eq!(decoder.validate(&json!("null")).unwrap(), json!(null));
    }

    #[test]
    fn test_malformed_text_is_transform_failure() {
        let err = parse_json().validate(&json!("not json")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TransformFailed);
        assert_eq!(err.param("line"), Some("1"));
        assert!(err.message.starts_with("Invalid JSON"));
    }

    #[test]
    fn test_non_string_input_is_type_mismatch() {
        let err = parse_json().validate(&json!({"a": 1})).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_objects_only() {
        let strict = JsonText::new().objects_only();
        assert!(strict.validate(&json!("[]")).is_ok());
        assert!(strict.validate(&json!("{}")).is_ok());
        let err = strict.validate(&json!("true")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TransformFailed);
    }

    #[test]
    fn test_too_deep_is_rejected_without_panic() {
        let text = format!("{}{}", "[".repeat(1000), "]".repeat(1000));
        let err = parse_json().validate(&Value::String(text)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TransformFailed);
    }

    #[test]
    fn test_json_chains_into_schema() {
        let body = json(string());
        assert_eq!(body.validate(&json!("\"hi\"")).unwrap(), "hi");

        let err = body.validate(&json!("5")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
    }
}
