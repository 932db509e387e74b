//! JSON helpers shared by the attribute accessors.

use serde_json::Value;

/// Serialize a value to canonical JSON, falling back to its display form if
/// the encoder refuses it. Never fails; non-ASCII text is preserved as-is.
pub(crate) fn json_safe(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
}

/// JSON type name of a value, used as the runtime type tag of result
/// objects.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_safe_preserves_non_ascii() {
        let value = json!({"query": "caf\u{e9} r\u{e9}sum\u{e9}"});
        let encoded = json_safe(&value);
        assert!(encoded.contains("caf\u{e9}"));
        assert!(!encoded.contains("\\u"));
    }

    #[test]
    fn json_safe_round_trips() {
        let value = json!({"k": 3, "nested": {"list": [1, 2]}});
        let decoded: Value = serde_json::from_str(&json_safe(&value)).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn kind_name_covers_every_variant() {
        assert_eq!(kind_name(&Value::Null), "null");
        assert_eq!(kind_name(&json!(true)), "bool");
        assert_eq!(kind_name(&json!(1.5)), "number");
        assert_eq!(kind_name(&json!("s")), "string");
        assert_eq!(kind_name(&json!([])), "array");
        assert_eq!(kind_name(&json!({})), "object");
    }
}
