//! The per-call arguments bag supplied by the host framework.
//!
//! Every accessor in this crate receives a [`CallArguments`] snapshot and
//! nothing else. All fields are optional; the host fills in whatever the
//! traced call produced. Field lookups are defensive throughout: a missing
//! or `null` field resolves to a sentinel instead of failing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sentinel for instance fields the host did not supply.
pub const UNKNOWN: &str = "unknown";

/// Snapshot of one traced call.
///
/// Read-only to this crate; accessors clone before mutating so the host's
/// data is never observed changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallArguments {
    /// Call parameters, as a JSON object.
    pub kwargs: Option<Value>,
    /// Call return value (pager or results object).
    pub result: Option<Value>,
    /// Snapshot of the traced client/request instance.
    pub instance: Option<Value>,
    /// Wall-clock latency of the traced call, in milliseconds.
    pub latency_ms: Option<f64>,
}

impl CallArguments {
    /// Field of `kwargs`, when `kwargs` is an object carrying it.
    pub fn kwarg(&self, key: &str) -> Option<&Value> {
        field(self.kwargs.as_ref(), key)
    }

    /// The search request object (`kwargs.search_request`), if present.
    pub fn search_request(&self) -> Option<&Value> {
        self.kwarg("search_request")
    }

    /// Field of the traced instance snapshot.
    pub fn instance_field(&self, key: &str) -> Option<&Value> {
        field(self.instance.as_ref(), key)
    }

    /// String field of the traced instance, defaulting to [`UNKNOWN`].
    pub fn instance_str(&self, key: &str) -> &str {
        self.instance_field(key)
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN)
    }
}

/// Field of an optional JSON object. A `null` field counts as absent, which
/// keeps option-typed host data and omitted keys indistinguishable.
pub(crate) fn field<'a>(value: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    value
        .and_then(Value::as_object)
        .and_then(|map| map.get(key))
        .filter(|v| !v.is_null())
}

/// Field of an optional JSON object, `Value::Null` when absent.
pub(crate) fn field_or_null(value: Option<&Value>, key: &str) -> Value {
    field(value, key).cloned().unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kwarg_on_missing_kwargs_returns_none() {
        let arguments = CallArguments::default();
        assert!(arguments.kwarg("search_request").is_none());
    }

    #[test]
    fn kwarg_on_non_object_kwargs_returns_none() {
        let arguments = CallArguments {
            kwargs: Some(json!("not an object")),
            ..Default::default()
        };
        assert!(arguments.kwarg("anything").is_none());
    }

    #[test]
    fn instance_str_defaults_to_unknown() {
        let arguments = CallArguments::default();
        assert_eq!(arguments.instance_str("endpoint"), UNKNOWN);
    }

    #[test]
    fn instance_str_reads_supplied_field() {
        let arguments = CallArguments {
            instance: Some(json!({"endpoint": "https://search.example.net"})),
            ..Default::default()
        };
        assert_eq!(arguments.instance_str("endpoint"), "https://search.example.net");
    }

    #[test]
    fn null_field_counts_as_absent() {
        let arguments = CallArguments {
            kwargs: Some(json!({"search_request": null})),
            ..Default::default()
        };
        assert!(arguments.search_request().is_none());
    }

    #[test]
    fn search_request_resolves_nested_object() {
        let arguments = CallArguments {
            kwargs: Some(json!({"search_request": {"search_text": "contracts"}})),
            ..Default::default()
        };
        let request = arguments.search_request().unwrap();
        assert_eq!(request["search_text"], "contracts");
    }

    #[test]
    fn field_or_null_fills_in_missing_keys() {
        let value = json!({"present": 1});
        assert_eq!(field_or_null(Some(&value), "present"), json!(1));
        assert_eq!(field_or_null(Some(&value), "absent"), Value::Null);
        assert_eq!(field_or_null(None, "anything"), Value::Null);
    }
}
