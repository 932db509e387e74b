//! Vector-query elision for input capture.
//!
//! Vector search queries carry dense embedding payloads that are large and
//! useless in logs. Each entry of `kwargs.vector_queries` is classified by
//! shape, normalized to a record where possible, and has its `vector` field
//! removed. Entries this module does not recognize pass through unchanged;
//! logging must never break on an unexpected query shape.

use serde_json::{Map, Value};

use crate::util::kind_name;

/// The shapes a vector-query entry may arrive in.
#[derive(Debug)]
enum QueryShape<'a> {
    /// A structured record. Also covers snapshots of vector-bearing query
    /// objects, which serialize to the same JSON object.
    Record(&'a Map<String, Value>),
    /// A JSON-encoded string, possibly single-quoted.
    Encoded(&'a str),
    /// Anything else; passed through untouched.
    Opaque(&'a Value),
}

fn classify(entry: &Value) -> QueryShape<'_> {
    match entry {
        Value::Object(map) => QueryShape::Record(map),
        Value::String(text) => QueryShape::Encoded(text),
        other => QueryShape::Opaque(other),
    }
}

/// Strip the `vector` payload from every recognizable entry, returning the
/// elided list.
pub(crate) fn strip_queries(entries: &[Value]) -> Vec<Value> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| strip_entry(index, entry))
        .collect()
}

fn strip_entry(index: usize, entry: &Value) -> Value {
    match classify(entry) {
        QueryShape::Record(map) => {
            let mut record = map.clone();
            if record.remove("vector").is_some() {
                tracing::debug!(index, "removed vector payload from record query");
            }
            Value::Object(record)
        }
        QueryShape::Encoded(text) => match parse_relaxed(text) {
            Some(mut record) => {
                if record.remove("vector").is_some() {
                    tracing::debug!(index, "removed vector payload from encoded query");
                }
                Value::Object(record)
            }
            None => {
                tracing::debug!(index, "unparseable encoded query kept as-is");
                entry.clone()
            }
        },
        QueryShape::Opaque(value) => {
            tracing::debug!(
                index,
                kind = kind_name(value),
                "unrecognized query shape kept as-is"
            );
            value.clone()
        }
    }
}

/// Parse a JSON-encoded query record, tolerating single quotes in place of
/// double quotes.
fn parse_relaxed(text: &str) -> Option<Map<String, Value>> {
    let normalized = text.replace('\'', "\"");
    match serde_json::from_str(&normalized) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}
