//! Per-request post-processor.
//!
//! Scoped to a single search call: captures the raw query text, a trimmed
//! view of the result documents with their score fields, and a snapshot of
//! the requested query options plus latency.

use serde_json::{json, Map, Value};

use crate::call::{field, field_or_null, CallArguments};
use crate::descriptor::{
    AttributeSpec, EventSpec, Processor, EVENT_DATA_INPUT, EVENT_DATA_OUTPUT, EVENT_METADATA,
};
use crate::util::json_safe;

/// Query options mirrored into the metadata event, in emission order.
const OPTION_FIELDS: &[&str] = &[
    "select",
    "include_total_result_count",
    "facets",
    "filter",
    "highlight_fields",
    "highlight_post_tag",
    "highlight_pre_tag",
    "minimum_coverage",
    "order_by",
    "query_type",
    "scoring_parameters",
    "scoring_profile",
    "semantic_query",
];

/// Per-request post-processor descriptor.
pub static SEARCH_POST_PROCESSOR: Processor = Processor {
    kind: "search",
    attributes: &[],
    events: &[
        EventSpec {
            name: EVENT_DATA_INPUT,
            attributes: &[AttributeSpec {
                attribute: "search_text",
                accessor: capture_input,
            }],
        },
        EventSpec {
            name: EVENT_DATA_OUTPUT,
            attributes: &[AttributeSpec {
                attribute: "results",
                accessor: capture_output,
            }],
        },
        EventSpec {
            name: EVENT_METADATA,
            attributes: &[AttributeSpec {
                attribute: "options",
                accessor: capture_meta,
            }],
        },
    ],
};

/// The raw query text, as a plain string. Empty when the request or the
/// field is absent.
pub fn capture_input(arguments: &CallArguments) -> String {
    match field(arguments.search_request(), "search_text") {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// Trimmed result documents: title, description, and the two score fields.
/// `[]` when the call has produced no results.
pub fn capture_output(arguments: &CallArguments) -> String {
    let results = field(arguments.result.as_ref(), "results").and_then(Value::as_array);
    let items = match results {
        Some(items) if !items.is_empty() => items,
        _ => return "[]".to_string(),
    };
    let filtered: Vec<Value> = items.iter().map(result_entry).collect();
    json_safe(&Value::Array(filtered))
}

/// Fixed field set lifted from one result item and its side-mapping. A
/// malformed item degrades field-by-field to `null`.
fn result_entry(item: &Value) -> Value {
    let document = field(Some(item), "additional_properties");
    json!({
        "docTitle": field_or_null(document, "docTitle"),
        "description": field_or_null(document, "description"),
        "@search.score": field_or_null(Some(item), "score"),
        "@search.reranker_score": field_or_null(Some(item), "reranker_score"),
    })
}

/// Snapshot of the requested query options plus call latency. `{}` when the
/// call carried no request object.
pub fn capture_meta(arguments: &CallArguments) -> String {
    let Some(request) = arguments.search_request() else {
        return "{}".to_string();
    };
    let mut meta = Map::new();
    for &key in OPTION_FIELDS {
        meta.insert(key.to_string(), field_or_null(Some(request), key));
    }
    meta.insert("latency_ms".to_string(), json!(arguments.latency_ms));
    json_safe(&Value::Object(meta))
}
