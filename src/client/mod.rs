//! Client-level search processor.
//!
//! Attaches static identity attributes to a traced search client and
//! captures three events per call: the request parameters with vector
//! payloads elided, a summary of the paged result, and lightweight call
//! metadata. Extraction failures degrade to fallback payloads; they never
//! reach the host framework as errors.

pub(crate) mod vector;

use serde_json::{json, Value};

use crate::call::CallArguments;
use crate::descriptor::{
    AttributeSpec, EventSpec, Processor, EVENT_DATA_INPUT, EVENT_DATA_OUTPUT, EVENT_METADATA,
};
use crate::util::{json_safe, kind_name};

/// Integration tag attached to every traced search client.
const TYPE_TAG: &str = "azure.search";
/// Client library major version this processor understands.
const VERSION_TAG: &str = "11";

/// Sentinel returned by output capture when the call produced no result.
pub const NO_RESULT: &str = "NO_RESULT";

/// Client-level processor descriptor.
pub static SEARCH_CLIENT_PROCESSOR: Processor = Processor {
    kind: "search",
    attributes: &[&[
        AttributeSpec {
            attribute: "type",
            accessor: type_tag,
        },
        AttributeSpec {
            attribute: "version",
            accessor: version_tag,
        },
        AttributeSpec {
            attribute: "endpoint",
            accessor: endpoint,
        },
        AttributeSpec {
            attribute: "index_name",
            accessor: index_name,
        },
    ]],
    events: &[
        EventSpec {
            name: EVENT_DATA_INPUT,
            attributes: &[AttributeSpec {
                attribute: "parameters",
                accessor: capture_search_input,
            }],
        },
        EventSpec {
            name: EVENT_DATA_OUTPUT,
            attributes: &[AttributeSpec {
                attribute: "summary",
                accessor: capture_search_output,
            }],
        },
        EventSpec {
            name: EVENT_METADATA,
            attributes: &[AttributeSpec {
                attribute: "info",
                accessor: capture_metadata,
            }],
        },
    ],
};

fn type_tag(_arguments: &CallArguments) -> String {
    TYPE_TAG.to_string()
}

fn version_tag(_arguments: &CallArguments) -> String {
    VERSION_TAG.to_string()
}

fn endpoint(arguments: &CallArguments) -> String {
    arguments.instance_str("endpoint").to_string()
}

fn index_name(arguments: &CallArguments) -> String {
    arguments.instance_str("index_name").to_string()
}

/// Capture the call's keyword arguments as JSON, with vector payloads
/// elided.
///
/// The elision pass works on a clone of `kwargs`, so the caller's data is
/// never mutated. If the pass fails, the original arguments are serialized
/// unstripped rather than dropping the event.
pub fn capture_search_input(arguments: &CallArguments) -> String {
    let empty = json!({});
    let kwargs = arguments.kwargs.as_ref().unwrap_or(&empty);
    match strip_vector_queries(kwargs) {
        Ok(elided) => json_safe(&elided),
        Err(error) => {
            tracing::warn!("input capture falling back to unstripped arguments: {error:#}");
            json_safe(kwargs)
        }
    }
}

/// Return a copy of `kwargs` with vector payloads removed from a present,
/// non-empty `vector_queries` array.
fn strip_vector_queries(kwargs: &Value) -> anyhow::Result<Value> {
    let Some(fields) = kwargs.as_object() else {
        anyhow::bail!("kwargs is not an object: {}", kind_name(kwargs));
    };
    let mut copy = fields.clone();
    let elided = match copy.get("vector_queries") {
        None | Some(Value::Null) => None,
        Some(Value::Array(entries)) => {
            if entries.is_empty() {
                None
            } else {
                tracing::debug!(count = entries.len(), "eliding vector query payloads");
                Some(vector::strip_queries(entries))
            }
        }
        Some(other) => anyhow::bail!("vector_queries is not an array: {}", kind_name(other)),
    };
    if let Some(entries) = elided {
        copy.insert("vector_queries".to_string(), Value::Array(entries));
    }
    Ok(Value::Object(copy))
}

/// Summarize a paged search result: count, coverage, facets, and the
/// runtime type of the result value.
///
/// Returns the [`NO_RESULT`] sentinel when the call produced no result, and
/// an error-wrapped object when the result cannot be summarized.
pub fn capture_search_output(arguments: &CallArguments) -> String {
    let Some(pager) = arguments.result.as_ref() else {
        return NO_RESULT.to_string();
    };
    let summary = summarize_pager(pager).unwrap_or_else(|error| {
        json!({
            "error": error.to_string(),
            "trace": format!("{error:?}"),
        })
    });
    json_safe(&summary)
}

fn summarize_pager(pager: &Value) -> anyhow::Result<Value> {
    let Some(fields) = pager.as_object() else {
        anyhow::bail!("result is not an object: {}", kind_name(pager));
    };
    let field = |key: &str| fields.get(key).cloned().unwrap_or(Value::Null);
    Ok(json!({
        "count": field("count"),
        "coverage": field("coverage"),
        "facets": field("facets"),
        "result_type": kind_name(pager),
    }))
}

/// Lightweight call metadata: endpoint, index, and latency.
pub fn capture_metadata(arguments: &CallArguments) -> String {
    let meta = json!({
        "endpoint": arguments.instance_str("endpoint"),
        "index": arguments.instance_str("index_name"),
        "latency_ms": arguments.latency_ms,
    });
    json_safe(&meta)
}
