//! Processor descriptor tables consumed by the host tracing framework.
//!
//! A [`Processor`] is a static, declarative mapping from telemetry event
//! names to attribute accessor functions. The host invokes each accessor
//! with the per-call [`CallArguments`] bag and attaches the returned string
//! to the span or log event it is assembling. The tables are built once at
//! load time and never mutated.

use crate::call::CallArguments;

/// Telemetry event carrying the captured call input.
pub const EVENT_DATA_INPUT: &str = "data.input";
/// Telemetry event carrying the captured call output.
pub const EVENT_DATA_OUTPUT: &str = "data.output";
/// Telemetry event carrying lightweight call metadata.
pub const EVENT_METADATA: &str = "metadata";

/// An attribute accessor: a pure function from the call-arguments bag to a
/// JSON-safe string. Accessors never fail past their own boundary; internal
/// extraction errors degrade to fallback values.
pub type Accessor = fn(&CallArguments) -> String;

/// One named attribute and the accessor that produces its value.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSpec {
    pub attribute: &'static str,
    pub accessor: Accessor,
}

/// One telemetry event and the attributes captured when it fires.
#[derive(Debug, Clone, Copy)]
pub struct EventSpec {
    pub name: &'static str,
    pub attributes: &'static [AttributeSpec],
}

/// A processor descriptor: type tag, static attribute groups attached to
/// the traced instance, and per-event attribute extractors.
#[derive(Debug)]
pub struct Processor {
    pub kind: &'static str,
    pub attributes: &'static [&'static [AttributeSpec]],
    pub events: &'static [EventSpec],
}

impl Processor {
    /// Look up an event descriptor by name.
    pub fn event(&self, name: &str) -> Option<&EventSpec> {
        self.events.iter().find(|event| event.name == name)
    }

    /// Run every accessor of the named event, returning `(attribute, value)`
    /// pairs, or `None` when the event is not part of this descriptor.
    pub fn capture(
        &self,
        name: &str,
        arguments: &CallArguments,
    ) -> Option<Vec<(&'static str, String)>> {
        self.event(name).map(|event| {
            event
                .attributes
                .iter()
                .map(|spec| (spec.attribute, (spec.accessor)(arguments)))
                .collect()
        })
    }

    /// Evaluate the static attribute groups against the arguments bag.
    pub fn static_attributes(&self, arguments: &CallArguments) -> Vec<(&'static str, String)> {
        self.attributes
            .iter()
            .flat_map(|group| group.iter())
            .map(|spec| (spec.attribute, (spec.accessor)(arguments)))
            .collect()
    }
}

/// Both processor tables, in declaration order.
pub fn registry() -> [&'static Processor; 2] {
    [
        &crate::client::SEARCH_CLIENT_PROCESSOR,
        &crate::request::SEARCH_POST_PROCESSOR,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_both_processors() {
        let processors = registry();
        assert_eq!(processors.len(), 2);
        assert!(processors.iter().all(|p| p.kind == "search"));
    }

    #[test]
    fn every_processor_exposes_the_three_events_in_order() {
        for processor in registry() {
            let names: Vec<&str> = processor.events.iter().map(|e| e.name).collect();
            assert_eq!(names, [EVENT_DATA_INPUT, EVENT_DATA_OUTPUT, EVENT_METADATA]);
        }
    }

    #[test]
    fn event_lookup_finds_known_names() {
        let processor = &crate::client::SEARCH_CLIENT_PROCESSOR;
        assert!(processor.event(EVENT_DATA_INPUT).is_some());
        assert!(processor.event("data.unknown").is_none());
    }

    #[test]
    fn capture_unknown_event_returns_none() {
        let arguments = CallArguments::default();
        let captured = crate::client::SEARCH_CLIENT_PROCESSOR.capture("nope", &arguments);
        assert!(captured.is_none());
    }

    #[test]
    fn capture_runs_every_event_accessor() {
        let arguments = CallArguments::default();
        let captured = crate::request::SEARCH_POST_PROCESSOR
            .capture(EVENT_DATA_OUTPUT, &arguments)
            .unwrap();
        assert_eq!(captured, vec![("results", "[]".to_string())]);
    }

    #[test]
    fn static_attributes_flatten_the_client_group() {
        let arguments = CallArguments::default();
        let attributes = crate::client::SEARCH_CLIENT_PROCESSOR.static_attributes(&arguments);
        let names: Vec<&str> = attributes.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["type", "version", "endpoint", "index_name"]);
    }

    #[test]
    fn post_processor_has_no_static_attributes() {
        let arguments = CallArguments::default();
        let attributes = crate::request::SEARCH_POST_PROCESSOR.static_attributes(&arguments);
        assert!(attributes.is_empty());
    }
}
