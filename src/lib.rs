#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::doc_markdown,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::single_match_else,
    clippy::uninlined_format_args
)]

pub mod call;
pub mod client;
pub mod descriptor;
pub mod request;
pub(crate) mod util;

pub use call::CallArguments;
pub use client::{NO_RESULT, SEARCH_CLIENT_PROCESSOR};
pub use descriptor::{
    registry, Accessor, AttributeSpec, EventSpec, Processor, EVENT_DATA_INPUT, EVENT_DATA_OUTPUT,
    EVENT_METADATA,
};
pub use request::SEARCH_POST_PROCESSOR;
