//! Parsing pipelines - the core of the library.
//!
//! Two independent pipelines share the [`crate::text`] utilities:
//! - Answer parsing (headers → sections → items → citations)
//! - Graph-summary parsing (keyword blocks → fragments → dedup)

pub mod answer;
pub mod graph;
pub mod headers;
pub mod items;

pub use answer::{parse_answer, AnswerParser, AnswerSections};
pub use graph::{parse_graph_summary, GraphSummaryParser};
pub use headers::{
    BareHeader, HeaderChain, HeaderMatcher, HeaderSpan, HeadingHeader, LabeledHeader,
    SectionTopic,
};
pub use items::{split_any_list, split_list, split_title, ListSplit, ListStyle};
