//! Structured views of free-form LLM answers
//!
//! Different providers format the same kind of answer in different ways:
//! `**Challenges:**` vs `### Challenges`, `*` bullets vs `1.` numbering,
//! `[label]` citation markers sprinkled through the text. This library
//! imposes one schema on all of them, best effort.
//!
//! # Design Philosophy
//!
//! - Total functions: every input parses, unrecognized text falls back
//! - Fallback is explicit in the result type, not inferred from empty fields
//! - Display caps are caller policy, parsers return everything
//! - One shared deduplicator so both pipelines agree on "near-duplicate"
//!
//! # Usage
//!
//! ```rust
//! use answer_structure::{parse_answer, parse_graph_summary};
//!
//! let answer = parse_answer("Challenges: - **Cost**: too high [A][B]\nSolutions: - Use caching [C]");
//! assert!(answer.is_structured());
//! assert_eq!(answer.challenge_items()[0].title.as_deref(), Some("Cost"));
//! assert_eq!(answer.solution_items()[0].citations, vec!["C"]);
//!
//! let graph = parse_graph_summary("Keyword: ML - Paper: Foo\n• Content: great results");
//! assert_eq!(graph.items()[0].abstracts, vec!["great results"]);
//! ```
//!
//! # Modules
//!
//! - [`text`] - Citation extraction and near-duplicate suppression
//! - [`pipeline`] - Answer and graph-summary parsers, header matchers
//! - [`types`] - Result types and configuration
//! - [`testing`] - Sample provider outputs

pub mod error;
pub mod pipeline;
pub mod testing;
pub mod text;
pub mod types;

// Re-export core types at crate root
pub use error::{ConfigError, Result};
pub use types::{
    answer::{AnswerParse, ParsedAnswer, ParsedItem, SolutionsLayout, EMPTY_ANSWER_PLACEHOLDER},
    config::{DisplayLimits, ParserConfig},
    graph::{GraphItem, GraphSummary},
};

// Re-export pipeline components
pub use pipeline::{
    // Entry points
    parse_answer, parse_graph_summary, AnswerParser, GraphSummaryParser,
    // Header matching
    BareHeader, HeaderChain, HeaderMatcher, HeaderSpan, HeadingHeader, LabeledHeader,
    SectionTopic,
};

// Re-export text utilities
pub use text::{dedupe, extract_citations, CitationSplit, Deduplicator};
