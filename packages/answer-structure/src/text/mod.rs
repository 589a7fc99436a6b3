//! Fragment-level text utilities shared by both parsers.
//!
//! - [`citations`] - strip `[label]` markers and collect their labels
//! - [`dedup`] - token-Jaccard near-duplicate suppression

pub mod citations;
pub mod dedup;

pub use citations::{extract_citations, CitationSplit};
pub use dedup::{dedupe, is_similar, jaccard_index, signature, Deduplicator};
