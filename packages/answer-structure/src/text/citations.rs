//! Citation extraction - pull `[label]` markers out of a fragment.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Shortest `[...]` span on a single line. Brackets do not nest.
static CITATION_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]").unwrap());

/// A fragment with its citation markers removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CitationSplit {
    /// Fragment text without markers, trimmed
    pub text: String,

    /// Marker labels, left to right, duplicates kept
    pub citations: Vec<String>,
}

/// Remove every `[...]` span from `fragment` and return the cleaned text
/// plus the inner labels in order of appearance.
///
/// Unbalanced brackets that never close on the same line are left in the
/// text. Whitespace around removed markers is not collapsed, only the ends
/// are trimmed.
pub fn extract_citations(fragment: &str) -> CitationSplit {
    let mut citations = Vec::new();
    let cleaned = CITATION_MARKER.replace_all(fragment, |caps: &regex::Captures| {
        citations.push(caps[1].to_string());
        ""
    });

    CitationSplit {
        text: cleaned.trim().to_string(),
        citations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_in_order_and_strips() {
        let split = extract_citations("too high [A][B]");
        assert_eq!(split.text, "too high");
        assert_eq!(split.citations, vec!["A", "B"]);
    }

    #[test]
    fn test_no_markers_only_trims() {
        let split = extract_citations("  plain text \n");
        assert_eq!(split.text, "plain text");
        assert!(split.citations.is_empty());

        assert_eq!(extract_citations(""), CitationSplit::default());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let split = extract_citations("a [1] b [1] c [2]");
        assert_eq!(split.citations, vec!["1", "1", "2"]);
        assert_eq!(split.text, "a  b  c");
    }

    #[test]
    fn test_empty_marker_yields_empty_label() {
        let split = extract_citations("see [] here");
        assert_eq!(split.citations, vec![""]);
        assert_eq!(split.text, "see  here");
    }

    #[test]
    fn test_unbalanced_brackets_stay() {
        let split = extract_citations("open [bracket never closes");
        assert_eq!(split.text, "open [bracket never closes");
        assert!(split.citations.is_empty());

        let split = extract_citations("stray ] then [ok]");
        assert_eq!(split.text, "stray ] then");
        assert_eq!(split.citations, vec!["ok"]);
    }

    #[test]
    fn test_markers_do_not_span_lines() {
        let split = extract_citations("line one [a\nline two] end");
        assert_eq!(split.text, "line one [a\nline two] end");
        assert!(split.citations.is_empty());
    }

    #[test]
    fn test_nested_brackets_close_at_first_bracket() {
        // The span ends at the first `]`, so the outer closer is left over.
        let split = extract_citations("[a[b]c]");
        assert_eq!(split.citations, vec!["a[b"]);
        assert_eq!(split.text, "c]");
    }
}
