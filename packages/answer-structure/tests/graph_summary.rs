//! End-to-end graph summary parsing.

use answer_structure::testing::{GRAPH_REPORT, GRAPH_WITHOUT_KEYWORDS};
use answer_structure::{
    parse_graph_summary, DisplayLimits, GraphItem, GraphSummary, GraphSummaryParser,
    ParserConfig,
};

#[test]
fn test_near_duplicate_bullets_collapse() {
    let summary = parse_graph_summary(
        "Keyword: ML - Paper: Foo\n• Content: great results\n• Content: great results!!",
    );

    assert_eq!(
        summary,
        GraphSummary::Structured(vec![
            GraphItem::new("ML", "Foo").with_abstracts(["great results"])
        ])
    );
}

#[test]
fn test_graph_report_blocks() {
    let summary = parse_graph_summary(GRAPH_REPORT);
    assert!(summary.is_structured());
    assert_eq!(summary.len(), 2);

    let first = &summary.items()[0];
    assert_eq!(first.keyword.as_deref(), Some("hybrid bonding"));
    assert_eq!(
        first.paper.as_deref(),
        Some("Annealing Effects in Sub-8 µm Pitch Die-to-Wafer")
    );
    assert_eq!(
        first.abstracts,
        vec![
            "Annealing closes Cu dishing gaps at 300C.",
            "Results: void density drops after a two-step anneal.",
        ]
    );

    let second = &summary.items()[1];
    assert_eq!(second.keyword.as_deref(), Some("warpage"));
    assert_eq!(
        second.paper.as_deref(),
        Some("Dielectric Stack Optimization for Die-level Warpage Reduction")
    );
    assert_eq!(second.abstracts, vec!["Stress-balanced stacks reduce die bow."]);
}

#[test]
fn test_blank_line_tails_without_bullets() {
    let summary = parse_graph_summary("Keyword: AI - Paper: Bar\nAbstract: one\n\n- two");

    assert_eq!(summary.items()[0].abstracts, vec!["one", "two"]);
}

#[test]
fn test_keyword_without_paper() {
    let summary = parse_graph_summary("Keyword: lonely\n• Summary: only fragment");

    let item = &summary.items()[0];
    assert_eq!(item.keyword.as_deref(), Some("lonely"));
    assert_eq!(item.paper, None);
    assert_eq!(item.abstracts, vec!["only fragment"]);
}

#[test]
fn test_fallback_splits_paragraphs_and_bullets() {
    let summary = parse_graph_summary(GRAPH_WITHOUT_KEYWORDS);

    assert!(!summary.is_structured());
    let fragments: Vec<&str> = summary
        .items()
        .iter()
        .map(|item| {
            assert_eq!(item.keyword, None);
            assert_eq!(item.paper, None);
            item.abstracts[0].as_str()
        })
        .collect();
    assert_eq!(
        fragments,
        vec![
            "First paragraph about bonding.",
            "Second paragraph about warpage.",
            "Third paragraph",
            "Fourth piece",
        ]
    );
}

#[test]
fn test_fallback_is_limited() {
    let raw: String = (0..20)
        .map(|i| format!("distinct fragment number {i}"))
        .collect::<Vec<_>>()
        .join("\n\n");

    assert_eq!(parse_graph_summary(&raw).len(), 8);

    let parser = GraphSummaryParser::with_config(ParserConfig::new().with_graph_fallback_limit(3));
    let summary = parser.parse(&raw);
    assert_eq!(summary.len(), 3);
    assert_eq!(summary.items()[2].abstracts, vec!["distinct fragment number 2"]);
}

#[test]
fn test_empty_input_has_no_items() {
    assert_eq!(parse_graph_summary(""), GraphSummary::Fallback(vec![]));
    assert!(parse_graph_summary("  \n\n • ").is_empty());
}

#[test]
fn test_structured_result_is_unbounded_until_capped() {
    let raw: String = (0..15)
        .map(|i| format!("Keyword: k{i} - Paper: p{i}\n• fragment {i}\n"))
        .collect();

    let summary = parse_graph_summary(&raw);
    assert_eq!(summary.len(), 15);

    let limits = DisplayLimits::default();
    let capped = summary.capped(&limits);
    assert!(capped.is_structured());
    assert_eq!(capped.len(), 12);
}
