//! Graph summary parsing - `Keyword: ... - Paper: ...` blocks with abstract
//! fragments.

use regex::Regex;
use std::sync::LazyLock;

use crate::text::dedup::Deduplicator;
use crate::types::config::ParserConfig;
use crate::types::graph::{GraphItem, GraphSummary};

/// Start of a block.
static KEYWORD_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Keyword\s*:").unwrap());

/// Keyword up to a hyphen or newline, then an optional `- Paper: ...` up to
/// a newline or bullet.
static BLOCK_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*([^\-\n]+)?(?:\s*-\s*Paper\s*:\s*([^\n•]+))?").unwrap()
});

static FRAGMENT_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:Content|Summary|Abstract(?:\s*Content)?)\s*:\s*").unwrap()
});

static LEADING_DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[—-]\s*").unwrap());

static NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());

/// Paragraph breaks or bullets, for text without any blocks.
static FALLBACK_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\n+|•").unwrap());

const BULLET: char = '•';

/// Parses graph-summary text into [`GraphSummary`] values.
#[derive(Debug, Clone, Default)]
pub struct GraphSummaryParser {
    config: ParserConfig,
}

impl GraphSummaryParser {
    /// Create a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `raw` into keyword/paper blocks, or plain fragments when no
    /// block is present.
    ///
    /// Never fails. Structured results are not capped.
    pub fn parse(&self, raw: &str) -> GraphSummary {
        let text = raw.replace('\r', "");
        let dedup = Deduplicator::from_config(&self.config);

        let items: Vec<GraphItem> = block_bodies(&text)
            .map(|body| parse_block(body, &dedup))
            .filter(|item| !item.is_empty())
            .collect();

        if !items.is_empty() {
            tracing::debug!(blocks = items.len(), "Parsed graph summary blocks");
            return GraphSummary::Structured(items);
        }

        let pieces = FALLBACK_BREAK
            .split(&text)
            .map(str::trim)
            .filter(|piece| !piece.is_empty());
        let fragments: Vec<GraphItem> = dedup
            .dedupe(pieces)
            .into_iter()
            .take(self.config.graph_fallback_limit)
            .map(GraphItem::fragment)
            .collect();

        tracing::debug!(
            fragments = fragments.len(),
            "No keyword blocks found, using plain fragments"
        );
        GraphSummary::Fallback(fragments)
    }
}

/// Parse `raw` with default configuration.
pub fn parse_graph_summary(raw: &str) -> GraphSummary {
    GraphSummaryParser::new().parse(raw)
}

/// Text after each `Keyword:` label up to the next one (or the end).
fn block_bodies(text: &str) -> impl Iterator<Item = &str> {
    let labels: Vec<(usize, usize)> = KEYWORD_LABEL
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();

    (0..labels.len()).map(move |i| {
        let end = labels.get(i + 1).map_or(text.len(), |next| next.0);
        &text[labels[i].1..end]
    })
}

fn parse_block(body: &str, dedup: &Deduplicator) -> GraphItem {
    let (keyword, paper, tail) = match BLOCK_HEAD.captures(body) {
        Some(caps) => {
            let keyword = caps.get(1).map_or("", |m| m.as_str()).trim();
            let paper = caps.get(2).map_or("", |m| m.as_str()).trim();
            let head_end = caps.get(0).map_or(0, |m| m.end());
            (keyword, paper, &body[head_end..])
        }
        None => ("", "", body),
    };

    let abstracts = dedup.dedupe(split_fragments(tail.trim()));
    GraphItem::new(keyword, paper).with_abstracts(abstracts)
}

/// Split a block tail on bullets (or newline runs when there are none) and
/// clean each piece.
fn split_fragments(tail: &str) -> Vec<String> {
    let pieces: Vec<&str> = if tail.contains(BULLET) {
        tail.split(BULLET).collect()
    } else {
        NEWLINE_RUN.split(tail).collect()
    };

    pieces
        .into_iter()
        .map(clean_fragment)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Drop a `Content:`-style label and a leading dash.
fn clean_fragment(piece: &str) -> String {
    let unlabeled = FRAGMENT_LABEL.replace(piece.trim(), "");
    LEADING_DASH.replace(&unlabeled, "").trim().to_string()
}
