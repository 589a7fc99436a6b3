//! Graph summary types - keyword/paper/abstract triples.

use serde::{Deserialize, Serialize};

use super::config::DisplayLimits;

/// One keyword/paper block with its deduplicated abstract fragments.
///
/// Every item carries at least one non-empty field; blocks that end up
/// empty are dropped by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GraphItem {
    pub keyword: Option<String>,
    pub paper: Option<String>,
    #[serde(default)]
    pub abstracts: Vec<String>,
}

impl GraphItem {
    /// Create an item from optional keyword and paper labels.
    ///
    /// Blank labels are stored as `None`.
    pub fn new(keyword: impl Into<String>, paper: impl Into<String>) -> Self {
        Self {
            keyword: non_empty(keyword.into()),
            paper: non_empty(paper.into()),
            abstracts: Vec::new(),
        }
    }

    /// Create a fragment-only item (no keyword, no paper).
    pub fn fragment(text: impl Into<String>) -> Self {
        Self {
            abstracts: vec![text.into()],
            ..Default::default()
        }
    }

    /// Set the abstract fragments.
    pub fn with_abstracts(mut self, abstracts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.abstracts = abstracts.into_iter().map(|a| a.into()).collect();
        self
    }

    /// True when keyword, paper and abstracts are all empty.
    pub fn is_empty(&self) -> bool {
        self.keyword.is_none() && self.paper.is_none() && self.abstracts.is_empty()
    }

    /// Split abstracts into the always-visible head and the part hidden
    /// behind an expand control.
    pub fn visible_abstracts(&self, limits: &DisplayLimits) -> (&[String], &[String]) {
        let cut = self.abstracts.len().min(limits.max_visible_abstracts);
        self.abstracts.split_at(cut)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// The result of parsing a graph summary.
///
/// `Structured` holds one item per recognized `Keyword:` block, unbounded.
/// `Fallback` holds fragment-only items from plain paragraph splitting,
/// already limited by `ParserConfig::graph_fallback_limit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum GraphSummary {
    Structured(Vec<GraphItem>),
    Fallback(Vec<GraphItem>),
}

impl GraphSummary {
    /// Whether `Keyword:` blocks were recognized.
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    /// Items regardless of how they were produced.
    pub fn items(&self) -> &[GraphItem] {
        match self {
            Self::Structured(items) | Self::Fallback(items) => items,
        }
    }

    /// Consume into items regardless of how they were produced.
    pub fn into_items(self) -> Vec<GraphItem> {
        match self {
            Self::Structured(items) | Self::Fallback(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Apply the graph item cap.
    pub fn capped(self, limits: &DisplayLimits) -> Self {
        match self {
            Self::Structured(mut items) => {
                items.truncate(limits.max_graph_items);
                Self::Structured(items)
            }
            Self::Fallback(mut items) => {
                items.truncate(limits.max_graph_items);
                Self::Fallback(items)
            }
        }
    }
}
