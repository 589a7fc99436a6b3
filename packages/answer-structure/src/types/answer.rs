//! Answer types - the structured form of a challenges/solutions answer.

use serde::{Deserialize, Serialize};

use super::config::DisplayLimits;

/// Placeholder shown when an answer is empty after trimming.
pub const EMPTY_ANSWER_PLACEHOLDER: &str = "—";

/// One entry of a challenges or solutions list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedItem {
    /// 1-based position in its list, independent of any literal numbering
    pub index: usize,

    /// Title taken from `**Title**:` or `Title:` prefixes
    pub title: Option<String>,

    /// Visible text with citation markers removed
    pub body: String,

    /// Citation labels in order of appearance
    pub citations: Vec<String>,
}

impl ParsedItem {
    /// Create an untitled item with no citations.
    pub fn new(index: usize, body: impl Into<String>) -> Self {
        Self {
            index,
            title: None,
            body: body.into(),
            citations: Vec::new(),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the citations.
    pub fn with_citations(mut self, citations: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.citations = citations.into_iter().map(|c| c.into()).collect();
        self
    }

    /// Heading text for a card: the title, or `Item N` when untitled.
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("Item {}", self.index),
        }
    }
}

/// Which path produced the solutions section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SolutionsLayout {
    /// No solutions text was found.
    #[default]
    None,

    /// Items came from `-`, `•` or `*` bullets.
    Bulleted,

    /// Items came from `1.`-style numbering (no bullets present).
    Numbered,

    /// No list markers; the whole section is one untitled item.
    ///
    /// This item is kept verbatim: citation markers are NOT stripped from
    /// it, unlike listed items.
    Paragraph,
}

/// A successfully structured answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ParsedAnswer {
    /// Free text preceding the detected list
    pub lead_text: Option<String>,

    /// Itemized challenges, numbered by position
    pub challenge_items: Vec<ParsedItem>,

    /// Solutions; untitled
    pub solution_items: Vec<ParsedItem>,

    /// How the solutions section was recognized
    pub solutions_layout: SolutionsLayout,

    /// Original text, set only when nothing could be structured.
    ///
    /// Always `None` inside [`AnswerParse::Structured`]; populated by
    /// [`AnswerParse::into_parsed`] for the fallback case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_fallback_text: Option<String>,
}

impl ParsedAnswer {
    /// True when the answer has lead text, challenge items or solutions.
    pub fn has_content(&self) -> bool {
        self.lead_text.is_some()
            || !self.challenge_items.is_empty()
            || !self.solution_items.is_empty()
    }
}

/// The result of parsing an answer.
///
/// Either structure was detected, or the trimmed original text is handed
/// back for plain display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "answer", rename_all = "snake_case")]
pub enum AnswerParse {
    Structured(ParsedAnswer),
    Fallback(String),
}

impl AnswerParse {
    /// Whether any structure was recognized.
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    /// The structured answer, if any.
    pub fn structured(&self) -> Option<&ParsedAnswer> {
        match self {
            Self::Structured(answer) => Some(answer),
            Self::Fallback(_) => None,
        }
    }

    /// The fallback text, if nothing was structured.
    pub fn fallback_text(&self) -> Option<&str> {
        match self {
            Self::Structured(_) => None,
            Self::Fallback(text) => Some(text),
        }
    }

    /// Lead text; `None` for fallback results.
    pub fn lead_text(&self) -> Option<&str> {
        self.structured().and_then(|a| a.lead_text.as_deref())
    }

    /// Challenge items; empty for fallback results.
    pub fn challenge_items(&self) -> &[ParsedItem] {
        self.structured()
            .map(|a| a.challenge_items.as_slice())
            .unwrap_or_default()
    }

    /// Solution items; empty for fallback results.
    pub fn solution_items(&self) -> &[ParsedItem] {
        self.structured()
            .map(|a| a.solution_items.as_slice())
            .unwrap_or_default()
    }

    /// Flatten into a single record, with `raw_fallback_text` set for the
    /// fallback case and every structured field left empty.
    pub fn into_parsed(self) -> ParsedAnswer {
        match self {
            Self::Structured(answer) => answer,
            Self::Fallback(text) => ParsedAnswer {
                raw_fallback_text: Some(text),
                ..Default::default()
            },
        }
    }

    /// Apply the per-item citation cap for challenge cards.
    ///
    /// Solution citations are shown in full, matching how solution lists
    /// are displayed.
    pub fn capped(mut self, limits: &DisplayLimits) -> Self {
        if let Self::Structured(answer) = &mut self {
            for item in &mut answer.challenge_items {
                item.citations.truncate(limits.max_citations_per_item);
            }
        }
        self
    }
}
