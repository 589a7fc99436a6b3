//! Answer parsing - split a challenges/solutions answer into sections and
//! items.
//!
//! The flow is:
//! 1. Find the challenges header; text before it is the lead.
//! 2. The challenges body runs to the next solutions header; the rest is
//!    the solutions body.
//! 3. Without a challenges header, split on the solutions header alone.
//!    Unlisted text before it is the lead.
//! 4. Itemize each body; fall back to the raw text when nothing is found.

use crate::types::answer::{
    AnswerParse, ParsedAnswer, ParsedItem, SolutionsLayout, EMPTY_ANSWER_PLACEHOLDER,
};

use super::headers::{HeaderChain, SectionTopic};
use super::items::{split_any_list, titled_item, untitled_item, ListStyle};

/// Raw section slices of an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnswerSections<'a> {
    /// Text before the challenges header (only when one was found)
    pub lead: Option<&'a str>,

    /// Challenges body, or everything before the solutions header
    pub challenges: &'a str,

    /// Everything after the solutions header
    pub solutions: &'a str,

    /// Whether a challenges header was found
    pub has_challenges_header: bool,

    /// Whether a solutions header was found
    pub has_solutions_header: bool,
}

/// Parses provider answers into [`AnswerParse`] values.
#[derive(Debug, Default)]
pub struct AnswerParser {
    headers: HeaderChain,
}

impl AnswerParser {
    /// Create a parser with the standard header chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom header chain.
    pub fn with_headers(mut self, headers: HeaderChain) -> Self {
        self.headers = headers;
        self
    }

    /// Locate the lead, challenges and solutions slices of `text`.
    pub fn split_sections<'a>(&self, text: &'a str) -> AnswerSections<'a> {
        if let Some(challenges) = self.headers.find(text, SectionTopic::Challenges) {
            let after = &text[challenges.end..];
            let solutions_header = self.headers.find(after, SectionTopic::Solutions);
            let (body, solutions) = match solutions_header {
                Some(header) => (&after[..header.start], &after[header.end..]),
                None => (after, ""),
            };
            return AnswerSections {
                lead: Some(&text[..challenges.start]),
                challenges: body,
                solutions,
                has_challenges_header: true,
                has_solutions_header: solutions_header.is_some(),
            };
        }

        match self.headers.find(text, SectionTopic::Solutions) {
            Some(header) => AnswerSections {
                lead: None,
                challenges: &text[..header.start],
                solutions: &text[header.end..],
                has_challenges_header: false,
                has_solutions_header: true,
            },
            None => AnswerSections {
                challenges: text,
                ..Default::default()
            },
        }
    }

    /// Parse `raw` into a structured answer, or hand back the trimmed text.
    ///
    /// Never fails.
    pub fn parse(&self, raw: &str) -> AnswerParse {
        let text = raw.replace('\r', "");
        let sections = self.split_sections(&text);

        let mut answer = ParsedAnswer {
            lead_text: sections.lead.and_then(clean_lead),
            ..Default::default()
        };

        match split_any_list(sections.challenges.trim()) {
            Some((style, split)) => {
                if !sections.has_challenges_header && answer.lead_text.is_none() {
                    answer.lead_text = clean_lead(&split.preamble);
                }
                answer.challenge_items = split
                    .entries
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| titled_item(i + 1, entry))
                    .collect();
                tracing::debug!(
                    style = ?style,
                    count = answer.challenge_items.len(),
                    "Parsed challenge items"
                );
            }
            // Prose ahead of a solutions header is an introduction
            None if !sections.has_challenges_header && sections.has_solutions_header => {
                answer.lead_text = clean_lead(sections.challenges);
            }
            None => {}
        }

        let (layout, solution_items) = parse_solutions(sections.solutions.trim());
        answer.solutions_layout = layout;
        answer.solution_items = solution_items;

        if !answer.has_content() {
            let trimmed = text.trim();
            tracing::debug!(len = trimmed.len(), "No answer structure found, using raw text");
            let fallback = if trimmed.is_empty() {
                EMPTY_ANSWER_PLACEHOLDER
            } else {
                trimmed
            };
            return AnswerParse::Fallback(fallback.to_string());
        }

        AnswerParse::Structured(answer)
    }
}

/// Parse `raw` with the standard header chain.
pub fn parse_answer(raw: &str) -> AnswerParse {
    AnswerParser::new().parse(raw)
}

/// Itemize a solutions body.
///
/// Unlisted text is kept verbatim as a single item, citation markers
/// included.
fn parse_solutions(body: &str) -> (SolutionsLayout, Vec<ParsedItem>) {
    if body.is_empty() {
        return (SolutionsLayout::None, Vec::new());
    }

    match split_any_list(body) {
        Some((style, split)) => {
            let layout = match style {
                ListStyle::Bulleted => SolutionsLayout::Bulleted,
                ListStyle::Numbered => SolutionsLayout::Numbered,
            };
            let items = split
                .entries
                .iter()
                .enumerate()
                .map(|(i, entry)| untitled_item(i + 1, entry))
                .collect();
            (layout, items)
        }
        None => (
            SolutionsLayout::Paragraph,
            vec![ParsedItem::new(1, body)],
        ),
    }
}

/// Trim lead text and drop leading markdown heading markers.
fn clean_lead(lead: &str) -> Option<String> {
    let cleaned = lead.trim().trim_start_matches('#').trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sections_with_both_headers() {
        let text = "Lead\n**Challenges:**\n- a\n**Solutions:**\n- b";
        let sections = AnswerParser::new().split_sections(text);

        assert_eq!(sections.lead, Some("Lead"));
        assert!(sections.has_challenges_header);
        assert!(sections.has_solutions_header);
        assert_eq!(sections.challenges.trim(), "- a");
        assert_eq!(sections.solutions.trim(), "- b");
    }

    #[test]
    fn test_split_sections_solutions_only() {
        let text = "before\nSolutions:\n1. x";
        let sections = AnswerParser::new().split_sections(text);

        assert_eq!(sections.lead, None);
        assert!(!sections.has_challenges_header);
        assert!(sections.has_solutions_header);
        assert_eq!(sections.challenges, "before");
        assert_eq!(sections.solutions.trim(), "1. x");
    }

    #[test]
    fn test_split_sections_without_headers() {
        let sections = AnswerParser::new().split_sections("free text");
        assert_eq!(sections.challenges, "free text");
        assert_eq!(sections.solutions, "");
        assert_eq!(sections.lead, None);
        assert!(!sections.has_solutions_header);
    }

    #[test]
    fn test_solutions_before_challenges_are_lead() {
        let text = "Solutions:\n- early\nChallenges:\n- late";
        let sections = AnswerParser::new().split_sections(text);
        assert_eq!(sections.lead, Some("Solutions:\n- early"));
        assert_eq!(sections.solutions, "");
    }

    #[test]
    fn test_clean_lead() {
        assert_eq!(clean_lead("  ## Overview  "), Some("Overview".to_string()));
        assert_eq!(clean_lead(" \n "), None);
        assert_eq!(clean_lead("###"), None);
    }

    #[test]
    fn test_parse_solutions_layouts() {
        assert_eq!(parse_solutions(""), (SolutionsLayout::None, vec![]));

        let (layout, items) = parse_solutions("- a [1]\n- b");
        assert_eq!(layout, SolutionsLayout::Bulleted);
        assert_eq!(items[0].citations, vec!["1"]);

        let (layout, items) = parse_solutions("Use a cache [C].");
        assert_eq!(layout, SolutionsLayout::Paragraph);
        assert_eq!(items, vec![ParsedItem::new(1, "Use a cache [C].")]);
    }

    #[test]
    fn test_carriage_returns_are_ignored() {
        let parse = parse_answer("Challenges:\r\n- **Cost**: high\r\nSolutions:\r\n- cache\r\n");
        assert_eq!(parse.challenge_items()[0].body, "high");
        assert_eq!(parse.solution_items()[0].body, "cache");
    }

    #[test]
    fn test_prose_before_solutions_becomes_lead() {
        let parse = parse_answer(
            "Cost is the main barrier for small labs.\n\nSolutions:\nUse shared facilities.",
        );

        assert_eq!(
            parse.lead_text(),
            Some("Cost is the main barrier for small labs.")
        );
        assert!(parse.challenge_items().is_empty());
        assert_eq!(
            parse.solution_items(),
            &[ParsedItem::new(1, "Use shared facilities.")]
        );
    }

    #[test]
    fn test_later_labeled_prose_does_not_end_challenges() {
        let raw = "### Challenges\n- **Cost**: too high\n\n### Solutions\n- Cache results\n\nOverall, the best solution: caching.";
        let parse = parse_answer(raw);

        assert_eq!(parse.challenge_items().len(), 1);
        assert_eq!(parse.challenge_items()[0].body, "too high");
        assert_eq!(parse.solution_items().len(), 1);
        assert!(parse.solution_items()[0].body.starts_with("Cache results"));
    }

    #[test]
    fn test_empty_input_uses_placeholder() {
        assert_eq!(
            parse_answer("  \n "),
            AnswerParse::Fallback(EMPTY_ANSWER_PLACEHOLDER.to_string())
        );
    }
}
