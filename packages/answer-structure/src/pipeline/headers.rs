//! Section header detection.
//!
//! Providers mark their "challenges" and "solutions" sections in different
//! ways: `**Challenges:**`, `### Solutions`, `Key Problems (ranked):`, or a
//! bare `Solutions` line. Each style is a small [`HeaderMatcher`]; a
//! [`HeaderChain`] asks every matcher and returns the earliest header in the
//! text, using matcher order only to break ties.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::items::starts_with_list_marker;

/// Which section a header introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionTopic {
    Challenges,
    Solutions,
}

impl SectionTopic {
    /// Regex alternation of the words that name this section.
    pub fn vocabulary(self) -> &'static str {
        match self {
            Self::Challenges => "challenges?|problems?",
            Self::Solutions => "solutions?",
        }
    }
}

/// Byte range of a header within the searched text.
///
/// `start` may point at the newline preceding the header line; `end` is
/// where the section body begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSpan {
    pub start: usize,
    pub end: usize,
}

impl HeaderSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Shift a span found in `text[offset..]` back into `text` coordinates.
    pub fn offset(self, offset: usize) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }
}

/// One header style.
#[cfg_attr(test, mockall::automock)]
pub trait HeaderMatcher {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Earliest header for `topic` in `text`, if this style occurs.
    fn find(&self, text: &str, topic: SectionTopic) -> Option<HeaderSpan>;
}

/// First match of `regex` whose line is not a list item.
///
/// `- Solutions: cache more` is a bullet that happens to mention the
/// vocabulary, not a header.
fn first_header_line(regex: &Regex, text: &str) -> Option<HeaderSpan> {
    regex
        .find_iter(text)
        .find(|m| !starts_with_list_marker(m.as_str().trim_start()))
        .map(|m| HeaderSpan::new(m.start(), m.end()))
}

fn compile_for(topic: SectionTopic, template: &str) -> Regex {
    Regex::new(&template.replace("{vocab}", topic.vocabulary())).unwrap()
}

// =============================================================================
// Labeled headers: "**Challenges:**", "Key problems (ranked):", "### Solutions:"
// =============================================================================

/// Emphasis after the colon is only a closer when it ends the line or is
/// followed by whitespace, so `Challenges: **Cost**: x` keeps its title.
const LABELED_TEMPLATE: &str =
    r"(?i)(?:^|\n)\s*\*{0,3}[^*:\n]*\b(?:{vocab})\b[^*:\n]*\*{0,3}[ \t]*:[ \t]*(?:\*{1,3}(?:[ \t]+|(?m:$)))?";

static LABELED_CHALLENGES: LazyLock<Regex> =
    LazyLock::new(|| compile_for(SectionTopic::Challenges, LABELED_TEMPLATE));
static LABELED_SOLUTIONS: LazyLock<Regex> =
    LazyLock::new(|| compile_for(SectionTopic::Solutions, LABELED_TEMPLATE));

/// Vocabulary word with optional emphasis and surrounding words, ending in
/// a colon. The body may continue on the same line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabeledHeader;

impl HeaderMatcher for LabeledHeader {
    fn name(&self) -> &'static str {
        "labeled"
    }

    fn find(&self, text: &str, topic: SectionTopic) -> Option<HeaderSpan> {
        let regex = match topic {
            SectionTopic::Challenges => &*LABELED_CHALLENGES,
            SectionTopic::Solutions => &*LABELED_SOLUTIONS,
        };
        first_header_line(regex, text)
    }
}

// =============================================================================
// Heading lines: "### Solutions", "**Key Challenges**"
// =============================================================================

const HEADING_TEMPLATE: &str =
    r"(?i)(?:^|\n)[ \t]*(?:#{1,6}[ \t]*|\*\*|__)[^\n:*_]*?\b(?:{vocab})\b[^\n:*_]*(?:\*\*|__)?[ \t]*(?:\n|$)";

static HEADING_CHALLENGES: LazyLock<Regex> =
    LazyLock::new(|| compile_for(SectionTopic::Challenges, HEADING_TEMPLATE));
static HEADING_SOLUTIONS: LazyLock<Regex> =
    LazyLock::new(|| compile_for(SectionTopic::Solutions, HEADING_TEMPLATE));

/// Markdown heading or fully bold line naming the section, no colon. The
/// body starts on the next line.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingHeader;

impl HeaderMatcher for HeadingHeader {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn find(&self, text: &str, topic: SectionTopic) -> Option<HeaderSpan> {
        let regex = match topic {
            SectionTopic::Challenges => &*HEADING_CHALLENGES,
            SectionTopic::Solutions => &*HEADING_SOLUTIONS,
        };
        first_header_line(regex, text)
    }
}

// =============================================================================
// Bare lines: "Solutions" alone on its line
// =============================================================================

const BARE_TEMPLATE: &str = r"(?i)(?:^|\n)[ \t]*(?:{vocab})[ \t]*(?:\n|$)";

static BARE_CHALLENGES: LazyLock<Regex> =
    LazyLock::new(|| compile_for(SectionTopic::Challenges, BARE_TEMPLATE));
static BARE_SOLUTIONS: LazyLock<Regex> =
    LazyLock::new(|| compile_for(SectionTopic::Solutions, BARE_TEMPLATE));

/// The vocabulary word alone on a line, no markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct BareHeader;

impl HeaderMatcher for BareHeader {
    fn name(&self) -> &'static str {
        "bare"
    }

    fn find(&self, text: &str, topic: SectionTopic) -> Option<HeaderSpan> {
        let regex = match topic {
            SectionTopic::Challenges => &*BARE_CHALLENGES,
            SectionTopic::Solutions => &*BARE_SOLUTIONS,
        };
        first_header_line(regex, text)
    }
}

// =============================================================================
// Chain
// =============================================================================

/// Ordered list of header matchers.
///
/// The header that starts earliest in the text wins, whichever matcher
/// found it. Matcher order only decides between hits at the same start.
pub struct HeaderChain {
    matchers: Vec<Box<dyn HeaderMatcher + Send + Sync>>,
}

impl HeaderChain {
    /// An empty chain that never finds a header.
    pub fn empty() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// Labeled, then heading, then bare.
    pub fn standard() -> Self {
        Self::empty()
            .with(LabeledHeader)
            .with(HeadingHeader)
            .with(BareHeader)
    }

    /// Append a matcher at the lowest priority.
    pub fn with(mut self, matcher: impl HeaderMatcher + Send + Sync + 'static) -> Self {
        self.matchers.push(Box::new(matcher));
        self
    }

    /// Names of the matchers in priority order.
    pub fn names(&self) -> Vec<&'static str> {
        self.matchers.iter().map(|m| m.name()).collect()
    }

    /// Earliest header for `topic` across all matchers.
    pub fn find(&self, text: &str, topic: SectionTopic) -> Option<HeaderSpan> {
        let (matcher, span) = self
            .matchers
            .iter()
            .enumerate()
            .filter_map(|(priority, matcher)| {
                matcher
                    .find(text, topic)
                    .map(|span| (priority, matcher, span))
            })
            .min_by_key(|(priority, _, span)| (span.start, *priority))
            .map(|(_, matcher, span)| (matcher, span))?;

        tracing::debug!(
            matcher = matcher.name(),
            topic = ?topic,
            start = span.start,
            "Matched section header"
        );
        Some(span)
    }
}

impl Default for HeaderChain {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for HeaderChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderChain")
            .field("matchers", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_text<'a>(text: &'a str, span: HeaderSpan) -> &'a str {
        &text[span.start..span.end]
    }

    #[test]
    fn test_labeled_matches_emphasis_variants() {
        let cases = [
            "Challenges: - a",
            "**Challenges:**\n- a",
            "**Challenges**:\n- a",
            "*Problems*: x",
            "Key Challenges (ranked): x",
            "### Problems:\n- a",
        ];
        for text in cases {
            let span = LabeledHeader
                .find(text, SectionTopic::Challenges)
                .unwrap_or_else(|| panic!("no header in {text:?}"));
            assert_eq!(span.start, 0, "{text:?}");
            assert!(!text[span.end..].starts_with(':'), "{text:?}");
            assert!(!text[span.end..].starts_with('*'), "{text:?}");
        }
    }

    #[test]
    fn test_labeled_stops_at_first_colon() {
        let text = "Challenges: Cost: too high";
        let span = LabeledHeader.find(text, SectionTopic::Challenges).unwrap();
        assert_eq!(&text[span.end..], "Cost: too high");
    }

    #[test]
    fn test_labeled_requires_whole_word() {
        assert!(LabeledHeader
            .find("Resolutions: none", SectionTopic::Solutions)
            .is_none());
        assert!(LabeledHeader
            .find("Problematic: yes", SectionTopic::Challenges)
            .is_none());
    }

    #[test]
    fn test_labeled_header_must_start_a_line() {
        // Vocabulary after an earlier colon on the line is body text.
        assert!(LabeledHeader
            .find("Note: we need solutions: now", SectionTopic::Solutions)
            .is_none());

        let text = "Intro.\n**Solutions:**\n- a";
        let span = LabeledHeader.find(text, SectionTopic::Solutions).unwrap();
        assert_eq!(span.start, 6);
        assert_eq!(&text[span.end..], "\n- a");
    }

    #[test]
    fn test_list_items_are_not_headers() {
        let text = "- Solutions: cache more\n1. Solutions: shard\nSolutions:\n- real";
        let span = LabeledHeader.find(text, SectionTopic::Solutions).unwrap();
        assert_eq!(&text[span.end..], "\n- real");
    }

    #[test]
    fn test_heading_matches_markdown_and_bold_lines() {
        let text = "Intro\n### Key Challenges\n- a";
        let span = HeadingHeader.find(text, SectionTopic::Challenges).unwrap();
        assert_eq!(header_text(text, span), "\n### Key Challenges\n");

        let text = "**Solutions**\n- a";
        let span = HeadingHeader.find(text, SectionTopic::Solutions).unwrap();
        assert_eq!(&text[span.end..], "- a");

        // Bold phrase inside a sentence is not a heading.
        assert!(HeadingHeader
            .find("**Cost challenges** are serious", SectionTopic::Challenges)
            .is_none());
    }

    #[test]
    fn test_bare_matches_word_alone() {
        let text = "Intro\nSolutions\n- a";
        let span = BareHeader.find(text, SectionTopic::Solutions).unwrap();
        assert_eq!(&text[span.end..], "- a");

        assert!(BareHeader
            .find("Solutions exist for most issues", SectionTopic::Solutions)
            .is_none());
    }

    #[test]
    fn test_chain_prefers_earlier_matcher_on_ties() {
        let mut low = MockHeaderMatcher::new();
        low.expect_name().return_const("low");
        low.expect_find()
            .times(1)
            .returning(|_, _| Some(HeaderSpan::new(5, 7)));

        let mut high = MockHeaderMatcher::new();
        high.expect_name().return_const("high");
        high.expect_find()
            .times(1)
            .returning(|_, _| Some(HeaderSpan::new(5, 9)));

        let chain = HeaderChain::empty().with(high).with(low);
        assert_eq!(
            chain.find("anything", SectionTopic::Solutions),
            Some(HeaderSpan::new(5, 9))
        );
    }

    #[test]
    fn test_chain_prefers_earliest_header_in_text() {
        let mut late = MockHeaderMatcher::new();
        late.expect_name().return_const("late");
        late.expect_find()
            .times(1)
            .returning(|_, _| Some(HeaderSpan::new(40, 50)));

        let mut early = MockHeaderMatcher::new();
        early.expect_name().return_const("early");
        early.expect_find()
            .times(1)
            .returning(|_, _| Some(HeaderSpan::new(10, 20)));

        let chain = HeaderChain::empty().with(late).with(early);
        assert_eq!(
            chain.find("anything", SectionTopic::Solutions),
            Some(HeaderSpan::new(10, 20))
        );
    }

    #[test]
    fn test_standard_chain_heading_beats_later_labeled_prose() {
        let text = "- a\n\n### Solutions\n- b\n\nOverall, the best solution: caching.";
        let span = HeaderChain::standard()
            .find(text, SectionTopic::Solutions)
            .unwrap();
        assert_eq!(header_text(text, span), "\n### Solutions\n");
    }

    #[test]
    fn test_labeled_keeps_inline_emphasized_title() {
        let text = "Challenges: **Cost**: x";
        let span = LabeledHeader.find(text, SectionTopic::Challenges).unwrap();
        assert_eq!(&text[span.end..], "**Cost**: x");

        let text = "**Challenges:** - **Cost**: x";
        let span = LabeledHeader.find(text, SectionTopic::Challenges).unwrap();
        assert_eq!(&text[span.end..], "- **Cost**: x");
    }

    #[test]
    fn test_chain_falls_through_misses() {
        let mut miss = MockHeaderMatcher::new();
        miss.expect_name().return_const("miss");
        miss.expect_find().times(1).returning(|_, _| None);

        let chain = HeaderChain::empty().with(miss).with(BareHeader);
        let span = chain.find("x\nSolutions\ny", SectionTopic::Solutions);
        assert_eq!(span, Some(HeaderSpan::new(1, 12)));
    }

    #[test]
    fn test_empty_chain_finds_nothing() {
        assert_eq!(
            HeaderChain::empty().find("Solutions:", SectionTopic::Solutions),
            None
        );
    }

    #[test]
    fn test_standard_chain_order() {
        assert_eq!(
            HeaderChain::standard().names(),
            vec!["labeled", "heading", "bare"]
        );
    }
}
