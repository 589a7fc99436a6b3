//! List splitting and per-item title/citation extraction.

use regex::Regex;
use std::sync::LazyLock;

use crate::text::citations::extract_citations;
use crate::types::answer::ParsedItem;

/// `**Title**` or `__Title__` at the start of an item, optional colon.
static EMPHASIZED_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\*\*|__)(.+?)(?:\*\*|__)[ \t]*:?[ \t]*").unwrap());

/// `Title:` on the first line. Labels never contain a citation bracket.
static PLAIN_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:\[\n]+):[ \t]*").unwrap());

/// How list entries are marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// `-`, `•` or `*` at column 0, then whitespace
    Bulleted,
    /// `N.` at line start (indentation allowed), then whitespace
    Numbered,
}

impl ListStyle {
    /// Text after the marker when `line` opens an item of this style.
    fn marker_rest(self, line: &str) -> Option<&str> {
        match self {
            Self::Bulleted => bullet_rest(line),
            Self::Numbered => numbered_rest(line),
        }
    }
}

fn bullet_rest(line: &str) -> Option<&str> {
    let marker = line.chars().next()?;
    if !matches!(marker, '-' | '•' | '*') {
        return None;
    }
    let rest = &line[marker.len_utf8()..];
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    Some(rest.trim_start())
}

fn numbered_rest(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = trimmed[digits..].strip_prefix('.')?;
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    Some(rest.trim_start())
}

/// Whether `line` opens a bulleted or numbered list item.
pub fn starts_with_list_marker(line: &str) -> bool {
    bullet_rest(line).is_some() || numbered_rest(line).is_some()
}

/// A body split into list entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListSplit {
    /// Text before the first entry, trimmed
    pub preamble: String,

    /// Entry texts with markers removed, trimmed. Continuation lines stay
    /// attached to the entry above them.
    pub entries: Vec<String>,
}

/// Split `body` into entries opened by `style` markers.
///
/// An entry runs until the next marker line or the end of the body.
pub fn split_list(body: &str, style: ListStyle) -> ListSplit {
    let mut preamble: Vec<&str> = Vec::new();
    let mut entries: Vec<Vec<&str>> = Vec::new();

    for line in body.lines() {
        if let Some(rest) = style.marker_rest(line) {
            entries.push(vec![rest]);
        } else if let Some(current) = entries.last_mut() {
            current.push(line);
        } else {
            preamble.push(line);
        }
    }

    ListSplit {
        preamble: preamble.join("\n").trim().to_string(),
        entries: entries
            .into_iter()
            .map(|lines| lines.join("\n").trim().to_string())
            .collect(),
    }
}

/// Split with bullets first, falling back to numbering.
///
/// Returns `None` when neither style finds an entry.
pub fn split_any_list(body: &str) -> Option<(ListStyle, ListSplit)> {
    [ListStyle::Bulleted, ListStyle::Numbered]
        .into_iter()
        .map(|style| (style, split_list(body, style)))
        .find(|(_, split)| !split.entries.is_empty())
}

/// Separate a leading title from the rest of an entry.
pub fn split_title(entry: &str) -> (Option<String>, &str) {
    if let Some(caps) = EMPHASIZED_TITLE.captures(entry) {
        let title = caps[1].trim().trim_end_matches(':').trim();
        let rest = &entry[caps.get(0).map_or(0, |m| m.end())..];
        if !title.is_empty() {
            return (Some(title.to_string()), rest);
        }
    }

    if let Some(caps) = PLAIN_TITLE.captures(entry) {
        let title = caps[1].trim();
        let rest = &entry[caps.get(0).map_or(0, |m| m.end())..];
        // "https://..." is a link, not a label
        if !title.is_empty() && !rest.starts_with("//") {
            return (Some(title.to_string()), rest);
        }
    }

    (None, entry)
}

/// Build a titled item: title split off, citations pulled from the rest.
pub fn titled_item(index: usize, entry: &str) -> ParsedItem {
    let (title, rest) = split_title(entry);
    let split = extract_citations(rest);
    ParsedItem {
        index,
        title,
        body: split.text,
        citations: split.citations,
    }
}

/// Build an untitled item with citations pulled from the entry.
pub fn untitled_item(index: usize, entry: &str) -> ParsedItem {
    let split = extract_citations(entry);
    ParsedItem {
        index,
        title: None,
        body: split.text,
        citations: split.citations,
    }
}
