//! Near-duplicate suppression for short text fragments.
//!
//! Fragments are reduced to a signature (lowercase ASCII alphanumerics
//! separated by single spaces) and compared as token sets. A fragment is
//! dropped when it is identical to, or more than `threshold` Jaccard-similar
//! to, a fragment that was already kept. First occurrence wins and the
//! output keeps input order.
//!
//! Comparison is pairwise against the kept set. Fragment lists here are
//! tens of entries, not thousands.

use std::collections::HashSet;

use crate::types::config::ParserConfig;

/// Normalize a fragment for comparison.
///
/// Lowercases, replaces everything except `[a-z0-9]` and whitespace with a
/// space, collapses whitespace runs and trims.
pub fn signature(fragment: &str) -> String {
    let replaced: String = fragment
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn token_set(signature: &str) -> HashSet<&str> {
    signature.split_whitespace().collect()
}

/// Jaccard index of the signature token sets of `a` and `b`.
///
/// Returns `None` when either side has no tokens.
pub fn jaccard_index(a: &str, b: &str) -> Option<f64> {
    let sig_a = signature(a);
    let sig_b = signature(b);
    let tokens_a = token_set(&sig_a);
    let tokens_b = token_set(&sig_b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return None;
    }

    let intersection = tokens_a.intersection(&tokens_b).count();
    let union = tokens_a.len() + tokens_b.len() - intersection;
    Some(intersection as f64 / union.max(1) as f64)
}

/// Whether `a` and `b` are near-duplicates at `threshold` (strictly above).
pub fn is_similar(a: &str, b: &str, threshold: f64) -> bool {
    jaccard_index(a, b).is_some_and(|index| index > threshold)
}

/// Deduplicate with the default threshold.
pub fn dedupe<I, S>(fragments: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Deduplicator::default().dedupe(fragments)
}

/// Order-preserving near-duplicate filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deduplicator {
    threshold: f64,
}

impl Default for Deduplicator {
    fn default() -> Self {
        Self::from_config(&ParserConfig::default())
    }
}

impl Deduplicator {
    /// Create a deduplicator with an explicit threshold.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Create a deduplicator using `config.similarity_threshold`.
    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new(config.similarity_threshold)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether `candidate` duplicates an entry of `kept`.
    pub fn is_duplicate(&self, candidate: &str, kept: &[String]) -> bool {
        kept.iter()
            .any(|existing| existing == candidate || is_similar(candidate, existing, self.threshold))
    }

    /// Keep each non-empty fragment that does not duplicate an earlier kept
    /// one.
    pub fn dedupe<I, S>(&self, fragments: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut kept: Vec<String> = Vec::new();
        for fragment in fragments {
            let fragment = fragment.into();
            if fragment.is_empty() {
                continue;
            }
            if self.is_duplicate(&fragment, &kept) {
                tracing::trace!(fragment = %fragment, "Dropping near-duplicate fragment");
                continue;
            }
            kept.push(fragment);
        }
        kept
    }
}
