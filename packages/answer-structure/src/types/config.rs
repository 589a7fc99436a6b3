//! Configuration types for parsing and display.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use crate::error::{ConfigError, Result};

/// Environment override for [`ParserConfig::similarity_threshold`].
pub const ENV_SIMILARITY_THRESHOLD: &str = "ANSWER_SIMILARITY_THRESHOLD";
/// Environment override for [`ParserConfig::graph_fallback_limit`].
pub const ENV_GRAPH_FALLBACK_LIMIT: &str = "ANSWER_GRAPH_FALLBACK_LIMIT";
/// Environment override for [`DisplayLimits::max_citations_per_item`].
pub const ENV_MAX_CITATIONS: &str = "ANSWER_MAX_CITATIONS";
/// Environment override for [`DisplayLimits::max_graph_items`].
pub const ENV_MAX_GRAPH_ITEMS: &str = "ANSWER_MAX_GRAPH_ITEMS";
/// Environment override for [`DisplayLimits::max_visible_abstracts`].
pub const ENV_MAX_VISIBLE_ABSTRACTS: &str = "ANSWER_MAX_VISIBLE_ABSTRACTS";

/// Configuration shared by the answer and graph-summary parsers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Jaccard index a pair of fragments must exceed to count as duplicates.
    ///
    /// The comparison is strict: two fragments at exactly the threshold are
    /// both kept. Default: 0.85.
    pub similarity_threshold: f64,

    /// Maximum fragments returned when a graph summary has no
    /// `Keyword:` blocks and falls back to plain paragraph splitting.
    ///
    /// Default: 8.
    pub graph_fallback_limit: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.85,
            graph_fallback_limit: 8,
        }
    }
}

impl ParserConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the similarity threshold.
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Set the graph fallback limit.
    pub fn with_graph_fallback_limit(mut self, limit: usize) -> Self {
        self.graph_fallback_limit = limit;
        self
    }

    /// Check that every field is within its accepted range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::InvalidThreshold {
                value: self.similarity_threshold,
            });
        }
        if self.graph_fallback_limit == 0 {
            return Err(ConfigError::InvalidLimit {
                name: "graph_fallback_limit",
            });
        }
        Ok(())
    }

    /// Load defaults overridden by `ANSWER_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load defaults overridden by whatever `lookup` returns for each
    /// `ANSWER_*` variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            similarity_threshold: override_from(
                &lookup,
                ENV_SIMILARITY_THRESHOLD,
                defaults.similarity_threshold,
            )?,
            graph_fallback_limit: override_from(
                &lookup,
                ENV_GRAPH_FALLBACK_LIMIT,
                defaults.graph_fallback_limit,
            )?,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Display caps applied by callers on top of the unbounded parse results.
///
/// The parsers never truncate; these are policy knobs for the rendering
/// side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLimits {
    /// Citations shown per challenge card. Default: 6.
    pub max_citations_per_item: usize,

    /// Graph-summary cards shown. Default: 12.
    pub max_graph_items: usize,

    /// Abstracts visible per graph card before the rest are hidden
    /// behind an expand control. Default: 5.
    pub max_visible_abstracts: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            max_citations_per_item: 6,
            max_graph_items: 12,
            max_visible_abstracts: 5,
        }
    }
}

impl DisplayLimits {
    /// Create limits with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-item citation cap.
    pub fn with_max_citations(mut self, max: usize) -> Self {
        self.max_citations_per_item = max;
        self
    }

    /// Set the graph item cap.
    pub fn with_max_graph_items(mut self, max: usize) -> Self {
        self.max_graph_items = max;
        self
    }

    /// Set the visible abstract cap.
    pub fn with_max_visible_abstracts(mut self, max: usize) -> Self {
        self.max_visible_abstracts = max;
        self
    }

    /// Check that every limit is usable.
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("max_citations_per_item", self.max_citations_per_item),
            ("max_graph_items", self.max_graph_items),
            ("max_visible_abstracts", self.max_visible_abstracts),
        ];
        match limits.into_iter().find(|(_, value)| *value == 0) {
            Some((name, _)) => Err(ConfigError::InvalidLimit { name }),
            None => Ok(()),
        }
    }

    /// Load defaults overridden by `ANSWER_MAX_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load defaults overridden by whatever `lookup` returns.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let limits = Self {
            max_citations_per_item: override_from(
                &lookup,
                ENV_MAX_CITATIONS,
                defaults.max_citations_per_item,
            )?,
            max_graph_items: override_from(&lookup, ENV_MAX_GRAPH_ITEMS, defaults.max_graph_items)?,
            max_visible_abstracts: override_from(
                &lookup,
                ENV_MAX_VISIBLE_ABSTRACTS,
                defaults.max_visible_abstracts,
            )?,
        };
        limits.validate()?;
        Ok(limits)
    }
}

/// Parse `var` from `lookup`, keeping `fallback` when it is unset or blank.
fn override_from<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    fallback: T,
) -> Result<T> {
    let Some(raw) = lookup(var) else {
        return Ok(fallback);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(fallback);
    }
    trimmed.parse().map_err(|_| ConfigError::InvalidEnv {
        var,
        value: raw.clone(),
    })
}
