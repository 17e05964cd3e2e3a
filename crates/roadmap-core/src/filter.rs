//! Roadmap filtering
//!
//! Three conjunctive stages, applied in order:
//! 1. difficulty (exact match unless `all`)
//! 2. title selection (exact match unless `All Roadmaps`)
//! 3. free-text search, case-insensitive substring over title, description,
//!    tools, topic names and resources; any one field matching is enough
//!
//! Output borrows from the input slice and keeps its order.

use roadmap_model::{Difficulty, ModelError, Roadmap};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selector value meaning "no difficulty filter"
pub const ALL_DIFFICULTIES: &str = "all";

/// Selector value meaning "no title filter"
pub const ALL_ROADMAPS: &str = "All Roadmaps";

/// Message the renderer shows for an empty result
pub const NO_RESULTS_MESSAGE: &str = "No roadmaps match your filters.";

/// Difficulty selector state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DifficultyFilter {
    /// Keep every difficulty
    #[default]
    All,
    /// Keep one difficulty
    Only(Difficulty),
}

impl DifficultyFilter {
    /// Whether a roadmap passes this stage
    #[inline]
    #[must_use]
    pub fn matches(self, roadmap: &Roadmap) -> bool {
        match self {
            Self::All => true,
            Self::Only(d) => roadmap.difficulty == d,
        }
    }

    /// Selector value
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => ALL_DIFFICULTIES,
            Self::Only(d) => d.as_str(),
        }
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifficultyFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_DIFFICULTIES {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl From<Difficulty> for DifficultyFilter {
    fn from(d: Difficulty) -> Self {
        Self::Only(d)
    }
}

impl From<DifficultyFilter> for String {
    fn from(f: DifficultyFilter) -> Self {
        f.as_str().to_string()
    }
}

impl TryFrom<String> for DifficultyFilter {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Title selector state
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TitleSelection {
    /// Keep every title
    #[default]
    All,
    /// Keep the roadmap with exactly this title
    Title(String),
}

impl TitleSelection {
    /// Whether a roadmap passes this stage
    #[inline]
    #[must_use]
    pub fn matches(&self, roadmap: &Roadmap) -> bool {
        match self {
            Self::All => true,
            Self::Title(t) => roadmap.title == *t,
        }
    }

    /// Selector value
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_ROADMAPS,
            Self::Title(t) => t.as_str(),
        }
    }
}

impl fmt::Display for TitleSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TitleSelection {
    fn from(s: String) -> Self {
        if s == ALL_ROADMAPS {
            Self::All
        } else {
            Self::Title(s)
        }
    }
}

impl From<&str> for TitleSelection {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<TitleSelection> for String {
    fn from(t: TitleSelection) -> Self {
        match t {
            TitleSelection::All => ALL_ROADMAPS.to_string(),
            TitleSelection::Title(t) => t,
        }
    }
}

/// Lower-cased search needle
///
/// An empty needle disables the search stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Build from raw user text; no trimming is applied
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    /// Whether the search stage is active
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }

    /// Lower-cased needle
    #[inline]
    #[must_use]
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Whether a roadmap passes this stage
    #[must_use]
    pub fn matches(&self, roadmap: &Roadmap) -> bool {
        if !self.is_active() {
            return true;
        }

        self.hit(&roadmap.title)
            || self.hit(&roadmap.description)
            || roadmap.tools.iter().any(|tool| self.hit(tool))
            || roadmap.levels.topics().any(|topic| self.hit(&topic.topic))
            || roadmap.resources.iter().any(|res| self.hit(res))
    }

    #[inline]
    fn hit(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.needle)
    }
}

/// Active filter selections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Difficulty selector
    #[serde(default)]
    pub difficulty: DifficultyFilter,
    /// Title selector
    #[serde(default)]
    pub title: TitleSelection,
    /// Raw search text
    #[serde(default)]
    pub search: String,
}

impl FilterSpec {
    /// Spec that keeps everything
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With difficulty selector
    #[inline]
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<DifficultyFilter>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    /// With title selector
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<TitleSelection>) -> Self {
        self.title = title.into();
        self
    }

    /// With search text
    #[inline]
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Whether every stage is a pass-through
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.difficulty == DifficultyFilter::All
            && self.title == TitleSelection::All
            && self.search.is_empty()
    }
}

/// Filtered roadmaps, borrowed from the collection in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome<'a> {
    roadmaps: Vec<&'a Roadmap>,
}

impl<'a> FilterOutcome<'a> {
    /// Matching roadmaps in source order
    #[inline]
    #[must_use]
    pub fn roadmaps(&self) -> &[&'a Roadmap] {
        &self.roadmaps
    }

    /// Iterate matching roadmaps
    pub fn iter(&self) -> impl Iterator<Item = &'a Roadmap> + '_ {
        self.roadmaps.iter().copied()
    }

    /// Titles of matching roadmaps
    pub fn titles(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.roadmaps.iter().map(|r| r.title.as_str())
    }

    /// Number of matches
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.roadmaps.len()
    }

    /// Nothing matched; the renderer shows `NO_RESULTS_MESSAGE`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roadmaps.is_empty()
    }

    /// Take the matches
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<&'a Roadmap> {
        self.roadmaps
    }
}

impl<'a> IntoIterator for FilterOutcome<'a> {
    type Item = &'a Roadmap;
    type IntoIter = std::vec::IntoIter<&'a Roadmap>;

    fn into_iter(self) -> Self::IntoIter {
        self.roadmaps.into_iter()
    }
}

/// Apply a filter spec to roadmaps
///
/// Pure and deterministic; an empty result is a normal outcome.
#[must_use]
pub fn filter<'a>(roadmaps: &'a [Roadmap], spec: &FilterSpec) -> FilterOutcome<'a> {
    let query = SearchQuery::new(&spec.search);

    let matched: Vec<&Roadmap> = roadmaps
        .iter()
        .filter(|r| spec.difficulty.matches(r))
        .filter(|r| spec.title.matches(r))
        .filter(|r| query.matches(r))
        .collect();

    tracing::debug!(
        difficulty = %spec.difficulty,
        title = %spec.title,
        search = %spec.search,
        total = roadmaps.len(),
        matched = matched.len(),
        "Filtered roadmaps"
    );

    FilterOutcome { roadmaps: matched }
}
