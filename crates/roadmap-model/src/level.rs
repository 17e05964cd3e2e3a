//! Difficulty and skill-level vocabulary
//!
//! Both enums share the same four names but mean different things: a
//! `Difficulty` rates a whole roadmap, a `Level` buckets the topics inside it.
//! Variant declaration order is the canonical display order, so the derived
//! `Ord` drives `Levels` iteration.

use crate::error::ModelError;
use crate::roadmap::Topic;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Overall difficulty of a roadmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Entry level
    Beginner,
    /// Some prior experience
    Intermediate,
    /// Solid experience
    Advanced,
    /// Specialist
    Expert,
}

impl Difficulty {
    /// All difficulties in display order
    pub const ALL: [Self; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
    ];

    /// Wire name, as it appears in the source document
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ModelError::UnknownDifficulty(s.to_string()))
    }
}

/// Skill-level bucket for topics inside a roadmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// First bucket
    Beginner,
    /// Second bucket
    Intermediate,
    /// Third bucket
    Advanced,
    /// Last bucket
    Expert,
}

impl Level {
    /// Canonical rendering order
    pub const CANONICAL_ORDER: [Self; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
    ];

    /// Key name, as it appears in the source document
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }

    /// Capitalized name, e.g. `Beginner`
    #[inline]
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }

    /// Section heading, e.g. `Beginner Level`
    #[must_use]
    pub fn heading(self) -> String {
        format!("{} Level", self.display_name())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CANONICAL_ORDER
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| ModelError::UnknownLevel(s.to_string()))
    }
}

/// Topic lists keyed by level
///
/// Keys are restricted to `Level` by construction. Iteration follows the
/// canonical order regardless of the order levels were inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Levels {
    inner: BTreeMap<Level, Vec<Topic>>,
}

impl Levels {
    /// Create empty level map
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With topics for a level (replaces any previous list)
    #[must_use]
    pub fn with_level(mut self, level: Level, topics: Vec<Topic>) -> Self {
        self.insert(level, topics);
        self
    }

    /// Set the topic list for a level
    pub fn insert(&mut self, level: Level, topics: Vec<Topic>) {
        self.inner.insert(level, topics);
    }

    /// Topics for a level; absent levels yield an empty slice
    #[must_use]
    pub fn get(&self, level: Level) -> &[Topic] {
        self.inner.get(&level).map_or(&[][..], Vec::as_slice)
    }

    /// Levels that have at least one topic, in canonical order
    pub fn non_empty(&self) -> impl Iterator<Item = (Level, &[Topic])> + '_ {
        self.inner
            .iter()
            .filter(|(_, topics)| !topics.is_empty())
            .map(|(level, topics)| (*level, topics.as_slice()))
    }

    /// Every topic across all levels, in canonical level order
    pub fn topics(&self) -> impl Iterator<Item = &Topic> + '_ {
        self.inner.values().flatten()
    }

    /// Number of levels present, including empty ones
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether no level is present
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl FromIterator<(Level, Vec<Topic>)> for Levels {
    fn from_iter<I: IntoIterator<Item = (Level, Vec<Topic>)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parse_is_case_sensitive() {
        assert_eq!("advanced".parse::<Difficulty>(), Ok(Difficulty::Advanced));
        assert!("Advanced".parse::<Difficulty>().is_err());
        assert!("all".parse::<Difficulty>().is_err());
    }

    #[test]
    fn level_heading() {
        assert_eq!(Level::Intermediate.heading(), "Intermediate Level");
        assert_eq!(Level::Expert.to_string(), "expert");
    }

    #[test]
    fn levels_iterate_in_canonical_order() {
        let levels = Levels::new()
            .with_level(Level::Expert, vec![Topic::new("E", ["x"])])
            .with_level(Level::Beginner, vec![Topic::new("B", ["y"])])
            .with_level(Level::Advanced, vec![Topic::new("A", ["z"])]);

        let order: Vec<_> = levels.non_empty().map(|(l, _)| l).collect();
        assert_eq!(order, vec![Level::Beginner, Level::Advanced, Level::Expert]);

        let topics: Vec<_> = levels.topics().map(|t| t.topic.as_str()).collect();
        assert_eq!(topics, vec!["B", "A", "E"]);
    }

    #[test]
    fn levels_skip_empty() {
        let levels = Levels::new()
            .with_level(Level::Beginner, vec![])
            .with_level(Level::Advanced, vec![Topic::new("X", ["A"])]);

        assert_eq!(levels.len(), 2);
        assert_eq!(levels.non_empty().count(), 1);
        assert!(levels.get(Level::Intermediate).is_empty());
    }

    #[test]
    fn levels_serialize_as_lowercase_keys_in_canonical_order() {
        let levels = Levels::new()
            .with_level(Level::Advanced, vec![Topic::new("X", ["A"])])
            .with_level(Level::Beginner, vec![]);

        assert_eq!(
            serde_json::to_string(&levels).unwrap(),
            r#"{"beginner":[],"advanced":[{"topic":"X","concepts":["A"]}]}"#
        );
    }
}
