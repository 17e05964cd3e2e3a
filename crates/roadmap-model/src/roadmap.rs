//! Roadmap records and the session collection

use crate::level::{Difficulty, Level, Levels};
use serde::Serialize;

/// A named unit of study within a level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    /// Topic heading
    pub topic: String,
    /// Concepts covered, in display order
    pub concepts: Vec<String>,
}

impl Topic {
    /// Create topic with its concepts
    pub fn new<I, S>(topic: impl Into<String>, concepts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            topic: topic.into(),
            concepts: concepts.into_iter().map(Into::into).collect(),
        }
    }

    /// Concepts joined for display (`", "` separated)
    #[must_use]
    pub fn concepts_joined(&self) -> String {
        self.concepts.join(", ")
    }
}

/// One learning path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roadmap {
    /// Unique title, used as the selector key
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Overall difficulty
    pub difficulty: Difficulty,
    /// Image URL or path, opaque here
    pub image: String,
    /// Tools in display order
    pub tools: Vec<String>,
    /// Topics grouped by level
    pub levels: Levels,
    /// Resource URLs; absent in the source means empty
    pub resources: Vec<String>,
}

impl Roadmap {
    /// Create roadmap with required metadata and no tools, levels or resources
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            difficulty,
            image: image.into(),
            tools: Vec::new(),
            levels: Levels::new(),
            resources: Vec::new(),
        }
    }

    /// With tools
    #[must_use]
    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools = tools.into_iter().map(Into::into).collect();
        self
    }

    /// With topics for one level
    #[must_use]
    pub fn with_level(mut self, level: Level, topics: Vec<Topic>) -> Self {
        self.levels.insert(level, topics);
        self
    }

    /// With resource URLs
    #[must_use]
    pub fn with_resources<I, S>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resources = resources.into_iter().map(Into::into).collect();
        self
    }
}

/// Immutable roadmap collection for one session
///
/// Built once by the store; filtering hands out references into it.
/// Serializes to the document shape the store parses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoadmapCollection {
    roadmaps: Vec<Roadmap>,
}

impl RoadmapCollection {
    /// Wrap roadmaps in source order
    #[inline]
    #[must_use]
    pub fn new(roadmaps: Vec<Roadmap>) -> Self {
        Self { roadmaps }
    }

    /// All roadmaps in source order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Roadmap] {
        &self.roadmaps
    }

    /// Iterate roadmaps in source order
    pub fn iter(&self) -> std::slice::Iter<'_, Roadmap> {
        self.roadmaps.iter()
    }

    /// Look up a roadmap by exact title
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&Roadmap> {
        self.roadmaps.iter().find(|r| r.title == title)
    }

    /// Titles in source order
    pub fn titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.roadmaps.iter().map(|r| r.title.as_str())
    }

    /// Number of roadmaps
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.roadmaps.len()
    }

    /// Whether the collection is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roadmaps.is_empty()
    }
}

impl<'a> IntoIterator for &'a RoadmapCollection {
    type Item = &'a Roadmap;
    type IntoIter = std::slice::Iter<'a, Roadmap>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
