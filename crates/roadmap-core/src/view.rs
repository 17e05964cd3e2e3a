//! Roadmap view models
//!
//! Maps one roadmap plus the display toggles into render-ready sections.
//! No markup is produced; the renderer decides how each section looks.

use roadmap_model::{Difficulty, Level, Roadmap};
use serde::{Deserialize, Serialize};

/// Display toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Include the tools section
    pub show_tools: bool,
    /// Mark level sections as collapsed
    pub collapse_levels: bool,
}

impl ViewOptions {
    /// Default toggles: tools shown, levels expanded
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With tools toggle
    #[inline]
    #[must_use]
    pub fn with_show_tools(mut self, show: bool) -> Self {
        self.show_tools = show;
        self
    }

    /// With collapse toggle
    #[inline]
    #[must_use]
    pub fn with_collapse_levels(mut self, collapse: bool) -> Self {
        self.collapse_levels = collapse;
        self
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            show_tools: true,
            collapse_levels: false,
        }
    }
}

/// Card header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardHeader<'a> {
    pub title: &'a str,
    pub image: &'a str,
    pub description: &'a str,
    pub difficulty: Difficulty,
}

/// One topic inside a level section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicView<'a> {
    pub topic: &'a str,
    pub concepts: &'a [String],
    /// `concepts` joined with `", "`
    pub concepts_joined: String,
}

/// Topics of one non-empty level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelSection<'a> {
    pub level: Level,
    /// e.g. `Beginner Level`
    pub heading: String,
    /// Sole signal for expandable vs always-open rendering
    pub collapsed: bool,
    pub topics: Vec<TopicView<'a>>,
}

/// Resource hyperlink; text and target are the same URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceLink<'a> {
    pub text: &'a str,
    pub href: &'a str,
}

impl<'a> ResourceLink<'a> {
    fn from_url(url: &'a str) -> Self {
        Self { text: url, href: url }
    }
}

/// Render-ready roadmap
///
/// Field order is display order: header, levels, tools, resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapView<'a> {
    pub header: CardHeader<'a>,
    /// Non-empty levels in canonical order
    pub levels: Vec<LevelSection<'a>>,
    /// Present only when tools are shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<&'a [String]>,
    /// Present only when the roadmap has resources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<ResourceLink<'a>>>,
}

/// A section of a roadmap view, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section<'v, 'a> {
    Header(&'v CardHeader<'a>),
    Level(&'v LevelSection<'a>),
    Tools(&'a [String]),
    Resources(&'v [ResourceLink<'a>]),
}

impl<'a> RoadmapView<'a> {
    /// Sections in display order, skipping absent ones
    #[must_use]
    pub fn sections(&self) -> Vec<Section<'_, 'a>> {
        let mut sections = Vec::with_capacity(self.levels.len() + 3);
        sections.push(Section::Header(&self.header));
        sections.extend(self.levels.iter().map(Section::Level));
        if let Some(tools) = self.tools {
            sections.push(Section::Tools(tools));
        }
        if let Some(resources) = &self.resources {
            sections.push(Section::Resources(resources));
        }
        sections
    }
}

/// Map a roadmap into its view model
#[must_use]
pub fn to_view_model<'a>(roadmap: &'a Roadmap, options: ViewOptions) -> RoadmapView<'a> {
    let levels = roadmap
        .levels
        .non_empty()
        .map(|(level, topics)| LevelSection {
            level,
            heading: level.heading(),
            collapsed: options.collapse_levels,
            topics: topics
                .iter()
                .map(|t| TopicView {
                    topic: &t.topic,
                    concepts: &t.concepts,
                    concepts_joined: t.concepts_joined(),
                })
                .collect(),
        })
        .collect();

    let resources = (!roadmap.resources.is_empty()).then(|| {
        roadmap
            .resources
            .iter()
            .map(|r| ResourceLink::from_url(r))
            .collect()
    });

    RoadmapView {
        header: CardHeader {
            title: &roadmap.title,
            image: &roadmap.image,
            description: &roadmap.description,
            difficulty: roadmap.difficulty,
        },
        levels,
        tools: options.show_tools.then_some(roadmap.tools.as_slice()),
        resources,
    }
}

/// Map every roadmap with the same options
pub fn to_view_models<'a, I>(roadmaps: I, options: ViewOptions) -> Vec<RoadmapView<'a>>
where
    I: IntoIterator<Item = &'a Roadmap>,
{
    roadmaps
        .into_iter()
        .map(|r| to_view_model(r, options))
        .collect()
}
