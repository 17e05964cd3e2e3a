//! Roadmap Core
//!
//! The logic between the loaded collection and the renderer:
//! - **Filter**: narrow the collection by difficulty, title and search text
//! - **View**: map a roadmap and display toggles into ordered sections
//! - **Options**: selector choices for the filter controls
//!
//! Everything here is a pure function over borrowed data.
//!
//! # Example
//!
//! ```rust,ignore
//! use roadmap_core::prelude::*;
//!
//! let roadmaps = roadmap_store::load("roadmaps.json")?;
//! let spec = FilterSpec::new().with_search("docker");
//! let hits = filter(roadmaps.as_slice(), &spec);
//!
//! if hits.is_empty() {
//!     println!("{NO_RESULTS_MESSAGE}");
//! }
//! for roadmap in hits {
//!     let view = to_view_model(roadmap, ViewOptions::default());
//!     // hand `view` to the renderer
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod filter;
pub mod options;
pub mod view;

pub use filter::{
    filter, DifficultyFilter, FilterOutcome, FilterSpec, SearchQuery, TitleSelection,
    ALL_DIFFICULTIES, ALL_ROADMAPS, NO_RESULTS_MESSAGE,
};
pub use options::{difficulty_options, title_options};
pub use view::{
    to_view_model, to_view_models, CardHeader, LevelSection, ResourceLink, RoadmapView, Section,
    TopicView, ViewOptions,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for filtering and rendering roadmaps
    pub use crate::{
        filter, to_view_model, FilterOutcome, FilterSpec, RoadmapView, ViewOptions,
        NO_RESULTS_MESSAGE,
    };
    pub use roadmap_model::{Difficulty, Level, Roadmap, RoadmapCollection};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
