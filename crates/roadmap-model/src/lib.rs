//! Roadmap Model
//!
//! Typed records for a collection of learning roadmaps:
//! - `Roadmap`: one learning path with metadata, tools and resources
//! - `Levels`: per-level topic lists, always iterated in canonical order
//! - `Topic`: a named unit of study with its concepts
//!
//! The model carries no I/O. Loading and validation live in `roadmap-store`,
//! filtering and view mapping in `roadmap-core`.

#![warn(unreachable_pub)]

pub mod error;
pub mod level;
pub mod roadmap;

pub use error::ModelError;
pub use level::{Difficulty, Level, Levels};
pub use roadmap::{Roadmap, RoadmapCollection, Topic};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with roadmap records
    pub use crate::{Difficulty, Level, Levels, ModelError, Roadmap, RoadmapCollection, Topic};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
