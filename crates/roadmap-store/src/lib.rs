//! Roadmap Store
//!
//! The boundary between the roadmap document on disk and the in-memory
//! collection the rest of the workspace reads.
//!
//! # Core Operations
//!
//! - **Parse**: validate a JSON document into a `RoadmapCollection`
//! - **Load**: read a source once and memoize the result for the session
//!
//! # Architecture
//!
//! ```text
//! roadmaps.json → parse_document → RoadmapCollection → Arc (memoized)
//!                      ↓
//!               LoadError / SchemaError (whole document rejected)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use roadmap_store::RoadmapStore;
//!
//! let store = RoadmapStore::new("roadmaps.json");
//! let roadmaps = store.load()?;
//! let again = store.load()?; // same Arc, no second read
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod document;
pub mod error;
pub mod store;

pub use document::{parse_document, parse_roadmap, ROADMAPS_KEY};
pub use error::{LoadError, LoadResult, SchemaError};
pub use store::{load, session_store, RoadmapStore, DEFAULT_SOURCE};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
