//! Testing utilities for the roadmap workspace
//!
//! Shared fixtures: a small sample collection, its JSON document form,
//! and helpers to put documents on disk.

#![allow(missing_docs)]

use roadmap_model::{Difficulty, Level, Roadmap, RoadmapCollection, Topic};
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

pub fn frontend_basics() -> Roadmap {
    Roadmap::new(
        "Frontend Basics",
        "Build pages with HTML, CSS and JavaScript",
        Difficulty::Beginner,
        "https://img.example/frontend.png",
    )
    .with_tools(["VS Code", "Chrome DevTools"])
    .with_level(
        Level::Beginner,
        vec![
            Topic::new("HTML Structure", ["Tags", "Semantics"]),
            Topic::new("CSS Styling", ["Selectors", "Box Model"]),
        ],
    )
    .with_level(Level::Intermediate, vec![Topic::new("Responsive Layout", ["Flexbox", "Grid"])])
    .with_resources(["https://developer.mozilla.org"])
}

pub fn backend_systems() -> Roadmap {
    Roadmap::new(
        "Backend Systems",
        "Services, storage and deployment",
        Difficulty::Advanced,
        "https://img.example/backend.png",
    )
    .with_tools(["Docker", "PostgreSQL", "Redis"])
    .with_level(Level::Beginner, vec![])
    .with_level(Level::Advanced, vec![Topic::new("Caching Strategies", ["TTL", "Invalidation"])])
    .with_level(Level::Expert, vec![Topic::new("Distributed Consensus", ["Raft"])])
}

pub fn data_science() -> Roadmap {
    Roadmap::new(
        "Data Science",
        "Statistics and machine learning with Python",
        Difficulty::Intermediate,
        "https://img.example/data.png",
    )
    .with_tools(["Jupyter", "pandas"])
    .with_level(Level::Intermediate, vec![Topic::new("Regression", ["Linear", "Logistic"])])
    .with_resources(["https://scikit-learn.org", "https://kaggle.com/learn"])
}

/// Three roadmaps, one per difficulty except expert
pub fn sample_collection() -> RoadmapCollection {
    RoadmapCollection::new(vec![frontend_basics(), backend_systems(), data_science()])
}

/// Raw JSON for one roadmap entry with every field set
pub fn roadmap_value(title: &str, difficulty: &str) -> Value {
    json!({
        "title": title,
        "description": format!("About {title}"),
        "difficulty": difficulty,
        "image": "https://img.example/card.png",
        "tools": ["Git"],
        "levels": {
            "beginner": [{"topic": "Basics", "concepts": ["Intro"]}]
        },
        "resources": ["https://example.com"]
    })
}

/// Document text for a list of entries
pub fn document(entries: Vec<Value>) -> String {
    json!({ "roadmaps": entries }).to_string()
}

/// Document text for `sample_collection`
pub fn sample_document() -> String {
    serde_json::to_string_pretty(&sample_collection()).unwrap()
}

/// Write document text to a temp file; the file lives as long as the handle
pub fn write_document(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
