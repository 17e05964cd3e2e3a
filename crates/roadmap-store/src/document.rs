//! Roadmap document parser
//!
//! Parses into a `serde_json::Value` first and validates each entry by hand,
//! so schema failures name the offending roadmap and field instead of a
//! line/column from the deserializer.

use crate::error::{LoadError, SchemaError};
use roadmap_model::{Difficulty, Level, Levels, Roadmap, RoadmapCollection, Topic};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

/// Top-level key holding the roadmap array
pub const ROADMAPS_KEY: &str = "roadmaps";

/// Parse a complete document
///
/// `origin` is only used for error messages.
///
/// # Errors
/// `LoadError::Malformed` for invalid JSON or a missing/non-array `roadmaps`
/// key, `LoadError::Schema` for the first entry that fails validation.
pub fn parse_document(content: &str, origin: &Path) -> Result<RoadmapCollection, LoadError> {
    let root: Value = serde_json::from_str(content)
        .map_err(|e| LoadError::malformed(origin, format!("JSON parse error: {e}")))?;

    let entries = root
        .get(ROADMAPS_KEY)
        .ok_or_else(|| LoadError::malformed(origin, "missing top-level 'roadmaps' key"))?
        .as_array()
        .ok_or_else(|| LoadError::malformed(origin, "'roadmaps' must be an array"))?;

    let roadmaps = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_roadmap(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    check_unique_titles(&roadmaps)?;

    Ok(RoadmapCollection::new(roadmaps))
}

/// Validate and convert a single roadmap entry
///
/// # Errors
/// The first `SchemaError` found in the entry.
pub fn parse_roadmap(index: usize, entry: &Value) -> Result<Roadmap, SchemaError> {
    let obj = entry
        .as_object()
        .ok_or(SchemaError::NotAnObject { index })?;

    let title = string(required(obj, index, "title")?, index, "title")?;
    let description = string(required(obj, index, "description")?, index, "description")?;
    let difficulty_raw = string(required(obj, index, "difficulty")?, index, "difficulty")?;
    let difficulty: Difficulty = difficulty_raw
        .parse()
        .map_err(|e| SchemaError::invalid(index, "difficulty", format!("{e}")))?;
    let image = string(required(obj, index, "image")?, index, "image")?;
    let tools = string_list(required(obj, index, "tools")?, index, "tools")?;
    let levels = levels(required(obj, index, "levels")?, index)?;

    let resources = match obj.get("resources") {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => string_list(value, index, "resources")?,
    };

    Ok(Roadmap {
        title,
        description,
        difficulty,
        image,
        tools,
        levels,
        resources,
    })
}

fn required<'a>(
    obj: &'a Map<String, Value>,
    index: usize,
    field: &str,
) -> Result<&'a Value, SchemaError> {
    obj.get(field).ok_or_else(|| SchemaError::missing(index, field))
}

fn string(value: &Value, index: usize, field: &str) -> Result<String, SchemaError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| SchemaError::invalid(index, field, format!("expected string, got {}", kind(value))))
}

fn string_list(value: &Value, index: usize, field: &str) -> Result<Vec<String>, SchemaError> {
    let items = value
        .as_array()
        .ok_or_else(|| SchemaError::invalid(index, field, format!("expected array, got {}", kind(value))))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| string(item, index, &format!("{field}[{i}]")))
        .collect()
}

fn levels(value: &Value, index: usize) -> Result<Levels, SchemaError> {
    let obj = value.as_object().ok_or_else(|| {
        SchemaError::invalid(index, "levels", format!("expected object, got {}", kind(value)))
    })?;

    let mut levels = Levels::new();
    for (key, topics) in obj {
        let field = format!("levels.{key}");
        let level: Level = key
            .parse()
            .map_err(|e| SchemaError::invalid(index, &field, format!("{e}")))?;

        let items = topics.as_array().ok_or_else(|| {
            SchemaError::invalid(index, &field, format!("expected array, got {}", kind(topics)))
        })?;

        let topics = items
            .iter()
            .enumerate()
            .map(|(i, item)| topic(item, index, &format!("{field}[{i}]")))
            .collect::<Result<Vec<_>, _>>()?;

        levels.insert(level, topics);
    }

    Ok(levels)
}

fn topic(value: &Value, index: usize, field: &str) -> Result<Topic, SchemaError> {
    let obj = value.as_object().ok_or_else(|| {
        SchemaError::invalid(index, field, format!("expected object, got {}", kind(value)))
    })?;

    let name_field = format!("{field}.topic");
    let name = string(
        obj.get("topic")
            .ok_or_else(|| SchemaError::missing(index, &name_field))?,
        index,
        &name_field,
    )?;

    // Missing concepts read as an empty list
    let concepts = match obj.get("concepts") {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => string_list(value, index, &format!("{field}.concepts"))?,
    };

    Ok(Topic {
        topic: name,
        concepts,
    })
}

fn check_unique_titles(roadmaps: &[Roadmap]) -> Result<(), SchemaError> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(roadmaps.len());
    for (index, roadmap) in roadmaps.iter().enumerate() {
        if let Some(&first) = seen.get(roadmap.title.as_str()) {
            return Err(SchemaError::DuplicateTitle {
                title: roadmap.title.clone(),
                first,
                second: index,
            });
        }
        seen.insert(&roadmap.title, index);
    }
    Ok(())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn origin() -> &'static Path {
        Path::new("test.json")
    }

    fn entry() -> Value {
        json!({
            "title": "Frontend Basics",
            "description": "HTML, CSS and a little JavaScript",
            "difficulty": "beginner",
            "image": "https://img.example/fe.png",
            "tools": ["VS Code", "Chrome DevTools"],
            "levels": {
                "intermediate": [{"topic": "Layout", "concepts": ["Flexbox", "Grid"]}],
                "beginner": [{"topic": "HTML", "concepts": ["Tags"]}]
            },
            "resources": ["https://developer.mozilla.org"]
        })
    }

    #[test]
    fn parses_valid_entry() {
        let roadmap = parse_roadmap(0, &entry()).unwrap();

        assert_eq!(roadmap.title, "Frontend Basics");
        assert_eq!(roadmap.difficulty, Difficulty::Beginner);
        assert_eq!(roadmap.tools, vec!["VS Code", "Chrome DevTools"]);
        assert_eq!(roadmap.levels.get(Level::Intermediate)[0].concepts, vec!["Flexbox", "Grid"]);
        assert_eq!(roadmap.resources, vec!["https://developer.mozilla.org"]);
    }

    #[test]
    fn each_required_field_is_enforced() {
        for field in ["title", "description", "difficulty", "image", "tools", "levels"] {
            let mut value = entry();
            value.as_object_mut().unwrap().remove(field);

            let err = parse_roadmap(3, &value).unwrap_err();
            assert_eq!(err, SchemaError::missing(3, field), "field {field}");
        }
    }

    #[test]
    fn resources_absent_or_null_is_empty() {
        let mut value = entry();
        value.as_object_mut().unwrap().remove("resources");
        assert!(parse_roadmap(0, &value).unwrap().resources.is_empty());

        value["resources"] = Value::Null;
        assert!(parse_roadmap(0, &value).unwrap().resources.is_empty());
    }

    #[test]
    fn difficulty_is_case_sensitive() {
        let mut value = entry();
        value["difficulty"] = json!("Beginner");

        let err = parse_roadmap(1, &value).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidField { index: 1, ref field, .. } if field == "difficulty"));
    }

    #[test]
    fn unknown_level_key_rejected() {
        let mut value = entry();
        value["levels"]["guru"] = json!([]);

        let err = parse_roadmap(0, &value).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidField { ref field, .. } if field == "levels.guru"));
    }

    #[test]
    fn topic_without_concepts_defaults_to_empty() {
        let mut value = entry();
        value["levels"]["expert"] = json!([{"topic": "Performance"}]);

        let roadmap = parse_roadmap(0, &value).unwrap();
        assert!(roadmap.levels.get(Level::Expert)[0].concepts.is_empty());
    }

    #[test]
    fn topic_without_name_rejected() {
        let mut value = entry();
        value["levels"]["expert"] = json!([{"concepts": ["A"]}]);

        let err = parse_roadmap(0, &value).unwrap_err();
        assert_eq!(err, SchemaError::missing(0, "levels.expert[0].topic"));
    }

    #[test]
    fn tool_with_wrong_type_rejected() {
        let mut value = entry();
        value["tools"] = json!(["Git", 42]);

        let err = parse_roadmap(0, &value).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidField { ref field, .. } if field == "tools[1]"));
    }

    #[test]
    fn non_object_entry_rejected() {
        let err = parse_roadmap(4, &json!("nope")).unwrap_err();
        assert_eq!(err, SchemaError::NotAnObject { index: 4 });
    }

    #[test]
    fn document_requires_roadmaps_array() {
        let err = parse_document(r#"{"paths": []}"#, origin()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));

        let err = parse_document(r#"{"roadmaps": {}}"#, origin()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));

        let err = parse_document("{", origin()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn document_rejects_duplicate_titles() {
        let doc = json!({ "roadmaps": [entry(), entry()] }).to_string();

        let err = parse_document(&doc, origin()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Schema(SchemaError::DuplicateTitle { first: 0, second: 1, .. })
        ));
    }

    #[test]
    fn one_bad_entry_rejects_whole_document() {
        let mut bad = entry();
        bad["title"] = json!("Other");
        bad.as_object_mut().unwrap().remove("image");
        let doc = json!({ "roadmaps": [entry(), bad] }).to_string();

        let err = parse_document(&doc, origin()).unwrap_err();
        assert!(matches!(err, LoadError::Schema(SchemaError::MissingField { index: 1, .. })));
    }

    #[test]
    fn empty_document_is_valid() {
        let collection = parse_document(r#"{"roadmaps": []}"#, origin()).unwrap();
        assert!(collection.is_empty());
    }
}
