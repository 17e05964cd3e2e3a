//! Selector option lists for the filter controls

use crate::filter::{ALL_DIFFICULTIES, ALL_ROADMAPS};
use roadmap_model::{Difficulty, RoadmapCollection};

/// Difficulty selector choices: `all` then each difficulty
#[must_use]
pub fn difficulty_options() -> Vec<&'static str> {
    std::iter::once(ALL_DIFFICULTIES)
        .chain(Difficulty::ALL.into_iter().map(Difficulty::as_str))
        .collect()
}

/// Roadmap selector choices: `All Roadmaps` then every title in source order
#[must_use]
pub fn title_options(collection: &RoadmapCollection) -> Vec<&str> {
    std::iter::once(ALL_ROADMAPS)
        .chain(collection.titles())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadmap_test_utils::sample_collection;

    #[test]
    fn difficulty_options_listed_in_order() {
        assert_eq!(
            difficulty_options(),
            vec!["all", "beginner", "intermediate", "advanced", "expert"]
        );
    }

    #[test]
    fn title_options_start_with_all() {
        let collection = sample_collection();
        assert_eq!(
            title_options(&collection),
            vec!["All Roadmaps", "Frontend Basics", "Backend Systems", "Data Science"]
        );
        assert_eq!(title_options(&RoadmapCollection::default()), vec!["All Roadmaps"]);
    }
}
