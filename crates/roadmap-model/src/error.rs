//! Error types for the roadmap model

/// Errors raised while interpreting model values from text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Difficulty outside the four known values (case-sensitive)
    #[error("unknown difficulty: '{0}' (expected beginner, intermediate, advanced or expert)")]
    UnknownDifficulty(String),

    /// Level name outside the four canonical levels (case-sensitive)
    #[error("unknown level: '{0}' (expected beginner, intermediate, advanced or expert)")]
    UnknownLevel(String),
}
