//! Error types for the roadmap store
//!
//! - `LoadError`: the source could not be turned into a collection
//! - `SchemaError`: one roadmap entry broke the document schema
//!
//! Any `SchemaError` rejects the whole document; no partial collection is served.

use std::path::PathBuf;

/// A roadmap entry that does not match the document schema
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Entry is not a JSON object
    #[error("roadmap #{index}: expected an object")]
    NotAnObject {
        /// Position in the `roadmaps` array
        index: usize,
    },

    /// Required field absent
    #[error("roadmap #{index}: missing required field '{field}'")]
    MissingField {
        /// Position in the `roadmaps` array
        index: usize,
        /// Field path, e.g. `levels.expert[0].topic`
        field: String,
    },

    /// Field present but with the wrong shape or an unknown value
    #[error("roadmap #{index}: invalid field '{field}': {message}")]
    InvalidField {
        /// Position in the `roadmaps` array
        index: usize,
        /// Field path, e.g. `tools[1]`
        field: String,
        /// What was wrong with the value
        message: String,
    },

    /// Two entries share a title
    #[error("duplicate title '{title}' in roadmaps #{first} and #{second}")]
    DuplicateTitle {
        /// The repeated title
        title: String,
        /// Index of the first entry using it
        first: usize,
        /// Index of the later entry using it
        second: usize,
    },
}

impl SchemaError {
    /// Create missing field error
    pub fn missing(index: usize, field: impl Into<String>) -> Self {
        Self::MissingField {
            index,
            field: field.into(),
        }
    }

    /// Create invalid field error
    pub fn invalid(index: usize, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            index,
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Fatal load failure; rendering must not start
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Source file does not exist
    #[error("roadmap source not found: {}", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Source exists but could not be read
    #[error("io error reading {}: {source}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Not JSON, or no top-level `roadmaps` array
    #[error("malformed roadmap document {}: {message}", path.display())]
    Malformed {
        /// Path of the rejected document
        path: PathBuf,
        /// Parser or structure message
        message: String,
    },

    /// Entry-level schema violation
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
}

impl LoadError {
    /// Create IO error for path, folding `NotFound` into its own variant
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Create malformed document error
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for store operations
pub type LoadResult<T> = Result<T, LoadError>;
