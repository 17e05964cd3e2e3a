//! Explorer configuration
//!
//! Defaults, optionally overridden by a TOML file, then by CLI flags.

use roadmap_core::ViewOptions;
use roadmap_store::DEFAULT_SOURCE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors reading a config file
#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    /// Config file could not be read
    #[error("io error reading config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this struct
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Explorer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ExplorerConfig {
    /// Roadmap document to load
    pub(crate) data_path: PathBuf,
    /// Show the tools section on each card
    pub(crate) show_tools: bool,
    /// Render level sections collapsed
    pub(crate) collapse_levels: bool,
    /// Page heading
    pub(crate) page_title: String,
    /// Line under the heading
    pub(crate) tagline: String,
}

impl ExplorerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// With data path
    #[inline]
    #[must_use]
    pub(crate) fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// With tools toggle
    #[inline]
    #[must_use]
    pub(crate) fn with_show_tools(mut self, show: bool) -> Self {
        self.show_tools = show;
        self
    }

    /// With collapse toggle
    #[inline]
    #[must_use]
    pub(crate) fn with_collapse_levels(mut self, collapse: bool) -> Self {
        self.collapse_levels = collapse;
        self
    }

    /// Read configuration from a TOML file; missing keys keep their defaults
    pub(crate) fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Display toggles for the view mapper
    #[inline]
    #[must_use]
    pub(crate) fn view_options(&self) -> ViewOptions {
        ViewOptions::new()
            .with_show_tools(self.show_tools)
            .with_collapse_levels(self.collapse_levels)
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_SOURCE),
            show_tools: true,
            collapse_levels: false,
            page_title: "Roadmap Explorer".to_string(),
            tagline: "A modern, animated roadmap viewer.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_filter_controls() {
        let config = ExplorerConfig::new();
        assert_eq!(config.data_path, PathBuf::from("roadmaps.json"));
        assert_eq!(config.view_options(), ViewOptions::default());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "data_path = \"data/paths.json\"\ncollapse_levels = true").unwrap();

        let config = ExplorerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.data_path, PathBuf::from("data/paths.json"));
        assert!(config.collapse_levels);
        assert!(config.show_tools);
        assert_eq!(config.page_title, "Roadmap Explorer");
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_tools = \"sometimes\"").unwrap();

        let err = ExplorerConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ExplorerConfig::from_file(Path::new("/nonexistent/explorer.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn builders_override() {
        let config = ExplorerConfig::new()
            .with_data_path("x.json")
            .with_show_tools(false)
            .with_collapse_levels(true);

        assert_eq!(
            config.view_options(),
            ViewOptions::new().with_show_tools(false).with_collapse_levels(true)
        );
        assert_eq!(config.data_path, PathBuf::from("x.json"));
    }
}
