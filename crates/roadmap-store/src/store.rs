//! Memoized roadmap store
//!
//! A `RoadmapStore` reads its source at most once. The first successful load
//! is kept for the store's lifetime and every later call hands back the same
//! `Arc`. A failed load is not remembered, so the caller may retry.

use crate::document::parse_document;
use crate::error::{LoadError, LoadResult};
use once_cell::sync::{Lazy, OnceCell};
use parking_lot::Mutex;
use roadmap_model::RoadmapCollection;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default source file name
pub const DEFAULT_SOURCE: &str = "roadmaps.json";

/// Lazily loaded, immutable roadmap collection bound to one source
#[derive(Debug)]
pub struct RoadmapStore {
    source: PathBuf,
    collection: OnceCell<Arc<RoadmapCollection>>,
}

impl RoadmapStore {
    /// Create store for a source path; nothing is read yet
    #[inline]
    #[must_use]
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            collection: OnceCell::new(),
        }
    }

    /// Source path this store reads from
    #[inline]
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Whether the collection has been loaded
    #[inline]
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.collection.get().is_some()
    }

    /// Load the collection, reading the source only on the first success
    ///
    /// # Errors
    /// Any `LoadError` from reading or validating the source.
    pub fn load(&self) -> LoadResult<Arc<RoadmapCollection>> {
        self.collection
            .get_or_try_init(|| read_source(&self.source).map(Arc::new))
            .map(Arc::clone)
    }
}

impl Default for RoadmapStore {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE)
    }
}

fn read_source(path: &Path) -> LoadResult<RoadmapCollection> {
    let loaded = std::fs::read_to_string(path)
        .map_err(|e| LoadError::io_error(path, e))
        .and_then(|content| parse_document(&content, path));

    match &loaded {
        Ok(collection) => tracing::info!(
            source = %path.display(),
            roadmaps = collection.len(),
            "Loaded roadmap collection"
        ),
        Err(e) => tracing::warn!(source = %path.display(), "Rejected roadmap document: {}", e),
    }
    loaded
}

static SESSION_STORES: Lazy<Mutex<HashMap<PathBuf, Arc<RoadmapStore>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Process-wide store for a source path
///
/// The same path always yields the same store, so the document is read at
/// most once per process. Paths are compared as given, not canonicalized.
#[must_use]
pub fn session_store(source: impl AsRef<Path>) -> Arc<RoadmapStore> {
    let source = source.as_ref();
    let mut stores = SESSION_STORES.lock();
    Arc::clone(
        stores
            .entry(source.to_path_buf())
            .or_insert_with(|| Arc::new(RoadmapStore::new(source))),
    )
}

/// Load the session collection for a source path
///
/// Repeated calls with the same path return the identical `Arc` without
/// touching the file system again.
///
/// # Errors
/// Any `LoadError` from the first successful-or-not read of the source.
pub fn load(source: impl AsRef<Path>) -> LoadResult<Arc<RoadmapCollection>> {
    session_store(source).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DOC: &str = r#"{"roadmaps": [{
        "title": "Rust", "description": "Systems", "difficulty": "advanced",
        "image": "rust.png", "tools": ["cargo"], "levels": {}
    }]}"#;

    #[test]
    fn store_is_lazy() {
        let store = RoadmapStore::new("does-not-matter.json");
        assert!(!store.is_loaded());
        assert_eq!(store.source(), Path::new("does-not-matter.json"));
    }

    #[test]
    fn default_store_uses_default_source() {
        assert_eq!(RoadmapStore::default().source(), Path::new(DEFAULT_SOURCE));
    }

    #[test]
    fn load_memoizes_after_first_success() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOC.as_bytes()).unwrap();

        let store = RoadmapStore::new(file.path());
        let first = store.load().unwrap();
        assert!(store.is_loaded());

        // Source changes are not observed once loaded
        std::fs::write(file.path(), "not json").unwrap();
        let second = store.load().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roadmaps.json");
        let store = RoadmapStore::new(&path);

        assert!(matches!(store.load(), Err(LoadError::NotFound { .. })));
        assert!(!store.is_loaded());

        std::fs::write(&path, DOC).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn session_store_is_shared_per_path() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");

        assert!(Arc::ptr_eq(&session_store(&a), &session_store(&a)));
        assert!(!Arc::ptr_eq(&session_store(&a), &session_store(&b)));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn warnings_while(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let sink = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn every_rejection_is_logged() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let malformed = dir.path().join("malformed.json");
        std::fs::write(&malformed, "not json").unwrap();

        let logs = warnings_while(|| {
            assert!(matches!(read_source(&missing), Err(LoadError::NotFound { .. })));
            assert!(matches!(read_source(dir.path()), Err(LoadError::Io { .. } | LoadError::NotFound { .. })));
            assert!(matches!(read_source(&malformed), Err(LoadError::Malformed { .. })));
        });

        assert_eq!(logs.matches("Rejected roadmap document").count(), 3);
        assert!(logs.contains("missing.json"));
    }
}
