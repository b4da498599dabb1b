//! Stub overrides read from a user directory.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use stubcraft_core::{
    application::ports::StubStore,
    domain::{StubKind, StubTemplate},
    error::StubcraftResult,
};

use crate::filesystem::map_io_error;

/// Looks for `<dir>/<kind>.stub` first and falls back to another store.
///
/// Files are read on every `load`, so edits take effect on the next run.
pub struct OverrideStubStore {
    dir: PathBuf,
    fallback: Box<dyn StubStore>,
}

impl OverrideStubStore {
    pub fn new(dir: impl Into<PathBuf>, fallback: Box<dyn StubStore>) -> Self {
        Self {
            dir: dir.into(),
            fallback,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path an override for `kind` would live at.
    pub fn stub_path(&self, kind: StubKind) -> PathBuf {
        self.dir.join(format!("{}.stub", kind.file_stem()))
    }
}

impl StubStore for OverrideStubStore {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn load(&self, kind: StubKind) -> StubcraftResult<StubTemplate> {
        let path = self.stub_path(kind);
        if !path.is_file() {
            debug!("No override, using fallback");
            return self.fallback.load(kind);
        }

        let body = std::fs::read_to_string(&path).map_err(|e| map_io_error(&path, e, "read stub"))?;
        debug!(path = %path.display(), "Loaded stub override");
        Ok(StubTemplate::owned(kind, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub_store::{BuiltinStubs, InMemoryStubStore};
    use stubcraft_core::{domain::DomainError, error::StubcraftError};
    use tempfile::TempDir;

    #[test]
    fn override_file_wins() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("binding.stub"), "register({{CLASS}});").unwrap();

        let store = OverrideStubStore::new(dir.path(), Box::new(BuiltinStubs));
        assert_eq!(
            store.load(StubKind::Binding).unwrap().as_str(),
            "register({{CLASS}});"
        );
    }

    #[test]
    fn falls_back_when_no_override() {
        let dir = TempDir::new().unwrap();
        let store = OverrideStubStore::new(dir.path(), Box::new(BuiltinStubs));
        assert_eq!(
            store.load(StubKind::Contract).unwrap().as_str(),
            BuiltinStubs::body(StubKind::Contract)
        );
    }

    #[test]
    fn fallback_errors_propagate() {
        let dir = TempDir::new().unwrap();
        let store = OverrideStubStore::new(dir.path(), Box::new(InMemoryStubStore::new()));
        let err = store.load(StubKind::Provider).unwrap_err();
        assert!(matches!(
            err,
            StubcraftError::Domain(DomainError::TemplateNotFound {
                kind: StubKind::Provider
            })
        ));
    }
}
