//! Bootstrap Scaffolder - creates the host bootstrap file when it is missing.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem, services::TemplateEngine},
    domain::{ResolvedIdentity, StubKind, marker_count},
    error::StubcraftResult,
};

pub struct BootstrapScaffolder<'a> {
    engine: &'a TemplateEngine<'a>,
    fs: &'a dyn Filesystem,
}

impl<'a> BootstrapScaffolder<'a> {
    pub fn new(engine: &'a TemplateEngine<'a>, fs: &'a dyn Filesystem) -> Self {
        Self { engine, fs }
    }

    /// Make sure the bootstrap file exists under `root`.
    ///
    /// An existing file is left untouched, whatever its content. A new file
    /// is rendered from the provider stub, which must contain the marker
    /// exactly once. Returns whether a file was created.
    #[instrument(skip_all)]
    pub fn ensure(&self, root: &Path, identity: &ResolvedIdentity) -> StubcraftResult<bool> {
        let layout = self.engine.layout();
        let path = layout.provider_path(root);

        if self.fs.is_file(&path) {
            return Ok(false);
        }

        let content = self.engine.render(StubKind::Provider, identity)?;
        let occurrences = marker_count(&content, &layout.marker);
        if occurrences != 1 {
            return Err(ApplicationError::MarkerNotFound {
                path,
                marker: layout.marker.clone(),
                occurrences,
            }
            .into());
        }

        if let Some(parent) = path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.write_file(&path, &content)?;

        info!(path = %path.display(), "Bootstrap file created");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockStubStore};
    use crate::domain::{Layout, NameResolver, StubTemplate};

    fn stubs(body: &'static str) -> MockStubStore {
        let mut stubs = MockStubStore::new();
        stubs
            .expect_load()
            .returning(move |kind| Ok(StubTemplate::from_static(kind, body)));
        stubs
    }

    #[test]
    fn existing_file_is_left_alone() {
        let layout = Layout::default();
        let identity = NameResolver::new(layout.clone()).resolve("UserRepository");
        let mut store = MockStubStore::new();
        store.expect_load().never();
        let engine = TemplateEngine::new(&store, &layout);

        let mut fs = MockFilesystem::new();
        fs.expect_is_file().return_const(true);
        fs.expect_write_file().never();

        let created = BootstrapScaffolder::new(&engine, &fs)
            .ensure(Path::new("/proj"), &identity)
            .unwrap();
        assert!(!created);
    }

    #[test]
    fn missing_file_is_created_with_marker() {
        let layout = Layout::default();
        let identity = NameResolver::new(layout.clone()).resolve("UserRepository");
        let store = stubs("class {{PROVIDER_CLASS}}\n    {{MARKER}}\n");
        let engine = TemplateEngine::new(&store, &layout);

        let mut fs = MockFilesystem::new();
        fs.expect_is_file().return_const(false);
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/proj/app/Providers"))
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|_, c| c == "class RepositoryServiceProvider\n    //:end-bindings:\n")
            .times(1)
            .returning(|_, _| Ok(()));

        let created = BootstrapScaffolder::new(&engine, &fs)
            .ensure(Path::new("/proj"), &identity)
            .unwrap();
        assert!(created);
    }

    #[test]
    fn provider_stub_without_marker_is_rejected() {
        let layout = Layout::default();
        let identity = NameResolver::new(layout.clone()).resolve("UserRepository");
        let store = stubs("class {{PROVIDER_CLASS}} {}\n");
        let engine = TemplateEngine::new(&store, &layout);

        let mut fs = MockFilesystem::new();
        fs.expect_is_file().return_const(false);
        fs.expect_write_file().never();

        let err = BootstrapScaffolder::new(&engine, &fs)
            .ensure(Path::new("/proj"), &identity)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::StubcraftError::Application(ApplicationError::MarkerNotFound {
                occurrences: 0,
                ..
            })
        ));
    }
}
