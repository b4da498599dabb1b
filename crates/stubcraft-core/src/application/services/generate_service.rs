//! Generate Service - orchestrates one repository generation.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, StubStore},
        services::{
            ArtifactGenerator, ArtifactKind, ArtifactOutcome, BootstrapScaffolder, TemplateEngine,
        },
    },
    domain::{GenerationRequest, Layout, NameResolver, ResolvedIdentity},
    error::{StubcraftError, StubcraftResult},
};

/// Result of one [`GenerateService::generate`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub identity: ResolvedIdentity,
    /// Outcomes in write order: implementation, contract, binding.
    pub artifacts: Vec<ArtifactOutcome>,
    /// Whether the host bootstrap file had to be created.
    pub bootstrap_created: bool,
}

impl GenerationReport {
    /// True when a standalone artifact already existed and was kept.
    pub fn has_conflicts(&self) -> bool {
        self.artifacts.iter().any(ArtifactOutcome::is_conflict)
    }

    pub fn conflicts(&self) -> impl Iterator<Item = &ArtifactOutcome> {
        self.artifacts.iter().filter(|a| a.is_conflict())
    }
}

/// Service for generating a repository, its contract, and its binding.
///
/// Write order is fixed: implementation, contract, bootstrap creation,
/// binding splice. An existing implementation or contract is recorded in
/// the report and does not stop the run; any other failure aborts it and
/// leaves already-written files in place.
pub struct GenerateService {
    stubs: Box<dyn StubStore>,
    filesystem: Box<dyn Filesystem>,
    resolver: NameResolver,
    root: PathBuf,
}

impl GenerateService {
    pub fn new(
        stubs: Box<dyn StubStore>,
        filesystem: Box<dyn Filesystem>,
        layout: Layout,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            stubs,
            filesystem,
            resolver: NameResolver::new(layout),
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> &Layout {
        self.resolver.layout()
    }

    /// Derive identifiers without touching the filesystem.
    pub fn resolve(&self, request: &GenerationRequest) -> ResolvedIdentity {
        self.resolver.resolve(request.raw_name())
    }

    #[instrument(skip_all, fields(name = %request.raw_name(), force = request.force()))]
    pub fn generate(&self, request: &GenerationRequest) -> StubcraftResult<GenerationReport> {
        let layout = self.resolver.layout();
        layout.validate()?;

        let identity = self.resolve(request);
        debug!(
            class = %identity.class_name,
            namespace = %identity.namespace,
            "Name resolved"
        );

        let engine = TemplateEngine::new(self.stubs.as_ref(), layout);
        let fs = self.filesystem.as_ref();
        let mut artifacts = Vec::with_capacity(3);

        for kind in [ArtifactKind::Implementation, ArtifactKind::Contract] {
            let generator = ArtifactGenerator::new(kind, &identity, &engine, fs, &self.root);
            artifacts.push(record_conflict(kind, generator.run(request.force()))?);
        }

        let bootstrap_created =
            BootstrapScaffolder::new(&engine, fs).ensure(&self.root, &identity)?;

        let binding = ArtifactGenerator::new(ArtifactKind::Binding, &identity, &engine, fs, &self.root);
        artifacts.push(binding.run(request.force())?);

        let report = GenerationReport {
            identity,
            artifacts,
            bootstrap_created,
        };

        info!(
            class = %report.identity.class_name,
            conflicts = report.conflicts().count(),
            "Generation finished"
        );

        Ok(report)
    }
}

fn record_conflict(
    kind: ArtifactKind,
    result: StubcraftResult<ArtifactOutcome>,
) -> StubcraftResult<ArtifactOutcome> {
    match result {
        Err(StubcraftError::Application(ApplicationError::FileAlreadyExists { path })) => {
            info!(path = %path.display(), "File already exists, keeping it");
            Ok(ArtifactOutcome::AlreadyExists { kind, path })
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockStubStore};
    use crate::domain::{DomainError, StubKind, StubTemplate};
    use std::sync::{Arc, Mutex};

    fn stubs() -> MockStubStore {
        let mut stubs = MockStubStore::new();
        stubs.expect_load().returning(|kind| {
            let body = match kind {
                StubKind::Implementation => "class {{CLASS}}",
                StubKind::Contract => "interface {{CONTRACT}}",
                StubKind::Binding => "bind({{CONTRACT}});",
                StubKind::Provider => "    {{MARKER}}\n",
            };
            Ok(StubTemplate::from_static(kind, body))
        });
        stubs
    }

    fn request(name: &str, force: bool) -> GenerationRequest {
        GenerationRequest::new(name, force).unwrap()
    }

    #[test]
    fn fresh_project_writes_everything_in_order() {
        let writes = Arc::new(Mutex::new(Vec::<PathBuf>::new()));
        let host = Arc::new(Mutex::new(None::<String>));

        let mut fs = MockFilesystem::new();
        {
            let host = Arc::clone(&host);
            fs.expect_is_file().returning(move |p| {
                p.ends_with("RepositoryServiceProvider.php") && host.lock().unwrap().is_some()
            });
        }
        fs.expect_create_dir_all().returning(|_| Ok(()));
        {
            let writes = Arc::clone(&writes);
            let host = Arc::clone(&host);
            fs.expect_write_file().returning(move |p, c| {
                writes.lock().unwrap().push(p.to_path_buf());
                if p.ends_with("RepositoryServiceProvider.php") {
                    *host.lock().unwrap() = Some(c.to_string());
                }
                Ok(())
            });
        }
        {
            let host = Arc::clone(&host);
            fs.expect_read_to_string()
                .returning(move |_| Ok(host.lock().unwrap().clone().unwrap_or_default()));
        }

        let service = GenerateService::new(
            Box::new(stubs()),
            Box::new(fs),
            Layout::default(),
            "/proj",
        );
        let report = service.generate(&request("UserRepository", false)).unwrap();

        assert!(report.bootstrap_created);
        assert!(!report.has_conflicts());
        assert_eq!(
            *writes.lock().unwrap(),
            vec![
                PathBuf::from("/proj/app/Repositories/UserRepository.php"),
                PathBuf::from("/proj/app/Repositories/Interfaces/UserRepositoryInterface.php"),
                PathBuf::from("/proj/app/Providers/RepositoryServiceProvider.php"),
                PathBuf::from("/proj/app/Providers/RepositoryServiceProvider.php"),
            ]
        );
        assert_eq!(
            host.lock().unwrap().as_deref(),
            Some("    bind(UserRepositoryInterface);\n    //:end-bindings:\n")
        );
    }

    #[test]
    fn existing_files_are_recorded_and_binding_still_spliced() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_file().return_const(true);
        fs.expect_create_dir_all().never();
        fs.expect_read_to_string()
            .returning(|_| Ok("//:end-bindings:".to_string()));
        fs.expect_write_file()
            .withf(|p, _| p.ends_with("RepositoryServiceProvider.php"))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = GenerateService::new(
            Box::new(stubs()),
            Box::new(fs),
            Layout::default(),
            "/proj",
        );
        let report = service.generate(&request("UserRepository", false)).unwrap();

        assert!(report.has_conflicts());
        assert_eq!(report.conflicts().count(), 2);
        assert!(!report.bootstrap_created);
        assert!(matches!(
            report.artifacts.last(),
            Some(ArtifactOutcome::Spliced { .. })
        ));
    }

    #[test]
    fn missing_stub_aborts_before_any_write() {
        let mut store = MockStubStore::new();
        store
            .expect_load()
            .returning(|kind| Err(DomainError::TemplateNotFound { kind }.into()));

        let mut fs = MockFilesystem::new();
        fs.expect_is_file().return_const(false);
        fs.expect_write_file().never();

        let service =
            GenerateService::new(Box::new(store), Box::new(fs), Layout::default(), "/proj");
        let err = service.generate(&request("UserRepository", false)).unwrap_err();
        assert!(matches!(
            err,
            StubcraftError::Domain(DomainError::TemplateNotFound {
                kind: StubKind::Implementation
            })
        ));
    }

    #[test]
    fn invalid_layout_is_rejected_up_front() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_file().never();

        let layout = Layout {
            marker: String::new(),
            ..Layout::default()
        };
        let service = GenerateService::new(Box::new(stubs()), Box::new(fs), layout, "/proj");
        let err = service.generate(&request("UserRepository", false)).unwrap_err();
        assert!(matches!(
            err,
            StubcraftError::Domain(DomainError::InvalidLayout { .. })
        ));
    }
}
