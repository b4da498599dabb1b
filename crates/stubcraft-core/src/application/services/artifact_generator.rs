//! Artifact Generator - produces one output artifact for a resolved identity.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ports::Filesystem,
        services::{ConflictGuard, InsertionSplicer, TemplateEngine},
    },
    domain::{ResolvedIdentity, StubKind},
    error::StubcraftResult,
};

/// The three artifacts produced per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Standalone implementation file.
    Implementation,
    /// Standalone contract file.
    Contract,
    /// Statement spliced into the host bootstrap file.
    Binding,
}

impl ArtifactKind {
    pub const fn stub_kind(self) -> StubKind {
        match self {
            Self::Implementation => StubKind::Implementation,
            Self::Contract => StubKind::Contract,
            Self::Binding => StubKind::Binding,
        }
    }
}

/// What happened to one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ArtifactOutcome {
    Written { kind: ArtifactKind, path: PathBuf },
    Overwritten { kind: ArtifactKind, path: PathBuf },
    AlreadyExists { kind: ArtifactKind, path: PathBuf },
    Spliced { path: PathBuf, statement: String },
}

impl ArtifactOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Written { path, .. }
            | Self::Overwritten { path, .. }
            | Self::AlreadyExists { path, .. }
            | Self::Spliced { path, .. } => path,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}

/// Generates a single artifact.
///
/// Standalone artifacts go through the [`ConflictGuard`] and are written to
/// their own file. The binding is rendered and handed to the
/// [`InsertionSplicer`]; `force` has no effect on it.
pub struct ArtifactGenerator<'a> {
    kind: ArtifactKind,
    identity: &'a ResolvedIdentity,
    engine: &'a TemplateEngine<'a>,
    fs: &'a dyn Filesystem,
    root: &'a Path,
}

impl<'a> ArtifactGenerator<'a> {
    pub fn new(
        kind: ArtifactKind,
        identity: &'a ResolvedIdentity,
        engine: &'a TemplateEngine<'a>,
        fs: &'a dyn Filesystem,
        root: &'a Path,
    ) -> Self {
        Self {
            kind,
            identity,
            engine,
            fs,
            root,
        }
    }

    /// Where this artifact lands.
    pub fn target_path(&self) -> PathBuf {
        let layout = self.engine.layout();
        match self.kind {
            ArtifactKind::Implementation => layout.implementation_path(self.root, self.identity),
            ArtifactKind::Contract => layout.contract_path(self.root, self.identity),
            ArtifactKind::Binding => layout.provider_path(self.root),
        }
    }

    #[instrument(skip_all, fields(kind = ?self.kind))]
    pub fn run(&self, force: bool) -> StubcraftResult<ArtifactOutcome> {
        let path = self.target_path();

        if self.kind == ArtifactKind::Binding {
            return self.splice_binding(path);
        }

        let existed = ConflictGuard::new(self.fs).check_writable(&path, force)?;
        let content = self.engine.render(self.kind.stub_kind(), self.identity)?;

        if let Some(parent) = path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.write_file(&path, &content)?;

        info!(path = %path.display(), overwritten = existed, "Artifact written");

        Ok(if existed {
            ArtifactOutcome::Overwritten {
                kind: self.kind,
                path,
            }
        } else {
            ArtifactOutcome::Written {
                kind: self.kind,
                path,
            }
        })
    }

    fn splice_binding(&self, path: PathBuf) -> StubcraftResult<ArtifactOutcome> {
        let rendered = self.engine.render(StubKind::Binding, self.identity)?;
        let statement = rendered.trim_end_matches(['\r', '\n']).to_string();

        InsertionSplicer::new(self.fs).splice(&path, &self.engine.layout().marker, &statement)?;

        Ok(ArtifactOutcome::Spliced { path, statement })
    }
}
