//! Insertion Splicer - file-level wrapper around `domain::splice`.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DomainError, splice},
    error::{StubcraftError, StubcraftResult},
};

/// Inserts statements into an existing host file at its marker.
///
/// Never creates the host file: a missing file surfaces as a filesystem
/// error from the read.
pub struct InsertionSplicer<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> InsertionSplicer<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Read `path`, splice `statement` before `marker`, and write it back.
    ///
    /// On `MarkerNotFound` the file is not written at all.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn splice(&self, path: &Path, marker: &str, statement: &str) -> StubcraftResult<()> {
        let text = self.fs.read_to_string(path)?;

        let updated = splice(&text, marker, statement).map_err(|e| match e {
            DomainError::MarkerNotFound {
                marker,
                occurrences,
            } => StubcraftError::Application(ApplicationError::MarkerNotFound {
                path: path.to_path_buf(),
                marker,
                occurrences,
            }),
            other => StubcraftError::Domain(other),
        })?;

        self.fs.write_file(path, &updated)?;
        info!("Statement spliced");
        Ok(())
    }
}
