//! Conflict Guard - overwrite policy for generated files.
//!
//! The existence check and the later write are separate filesystem calls.
//! A concurrent writer slipping in between is an accepted limitation of a
//! single-operator CLI.

use std::path::Path;

use tracing::debug;

use crate::{
    application::{ApplicationError, ports::Filesystem},
    error::StubcraftResult,
};

pub struct ConflictGuard<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> ConflictGuard<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Decide whether `path` may be written.
    ///
    /// Returns `Ok(true)` when an existing file will be overwritten because
    /// `force` is set, `Ok(false)` when nothing is there yet.
    pub fn check_writable(&self, path: &Path, force: bool) -> StubcraftResult<bool> {
        if !self.fs.is_file(path) {
            return Ok(false);
        }
        if force {
            debug!(path = %path.display(), "Existing file will be overwritten");
            return Ok(true);
        }
        Err(ApplicationError::FileAlreadyExists {
            path: path.to_path_buf(),
        }
        .into())
    }
}
