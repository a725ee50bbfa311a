//! Path inspection.
//!
//! Resolves a path to its current state on disk. Results are snapshots:
//! callers inspect right before acting and never cache a [`PathState`]
//! across a run.

use crate::error::{Error, Result};
use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

/// What currently lives at a path.
///
/// Symlinks are followed. Anything that is not a directory is treated as a
/// file.
#[derive(Debug, Clone)]
pub enum PathState {
    /// Nothing exists at the path
    Absent,
    /// A non-directory
    File(Metadata),
    /// A directory
    Directory(Metadata),
}

impl PathState {
    /// Whether anything exists at the path.
    #[must_use]
    pub fn exists(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Whether the path is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    /// Metadata captured at inspection time, if the path exists.
    #[must_use]
    pub fn metadata(&self) -> Option<&Metadata> {
        match self {
            Self::Absent => None,
            Self::File(meta) | Self::Directory(meta) => Some(meta),
        }
    }
}

/// Inspect `path`.
///
/// # Errors
///
/// Absence is not an error. Any other stat failure (permission denied on a
/// parent, broken filesystem) is returned as [`Error::Metadata`].
pub fn inspect(path: &Path) -> Result<PathState> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(PathState::Directory(meta)),
        Ok(meta) => Ok(PathState::File(meta)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(PathState::Absent),
        Err(source) => Err(Error::Metadata {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Check whether `a` and `b` currently resolve to the same filesystem object.
///
/// A path that does not exist is never the same file as anything.
///
/// # Errors
///
/// Returns [`Error::Metadata`] if either path cannot be inspected for a
/// reason other than absence.
pub fn same_file(a: &Path, b: &Path) -> Result<bool> {
    let (Some(key_a), Some(key_b)) = (file_key(a)?, file_key(b)?) else {
        return Ok(false);
    };
    Ok(key_a == key_b)
}

/// Get a unique key for a path based on device and inode.
#[cfg(unix)]
fn file_key(path: &Path) -> Result<Option<(u64, u64)>> {
    use std::os::unix::fs::MetadataExt;
    Ok(match inspect(path)? {
        PathState::Absent => None,
        PathState::File(meta) | PathState::Directory(meta) => Some((meta.dev(), meta.ino())),
    })
}

#[cfg(not(unix))]
fn file_key(path: &Path) -> Result<Option<std::path::PathBuf>> {
    // Fallback: canonical path equality (no stable file ids in std here)
    match path.canonicalize() {
        Ok(canonical) => Ok(Some(canonical)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(Error::Metadata {
            path: path.to_path_buf(),
            source,
        }),
    }
}
