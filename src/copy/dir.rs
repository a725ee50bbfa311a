//! Directory copy operations.
//!
//! This module walks a source directory and mirrors it under a destination
//! root, consulting the overwrite policy for every entry.

use crate::console::Console;
use crate::error::{Error, Result};
use crate::inspect::{PathState, inspect};
use crate::options::CopyOptions;
use crate::policy::{Decision, decide};
use std::fs::{self, Metadata};
use std::io;
use std::path::Path;
use std::time::Instant;

use super::CopyStats;
use super::file::transfer;
use super::walk::{Visit, walk_tree};

/// Copy the directory `src` recursively into `dst`.
///
/// The contents of `src` are merged into `dst`: an entry at `src/a/b` lands
/// at `dst/a/b`. `dst` is created when it does not exist yet.
///
/// # Strategy
///
/// 1. Validate the roots (recursive flag, destination type)
/// 2. Walk the source depth-first, parents before children
/// 3. Per entry, inspect the destination and ask the overwrite policy
/// 4. Create directories, transfer files, prune declined subtrees
///
/// # Errors
///
/// Returns an error if:
/// - `recursive` is not set ([`Error::OmittingDirectory`])
/// - `dst` exists and is not a directory ([`Error::DirectoryOntoFile`])
/// - Any entry fails its overwrite check or its copy; the rest of this tree
///   is abandoned
pub(crate) fn copy_tree(
    src: &Path,
    dst: &Path,
    options: &CopyOptions,
    console: &mut Console<'_>,
) -> Result<CopyStats> {
    let start_time = Instant::now();

    if !options.recursive {
        return Err(Error::OmittingDirectory(src.to_path_buf()));
    }

    let mut stats = CopyStats::default();

    match inspect(dst)? {
        PathState::File(_) => {
            return Err(Error::DirectoryOntoFile {
                src: src.to_path_buf(),
                dst: dst.to_path_buf(),
            });
        }
        PathState::Absent => {
            create_dir(dst, options, console)?;
            stats.dirs_created += 1;
        }
        PathState::Directory(_) => {}
    }

    walk_tree(src, |entry| {
        let src_meta = if entry.file_type().is_dir() {
            None
        } else {
            match file_metadata(entry, options)? {
                Some(meta) => Some(meta),
                None => return Ok(Visit::Continue),
            }
        };

        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| Error::Io(io::Error::other(e)))?;
        let target = dst.join(rel);
        let target_state = inspect(&target)?;

        match (decide(&target, &target_state, options, console), src_meta) {
            (Decision::Fail(e), _) => Err(e),
            (Decision::Skip, None) => Ok(Visit::SkipSubtree),
            (Decision::Skip, Some(_)) => {
                stats.files_skipped += 1;
                Ok(Visit::Continue)
            }
            (Decision::Proceed, None) => {
                if !target_state.exists() {
                    stats.dirs_created += 1;
                }
                create_dir(&target, options, console)?;
                Ok(Visit::Descend)
            }
            (Decision::Proceed, Some(meta)) => {
                copy_entry(entry.path(), &target, &meta, options, console, &mut stats)?;
                Ok(Visit::Continue)
            }
        }
    })?;

    stats.duration = start_time.elapsed();
    Ok(stats)
}

/// Metadata of a non-directory entry, following symlinks.
///
/// Returns `None`, after a warning, for entries that are never copied:
/// links to directories, dangling links, and special files. Any other
/// failure to stat the entry is an error.
fn file_metadata(
    entry: &walkdir::DirEntry,
    options: &CopyOptions,
) -> Result<Option<Metadata>> {
    let path = entry.path();
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if entry.path_is_symlink() && e.kind() == io::ErrorKind::NotFound => {
            options.warn(&format!("Skipping dangling symlink: {}", path.display()));
            return Ok(None);
        }
        Err(source) => {
            return Err(Error::Metadata {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if meta.is_dir() {
        options.warn(&format!(
            "Skipping symlink to directory: {}",
            path.display()
        ));
        return Ok(None);
    }
    if !meta.is_file() {
        options.warn(&format!("Skipping special file: {}", path.display()));
        return Ok(None);
    }
    Ok(Some(meta))
}

/// Transfer one file entry of the walk, creating its parent first.
fn copy_entry(
    src: &Path,
    dst: &Path,
    src_meta: &Metadata,
    options: &CopyOptions,
    console: &mut Console<'_>,
    stats: &mut CopyStats,
) -> Result<()> {
    if !options.dry_run {
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    stats.bytes_copied += transfer(src, dst, src_meta, options, console)?;
    stats.files_copied += 1;
    Ok(())
}

/// Create `path` and any missing parents, or report it in dry-run mode.
///
/// Succeeds when the directory already exists.
pub(crate) fn create_dir(
    path: &Path,
    options: &CopyOptions,
    console: &mut Console<'_>,
) -> Result<()> {
    if options.dry_run {
        console.line(format_args!("would create directory '{}'", path.display()))?;
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|source| Error::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), "created directory");

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
