//! Single file copy operations.
//!
//! This module provides [`transfer`], the byte-level copy of one file with
//! its permissions and timestamps, and [`copy_single`], which resolves the
//! destination of a file source and runs the overwrite check first.

use crate::console::Console;
use crate::error::{Error, Result};
use crate::inspect::{PathState, inspect, same_file};
use crate::options::CopyOptions;
use crate::policy::{Decision, decide};
use filetime::{FileTime, set_file_times};
use std::fs::{self, File, Metadata};
use std::io::{self, BufReader};
use std::path::Path;

use super::CopyStats;

/// Copy the contents of `src` to `dst` and give `dst` the source's
/// permissions and timestamps.
///
/// `src_meta` must be captured before the copy starts so reading the source
/// cannot shift the timestamps being preserved. Bytes go to a temporary file
/// next to `dst` that is renamed into place, so a failed transfer never
/// leaves a half-written destination.
///
/// In dry-run mode only `would copy 'src' -> 'dst'` is written to the
/// console. Returns the number of bytes written.
///
/// # Errors
///
/// Any failure opening, writing, renaming, or applying metadata aborts the
/// transfer ([`Error::Transfer`], [`Error::TempFile`], [`Error::Persist`]).
pub(crate) fn transfer(
    src: &Path,
    dst: &Path,
    src_meta: &Metadata,
    options: &CopyOptions,
    console: &mut Console<'_>,
) -> Result<u64> {
    if options.dry_run {
        console.line(format_args!(
            "would copy '{}' -> '{}'",
            src.display(),
            dst.display()
        ))?;
        return Ok(0);
    }

    let transfer_err = |source: io::Error| Error::Transfer {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source,
    };

    let mut reader = BufReader::new(File::open(src).map_err(transfer_err)?);

    let dst_parent = match dst.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp_file =
        tempfile::NamedTempFile::new_in(dst_parent).map_err(|source| Error::TempFile {
            path: dst_parent.to_path_buf(),
            source,
        })?;

    let bytes = io::copy(&mut reader, temp_file.as_file_mut()).map_err(transfer_err)?;
    fs::set_permissions(temp_file.path(), src_meta.permissions()).map_err(transfer_err)?;

    temp_file.persist(dst).map_err(|e| Error::Persist {
        path: dst.to_path_buf(),
        source: e.error,
    })?;

    let mtime = FileTime::from_last_modification_time(src_meta);
    let atime = FileTime::from_last_access_time(src_meta);
    set_file_times(dst, atime, mtime).map_err(transfer_err)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(src = %src.display(), dst = %dst.display(), bytes, "copied file");

    if options.verbose {
        console.line(format_args!("'{}' -> '{}'", src.display(), dst.display()))?;
    }

    Ok(bytes)
}

/// Copy one file source.
///
/// When `dst_state` says the destination is a directory the copy lands at
/// `dst/<file name of src>`, otherwise at `dst` itself.
///
/// # Errors
///
/// - The source has no file name to copy into a directory ([`Error::NoFileName`])
/// - Source and final destination are the same file ([`Error::SameFile`])
/// - The destination exists and may not be replaced ([`Error::AlreadyExists`])
/// - The transfer fails
pub(crate) fn copy_single(
    src: &Path,
    src_meta: &Metadata,
    dst: &Path,
    dst_state: &PathState,
    options: &CopyOptions,
    console: &mut Console<'_>,
) -> Result<CopyStats> {
    let final_dst = if dst_state.is_dir() {
        let file_name = src
            .file_name()
            .ok_or_else(|| Error::NoFileName(src.to_path_buf()))?;
        dst.join(file_name)
    } else {
        dst.to_path_buf()
    };

    if same_file(src, &final_dst)? {
        return Err(Error::SameFile(src.to_path_buf()));
    }

    let mut stats = CopyStats::default();
    let final_state = inspect(&final_dst)?;
    match decide(&final_dst, &final_state, options, console) {
        Decision::Proceed => {
            stats.bytes_copied += transfer(src, &final_dst, src_meta, options, console)?;
            stats.files_copied += 1;
        }
        Decision::Skip => stats.files_skipped += 1,
        Decision::Fail(e) => return Err(e),
    }

    Ok(stats)
}

// =============================================================================
// Tests
// =============================================================================
