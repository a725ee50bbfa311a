//! Core copy operations.
//!
//! [`copy_paths`] is the entry point: it checks the shape of the request
//! once, then copies every source on its own, collecting failures instead
//! of stopping at the first one.

mod dir;
mod file;
mod walk;

use crate::console::Console;
use crate::error::{Error, Result};
use crate::inspect::{PathState, inspect};
use crate::options::CopyOptions;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Statistics from a copy operation.
///
/// Returned by [`copy_paths`]. In dry-run mode the counters describe what
/// would have happened and `bytes_copied` stays zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Number of files copied
    pub files_copied: u64,
    /// Number of files left alone after a declined prompt
    pub files_skipped: u64,
    /// Number of directories created
    pub dirs_created: u64,
    /// Total bytes copied
    pub bytes_copied: u64,
    /// Duration of the copy operation
    pub duration: Duration,
}

impl CopyStats {
    fn merge(&mut self, other: &CopyStats) {
        self.files_copied += other.files_copied;
        self.files_skipped += other.files_skipped;
        self.dirs_created += other.dirs_created;
        self.bytes_copied += other.bytes_copied;
    }
}

/// Copy `sources` to `dst`.
///
/// - A single file source lands at `dst`, or inside it when `dst` is a
///   directory.
/// - A directory source (with `recursive`) is merged into `dst`.
/// - Several sources require `dst` to be an existing directory.
///
/// Each source is handled independently: a missing source, a directory
/// without `recursive`, or a conflict only fails that source.
///
/// # Example
///
/// ```no_run
/// use fmn::{copy_paths, Console, CopyOptions};
/// use std::io;
/// use std::path::{Path, PathBuf};
///
/// let options = CopyOptions::default().with_recursive().with_verbose();
/// let mut stdout = io::stdout();
/// let mut stdin = io::stdin().lock();
/// let mut console = Console::new(&mut stdout, &mut stdin);
///
/// let stats = copy_paths(&[PathBuf::from("src")], Path::new("backup"), &options, &mut console)?;
/// println!("Copied {} files", stats.files_copied);
/// # Ok::<(), fmn::Error>(())
/// ```
///
/// # Errors
///
/// - Several sources and `dst` is not a directory ([`Error::NotADirectory`]),
///   returned before any source is touched
/// - `dst` cannot be inspected ([`Error::Metadata`])
/// - Otherwise, the failure of the single failing source, or
///   [`Error::Partial`] listing every failed source in order
pub fn copy_paths(
    sources: &[PathBuf],
    dst: &Path,
    options: &CopyOptions,
    console: &mut Console<'_>,
) -> Result<CopyStats> {
    let start_time = Instant::now();

    let dst_state = inspect(dst)?;
    if sources.len() > 1 && !dst_state.is_dir() {
        return Err(Error::NotADirectory(dst.to_path_buf()));
    }

    let mut stats = CopyStats::default();
    let mut errors = Vec::new();

    for src in sources {
        match copy_source(src, dst, &dst_state, options, console) {
            Ok(source_stats) => stats.merge(&source_stats),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(src = %src.display(), error = %e, "source failed");
                errors.push(e);
            }
        }
    }

    Error::collect(errors)?;

    stats.duration = start_time.elapsed();
    Ok(stats)
}

/// Copy one source, dispatching on its type.
fn copy_source(
    src: &Path,
    dst: &Path,
    dst_state: &PathState,
    options: &CopyOptions,
    console: &mut Console<'_>,
) -> Result<CopyStats> {
    match inspect(src)? {
        PathState::Absent => Err(Error::SourceNotFound(src.to_path_buf())),
        PathState::Directory(_) => dir::copy_tree(src, dst, options, console),
        PathState::File(src_meta) => {
            file::copy_single(src, &src_meta, dst, dst_state, options, console)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
