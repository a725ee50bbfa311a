//! Depth-first traversal with per-node instructions.
//!
//! The visitor sees every entry below the root (the root itself is not
//! visited), parents before children and siblings in file-name order, and
//! answers each one with a [`Visit`] telling the walk how to go on.

use crate::error::{Error, Result};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// What the walk should do after visiting an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Visit {
    /// Walk into this directory's children
    Descend,
    /// Do not visit anything below this directory
    SkipSubtree,
    /// Move on to the next entry (files, or nothing to add for a directory)
    Continue,
}

/// Walk `root` and hand every entry below it to `visit`.
///
/// Symlinks are reported as entries and never followed. The first error,
/// from the walk or from the visitor, stops the walk and is returned.
pub(crate) fn walk_tree<F>(root: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&DirEntry) -> Result<Visit>,
{
    let mut entries = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = entries.next() {
        let entry = entry.map_err(|source| Error::Walk {
            path: root.to_path_buf(),
            source,
        })?;

        match visit(&entry)? {
            Visit::SkipSubtree if entry.file_type().is_dir() => entries.skip_current_dir(),
            Visit::SkipSubtree | Visit::Descend | Visit::Continue => {}
        }
    }

    Ok(())
}
