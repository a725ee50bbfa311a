//! Directory listing.
//!
//! [`list_paths`] prints each path given to it: a non-directory as its own
//! path, a directory as a `name:` header followed by its immediate
//! children. Consecutive items are separated by one blank line.

use crate::error::{Error, Result};
use crate::inspect::{PathState, inspect};
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// List `paths` to `out`.
///
/// Every path is checked before anything is printed; if one is missing,
/// nothing is listed. A directory whose entries cannot be read still gets
/// its header, and the listing carries on with the next path.
///
/// # Example
///
/// ```no_run
/// use fmn::list_paths;
/// use std::path::PathBuf;
///
/// let mut stdout = std::io::stdout();
/// list_paths(&[PathBuf::from(".")], &mut stdout)?;
/// # Ok::<(), fmn::Error>(())
/// ```
///
/// # Errors
///
/// - A path does not exist ([`Error::SourceNotFound`]) or cannot be
///   inspected ([`Error::Metadata`])
/// - Directories could not be read ([`Error::ReadDirectory`], or
///   [`Error::Partial`] when several failed)
/// - Writing to `out` failed ([`Error::Io`])
pub fn list_paths(paths: &[PathBuf], out: &mut dyn Write) -> Result<()> {
    let mut states = Vec::with_capacity(paths.len());
    for path in paths {
        match inspect(path)? {
            PathState::Absent => return Err(Error::SourceNotFound(path.clone())),
            state => states.push(state),
        }
    }

    let mut errors = Vec::new();
    for (i, (path, state)) in paths.iter().zip(&states).enumerate() {
        if i > 0 {
            writeln!(out)?;
        }

        if !state.is_dir() {
            writeln!(out, "{}", path.display())?;
            continue;
        }

        writeln!(out, "{}:", path.display())?;
        match read_names(path) {
            Ok(names) => {
                for name in names {
                    writeln!(out, "{}", name.to_string_lossy())?;
                }
            }
            Err(source) => errors.push(Error::ReadDirectory {
                path: path.clone(),
                source,
            }),
        }
    }

    Error::collect(errors)
}

/// Names of the immediate children of `dir`, sorted.
fn read_names(dir: &Path) -> io::Result<Vec<OsString>> {
    let mut names = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<io::Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}
