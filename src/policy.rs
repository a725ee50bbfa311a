//! Overwrite decisions.
//!
//! Given what currently exists at a destination and the configured conflict
//! mode, [`decide`] says whether the copy of one entry goes ahead, is
//! silently skipped, or fails.

use crate::console::Console;
use crate::error::Error;
use crate::inspect::PathState;
use crate::options::{CopyOptions, OnConflict};
use std::path::Path;

/// Outcome of the overwrite check for one destination entry.
#[derive(Debug)]
pub enum Decision {
    /// Copy (or create) the entry
    Proceed,
    /// Leave the destination alone; not an error
    Skip,
    /// Leave the destination alone and report the error
    Fail(Error),
}

/// Decide what to do with `target`, whose current state is `state`.
///
/// Rules, first match wins:
///
/// 1. Nothing at the target: proceed.
/// 2. A directory at the target: proceed (directories are merged into).
/// 3. A file and `force`: proceed.
/// 4. A file and `interactive`: ask on the console; yes proceeds, anything
///    else skips.
/// 5. A file otherwise: fail with [`Error::AlreadyExists`].
pub fn decide(
    target: &Path,
    state: &PathState,
    options: &CopyOptions,
    console: &mut Console<'_>,
) -> Decision {
    match state {
        PathState::Absent | PathState::Directory(_) => Decision::Proceed,
        PathState::File(_) => match options.on_conflict() {
            OnConflict::Overwrite => Decision::Proceed,
            OnConflict::Prompt => match console.confirm_overwrite(target) {
                Ok(true) => Decision::Proceed,
                Ok(false) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(target = %target.display(), "overwrite declined");
                    Decision::Skip
                }
                Err(e) => Decision::Fail(Error::Io(e)),
            },
            OnConflict::Error => Decision::Fail(Error::AlreadyExists(target.to_path_buf())),
        },
    }
}
