//! Configuration options for copy operations.
//!
//! This module provides [`CopyOptions`], the immutable command configuration
//! handed down through every copy operation, and [`OnConflict`], the
//! conflict mode derived from it.
//!
//! # Example
//!
//! ```
//! use fmn::{CopyOptions, OnConflict};
//!
//! let options = CopyOptions::default()
//!     .with_recursive()
//!     .with_interactive();
//!
//! assert_eq!(options.on_conflict(), OnConflict::Prompt);
//! ```

/// Behavior when a destination file already exists.
///
/// Derived from the force and interactive flags by
/// [`CopyOptions::on_conflict`]; force always wins over interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnConflict {
    /// Fail the entry with [`Error::AlreadyExists`](crate::Error::AlreadyExists) (default).
    #[default]
    Error,
    /// Replace the existing file without asking.
    Overwrite,
    /// Ask on the console; a declined prompt skips the file.
    Prompt,
}

/// Options for list and copy operations.
///
/// Use [`Default::default()`] to get the plain `cp`-like behavior, then
/// customize using the builder methods. Once built the options are only
/// ever read.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `recursive` | `false` | Refuse directory sources |
/// | `force` | `false` | Fail on existing files |
/// | `interactive` | `false` | Never prompt |
/// | `verbose` | `false` | No per-file confirmation lines |
/// | `dry_run` | `false` | Perform the copy |
#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct CopyOptions {
    /// Copy directories recursively
    pub recursive: bool,

    /// Overwrite existing destination files without asking
    pub force: bool,

    /// Ask before overwriting an existing destination file
    pub interactive: bool,

    /// Print a line for every copied file
    pub verbose: bool,

    /// Report planned actions without touching the filesystem
    pub dry_run: bool,

    /// Callback for warnings (optional)
    ///
    /// If not set and `tracing` feature is enabled, warnings are logged via tracing.
    /// Otherwise, warnings are silently ignored.
    pub warn_handler: Option<fn(&str)>,
}

impl CopyOptions {
    /// Create options with a warning handler
    #[must_use]
    pub fn with_warn_handler(mut self, handler: fn(&str)) -> Self {
        self.warn_handler = Some(handler);
        self
    }

    /// Allow directory sources
    #[must_use]
    pub fn with_recursive(mut self) -> Self {
        self.recursive = true;
        self
    }

    /// Overwrite existing files
    #[must_use]
    pub fn with_force(mut self) -> Self {
        self.force = true;
        self
    }

    /// Prompt before overwriting existing files
    #[must_use]
    pub fn with_interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// Print `'src' -> 'dst'` for every copied file
    #[must_use]
    pub fn with_verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Only report what would be copied
    #[must_use]
    pub fn with_dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Conflict mode implied by the force and interactive flags.
    #[must_use]
    pub fn on_conflict(&self) -> OnConflict {
        if self.force {
            OnConflict::Overwrite
        } else if self.interactive {
            OnConflict::Prompt
        } else {
            OnConflict::Error
        }
    }

    pub(crate) fn warn(&self, msg: &str) {
        if let Some(handler) = self.warn_handler {
            handler(msg);
        } else {
            #[cfg(feature = "tracing")]
            tracing::warn!("{}", msg);
        }
    }
}
