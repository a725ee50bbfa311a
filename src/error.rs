//! Error types for fmn.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur while listing or copying, the [`ErrorCode`] classification
//! used for reporting and exit status, and the [`Result`] type alias.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | Not found | [`Error::SourceNotFound`] |
//! | Conflict | [`Error::AlreadyExists`] |
//! | Structural | [`Error::NotADirectory`], [`Error::DirectoryOntoFile`], [`Error::OmittingDirectory`], [`Error::NoFileName`] |
//! | Self copy | [`Error::SameFile`] |
//! | IO | [`Error::Io`], [`Error::Metadata`], [`Error::ReadDirectory`], [`Error::CreateDirectory`], [`Error::Walk`], [`Error::TempFile`], [`Error::Persist`], [`Error::Transfer`] |
//! | Aggregate | [`Error::Partial`] |

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for fmn operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Stable classification of an [`Error`].
///
/// Codes are what the command line reports next to each message and what
/// decides the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A source path does not exist
    SourceNotFound,
    /// Destination file exists and no overwrite resolution was configured
    Conflict,
    /// The filesystem denied access
    PermissionDenied,
    /// Argument shape or destination type makes the request impossible
    InvalidInput,
    /// Source and destination are the same file
    SameFile,
    /// Any other IO failure
    IoError,
    /// Several independent failures were collected
    Partial,
}

impl ErrorCode {
    /// Machine-friendly name of the code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SourceNotFound => "source_not_found",
            Self::Conflict => "conflict",
            Self::PermissionDenied => "permission_denied",
            Self::InvalidInput => "invalid_input",
            Self::SameFile => "same_file",
            Self::IoError => "io_error",
            Self::Partial => "partial",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during list and copy operations.
///
/// Every variant names the path it concerns so a reported message can be
/// acted on without further context.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error not tied to a specific path (e.g. writing to the console)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Source path does not exist
    #[error("cannot stat '{}': No such file or directory", .0.display())]
    SourceNotFound(PathBuf),

    /// Stat failed for a reason other than absence
    #[error("cannot stat '{}': {source}", path.display())]
    Metadata {
        /// Path that could not be inspected
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Destination file exists and neither force nor interactive was set
    #[error("'{}' already exists (use -f to force or -i for interactive)", .0.display())]
    AlreadyExists(PathBuf),

    /// Source and resolved destination are the same file
    #[error("cannot copy '{}' to itself", .0.display())]
    SameFile(PathBuf),

    /// Directory source given without the recursive flag
    #[error("omitting directory '{}' (use -r for recursive)", .0.display())]
    OmittingDirectory(PathBuf),

    /// Multiple sources given but the destination is not a directory
    #[error("target '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Directory source copied onto an existing non-directory
    #[error("cannot overwrite non-directory '{}' with directory '{}'", dst.display(), src.display())]
    DirectoryOntoFile {
        /// Source directory
        src: PathBuf,
        /// Existing non-directory destination
        dst: PathBuf,
    },

    /// Source path has no final component to name the copy after
    #[error("cannot determine file name of '{}'", .0.display())]
    NoFileName(PathBuf),

    /// Failed to read a directory's entries
    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDirectory {
        /// Directory being read
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Failed to create a destination directory
    #[error("cannot create directory '{}': {source}", path.display())]
    CreateDirectory {
        /// Directory being created
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// The directory walk itself failed
    #[error("cannot walk '{}': {source}", path.display())]
    Walk {
        /// Source root being walked
        path: PathBuf,
        /// Underlying error
        source: walkdir::Error,
    },

    /// Failed to create temporary file
    #[error("failed to create temporary file in '{}': {source}", path.display())]
    TempFile {
        /// Directory where temp file creation was attempted
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Failed to persist temporary file
    #[error("failed to persist temporary file to '{}': {source}", path.display())]
    Persist {
        /// Target path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Failed while reading, writing, or applying metadata for one file
    #[error("cannot copy '{}' to '{}': {source}", src.display(), dst.display())]
    Transfer {
        /// Source file
        src: PathBuf,
        /// Destination file
        dst: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Several sources or entries failed independently
    #[error("{}", join_messages(.errors))]
    Partial {
        /// Collected failures, in the order they happened
        errors: Vec<Error>,
    },
}

fn join_messages(errors: &[Error]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn io_code(error: &io::Error) -> ErrorCode {
    if error.kind() == io::ErrorKind::PermissionDenied {
        ErrorCode::PermissionDenied
    } else {
        ErrorCode::IoError
    }
}

impl Error {
    /// Classify this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::SourceNotFound(_) => ErrorCode::SourceNotFound,
            Self::AlreadyExists(_) => ErrorCode::Conflict,
            Self::SameFile(_) => ErrorCode::SameFile,
            Self::OmittingDirectory(_)
            | Self::NotADirectory(_)
            | Self::DirectoryOntoFile { .. }
            | Self::NoFileName(_) => ErrorCode::InvalidInput,
            Self::Io(source)
            | Self::Metadata { source, .. }
            | Self::ReadDirectory { source, .. }
            | Self::CreateDirectory { source, .. }
            | Self::TempFile { source, .. }
            | Self::Persist { source, .. }
            | Self::Transfer { source, .. } => io_code(source),
            Self::Walk { source, .. } => source.io_error().map_or(ErrorCode::IoError, io_code),
            Self::Partial { .. } => ErrorCode::Partial,
        }
    }

    /// Fold collected failures into one result.
    ///
    /// No errors is success, a single error is returned as-is, and anything
    /// more becomes [`Error::Partial`].
    pub fn collect(mut errors: Vec<Error>) -> Result<()> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(Error::Partial { errors }),
        }
    }

    /// Iterate over the individual failures, flattening [`Error::Partial`].
    pub fn iter(&self) -> Box<dyn Iterator<Item = &Error> + '_> {
        match self {
            Self::Partial { errors } => Box::new(errors.iter().flat_map(Error::iter)),
            other => Box::new(std::iter::once(other)),
        }
    }
}
