//! # fmn
//!
//! List and copy files and directories with explicit overwrite policies.
//!
//! ## Core Features
//!
//! - **Per-entry overwrite policy**: fail, force, or ask for every existing file
//! - **Recursive merge**: directory sources are merged into the destination tree
//! - **Atomic writes**: each file is written to a temp file and renamed into place
//! - **Permission preserving**: copies file permission bits
//! - **Timestamp preserving**: copies file modification and access times
//! - **Dry run**: reports every planned action without touching the filesystem
//! - **Independent sources**: one failing source never stops the others; all
//!   failures are reported together
//!
//! ## Quick Start
//!
//! ```no_run
//! use fmn::{copy_paths, Console, CopyOptions};
//! use std::io;
//! use std::path::{Path, PathBuf};
//!
//! let options = CopyOptions::default().with_recursive().with_force();
//!
//! let mut stdout = io::stdout();
//! let mut stdin = io::stdin().lock();
//! let mut console = Console::new(&mut stdout, &mut stdin);
//!
//! let stats = copy_paths(&[PathBuf::from("project")], Path::new("backup"), &options, &mut console)?;
//! println!("Copied {} files ({} bytes)", stats.files_copied, stats.bytes_copied);
//! # Ok::<(), fmn::Error>(())
//! ```
//!
//! ## Overwrite Policy
//!
//! | Destination | `force` | `interactive` | Outcome |
//! |-------------|---------|---------------|---------|
//! | absent | - | - | copy |
//! | directory | - | - | merge into it |
//! | file | yes | - | overwrite |
//! | file | no | yes | ask; `y`/`yes` overwrites, anything else skips |
//! | file | no | no | [`Error::AlreadyExists`] |
//!
//! ## Streams
//!
//! Nothing in this crate touches stdin or stdout directly. Dry-run plans,
//! verbose lines, and prompts go through the [`Console`] the caller passes
//! in, so the whole engine can be driven from in-memory buffers.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Structured logging with tracing crate |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod console;
mod copy;
mod error;
mod inspect;
mod list;
mod options;
mod policy;

pub use console::{Console, is_affirmative};
pub use copy::{CopyStats, copy_paths};
pub use error::{Error, ErrorCode, Result};
pub use inspect::{PathState, inspect, same_file};
pub use list::list_paths;
pub use options::{CopyOptions, OnConflict};
pub use policy::{Decision, decide};
