//! fmn - list and copy files
//!
//! A small file manager command built on the fmn library.

use clap::Parser;
use fmn::{Console, CopyOptions, CopyStats, Error as FmnError, ErrorCode, copy_paths, list_paths};
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

/// fmn - list and copy files
///
/// Without --copy, lists each PATH (the current directory by default).
/// With --copy, copies every SOURCE into the last path given.
///
/// Usage:
///   fmn [PATH]...
///   fmn -c SOURCE DEST
///   fmn -c SOURCE... DIRECTORY
#[derive(Parser, Debug)]
#[command(name = "fmn", version, about, long_about = None)]
struct Args {
    /// Paths to list, or sources followed by the destination with --copy
    paths: Vec<PathBuf>,

    /// Copy instead of list
    #[arg(short = 'c', long)]
    copy: bool,

    /// Copy directories recursively
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Overwrite existing files without asking
    #[arg(short = 'f', long)]
    force: bool,

    /// Ask before overwriting each existing file
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Print each file as it is copied, then a summary
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Print what would be copied without actually copying
    #[arg(short = 'n', long = "dry-run", alias = "plan")]
    dry_run: bool,
}

type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
enum CliError {
    #[error("copy requires at least one source path")]
    MissingSource,

    #[error("cannot copy a path to itself")]
    SelfCopy,

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),

    #[error(transparent)]
    Fmn(#[from] FmnError),
}

impl CliError {
    fn code(&self) -> ErrorCode {
        match self {
            Self::MissingSource | Self::SelfCopy => ErrorCode::InvalidInput,
            Self::Output(source) if source.kind() == io::ErrorKind::PermissionDenied => {
                ErrorCode::PermissionDenied
            }
            Self::Output(_) => ErrorCode::IoError,
            Self::Fmn(error) => error.code(),
        }
    }

    fn print(&self) {
        match self {
            Self::Fmn(error) => {
                for e in error.iter() {
                    eprintln!("fmn: {e}");
                }
            }
            other => eprintln!("fmn: {other}"),
        }
    }
}

fn exit_code_for(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::InvalidInput => 2,
        _ => 1,
    }
}

fn main() {
    if let Err(error) = run() {
        error.print();
        std::process::exit(exit_code_for(error.code()));
    }
}

fn run() -> CliResult<()> {
    let args = Args::parse();

    if !args.copy {
        let paths = if args.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            args.paths.clone()
        };
        let mut stdout = io::stdout().lock();
        list_paths(&paths, &mut stdout)?;
        return Ok(());
    }

    let (sources, dest) = resolve_sources_and_dest(&args)?;
    let options = build_options(&args);

    let mut stdout = io::stdout();
    let mut stdin = io::stdin().lock();
    let mut console = Console::new(&mut stdout, &mut stdin);

    let stats = copy_paths(&sources, &dest, &options, &mut console)?;

    if args.verbose {
        print_stats(&stats, args.dry_run).map_err(CliError::Output)?;
    }
    Ok(())
}

/// Split the copy arguments into sources and a destination.
fn resolve_sources_and_dest(args: &Args) -> CliResult<(Vec<PathBuf>, PathBuf)> {
    match args.paths.as_slice() {
        [] => Err(CliError::MissingSource),
        [only] => Ok((vec![only.clone()], PathBuf::from("."))),
        [first, .., last] if first == last => Err(CliError::SelfCopy),
        [sources @ .., last] => Ok((sources.to_vec(), last.clone())),
    }
}

fn build_options(args: &Args) -> CopyOptions {
    let mut options = CopyOptions::default().with_warn_handler(print_warning);
    if args.recursive {
        options = options.with_recursive();
    }
    if args.force {
        options = options.with_force();
    }
    if args.interactive {
        options = options.with_interactive();
    }
    if args.verbose {
        options = options.with_verbose();
    }
    if args.dry_run {
        options = options.with_dry_run();
    }
    options
}

fn print_warning(msg: &str) {
    eprintln!("fmn: warning: {msg}");
}

fn print_stats(stats: &CopyStats, dry_run: bool) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if dry_run {
        return writeln!(
            out,
            "Would copy {} files, create {} dirs, skip {}",
            stats.files_copied, stats.dirs_created, stats.files_skipped
        );
    }
    writeln!(
        out,
        "Copied {} files ({}), created {} dirs, skipped {} in {:?}",
        stats.files_copied,
        format_bytes(stats.bytes_copied),
        stats.dirs_created,
        stats.files_skipped,
        stats.duration
    )
}

fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
