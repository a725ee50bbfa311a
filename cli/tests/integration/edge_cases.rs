//! Edge case integration tests for the fmn CLI.
//!
//! These tests cover:
//! - Interactive answers
//! - Timestamp and permission preservation
//! - File type conflicts
//! - Symlinks and special filenames

#[path = "../common/mod.rs"]
mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::TestFixture;
use predicates::prelude::*;
use rstest::rstest;
use std::fs;
use std::time::{Duration, SystemTime};

// =============================================================================
// Interactive answers
// =============================================================================

#[rstest]
#[case::short("y\n")]
#[case::long("yes\n")]
#[case::upper("Y\n")]
#[case::padded("  YES  \n")]
fn test_interactive_affirmative_overwrites(#[case] answer: &str) {
    let fx = TestFixture::new();
    fx.write_src("file.txt", "new");
    fx.write_dst("file.txt", "old");

    let mut cmd = cargo_bin_cmd!("fmn");
    cmd.arg("-c")
        .arg("-i")
        .arg(fx.src.path().join("file.txt"))
        .arg(fx.dst.path())
        .write_stdin(answer)
        .assert()
        .success();

    fx.assert_file_content(&fx.dst.path().join("file.txt"), "new");
}

#[rstest]
#[case::no("n\n")]
#[case::other("maybe\n")]
#[case::empty("\n")]
#[case::eof("")]
fn test_interactive_anything_else_skips(#[case] answer: &str) {
    let fx = TestFixture::new();
    fx.write_src("file.txt", "new");
    fx.write_dst("file.txt", "old");

    let mut cmd = cargo_bin_cmd!("fmn");
    cmd.arg("-c")
        .arg("-i")
        .arg(fx.src.path().join("file.txt"))
        .arg(fx.dst.path())
        .write_stdin(answer)
        .assert()
        .success();

    fx.assert_file_content(&fx.dst.path().join("file.txt"), "old");
}

#[test]
fn test_interactive_asks_once_per_existing_file() {
    let fx = TestFixture::new();
    fx.write_src("a.txt", "new a");
    fx.write_src("b.txt", "new b");
    fx.write_src("c.txt", "new c");
    fx.write_dst("a.txt", "old a");
    fx.write_dst("b.txt", "old b");

    let mut cmd = cargo_bin_cmd!("fmn");
    let output = cmd
        .arg("-c")
        .arg("-r")
        .arg("-i")
        .arg(fx.src.path())
        .arg(fx.dst.path())
        .write_stdin("n\ny\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.matches("? (y/n): ").count(), 2);
    fx.assert_file_content(&fx.dst.path().join("a.txt"), "old a");
    fx.assert_file_content(&fx.dst.path().join("b.txt"), "new b");
    fx.assert_file_content(&fx.dst.path().join("c.txt"), "new c");
}

// =============================================================================
// Metadata preservation
// =============================================================================

#[test]
fn test_modification_time_preserved() {
    let fx = TestFixture::new();
    fx.write_src("old.txt", "old");
    let src = fx.src.path().join("old.txt");

    let past = SystemTime::now() - Duration::from_secs(3 * 24 * 3600);
    let file = fs::File::options().write(true).open(&src).unwrap();
    file.set_modified(past).unwrap();
    drop(file);

    let mut cmd = cargo_bin_cmd!("fmn");
    cmd.arg("-c").arg(&src).arg(fx.dst.path()).assert().success();

    let src_mtime = fs::metadata(&src).unwrap().modified().unwrap();
    let dst_mtime = fs::metadata(fx.dst.path().join("old.txt"))
        .unwrap()
        .modified()
        .unwrap();
    let diff = src_mtime
        .duration_since(dst_mtime)
        .unwrap_or_else(|e| e.duration());
    assert!(diff < Duration::from_secs(1), "mtime drifted by {diff:?}");
}

#[test]
fn test_modification_time_preserved_in_tree() {
    let fx = TestFixture::new();
    fx.write_src("deep/nested/file.txt", "x");
    let src = fx.src.path().join("deep/nested/file.txt");

    let past = SystemTime::now() - Duration::from_secs(3600);
    let file = fs::File::options().write(true).open(&src).unwrap();
    file.set_modified(past).unwrap();
    drop(file);

    let mut cmd = cargo_bin_cmd!("fmn");
    cmd.arg("-cr")
        .arg(fx.src.path())
        .arg(fx.dst.path())
        .assert()
        .success();

    let dst_mtime = fs::metadata(fx.dst.path().join("deep/nested/file.txt"))
        .unwrap()
        .modified()
        .unwrap();
    let diff = past
        .duration_since(dst_mtime)
        .unwrap_or_else(|e| e.duration());
    assert!(diff < Duration::from_secs(1), "mtime drifted by {diff:?}");
}

#[cfg(unix)]
#[test]
fn test_permissions_preserved() {
    use std::os::unix::fs::PermissionsExt;

    let fx = TestFixture::new();
    fx.write_src("script.sh", "#!/bin/sh\n");
    let src = fx.src.path().join("script.sh");
    fs::set_permissions(&src, fs::Permissions::from_mode(0o750)).unwrap();

    let mut cmd = cargo_bin_cmd!("fmn");
    cmd.arg("-c").arg(&src).arg(fx.dst.path()).assert().success();

    let mode = fs::metadata(fx.dst.path().join("script.sh"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o750);
}

// =============================================================================
// File type conflicts
// =============================================================================

#[test]
fn test_file_source_onto_directory_entry_fails() {
    let fx = TestFixture::new();
    fx.write_src("tree/name", "a file");
    fx.write_dst("name/keep.txt", "keep");

    let mut cmd = cargo_bin_cmd!("fmn");
    cmd.arg("-c")
        .arg("-r")
        .arg("-f")
        .arg(fx.src.path().join("tree"))
        .arg(fx.dst.path())
        .assert()
        .failure();

    assert!(fx.dst.path().join("name").is_dir());
    fx.assert_file_content(&fx.dst.path().join("name/keep.txt"), "keep");
}

#[test]
fn test_directory_entry_onto_existing_file_conflicts() {
    let fx = TestFixture::new();
    fx.write_src("sub/inner.txt", "inner");
    fx.write_dst("sub", "blocking file");

    let mut cmd = cargo_bin_cmd!("fmn");
    cmd.arg("-c")
        .arg("-r")
        .arg(fx.src.path())
        .arg(fx.dst.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    fx.assert_file_content(&fx.dst.path().join("sub"), "blocking file");
}

#[test]
fn test_declined_directory_prunes_subtree() {
    let fx = TestFixture::new();
    fx.write_src("sub/inner.txt", "inner");
    fx.write_dst("sub", "blocking file");

    let mut cmd = cargo_bin_cmd!("fmn");
    cmd.arg("-c")
        .arg("-r")
        .arg("-i")
        .arg(fx.src.path())
        .arg(fx.dst.path())
        .write_stdin("n\n")
        .assert()
        .success();

    fx.assert_file_content(&fx.dst.path().join("sub"), "blocking file");
}

// =============================================================================
// Symlinks
// =============================================================================

#[cfg(unix)]
#[test]
fn test_symlink_to_file_copies_content() {
    let fx = TestFixture::new();
    fx.write_src("tree/target.txt", "target content");
    std::os::unix::fs::symlink("target.txt", fx.src.path().join("tree/link.txt")).unwrap();

    let mut cmd = cargo_bin_cmd!("fmn");
    cmd.arg("-c")
        .arg("-r")
        .arg(fx.src.path().join("tree"))
        .arg(fx.dst.path())
        .assert()
        .success();

    let copied = fx.dst.path().join("link.txt");
    assert!(!copied.symlink_metadata().unwrap().file_type().is_symlink());
    fx.assert_file_content(&copied, "target content");
}

#[cfg(unix)]
#[test]
fn test_symlink_to_directory_is_skipped_with_warning() {
    let fx = TestFixture::new();
    fx.write_src("real/file.txt", "real");
    fs::create_dir(fx.src.path().join("tree")).unwrap();
    std::os::unix::fs::symlink(fx.src.path().join("real"), fx.src.path().join("tree/dirlink"))
        .unwrap();

    let mut cmd = cargo_bin_cmd!("fmn");
    cmd.arg("-c")
        .arg("-r")
        .arg(fx.src.path().join("tree"))
        .arg(fx.dst.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("fmn: warning: Skipping symlink to directory"));

    assert!(!fx.dst.path().join("dirlink").exists());
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_is_skipped_with_warning() {
    let fx = TestFixture::new();
    fs::create_dir(fx.src.path().join("tree")).unwrap();
    std::os::unix::fs::symlink("nowhere", fx.src.path().join("tree/broken")).unwrap();
    fx.write_src("tree/ok.txt", "ok");

    let mut cmd = cargo_bin_cmd!("fmn");
    cmd.arg("-c")
        .arg("-r")
        .arg(fx.src.path().join("tree"))
        .arg(fx.dst.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("fmn: warning: "));

    assert!(fx.dst.path().join("broken").symlink_metadata().is_err());
    fx.assert_file_content(&fx.dst.path().join("ok.txt"), "ok");
}

#[cfg(unix)]
#[test]
fn test_symlink_loop_fails_the_tree() {
    let fx = TestFixture::new();
    fs::create_dir(fx.src.path().join("tree")).unwrap();
    std::os::unix::fs::symlink("loop", fx.src.path().join("tree/loop")).unwrap();

    let mut cmd = cargo_bin_cmd!("fmn");
    cmd.arg("-c")
        .arg("-r")
        .arg(fx.src.path().join("tree"))
        .arg(fx.dst.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("fmn: cannot stat"));
}

// =============================================================================
// Boundary cases
// =============================================================================

#[test]
fn test_empty_file() {
    let fx = TestFixture::new();
    fx.write_src("empty.txt", "");

    let mut cmd = cargo_bin_cmd!("fmn");
    cmd.arg("-c")
        .arg(fx.src.path().join("empty.txt"))
        .arg(fx.dst.path())
        .assert()
        .success();

    fx.assert_file_content(&fx.dst.path().join("empty.txt"), "");
}

#[test]
fn test_empty_directory_tree() {
    let fx = TestFixture::new();
    fs::create_dir_all(fx.src.path().join("a/b/c")).unwrap();

    let mut cmd = cargo_bin_cmd!("fmn");
    cmd.arg("-c")
        .arg("-r")
        .arg(fx.src.path())
        .arg(fx.dst.path().join("copy"))
        .assert()
        .success();

    assert!(fx.dst.path().join("copy/a/b/c").is_dir());
}

#[rstest]
#[case::spaces("with spaces.txt")]
#[case::unicode("unicode-日本語.txt")]
#[case::leading_dash("-dash.txt")]
#[case::hidden(".hidden")]
fn test_special_filenames(#[case] name: &str) {
    let fx = TestFixture::new();
    fx.write_src(name, "special");

    let mut cmd = cargo_bin_cmd!("fmn");
    cmd.arg("-c")
        .arg(fx.src.path().join(name))
        .arg(fx.dst.path())
        .assert()
        .success();

    fx.assert_file_content(&fx.dst.path().join(name), "special");
}
