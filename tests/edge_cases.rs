//! Edge case and error handling tests for minitree


use assert_cmd::Command;
use harness::{TestTree, run_minitree};
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

fn minitree(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("minitree").expect("binary should build");
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Root Errors
// ============================================================================

#[test]
fn test_missing_root_fails() {
    let tree = TestTree::new();

    minitree(tree.path())
        .arg("does-not-exist")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot access 'does-not-exist'"));
}

#[test]
fn test_root_is_a_file() {
    let tree = TestTree::new();
    tree.add_file("plain.txt", "content");

    minitree(tree.path())
        .arg("plain.txt")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("minitree: cannot access"));
}

#[test]
fn test_zero_max_entries_rejected() {
    let tree = TestTree::new();

    minitree(tree.path())
        .args(["--max-entries", "0"])
        .assert()
        .failure();
}

// ============================================================================
// Permission Edge Cases
// ============================================================================

#[test]
fn test_unreadable_nested_directory_renders_as_leaf() {
    let tree = TestTree::new();
    tree.add_file("one/two/three/secret.txt", "");
    tree.add_file("one/two/sibling.txt", "");
    tree.add_file("zz.txt", "");

    let locked = tree.path().join("one/two/three");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permissions are not enforced for privileged users
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let (stdout, stderr, success) = run_minitree(tree.path(), &[]);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(success, "unreadable subdirectory is not fatal");
    let expected = "\
.
├── one/
│   └── two/
│       ├── three/
│       └── sibling.txt
└── zz.txt
";
    assert_eq!(stdout, expected);
    assert!(stderr.is_empty(), "no warning by default: {}", stderr);
}

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_directory_is_followed() {
    let tree = TestTree::new();
    tree.add_file("real/file.txt", "");
    symlink(tree.path().join("real"), tree.path().join("link")).unwrap();

    let (stdout, _stderr, success) = run_minitree(tree.path(), &[]);
    assert!(success);
    let expected = "\
.
├── link/
│   └── file.txt
└── real/
    └── file.txt
";
    assert_eq!(stdout, expected);
}

#[test]
fn test_symlink_to_file_is_listed() {
    let tree = TestTree::new();
    tree.add_file("target.txt", "");
    symlink("target.txt", tree.path().join("alias.txt")).unwrap();

    let (stdout, _stderr, success) = run_minitree(tree.path(), &[]);
    assert!(success);
    assert_eq!(stdout, ".\n├── alias.txt\n└── target.txt\n");
}

#[test]
fn test_broken_symlink_is_omitted() {
    let tree = TestTree::new();
    tree.add_file("real.txt", "");
    symlink("nonexistent.txt", tree.path().join("broken.txt")).unwrap();

    let (stdout, _stderr, success) = run_minitree(tree.path(), &[]);
    assert!(success, "broken symlinks are not fatal");
    assert_eq!(stdout, ".\n└── real.txt\n");
}

#[test]
fn test_symlink_to_parent_terminates() {
    let tree = TestTree::new();
    tree.add_file("subdir/file.txt", "");
    symlink("..", tree.path().join("subdir/parent")).unwrap();

    let (stdout, _stderr, success) = run_minitree(tree.path(), &["--max-depth", "8"]);
    assert!(success, "minitree should not hang on a parent symlink");
    // subdir, parent, file.txt repeat until the depth cap
    assert!(stdout.lines().count() > 3);
    assert!(stdout.contains("file.txt"));
}

// ============================================================================
// Names
// ============================================================================

#[test]
fn test_non_utf8_name_is_passed_through() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tree = TestTree::new();
    let name = OsStr::from_bytes(b"caf\xe9.txt");
    if fs::write(tree.path().join(name), "").is_err() {
        // Some filesystems only accept UTF-8 names
        return;
    }

    let output = minitree(tree.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b".\n\xe2\x94\x94\xe2\x94\x80\xe2\x94\x80 caf\xe9.txt\n");
}

#[test]
fn test_dotted_names_inside_are_kept() {
    let tree = TestTree::new();
    tree.add_file("archive.tar.gz", "");
    tree.add_file("..double", "");

    let (stdout, _stderr, success) = run_minitree(tree.path(), &[]);
    assert!(success);
    assert_eq!(stdout, ".\n└── archive.tar.gz\n");
}

#[test]
fn test_unicode_names() {
    let tree = TestTree::new();
    tree.add_file("日本語.txt", "");
    tree.add_file("émoji 🎉.md", "");

    let (stdout, _stderr, success) = run_minitree(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("日本語.txt"));
    assert!(stdout.contains("'émoji 🎉.md'"));
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_truncation_warning_with_rust_log() {
    let tree = TestTree::new();
    for i in 0..5 {
        tree.add_file(&format!("f{i}"), "");
    }

    minitree(tree.path())
        .args(["--max-entries", "2"])
        .env("RUST_LOG", "warn")
        .assert()
        .success()
        .stderr(predicate::str::contains("listing truncated"));
}

#[test]
fn test_color_always_marks_directories() {
    let tree = TestTree::new();
    tree.add_dir("src");

    minitree(tree.path())
        .args(["--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["))
        .stdout(predicate::str::contains("src\x1b[0m/"));
}

#[test]
fn test_color_never_is_plain() {
    let tree = TestTree::new();
    tree.add_dir("src");

    minitree(tree.path())
        .args(["--color", "never"])
        .assert()
        .success()
        .stdout(".\n└── src/\n");
}
