//! Edge case and error handling tests for dirscope


use assert_cmd::Command;
use harness::{TestTree, run_dirscope};
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

fn dirscope() -> Command {
    let mut cmd = Command::cargo_bin("dirscope").expect("binary should build");
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Root Failures
// ============================================================================

#[test]
fn test_missing_root_fails() {
    let tree = TestTree::new();

    dirscope()
        .current_dir(tree.path())
        .arg("does-not-exist")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("does-not-exist"))
        .stderr(predicate::str::contains("no files processed"));
}

#[test]
fn test_one_missing_root_among_valid_ones() {
    let tree = TestTree::new();
    tree.add_file("real/data.bin", 9);

    dirscope()
        .current_dir(tree.path())
        .args(["-f", "json", "missing", "real"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"data.bin\""))
        .stderr(predicate::str::contains("cannot resolve 'missing'"));
}

#[test]
fn test_invalid_ignore_pattern() {
    let tree = TestTree::new();

    dirscope()
        .current_dir(tree.path())
        .args(["-I", "["])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid ignore pattern"));
}

// ============================================================================
// Entry Failures
// ============================================================================

#[test]
fn test_unreadable_directory_is_skipped() {
    let tree = TestTree::new();
    tree.add_file("ok.bin", 25);
    tree.add_file("locked/inside.bin", 4000);
    let locked = tree.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can read the directory anyway
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let (stdout, stderr, success) = run_dirscope(tree.path(), &["-f", "json"]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(success, "entry failures must not fail the run: {}", stderr);
    assert!(stderr.contains("cannot open directory"), "{}", stderr);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[0]["size"], 25);
    assert_eq!(parsed[0]["items"], 1);
}

// ============================================================================
// Symlinks
// ============================================================================

#[test]
fn test_symlink_to_directory_not_followed() {
    let tree = TestTree::new();
    tree.add_file("realdir/file.bin", 300);
    symlink(tree.path().join("realdir"), tree.path().join("linkdir"))
        .expect("Failed to create dir symlink");

    let (stdout, _stderr, success) = run_dirscope(tree.path(), &["-f", "json"]);
    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let children = parsed[0]["children"].as_array().unwrap();
    let link = children.iter().find(|c| c["name"] == "linkdir").unwrap();
    assert_eq!(link["type"], "symlink");
    assert!(link.get("children").is_none());
    // realdir, realdir/file.bin, linkdir
    assert_eq!(parsed[0]["items"], 3);
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let tree = TestTree::new();
    tree.add_file("subdir/file.bin", 1);
    symlink("..", tree.path().join("subdir").join("parent"))
        .expect("Failed to create parent symlink");

    let (stdout, _stderr, success) = run_dirscope(tree.path(), &[]);
    assert!(success, "dirscope should not hang on parent symlink");
    assert!(stdout.contains(">parent<"));
    assert!(stdout.contains("Symbolic Link"));
}

#[test]
fn test_broken_symlink_is_recorded() {
    let tree = TestTree::new();
    tree.add_file("real.bin", 5);
    symlink("nonexistent", tree.path().join("broken")).expect("Failed to create broken symlink");

    let (stdout, stderr, success) = run_dirscope(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains(">broken<"), "{}", stderr);
}

#[test]
fn test_symlinked_root_is_resolved() {
    let tree = TestTree::new();
    tree.add_file("target/data.bin", 77);
    symlink(tree.path().join("target"), tree.path().join("alias")).unwrap();

    dirscope()
        .current_dir(tree.path())
        .args(["-f", "text", "--color", "never", "alias"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data.bin  [77 bytes]"))
        .stdout(predicate::str::contains("target  [77 bytes]"));
}

// ============================================================================
// Names and Special Characters
// ============================================================================

#[test]
fn test_html_special_characters_in_names() {
    let tree = TestTree::new();
    tree.add_file("<script>&\"'", 3);

    dirscope()
        .current_dir(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("&lt;script&gt;&amp;&quot;&#x27;"))
        .stdout(predicate::str::contains("<script>").not());
}

#[test]
fn test_newline_in_name_is_dropped() {
    let tree = TestTree::new();
    tree.add_file("two\nlines", 3);

    let (stdout, _stderr, success) = run_dirscope(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains(">twolines<"));
}

#[test]
fn test_unicode_names() {
    let tree = TestTree::new();
    tree.add_file("données.txt", 4);
    tree.add_file("日本語", 4);

    let (stdout, _stderr, success) = run_dirscope(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains(">données.txt<"));
    assert!(stdout.contains(">日本語<"));
}

// ============================================================================
// Shapes
// ============================================================================

#[test]
fn test_empty_directory() {
    let tree = TestTree::new();

    let (stdout, _stderr, success) = run_dirscope(tree.path(), &["-f", "json"]);
    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[0]["size"], 0);
    assert_eq!(parsed[0]["items"], 0);
    assert_eq!(parsed[0]["children"].as_array().unwrap().len(), 0);
}

#[test]
fn test_single_file_root() {
    let tree = TestTree::new();
    tree.add_file("lonely.bin", 1024);

    dirscope()
        .current_dir(tree.path())
        .args(["-f", "text", "--color", "never", "lonely.bin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lonely.bin  [1 KiB]"))
        .stdout(predicate::str::contains("0 directories, 0 files"));
}

#[test]
fn test_deeply_nested() {
    let tree = TestTree::new();
    let deep_path = (0..30).map(|i| format!("d{}", i)).collect::<Vec<_>>().join("/");
    tree.add_file(&format!("{}/leaf.bin", deep_path), 11);

    let (stdout, _stderr, success) = run_dirscope(tree.path(), &["-f", "json"]);
    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[0]["size"], 11);
    // 30 directories plus the leaf
    assert_eq!(parsed[0]["items"], 31);
}
