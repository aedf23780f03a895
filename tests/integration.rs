//! Integration tests for the folder-scan binary


use harness::{TestTree, report_paths, run_folder_scan};

fn sample_tree() -> TestTree {
    let tree = TestTree::new();
    tree.add_file("top.txt", "top");
    tree.add_file("level1/mid.md", "mid");
    tree.add_file("level1/level2/deep.rs", "deep");
    tree
}

#[test]
fn test_default_writes_report_into_start_dir() {
    let tree = sample_tree();

    let (_stdout, stderr, success) = run_folder_scan(tree.path(), &["."]);
    assert!(success, "folder-scan should succeed: {}", stderr);

    let report = std::fs::read_to_string(tree.path().join("scan_results.txt"))
        .expect("default report should exist");
    assert!(report.starts_with("Name@Type@RelativePath@Modified@Created\n"));
    let paths = report_paths(&report);
    assert!(paths.contains(&"top.txt".to_string()));
    assert!(paths.contains(&"level1/level2/deep.rs".to_string()));
    assert!(
        !paths.iter().any(|p| p.contains("scan_results")),
        "report should not list itself: {:?}",
        paths
    );
    assert!(stderr.contains("Scan complete"), "{}", stderr);
}

#[test]
fn test_stdout_output() {
    let tree = sample_tree();
    let (stdout, _stderr, success) = run_folder_scan(tree.path(), &[".", "-o", "-", "-q"]);
    assert!(success);
    assert_eq!(
        report_paths(&stdout),
        vec!["level1", "level1/level2", "level1/level2/deep.rs", "level1/mid.md", "top.txt"]
    );
    assert!(!tree.path().join("scan_results.txt").exists());
}

#[test]
fn test_level_one_lists_direct_children_only() {
    let tree = sample_tree();
    let (stdout, _stderr, success) = run_folder_scan(tree.path(), &[".", "-L", "1", "-o", "-", "-q"]);
    assert!(success);
    assert_eq!(report_paths(&stdout), vec!["level1", "top.txt"]);
}

#[test]
fn test_all_overrides_default_level() {
    let tree = TestTree::new();
    tree.add_file("a/b/c/d/e.txt", "");
    let (stdout, _stderr, success) = run_folder_scan(tree.path(), &[".", "-a", "-o", "-", "-q"]);
    assert!(success);
    assert!(report_paths(&stdout).contains(&"a/b/c/d/e.txt".to_string()));

    let (stdout, _stderr, _) = run_folder_scan(tree.path(), &[".", "-o", "-", "-q"]);
    assert!(!report_paths(&stdout).contains(&"a/b/c/d".to_string()));
    assert!(report_paths(&stdout).contains(&"a/b/c".to_string()));
}

#[test]
fn test_level_and_all_conflict() {
    let tree = sample_tree();
    let (_stdout, _stderr, success) = run_folder_scan(tree.path(), &[".", "-a", "-L", "2"]);
    assert!(!success);
}

#[test]
fn test_zero_level_rejected() {
    let tree = sample_tree();
    let (_stdout, _stderr, success) = run_folder_scan(tree.path(), &[".", "-L", "0"]);
    assert!(!success);
}

#[test]
fn test_missing_directory_fails() {
    let tree = TestTree::new();
    let (_stdout, stderr, success) = run_folder_scan(tree.path(), &["does-not-exist"]);
    assert!(!success);
    assert!(stderr.contains("does not exist"), "{}", stderr);
}

#[test]
fn test_exclude_types_case_insensitive() {
    let tree = TestTree::new();
    tree.add_file("notes.TMP", "");
    tree.add_file("notes.txt", "");
    let (stdout, _stderr, success) =
        run_folder_scan(tree.path(), &[".", "-x", ".tmp", "-o", "-", "-q"]);
    assert!(success);
    assert_eq!(report_paths(&stdout), vec!["notes.txt"]);
}

#[test]
fn test_exclude_types_case_sensitive() {
    let tree = TestTree::new();
    tree.add_file("notes.TMP", "");
    let (stdout, _stderr, success) = run_folder_scan(
        tree.path(),
        &[".", "-x", ".tmp", "--exclude-case-sensitive", "-o", "-", "-q"],
    );
    assert!(success);
    assert_eq!(report_paths(&stdout), vec!["notes.TMP"]);
}

#[test]
fn test_whitelist_mode() {
    let tree = TestTree::new();
    tree.add_file("Draft-plan.md", "");
    tree.add_file("final.md", "");
    let (stdout, _stderr, success) = run_folder_scan(
        tree.path(),
        &[".", "-n", "draft", "--mode", "whitelist", "-o", "-", "-q"],
    );
    assert!(success);
    assert_eq!(report_paths(&stdout), vec!["Draft-plan.md"]);
}

#[test]
fn test_blacklist_mode_is_default() {
    let tree = TestTree::new();
    tree.add_file("Draft-plan.md", "");
    tree.add_file("final.md", "");
    let (stdout, _stderr, success) =
        run_folder_scan(tree.path(), &[".", "-n", "DRAFT", "-o", "-", "-q"]);
    assert!(success);
    assert_eq!(report_paths(&stdout), vec!["final.md"]);
}

#[test]
fn test_stop_keywords() {
    let tree = TestTree::new();
    tree.add_file("proj/.git/HEAD", "");
    tree.add_file("proj/src/main.rs", "");
    let (stdout, _stderr, success) =
        run_folder_scan(tree.path(), &[".", "-a", "-s", ".git", "-o", "-", "-q"]);
    assert!(success);
    let paths = report_paths(&stdout);
    assert!(paths.contains(&"proj/.git".to_string()));
    assert!(!paths.contains(&"proj/.git/HEAD".to_string()));
    assert!(paths.contains(&"proj/src/main.rs".to_string()));
}

#[test]
fn test_stop_keyword_hit_is_logged_by_default() {
    let tree = TestTree::new();
    tree.add_file("proj/.git/HEAD", "");
    let (_stdout, stderr, success) =
        run_folder_scan(tree.path(), &[".", "-s", ".git", "-o", "-", "-q"]);
    assert!(success);
    assert!(stderr.contains("stop keyword hit"), "{}", stderr);
}

#[test]
fn test_log_level_can_silence_info() {
    let tree = TestTree::new();
    tree.add_file("proj/.git/HEAD", "");
    let (_stdout, stderr, success) = run_folder_scan(
        tree.path(),
        &[".", "-s", ".git", "-o", "-", "-q", "--log-level", "warn"],
    );
    assert!(success);
    assert!(!stderr.contains("stop keyword hit"), "{}", stderr);
}

#[test]
fn test_xlsx_format_writes_default_workbook() {
    let tree = sample_tree();
    let (_stdout, stderr, success) = run_folder_scan(tree.path(), &[".", "-f", "xlsx", "-q"]);
    assert!(success, "{}", stderr);

    let bytes = std::fs::read(tree.path().join("scan_results.xlsx"))
        .expect("default workbook should exist");
    assert!(bytes.starts_with(b"PK\x03\x04"));
    assert!(!tree.path().join("scan_results.txt").exists());
}

#[test]
fn test_json_format() {
    let tree = sample_tree();
    let out = tree.path().join("out.json");
    let out_arg = out.to_string_lossy().to_string();
    let (_stdout, _stderr, success) =
        run_folder_scan(tree.path(), &[".", "-f", "json", "-o", &out_arg, "-q"]);
    assert!(success);

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let items = value.as_array().unwrap();
    let top = items
        .iter()
        .find(|item| item["relative_path"] == "top.txt")
        .expect("top.txt in report");
    assert_eq!(top["type"], "File");
    assert_eq!(top["name"], "top.txt");
}

#[test]
fn test_timestamps_are_formatted() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "");
    let (stdout, _stderr, success) = run_folder_scan(tree.path(), &[".", "-o", "-", "-q"]);
    assert!(success);

    let line = stdout.lines().nth(1).unwrap();
    let fields: Vec<_> = line.split('@').collect();
    assert_eq!(fields.len(), 5);
    for ts in &fields[3..] {
        assert_eq!(ts.len(), 19, "unexpected timestamp {:?}", ts);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }
}

#[test]
fn test_unwritable_output_location_fails() {
    let tree = sample_tree();
    let (_stdout, stderr, success) =
        run_folder_scan(tree.path(), &[".", "-o", "missing-dir/out.txt"]);
    assert!(!success);
    assert!(stderr.contains("cannot write results"), "{}", stderr);
}
