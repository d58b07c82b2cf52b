// tests/feedback.rs

use std::fs;
use std::path::PathBuf;

use datadash::feedback;

fn tmp_file(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("datadash_feedback_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p.push("feedback.txt");
    p
}

#[test]
fn each_submission_appends_one_line() {
    let path = tmp_file("append");

    feedback::append(&path, "Great app!").unwrap();
    feedback::append(&path, "Could use dark mode.").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["Great app!", "Could use dark mode."]);
}

#[test]
fn multiline_comments_are_flattened() {
    let path = tmp_file("flatten");

    feedback::append(&path, "line one\r\nline two\nline three").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("line one"));
    assert!(lines[0].contains("line three"));
}

#[test]
fn file_is_created_on_first_use() {
    let path = tmp_file("create");
    assert!(!path.exists());

    feedback::append(&path, "first").unwrap();
    assert!(path.exists());
}
