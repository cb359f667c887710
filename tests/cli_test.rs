//! Tests for the rd2md binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const SAMPLE_TREE: &str = r#"{"type": "Document", "children": [
    {"type": "Headline", "level": 1, "children": [
        {"type": "StringElement", "text": "RD"}
    ]},
    {"type": "EnumList", "children": [
        {"type": "EnumListItem", "children": [
            {"type": "TextBlock", "children": [{"type": "StringElement", "text": "foo"}]}
        ]},
        {"type": "EnumListItem", "children": [
            {"type": "TextBlock", "children": [
                {"type": "Reference", "label": {"rd": {"label": "RD"}},
                 "children": [{"type": "StringElement", "text": "RD"}]},
                {"type": "StringElement", "text": " and "},
                {"type": "Reference", "label": {"rd": {"label": "Setup", "filename": "other.rd"}},
                 "children": [{"type": "StringElement", "text": "Setup"}]}
            ]}
        ]}
    ]}
]}"#;

fn rd2md(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rd2md"))
        .args(args)
        .output()
        .expect("failed to run rd2md")
}

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("failed to write fixture");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_renders_to_stdout_trimmed() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "doc.json", SAMPLE_TREE);

    let output = rd2md(&[&input]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "# RD\n\n1. foo\n2. [RD](#label-0) and [Setup](other.rd)\n"
    );
}

#[test]
fn test_external_anchors_and_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "doc.json", SAMPLE_TREE);
    let external = write_fixture(&dir, "ext.json", r#"{"other.rd": {"Setup": "label-9"}}"#);
    let out_path = dir.path().join("doc.md");
    let out = out_path.to_string_lossy().into_owned();

    let output = rd2md(&[
        &input,
        "--external",
        &external,
        "--anchors",
        "--anchor-prefix",
        "sec-",
        "-o",
        &out,
    ]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(Path::new(&out).exists());
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "# <a id=\"sec-0\"></a>RD\n\n1. foo\n2. [RD](#sec-0) and [Setup](other.rd#label-9)\n"
    );
}

#[test]
fn test_malformed_tree_reports_error() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(
        &dir,
        "bad.json",
        r#"{"type": "Document", "children": [{"type": "Headline", "level": 9}]}"#,
    );

    let output = rd2md(&[&input]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: Malformed tree"), "stderr: {stderr}");
}

#[test]
fn test_invalid_json_reports_error() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "broken.json", "{\"type\": ");

    let output = rd2md(&[&input]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("error: JSON error"));
}

#[test]
fn test_missing_input_file() {
    let output = rd2md(&["/nonexistent/doc.json"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("error: I/O error"));
}
