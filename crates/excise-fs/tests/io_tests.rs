//! Tests for document I/O and output guards.

use assert_fs::TempDir;
use assert_fs::prelude::*;
use excise_fs::path::{default_output, ensure_absent, ensure_distinct};
use excise_fs::{Error, io};
use predicates::prelude::*;

#[test]
fn write_text_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let target = temp.child("out").child("nested").child("page.tsx.new");

    io::write_text(target.path(), "edited").unwrap();

    target.assert("edited");
}

#[test]
fn write_atomic_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let target = temp.child("page.tsx.new");

    io::write_text(target.path(), "content").unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "found temp files: {leftovers:?}");
}

#[test]
fn write_replaces_existing_output() {
    let temp = TempDir::new().unwrap();
    let target = temp.child("page.tsx.new");
    target.write_str("old").unwrap();

    io::write_text(target.path(), "new").unwrap();

    target.assert("new");
}

#[test]
fn read_preserves_multibyte_text() {
    let temp = TempDir::new().unwrap();
    let source = temp.child("page.tsx");
    source.write_str("用小嘉 AI，让客服团队更出色\n").unwrap();

    let text = io::read_text(source.path()).unwrap();

    assert_eq!(text, "用小嘉 AI，让客服团队更出色\n");
}

#[test]
fn read_missing_input_is_io_error() {
    let temp = TempDir::new().unwrap();

    let err = io::read_text(&temp.path().join("page.tsx")).unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn output_equal_to_input_is_refused() {
    let temp = TempDir::new().unwrap();
    let source = temp.child("page.tsx");
    source.write_str("x").unwrap();
    let dotted = temp.path().join(".").join("page.tsx");

    let err = ensure_distinct(source.path(), &dotted).unwrap_err();

    assert!(matches!(err, Error::OutputIsInput { .. }));
}

#[test]
fn default_output_is_distinct_from_input() {
    let temp = TempDir::new().unwrap();
    let source = temp.child("page.tsx");
    source.write_str("x").unwrap();

    let output = default_output(source.path());

    assert!(ensure_distinct(source.path(), &output).is_ok());
    assert!(predicate::str::ends_with("page.tsx.new").eval(&output.to_string_lossy()));
}

#[test]
fn ensure_absent_detects_existing_output() {
    let temp = TempDir::new().unwrap();
    let output = temp.child("page.tsx.new");
    assert!(ensure_absent(output.path()).is_ok());

    output.write_str("x").unwrap();

    assert!(matches!(
        ensure_absent(output.path()),
        Err(Error::OutputExists { .. })
    ));
}
