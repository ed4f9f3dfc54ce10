use std::fs;

use explorer_engine::{ensure_dir, write_atomically, AtomicFileWriter, PersistError};
use tempfile::TempDir;

#[test]
fn creates_missing_target_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_and_is_atomic() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("doc.txt", "hello").unwrap();
    assert_eq!(first.file_name().unwrap(), "doc.txt");
    assert_eq!(fs::read_to_string(&first).unwrap(), "hello");

    // Replace existing
    let second = writer.write("doc.txt", "world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write("doc.txt", "data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("doc.txt").exists());
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "x");
}

#[test]
fn write_atomically_creates_parent_dirs_and_counts_bytes() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("nested").join("кіт.txt");

    let written = write_atomically(&target, "кіт").unwrap();

    assert_eq!(written, "кіт".len() as u64);
    assert_eq!(fs::read_to_string(&target).unwrap(), "кіт");
}

#[test]
fn write_atomically_rejects_directory_like_paths() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("..");

    let result = write_atomically(&target, "data");
    assert!(matches!(result, Err(PersistError::NotAFile(_))));
}

#[test]
fn failed_replace_keeps_the_existing_document() {
    let temp = TempDir::new().unwrap();
    let doc = temp.path().join("doc.txt");
    fs::write(&doc, "original").unwrap();
    let blocker = temp.path().join("taken");
    fs::create_dir(&blocker).unwrap();
    fs::write(blocker.join("inner.txt"), "x").unwrap();

    let writer = AtomicFileWriter::new(temp.path().to_path_buf());
    writer.write("doc.txt", "replacement").unwrap();
    assert_eq!(fs::read_to_string(&doc).unwrap(), "replacement");

    let result = writer.write("taken", "data");
    assert!(matches!(result, Err(PersistError::Io(_))));
    assert!(blocker.is_dir());
    assert_eq!(fs::read_to_string(blocker.join("inner.txt")).unwrap(), "x");
    assert_eq!(fs::read_to_string(&doc).unwrap(), "replacement");
    let leftovers = fs::read_dir(temp.path()).unwrap().count();
    assert_eq!(leftovers, 2);
}
