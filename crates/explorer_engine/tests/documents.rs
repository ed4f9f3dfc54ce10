use std::fs;

use explorer_engine::{DocumentError, DocumentStore, FsDocumentStore};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn save_then_load_round_trips_utf8() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("note.txt");
    let store = FsDocumentStore;

    let written = store.save(&path, "Кіт спить.\nКіт їсть.\n").unwrap();
    let loaded = store.load(&path).unwrap();

    assert_eq!(loaded.text, "Кіт спить.\nКіт їсть.\n");
    assert_eq!(loaded.encoding_label, "UTF-8");
    assert_eq!(loaded.byte_len, written);
    assert_eq!(loaded.path, path);
}

#[test]
fn legacy_encoded_file_is_saved_back_as_utf8() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("legacy.txt");
    let source = "Добрий день, як справи? Сьогодні гарна погода, і ми йдемо гуляти до парку.";
    let (bytes, _, _) = encoding_rs::WINDOWS_1251.encode(source);
    fs::write(&path, &bytes).unwrap();
    let store = FsDocumentStore;

    let loaded = store.load(&path).unwrap();
    assert_eq!(loaded.text, source);
    assert_eq!(loaded.byte_len, bytes.len() as u64);

    store.save(&path, &loaded.text).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), source);
}

#[test]
fn missing_file_reports_read_error_with_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.txt");

    let err = FsDocumentStore.load(&path).unwrap_err();
    match &err {
        DocumentError::Read { path: failed, .. } => assert_eq!(failed, &path),
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().contains("missing.txt"));
}
