use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn text_explorer(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("text_explorer").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn counts_unique_words_in_a_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cat.txt"), "Кіт спить. Кіт їсть.").unwrap();

    text_explorer(&temp)
        .args(["cat.txt", "--method", "unique"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total number of unique words: 3"))
        .stdout(predicate::str::contains("кіт: 2\nспить: 1\nїсть: 1"))
        .stderr(predicate::str::contains("Done: Count of unique words"));

    let log = fs::read_to_string(temp.path().join("text_analysis_log.txt")).unwrap();
    assert!(log.contains("Application started."));
    assert!(log.contains("Opened file: cat.txt"));
    assert!(log.contains("Performed operation: UniqueWordCounter"));
    assert!(log.contains("Application closing."));
}

#[test]
fn transliterates_stdin() {
    let temp = TempDir::new().unwrap();

    text_explorer(&temp)
        .args(["-m", "transliterate", "--log", "off"])
        .write_stdin("hello world")
        .assert()
        .success()
        .stdout("Transliterated text:\nhello world\n");
}

#[test]
fn empty_input_gets_a_defined_frequency_report() {
    let temp = TempDir::new().unwrap();

    text_explorer(&temp)
        .args(["-m", "frequency", "--log", "off"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("Relative frequency of word forms in the text:\nNo words found.\n");
}

#[test]
fn audit_log_is_appended_across_runs() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("t.txt"), "тест тест тест").unwrap();

    for _ in 0..2 {
        text_explorer(&temp)
            .args(["t.txt", "-m", "frequency"])
            .assert()
            .success()
            .stdout(predicate::str::contains("тест: 100.00%"));
    }

    let log = fs::read_to_string(temp.path().join("text_analysis_log.txt")).unwrap();
    assert_eq!(log.matches("Application started.").count(), 2);
}

#[test]
fn remembers_last_document_and_method() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("doc.txt"), "сіль").unwrap();

    text_explorer(&temp)
        .args(["doc.txt", "-m", "transliterate", "--log", "off"])
        .assert()
        .success();
    assert!(temp.path().join(".text_explorer.ron").exists());

    text_explorer(&temp)
        .args(["--log", "off"])
        .assert()
        .success()
        .stdout("Transliterated text:\nsil'\n");
}

#[test]
fn dash_reads_stdin_instead_of_the_remembered_document() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("doc.txt"), "сіль").unwrap();

    text_explorer(&temp)
        .args(["doc.txt", "-m", "unique", "--log", "off"])
        .assert()
        .success();

    text_explorer(&temp)
        .args(["-", "-m", "transliterate", "--log", "off"])
        .write_stdin("Київ")
        .assert()
        .success()
        .stdout("Transliterated text:\nKyjiv\n");

    text_explorer(&temp)
        .args(["-m", "unique", "--log", "off"])
        .write_stdin("ignored")
        .assert()
        .success()
        .stdout(predicate::str::contains("сіль: 1"))
        .stderr(predicate::str::contains("Using last document: doc.txt"));
}

#[test]
fn no_remember_leaves_settings_alone() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("doc.txt"), "a").unwrap();

    text_explorer(&temp)
        .args(["doc.txt", "-m", "unique", "--log", "off", "--no-remember"])
        .assert()
        .success();
    assert!(!temp.path().join(".text_explorer.ron").exists());
}

#[test]
fn missing_method_is_an_error() {
    let temp = TempDir::new().unwrap();

    text_explorer(&temp)
        .args(["--log", "off"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no analysis method given"));
}

#[test]
fn missing_file_is_an_error_and_logged() {
    let temp = TempDir::new().unwrap();

    text_explorer(&temp)
        .args(["missing.txt", "-m", "unique"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));

    let log = fs::read_to_string(temp.path().join("text_analysis_log.txt")).unwrap();
    assert!(log.contains("I/O failure on missing.txt"));
    assert!(log.contains("Application closing."));
    assert!(!temp.path().join(".text_explorer.ron").exists());
}

#[test]
fn save_as_writes_a_copy_of_the_document() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("doc.txt"), "Добрий день").unwrap();

    text_explorer(&temp)
        .args([
            "doc.txt",
            "-m",
            "unique",
            "--log",
            "off",
            "--save-as",
            "out/copy.txt",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved"));

    let saved = fs::read_to_string(temp.path().join("out").join("copy.txt")).unwrap();
    assert_eq!(saved, "Добрий день");
}
