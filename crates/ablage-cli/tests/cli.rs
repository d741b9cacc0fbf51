//! Integration tests for the ablage binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn ablage() -> Command {
    Command::cargo_bin("ablage").expect("binary builds")
}

#[test]
fn analyze_emits_json_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("brief.txt");
    std::fs::write(
        &input,
        "Stadtwerke Leipzig GmbH\n\nRechnung Nr. 7\nRechnungsdatum: 15.03.2024\nGesamtbetrag: 119,00 €\n",
    )
    .unwrap();

    ablage()
        .arg("analyze")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""datum":"2024-03-15""#))
        .stdout(predicate::str::contains(r#""typ":"rechnung""#))
        .stdout(predicate::str::contains("Stadtwerke Leipzig GmbH"));
}

#[test]
fn analyze_reads_stdin() {
    ablage()
        .arg("analyze")
        .arg("-")
        .write_stdin("Vertrag vom 1. Februar 2023\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""datum":"2023-02-01""#))
        .stdout(predicate::str::contains(r#""typ":"vertrag""#));
}

#[test]
fn analyze_missing_file_fails() {
    ablage()
        .arg("analyze")
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn batch_writes_csv() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "Rechnungsdatum: 15.03.2024\n").unwrap();
    std::fs::write(dir.path().join("b.txt"), "Kontoauszug 3/2024\n").unwrap();

    ablage()
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("datei,typ,absender,datum,betrag,kurzfassung"))
        .stdout(predicate::str::contains("2024-03-15"));
}

#[test]
fn config_init_and_show() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ablage.json");

    ablage()
        .arg("config")
        .arg("init")
        .arg(&path)
        .assert()
        .success();

    ablage()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"birth_cue\": -20"));
}
