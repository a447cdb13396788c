mod common;

use common::{fieldlens, fixture};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_classify_prints_label_and_confidence() {
    fieldlens()
        .arg("classify")
        .arg(fixture("classify_result.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Invoices"))
        .stdout(predicate::str::contains("0.92"));
}

#[test]
fn test_classify_without_label_fails() {
    fieldlens()
        .arg("classify")
        .arg(fixture("invoice_result.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Could not determine document type",
        ));
}

#[test]
fn test_classify_route_with_mapping() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = temp.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
        [analyzers]
        "Invoices" = "analyzer_invoices"
        "#,
    )
    .expect("Failed to write config");

    let mut cmd = assert_cmd::Command::cargo_bin("fieldlens").expect("fieldlens binary builds");
    cmd.arg("--config")
        .arg(&config_path)
        .arg("classify")
        .arg(fixture("classify_result.json"))
        .arg("--route")
        .assert()
        .success()
        .stdout(predicate::str::contains("Analyzer: analyzer_invoices"));
}

#[test]
fn test_classify_route_unmapped_label_fails() {
    fieldlens()
        .arg("classify")
        .arg(fixture("classify_result.json"))
        .arg("--route")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No analyzer mapped"));
}
