use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const MINT_ABI: &str = r#"[{"type":"function","name":"mint","inputs":[]}]"#;
const BURN_ABI: &str = r#"[{"type":"function","name":"burn","inputs":[]}]"#;

fn cmd() -> Command {
    Command::cargo_bin("bbtm-scripts").unwrap()
}

fn write_manual(dir: &Path, abi: &str) -> PathBuf {
    let path = dir.join("abi.js");
    fs::write(&path, format!("const contractABI = {};", abi)).unwrap();
    path
}

fn write_artifact(dir: &Path, abi: &str) -> PathBuf {
    let path = dir.join("BigBrotherTheMusical.json");
    fs::write(
        &path,
        format!(
            r#"{{"contractName": "BigBrotherTheMusical", "abi": {}, "bytecode": "0x6080"}}"#,
            abi
        ),
    )
    .unwrap();
    path
}

fn check_abi_args(manual: &Path, artifact: &Path) -> Vec<String> {
    vec![
        "check-abi".to_string(),
        "--manual".to_string(),
        manual.to_str().unwrap().to_string(),
        "--artifact".to_string(),
        artifact.to_str().unwrap().to_string(),
    ]
}

#[test]
fn identical_abis_report_success() {
    let tmp = TempDir::new().unwrap();
    let manual = write_manual(tmp.path(), MINT_ABI);
    let artifact = write_artifact(tmp.path(), MINT_ABI);

    cmd()
        .args(check_abi_args(&manual, &artifact))
        .assert()
        .success()
        .stdout(contains("ABIs are identical"));
}

#[test]
fn differing_abis_still_exit_zero_by_default() {
    let tmp = TempDir::new().unwrap();
    let manual = write_manual(tmp.path(), MINT_ABI);
    let artifact = write_artifact(tmp.path(), BURN_ABI);

    cmd()
        .args(check_abi_args(&manual, &artifact))
        .assert()
        .success()
        .stdout(contains("ABIs differ"))
        .stderr(contains("\"mint\"").and(contains("\"burn\"")));
}

#[test]
fn diff_is_colorized_unless_disabled() {
    let tmp = TempDir::new().unwrap();
    let manual = write_manual(tmp.path(), MINT_ABI);
    let artifact = write_artifact(tmp.path(), BURN_ABI);

    cmd()
        .args(check_abi_args(&manual, &artifact))
        .assert()
        .success()
        .stderr(contains("\u{1b}[31m").and(contains("\u{1b}[32m")));

    let mut args = check_abi_args(&manual, &artifact);
    args.push("--no-color".to_string());
    cmd()
        .args(args)
        .assert()
        .success()
        .stderr(contains("- ").and(contains("+ ")).and(contains("\u{1b}[").not()));
}

#[test]
fn key_order_inside_entries_does_not_count_as_drift() {
    let tmp = TempDir::new().unwrap();
    let manual = write_manual(tmp.path(), MINT_ABI);
    let artifact = write_artifact(
        tmp.path(),
        r#"[{"inputs":[],"name":"mint","type":"function"}]"#,
    );

    cmd()
        .args(check_abi_args(&manual, &artifact))
        .assert()
        .success()
        .stdout(contains("ABIs are identical"));
}

#[test]
fn strict_mode_fails_on_drift() {
    let tmp = TempDir::new().unwrap();
    let manual = write_manual(tmp.path(), MINT_ABI);
    let artifact = write_artifact(tmp.path(), BURN_ABI);

    let mut args = check_abi_args(&manual, &artifact);
    args.push("--strict".to_string());
    cmd().args(args).assert().failure();
}

#[test]
fn strict_mode_passes_when_identical() {
    let tmp = TempDir::new().unwrap();
    let manual = write_manual(tmp.path(), MINT_ABI);
    let artifact = write_artifact(tmp.path(), MINT_ABI);

    let mut args = check_abi_args(&manual, &artifact);
    args.push("--strict".to_string());
    cmd().args(args).assert().success();
}

#[test]
fn unreadable_inputs_are_reported_without_failing() {
    let tmp = TempDir::new().unwrap();
    let manual = tmp.path().join("missing-abi.js");
    let artifact = write_artifact(tmp.path(), MINT_ABI);

    cmd()
        .args(check_abi_args(&manual, &artifact))
        .assert()
        .success()
        .stderr(contains("Error while checking the ABIs"));
}

#[test]
fn strict_mode_fails_on_unreadable_inputs() {
    let tmp = TempDir::new().unwrap();
    let manual = tmp.path().join("missing-abi.js");
    let artifact = write_artifact(tmp.path(), MINT_ABI);

    let mut args = check_abi_args(&manual, &artifact);
    args.push("--strict".to_string());
    cmd().args(args).assert().failure();
}

#[test]
fn manual_source_without_any_array_is_reported_as_parse_error() {
    let tmp = TempDir::new().unwrap();
    let manual = tmp.path().join("abi.js");
    fs::write(&manual, "module.exports = {};").unwrap();
    let artifact = write_artifact(tmp.path(), MINT_ABI);

    cmd()
        .args(check_abi_args(&manual, &artifact))
        .assert()
        .success()
        .stderr(contains("error parsing input"));
}

#[test]
fn realistic_manual_abi_reconciles_through_the_cli() {
    // Constructor, event and view function the way the build emits them
    let abi = concat!(
        r#"[{"inputs":[{"internalType":"string","name":"baseURI","type":"string"},"#,
        r#"{"internalType":"address","name":"owner","type":"address"},"#,
        r#"{"internalType":"address","name":"creator","type":"address"}],"#,
        r#""stateMutability":"nonpayable","type":"constructor"},"#,
        r#"{"anonymous":false,"inputs":[{"indexed":true,"internalType":"address","name":"to","type":"address"},"#,
        r#"{"indexed":true,"internalType":"uint256","name":"tokenId","type":"uint256"}],"#,
        r#""name":"Transfer","type":"event"},"#,
        r#"{"inputs":[{"internalType":"uint256","name":"tokenId","type":"uint256"}],"#,
        r#""name":"tokenURI","outputs":[{"internalType":"string","name":"","type":"string"}],"#,
        r#""stateMutability":"view","type":"function"}]"#,
    );

    let tmp = TempDir::new().unwrap();
    let manual = write_manual(tmp.path(), abi);
    let artifact = write_artifact(tmp.path(), abi);

    cmd()
        .args(check_abi_args(&manual, &artifact))
        .assert()
        .success()
        .stdout(contains("ABIs are identical"));
}
