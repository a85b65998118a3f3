//! Integration tests: full runs over input files on disk.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use assetmix::RebalanceError;
use assetmix_rebalancer::config::{Config, OutputFormat};
use assetmix_rebalancer::error::Error;
use assetmix_rebalancer::{Contribution, run};

const ALLOCATION: &str = r#"{
    "stocks": {"proportion": 0.6, "funds": ["A"]},
    "bonds": {"proportion": 0.4, "funds": ["B"]}
}"#;

fn write_inputs(dir: &Path, allocation: &str, price: &str, quantity: &str) {
    fs::write(dir.join("allocation.json"), allocation).unwrap();
    fs::write(dir.join("price.json"), price).unwrap();
    fs::write(dir.join("quantity.json"), quantity).unwrap();
}

fn config_for(dir: &Path) -> Config {
    let mut config = Config::default();
    config.inputs.dir = dir.to_path_buf();
    config
}

// ============================================================================
// Successful runs
// ============================================================================

#[test]
fn sixty_forty_with_contribution() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path(), ALLOCATION, r#"{"A": 10, "B": 20}"#, r#"{"A": 5, "B": 5}"#);

    let report = run(&config_for(dir.path()), Contribution::Fixed(50.0)).unwrap();
    assert_eq!(
        report,
        "stocks\n\
         dollars delta: 70.0\n\
         shares to buy: 7.0 of A\n\
         bonds\n\
         dollars delta: -20.0\n\
         shares to buy: -1.0 of B\n"
    );
}

#[test]
fn report_follows_file_order() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(
        dir.path(),
        r#"{
            "zeta": {"proportion": 0.5, "funds": ["Z2", "Z1"]},
            "alpha": {"proportion": 0.5, "funds": ["A1"]}
        }"#,
        r#"{"Z1": 1, "A1": 1, "Z2": 1}"#,
        r#"{"Z1": 10, "A1": 10, "Z2": 10}"#,
    );

    let report = run(&config_for(dir.path()), Contribution::Fixed(0.0)).unwrap();
    let headers: Vec<&str> = report
        .lines()
        .filter(|l| !l.starts_with("dollars delta") && !l.starts_with("shares to buy"))
        .collect();
    assert_eq!(headers, vec!["zeta", "alpha"]);

    let funds: Vec<&str> = report
        .lines()
        .filter_map(|l| l.rsplit_once(" of ").map(|(_, t)| t))
        .collect();
    assert_eq!(funds, vec!["Z2", "Z1", "A1"]);
}

#[test]
fn json_report_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = dir.path().join("inputs");
    fs::create_dir(&inputs).unwrap();
    fs::write(inputs.join("targets.json"), ALLOCATION).unwrap();
    fs::write(inputs.join("price.json"), r#"{"A": 10, "B": 20}"#).unwrap();
    fs::write(inputs.join("quantity.json"), r#"{"A": 5, "B": 5}"#).unwrap();

    let config_path = dir.path().join("rebalancer.toml");
    fs::write(
        &config_path,
        format!(
            "[inputs]\ndir = {:?}\nallocation = \"targets.json\"\n\n[output]\nformat = \"json\"\n",
            inputs.display().to_string()
        ),
    )
    .unwrap();

    let config = Config::load(&config_path).unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);

    let report = run(&config, Contribution::Fixed(50.0)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(value["contribution"], 50.0);
    assert_eq!(value["market_value"], 150.0);
    assert_eq!(value["classes"][0]["name"], "stocks");
    assert_eq!(value["classes"][0]["trades"][0]["shares_to_buy"], 7.0);
}

// ============================================================================
// Binary with a piped contribution
// ============================================================================

/// Run the `rebalancer` binary in `dir`, feeding `stdin` to it.
fn run_binary(dir: &Path, stdin: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rebalancer"))
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn piped_contribution_prints_report() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path(), ALLOCATION, r#"{"A": 10, "B": 20}"#, r#"{"A": 5, "B": 5}"#);

    let output = run_binary(dir.path(), "50\n");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "stocks\n\
         dollars delta: 70.0\n\
         shares to buy: 7.0 of A\n\
         bonds\n\
         dollars delta: -20.0\n\
         shares to buy: -1.0 of B\n"
    );
}

#[test]
fn piped_garbage_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path(), ALLOCATION, r#"{"A": 10, "B": 20}"#, r#"{"A": 5, "B": 5}"#);

    let output = run_binary(dir.path(), "fifty\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid contribution"));
}

// ============================================================================
// Fatal errors
// ============================================================================

#[test]
fn missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("allocation.json"), ALLOCATION).unwrap();

    let err = run(&config_for(dir.path()), Contribution::Fixed(0.0)).unwrap_err();
    match err {
        Error::InputRead { path, .. } => assert!(path.ends_with("price.json")),
        other => panic!("expected InputRead, got {other}"),
    }
}

#[test]
fn malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path(), ALLOCATION, "{\"A\": 10,", r#"{"A": 5}"#);

    let err = run(&config_for(dir.path()), Contribution::Fixed(0.0)).unwrap_err();
    assert!(matches!(err, Error::InputParse { .. }));
}

#[test]
fn key_mismatch_fails_before_prompt() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path(), ALLOCATION, r#"{"A": 10, "B": 20}"#, r#"{"B": 5, "A": 5}"#);

    // Prompt is never reached: the mismatch is found while loading.
    let err = run(&config_for(dir.path()), Contribution::Prompt).unwrap_err();
    assert!(matches!(
        err,
        Error::Rebalance(RebalanceError::KeyMismatch { .. })
    ));
}

#[test]
fn zero_price_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path(), ALLOCATION, r#"{"A": 0, "B": 20}"#, r#"{"A": 5, "B": 5}"#);

    let err = run(&config_for(dir.path()), Contribution::Fixed(10.0)).unwrap_err();
    assert_eq!(err.to_string(), "price of A is zero; cannot compute shares to buy");
}

#[test]
fn unknown_fund_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path(), ALLOCATION, r#"{"A": 10}"#, r#"{"A": 5}"#);

    let err = run(&config_for(dir.path()), Contribution::Fixed(0.0)).unwrap_err();
    assert!(matches!(
        err,
        Error::Rebalance(RebalanceError::UnknownTicker { .. })
    ));
}
