use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_payload(dir: &Path, load: f64) -> std::path::PathBuf {
    let payload = json!({
        "load": load,
        "fuels": {
            "gas(euro/MWh)": 13.4,
            "kerosine(euro/MWh)": 50.8,
            "co2(euro/ton)": 20,
            "wind(%)": 60
        },
        "powerplants": [
            { "name": "gasfiredbig1", "type": "gasfired", "efficiency": 0.53,
              "pmin": 100, "pmax": 460 },
            { "name": "gasfiredbig2", "type": "gasfired", "efficiency": 0.53,
              "pmin": 100, "pmax": 460 },
            { "name": "gasfiredsomewhatsmaller", "type": "gasfired", "efficiency": 0.37,
              "pmin": 40, "pmax": 210 },
            { "name": "tj1", "type": "turbojet", "efficiency": 0.3,
              "pmin": 0, "pmax": 16 },
            { "name": "windpark1", "type": "windturbine", "efficiency": 1,
              "pmin": 0, "pmax": 150 },
            { "name": "windpark2", "type": "windturbine", "efficiency": 1,
              "pmin": 0, "pmax": 36 }
        ]
    });
    let path = dir.join("payload.json");
    fs::write(&path, serde_json::to_string_pretty(&payload).unwrap()).unwrap();
    path
}

#[test]
fn plan_writes_json_to_stdout() {
    let tmp = tempdir().unwrap();
    let payload = write_payload(tmp.path(), 480.0);

    let mut cmd = Command::cargo_bin("mop-cli").unwrap();
    let assert = cmd
        .args(["plan", payload.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("windpark1"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let plan: Vec<Value> = serde_json::from_str(&stdout).expect("stdout is valid JSON");

    assert_eq!(plan.len(), 6);
    // request order preserved
    assert_eq!(plan[0]["name"], "gasfiredbig1");
    assert_eq!(plan[4]["name"], "windpark1");
    assert_eq!(plan[4]["p"], 90.0);
    assert_eq!(plan[5]["p"], 21.6);
    assert_eq!(plan[0]["p"], 368.4);

    let total: f64 = plan.iter().map(|e| e["p"].as_f64().unwrap()).sum();
    assert!((total - 480.0).abs() <= 0.1);
}

#[test]
fn plan_writes_to_output_file() {
    let tmp = tempdir().unwrap();
    let payload = write_payload(tmp.path(), 480.0);
    let out = tmp.path().join("plan.json");

    let mut cmd = Command::cargo_bin("mop-cli").unwrap();
    cmd.args([
        "plan",
        payload.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ])
    .assert()
    .success();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("gasfiredbig1"));
}

#[test]
fn infeasible_load_fails_with_message() {
    let tmp = tempdir().unwrap();
    let payload = write_payload(tmp.path(), 5000.0);

    let mut cmd = Command::cargo_bin("mop-cli").unwrap();
    cmd.args(["plan", payload.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("infeasible"));
}

#[test]
fn invalid_payload_fails_with_message() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("payload.json");
    fs::write(&path, "{ not json").unwrap();

    let mut cmd = Command::cargo_bin("mop-cli").unwrap();
    cmd.args(["plan", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn completions_generate() {
    let mut cmd = Command::cargo_bin("mop-cli").unwrap();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mop-cli"));
}
