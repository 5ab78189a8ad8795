use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const DATA: &str = "#SEED: 0.4271\n\
ROUTE,0.0,0.0,0.0,40.0\n\
SAT0,0.0,-10.0,1.0\n\
SAT1,0.0,12.0,300.0\n\
SAT2,0.0,30.0,300.0\n";

fn hops() -> Command {
    Command::cargo_bin("satellite-hops").expect("satellite-hops bin")
}

#[test]
fn prints_start_and_route() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = dir.path().join("data.csv");
    fs::write(&data, DATA).unwrap();

    hops()
        .arg(&data)
        .assert()
        .success()
        .stdout("0.00000, 0.00000\nSatellite hops: START,SAT1,SAT2,END\n");
}

#[test]
fn repeated_runs_are_identical() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = dir.path().join("data.csv");
    fs::write(&data, DATA).unwrap();

    let first = hops().arg(&data).output().expect("run");
    let second = hops().arg(&data).output().expect("run");
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn usage_errors_exit_with_one() {
    hops().assert().code(1).stderr(predicate::str::contains("Usage"));
    hops()
        .args(["a.csv", "b.csv"])
        .assert()
        .code(1);
}

#[test]
fn missing_file_exits_with_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    hops()
        .arg(dir.path().join("absent.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("data file not found"));
}

#[test]
fn malformed_row_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = dir.path().join("short.csv");
    fs::write(&data, "#SEED: 1\nROUTE,1.0,2.0\n").unwrap();

    hops()
        .arg(&data)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("route row needs 5 fields, found 3"));
}

#[test]
fn unreachable_end_is_reported_distinctly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = dir.path().join("isolated.csv");
    fs::write(&data, "#SEED: 1\nROUTE,0.0,0.0,0.0,90.0\nSAT0,0.0,180.0,50\n").unwrap();

    hops()
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Satellite hops: START\n"))
        .stderr(predicate::str::contains("No complete route found"));
}

#[test]
fn json_report_and_flag_overrides() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = dir.path().join("data.csv");
    let report = dir.path().join("out/report.json");
    fs::write(&data, DATA).unwrap();

    hops()
        .arg(&data)
        .args(["--strategy", "backtracking", "--altitude-model", "surface"])
        .arg("--json")
        .arg(&report)
        .assert()
        .success();

    let contents = fs::read_to_string(&report).expect("report written");
    let value: serde_json::Value = serde_json::from_str(&contents).expect("valid json");
    assert_eq!(value["seed"], 0.4271);
    assert_eq!(value["success"], true);
    assert_eq!(value["completion"], "line_of_sight");
    assert_eq!(value["relay_count"], 3);
    let ids: Vec<_> = value["hops"]
        .as_array()
        .unwrap()
        .iter()
        .map(|hop| hop["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["START", "SAT1", "SAT2", "END"]);
    assert_eq!(value["hops"][0]["role"], "start");
}

#[test]
fn config_file_is_applied() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = dir.path().join("data.csv");
    let config = dir.path().join("route.toml");
    fs::write(&data, DATA).unwrap();
    fs::write(&config, "relay_capacity = 2\n").unwrap();

    hops()
        .arg(&data)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("relay capacity of 2 exceeded"));
}
