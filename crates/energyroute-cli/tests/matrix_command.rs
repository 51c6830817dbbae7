use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn matrix_text_lists_weights_and_energy() {
    cargo_bin_cmd!("energyroute")
        .env("RUST_LOG", "error")
        .args(["--nodes", "3", "matrix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("W[1][1] = 0.00"))
        .stdout(predicate::str::contains("Node 2: "));
}

#[test]
fn matrix_json_is_square_with_zero_diagonal() {
    let output = cargo_bin_cmd!("energyroute")
        .env("RUST_LOG", "error")
        .args(["--nodes", "4", "--format", "json", "matrix"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["node_count"], 4);
    let rows = value["weights"].as_array().expect("weights array");
    assert_eq!(rows.len(), 4);
    for (i, row) in rows.iter().enumerate() {
        let row = row.as_array().expect("row array");
        assert_eq!(row.len(), 4);
        assert_eq!(row[i].as_f64(), Some(0.0));
        for value in row {
            let weight = value.as_f64().unwrap();
            assert!((0.0..10.0).contains(&weight));
        }
    }
    for energy in value["energy"].as_array().unwrap() {
        assert!((15..100).contains(&energy.as_i64().unwrap()));
    }
}

#[test]
fn empty_energy_range_is_rejected() {
    cargo_bin_cmd!("energyroute")
        .env("RUST_LOG", "error")
        .args(["--energy-min", "50", "--energy-max", "50", "matrix"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("energy range [50, 50) is empty"));
}
