#[macro_use] extern crate pretty_assertions;

use std::process::{Command, Output};

fn spgen_crystal(config: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_spgen-crystal"))
        .arg("-c").arg(config)
        .arg("-s").arg("tests/resources/spacegroups.yaml")
        .output()
        .unwrap()
}

#[test]
fn writes_json_to_stdout() {
    let output = spgen_crystal("tests/resources/nacl.yaml");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let symbols: Vec<String> = serde_json::from_value(value["symbols"].clone()).unwrap();
    assert_eq!(symbols, vec!["Na", "Na", "Na", "Na", "Cl", "Cl", "Cl", "Cl"]);
    assert_eq!(value["spacegroup"], serde_json::json!({"number": 225, "setting": 1}));
    assert_eq!(value["kinds"], serde_json::json!([0, 0, 0, 0, 1, 1, 1, 1]));
}

#[test]
fn reports_errors() {
    let output = spgen_crystal("tests/resources/nonorthogonal.yaml");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not orthogonal"));

    let output = spgen_crystal("tests/resources/does-not-exist.yaml");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
