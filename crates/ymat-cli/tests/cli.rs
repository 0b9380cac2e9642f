use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn repo_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join(relative)
}

#[test]
fn ymat_single_line_dense_report() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("line.txt");
    fs::write(&input, "1 2 1.0 2.0 0.5\n").unwrap();

    let expected = "2*2 Matrix\n\
        \x20     0.200000-      0.150000j      -0.200000+      0.400000j \n\
        \x20    -0.200000+      0.400000j       0.200000-      0.150000j \n";
    Command::cargo_bin("ymat")
        .unwrap()
        .arg(input.to_str().unwrap())
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn ymat_missing_file_exits_cleanly() {
    let tmp = tempdir().unwrap();
    Command::cargo_bin("ymat")
        .unwrap()
        .arg(tmp.path().join("missing.txt").to_str().unwrap())
        .assert()
        .code(0)
        .stdout("File Not Found\n");
}

#[test]
fn ymat_no_arguments_is_file_not_found() {
    Command::cargo_bin("ymat")
        .unwrap()
        .assert()
        .success()
        .stdout("File Not Found\n");
}

#[test]
fn ymat_path_with_spaces_is_rejoined() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("grid lines.txt");
    fs::write(&input, "1 2 1 1 0\n2 3 1 1 0\n").unwrap();
    let dir = tmp.path().to_str().unwrap();

    Command::cargo_bin("ymat")
        .unwrap()
        .args([format!("{dir}/grid"), "lines.txt".to_string()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("3*3 Matrix\n"));
}

#[test]
fn ymat_sample_case_renders_all_rows() {
    let input = repo_path("test_data/lines/four_bus.txt");
    let output = Command::cargo_bin("ymat")
        .unwrap()
        .arg(input.to_str().unwrap())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "4*4 Matrix");
    assert_eq!(lines.len(), 5);
    assert!(lines[1..].iter().all(|row| row.matches('j').count() == 4));
}

#[test]
fn ymat_json_format() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("line.txt");
    fs::write(&input, "1 2 1 1 0\n").unwrap();

    Command::cargo_bin("ymat")
        .unwrap()
        .args(["--format", "json", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dimension\": 2"))
        .stdout(predicate::str::contains("\"node2\": 2"));
}

#[test]
fn ymat_config_file_sets_format() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("line.txt");
    let config = tmp.path().join("ymat.toml");
    fs::write(&input, "1 2 1 1 0\n").unwrap();
    fs::write(&config, "[report]\nformat = \"sparse\"\nprecision = 1\n").unwrap();

    Command::cargo_bin("ymat")
        .unwrap()
        .args(["--config", config.to_str().unwrap(), input.to_str().unwrap()])
        .assert()
        .success()
        .stdout("2*2 Matrix\n1 1 0.5 -0.5\n1 2 -0.5 0.5\n2 2 0.5 -0.5\n");
}

#[test]
fn ymat_bad_config_fails() {
    let tmp = tempdir().unwrap();
    let config = tmp.path().join("ymat.toml");
    fs::write(&config, "[report\n").unwrap();

    Command::cargo_bin("ymat")
        .unwrap()
        .args(["--config", config.to_str().unwrap(), "whatever.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parsing config file"));
}

#[test]
fn ymat_logs_stay_off_stdout() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("line.txt");
    fs::write(&input, "1 2 1 1 0\n2 3 0 0 0\n").unwrap();

    Command::cargo_bin("ymat")
        .unwrap()
        .args(["--log-level", "debug", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2*2 Matrix\n"))
        .stderr(predicate::str::contains("skipping line"));
}

#[test]
fn ymat_binary_garbage_after_records_still_renders() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("line.bin");
    fs::write(&input, b"1 2 1 1 0\n\xff\xfe\x00 3\n").unwrap();

    Command::cargo_bin("ymat")
        .unwrap()
        .arg(input.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2*2 Matrix\n"));
}
