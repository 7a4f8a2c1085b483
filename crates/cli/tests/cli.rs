use assert_cmd::Command;

#[test]
fn missing_cli_dir_exits_with_status_one() {
    let root = tempfile::tempdir().unwrap();

    let output = Command::cargo_bin("crossbuild")
        .unwrap()
        .current_dir(root.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("3 of 3 build task(s) failed"), "stderr: {}", stderr);
    assert!(stderr.contains("does not exist"), "stderr: {}", stderr);
}

#[test]
fn version_flag_exits_cleanly() {
    Command::cargo_bin("crossbuild")
        .unwrap()
        .arg("--version")
        .assert()
        .success();
}

#[test]
fn rejects_unexpected_arguments() {
    Command::cargo_bin("crossbuild")
        .unwrap()
        .arg("extra")
        .assert()
        .failure();
}
