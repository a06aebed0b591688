use assert_cmd::Command;

#[test]
fn one_shot_total() {
    let mut cmd = Command::cargo_bin("centavo").unwrap();
    cmd.args(&["--command", "/total"]).assert().success();
}

#[test]
fn one_shot_bad_amount_fails() {
    let mut cmd = Command::cargo_bin("centavo").unwrap();
    cmd.args(&["--command", "/add lunch $0"]).assert().failure();
}

#[test]
fn one_shot_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("centavo").unwrap();
    cmd.args(&["--command", "/frobnicate"]).assert().failure();
}
