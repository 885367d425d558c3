use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn styles_lists_builtin_roles() {
    let dir = tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("quire");
    cmd.current_dir(dir.path()).arg("styles");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("H1-font"))
        .stdout(predicate::str::contains("Helvetica 18 bold #000000"))
        .stdout(predicate::str::contains("table-alternate-background"))
        .stdout(predicate::str::contains("Highlight: friendly at 10"));
}

#[test]
fn config_file_overrides_styles() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("print.toml");
    fs::write(
        &config_path,
        r##"[styles.fonts.H1-font]
family = "Times"
size = 20.0
style = ["bold"]
color = "#000000"
"##,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("quire");
    cmd.current_dir(dir.path())
        .arg("styles")
        .arg("--config")
        .arg(config_path.as_os_str());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Times 20 bold #000000"));
}

#[test]
fn quire_toml_in_working_directory_is_picked_up() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("quire.toml"), "[highlight]\nstyle = \"bw\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("quire");
    cmd.current_dir(dir.path()).arg("styles");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Highlight: bw at 10"));
}

#[test]
fn extra_args_override_config_keys() {
    let dir = tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("quire");
    cmd.current_dir(dir.path())
        .arg("styles")
        .arg("--extra-diagram.scale")
        .arg("3");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("at scale 3,"));
}

#[test]
fn invalid_config_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "text\n").unwrap();

    let mut cmd = cargo_bin_cmd!("quire");
    cmd.current_dir(dir.path())
        .arg("inspect")
        .arg(&input)
        .arg("--extra-highlight.style")
        .arg("neon");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown highlight style 'neon'"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("quire");
    cmd.current_dir(dir.path())
        .arg("styles")
        .arg("--config")
        .arg(dir.path().join("absent.toml"));
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"));
}
