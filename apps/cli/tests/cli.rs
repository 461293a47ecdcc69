use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

fn bemkit() -> Command {
    Command::cargo_bin("bemkit").unwrap()
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn modal(dir: &TempDir) -> PathBuf {
    write(
        dir.path(),
        "modal.json",
        r#"{
            "block": "modal",
            "modifierFormat": "key-value",
            "modifiers": { "size": ["sm", "lg"], "type": ["alert", "confirm"] },
            "elements": { "footer": { "modifiers": { "align": ["start", "end"] } } }
        }"#,
    )
}

#[test]
fn resolves_the_block() {
    let dir = tempdir().unwrap();
    let definition = modal(&dir);

    bemkit()
        .arg("resolve")
        .arg("--definition")
        .arg(&definition)
        .args(["--set", "size=sm", "--set", "type=alert"])
        .assert()
        .success()
        .stdout("modal modal--size-sm modal--type-alert\n");
}

#[test]
fn resolves_an_element_with_extras() {
    let dir = tempdir().unwrap();
    let definition = modal(&dir);

    bemkit()
        .arg("resolve")
        .arg("-d")
        .arg(&definition)
        .args(["-e", "footer", "-s", "align=end", "-x", "sticky", "-x", "shadow"])
        .assert()
        .success()
        .stdout("modal__footer modal__footer--end sticky shadow\n");
}

#[test]
fn binds_through_a_style_map() {
    let dir = tempdir().unwrap();
    let definition = modal(&dir);
    let styles = write(dir.path(), "modal.module.json", r#"{ "modal": "_modal_x", "modal--size-lg": "_lg_x" }"#);

    bemkit()
        .arg("resolve")
        .arg("-d")
        .arg(&definition)
        .arg("--styles")
        .arg(&styles)
        .args(["-s", "size=lg"])
        .assert()
        .success()
        .stdout("_modal_x _lg_x\n");
}

#[test]
fn toml_definitions_coerce_numbers() {
    let dir = tempdir().unwrap();
    let definition = write(
        dir.path(),
        "grid.toml",
        "block = \"grid\"\n\n[modifiers]\ncols = [2, 3]\n\n[default_modifiers]\ncols = 2\n",
    );

    bemkit()
        .args(["resolve", "-d"])
        .arg(&definition)
        .assert()
        .success()
        .stdout("grid grid--2\n");

    bemkit()
        .args(["resolve", "-d"])
        .arg(&definition)
        .args(["-s", "cols=3"])
        .assert()
        .success()
        .stdout("grid grid--3\n");
}

#[test]
fn unknown_elements_fail() {
    let dir = tempdir().unwrap();
    let definition = modal(&dir);

    bemkit()
        .args(["resolve", "-e", "header", "-d"])
        .arg(&definition)
        .assert()
        .failure()
        .stderr(predicate::str::contains("block 'modal' declares no element 'header'"));
}

#[test]
fn empty_block_names_fail() {
    let dir = tempdir().unwrap();
    let definition = write(dir.path(), "empty.json", r#"{ "block": "" }"#);

    bemkit()
        .args(["resolve", "-d"])
        .arg(&definition)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing block name"));
}

#[test]
fn unsupported_extensions_fail() {
    let dir = tempdir().unwrap();
    let definition = write(dir.path(), "modal.yaml", "block: modal\n");

    bemkit()
        .args(["inspect", "-d"])
        .arg(&definition)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported document format"));
}

#[test]
fn inspect_lists_block_and_elements() {
    let dir = tempdir().unwrap();
    let definition = modal(&dir);

    bemkit()
        .args(["inspect", "-d"])
        .arg(&definition)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Block 'modal' (1 elements)")
                .and(predicate::str::contains("size=[sm|lg] type=[alert|confirm]"))
                .and(predicate::str::contains("modal__footer"))
                .and(predicate::str::contains("key-value")),
        );
}

#[test]
fn log_directory_receives_files() {
    let dir = tempdir().unwrap();
    let definition = modal(&dir);
    let logs = dir.path().join("logs");

    bemkit()
        .arg("-v")
        .arg("--log-dir")
        .arg(&logs)
        .args(["resolve", "-d"])
        .arg(&definition)
        .assert()
        .success()
        .stdout("modal\n");

    let has_log = fs::read_dir(&logs)
        .unwrap()
        .flatten()
        .any(|entry| entry.path().extension().and_then(|ext| ext.to_str()) == Some("log"));
    assert!(has_log);
}

#[test]
fn no_arguments_prints_help() {
    bemkit().assert().failure().stderr(predicate::str::contains("Usage"));
}
