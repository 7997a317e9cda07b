//! Runs the `graph-poet` binary against temporary corpus and config files

mod common;

use assert_cmd::prelude::*;
use common::{corpus_file, MUGAR_CORPUS};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Temp dir holding a config file, also used as HOME so no user config leaks in
fn config_dir(yaml: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("config.yaml"), yaml).expect("write config");
    dir
}

fn graph_poet(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_graph-poet"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .arg("--config")
        .arg(home.join("config.yaml"));
    cmd
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn poem_prints_bridged_text() {
    let home = config_dir("");
    let corpus = corpus_file(MUGAR_CORPUS);
    let assert = graph_poet(home.path())
        .arg("poem")
        .arg("--corpus")
        .arg(corpus.path())
        .args(["Test", "the", "system."])
        .assert()
        .success();
    assert_eq!(stdout_of(assert.get_output()), "Test of the system.\n");
}

#[test]
fn bridge_prints_word_and_score() {
    let home = config_dir("");
    let corpus = corpus_file("a x b a y b a y b");
    let assert = graph_poet(home.path())
        .arg("bridge")
        .arg("--corpus")
        .arg(corpus.path())
        .args(["a", "b"])
        .assert()
        .success();
    assert_eq!(stdout_of(assert.get_output()), "y (score 4)\n");
}

#[test]
fn missing_bridge_exits_with_one() {
    let home = config_dir("");
    let corpus = corpus_file("one two three");
    let assert = graph_poet(home.path())
        .arg("bridge")
        .arg("--corpus")
        .arg(corpus.path())
        .args(["one", "two"])
        .assert()
        .code(1);
    let output = assert.get_output();
    assert!(stdout_of(output).is_empty());
    assert!(stderr_of(output).contains("No bridge between 'one' and 'two'"));
}

#[test]
fn missing_corpus_reports_error() {
    let home = config_dir("");
    let missing = home.path().join("nope.txt");
    let assert = graph_poet(home.path())
        .arg("poem")
        .arg("--corpus")
        .arg(&missing)
        .args(["a", "b"])
        .assert()
        .code(1);
    let stderr = stderr_of(assert.get_output());
    assert!(stderr.starts_with("Error: "), "stderr was {:?}", stderr);
    assert!(stderr.contains("nope.txt"), "stderr was {:?}", stderr);
}

#[test]
fn corpus_comes_from_config_when_not_given() {
    let corpus = corpus_file(MUGAR_CORPUS);
    let yaml = format!("corpus: {}\n", corpus.path().display());
    let home = config_dir(&yaml);
    let assert = graph_poet(home.path())
        .args(["poem", "Test", "the", "system."])
        .assert()
        .success();
    assert_eq!(stdout_of(assert.get_output()), "Test of the system.\n");
}

#[test]
fn config_tie_break_is_used() {
    let home = config_dir("tie_break: largest\n");
    let corpus = corpus_file("a x b a y b");
    let assert = graph_poet(home.path())
        .arg("bridge")
        .arg("--corpus")
        .arg(corpus.path())
        .args(["a", "b"])
        .assert()
        .success();
    assert_eq!(stdout_of(assert.get_output()), "y (score 2)\n");
}

#[test]
fn tie_break_flag_overrides_config() {
    let home = config_dir("tie_break: largest\n");
    let corpus = corpus_file("a x b a y b");
    let assert = graph_poet(home.path())
        .args(["--tie-break", "smallest"])
        .arg("bridge")
        .arg("--corpus")
        .arg(corpus.path())
        .args(["a", "b"])
        .assert()
        .success();
    assert_eq!(stdout_of(assert.get_output()), "x (score 2)\n");
}

#[test]
fn invalid_config_reports_error() {
    let home = config_dir("tie_break: random\n");
    let corpus = corpus_file(MUGAR_CORPUS);
    let assert = graph_poet(home.path())
        .arg("graph")
        .arg("--corpus")
        .arg(corpus.path())
        .assert()
        .code(1);
    assert!(stderr_of(assert.get_output()).starts_with("Error: "));
}

#[test]
fn graph_json_is_sorted_snapshot() {
    let home = config_dir("");
    let corpus = corpus_file("b a b");
    let assert = graph_poet(home.path())
        .arg("graph")
        .arg("--corpus")
        .arg(corpus.path())
        .arg("--json")
        .assert()
        .success();
    let json: serde_json::Value =
        serde_json::from_str(&stdout_of(assert.get_output())).expect("valid json");
    assert_eq!(json["vertices"], serde_json::json!(["a", "b"]));
    assert_eq!(json["edges"][0]["source"], "a");
    assert_eq!(json["edges"][1]["source"], "b");
    assert_eq!(json["edges"][1]["weight"], 1);
}
