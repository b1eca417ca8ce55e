// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::Path;
use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_stats-plot");

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn is_png(path: &Path) -> bool {
    std::fs::read(path)
        .map(|bytes| bytes.starts_with(b"\x89PNG\r\n\x1a\n"))
        .unwrap_or(false)
}

#[test]
fn renders_both_charts() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("stats.csv"),
        "ts,p95_ms,rss_mib\n0,12.5,100.0\n1,13.0,101.2\n2,bad,102.0\n",
    )
    .unwrap();

    let output = run(dir.path(), &["stats.csv"]);

    assert!(output.status.success(), "{:?}", output);
    assert!(is_png(&dir.path().join("p95.png")));
    assert!(is_png(&dir.path().join("rss.png")));
}

#[test]
fn overwrites_previous_charts() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("p95.png"), "old").unwrap();
    std::fs::write(dir.path().join("rss.png"), "old").unwrap();
    std::fs::write(dir.path().join("stats.csv"), "ts,p95_ms,rss_mib\n0,1,2\n").unwrap();

    let output = run(dir.path(), &["stats.csv"]);

    assert!(output.status.success(), "{:?}", output);
    assert!(is_png(&dir.path().join("p95.png")));
    assert!(is_png(&dir.path().join("rss.png")));
}

#[test]
fn missing_argument_prints_usage() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(dir.path(), &[]);

    assert!(!output.status.success());
    assert!(stdout(&output).contains("Usage:"), "{:?}", output);
}

#[test]
fn header_only_is_no_data() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("stats.csv"), "ts,p95_ms,rss_mib\n").unwrap();

    let output = run(dir.path(), &["stats.csv"]);

    assert!(!output.status.success());
    assert!(stdout(&output).contains("No data."), "{:?}", output);
    assert!(!dir.path().join("p95.png").exists());
    assert!(!dir.path().join("rss.png").exists());
}

#[test]
fn all_rows_malformed_is_no_data() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("stats.csv"),
        "ts,p95_ms,rss_mib\nx,1,2\n1,,2\n2,3\n",
    )
    .unwrap();

    let output = run(dir.path(), &["stats.csv"]);

    assert!(!output.status.success());
    assert!(stdout(&output).contains("No data."), "{:?}", output);
    assert!(!dir.path().join("p95.png").exists());
}

#[test]
fn missing_file_is_an_error_not_no_data() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(dir.path(), &["absent.csv"]);

    assert!(!output.status.success());
    assert!(!stdout(&output).contains("No data."), "{:?}", output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("absent.csv"), "{}", stderr);
    assert!(!dir.path().join("p95.png").exists());
}

#[test]
fn hyphenated_file_names_are_inputs() {
    for name in &["-stats.csv", "--help", "--version"] {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(name), "ts,p95_ms,rss_mib\n0,1,2\n1,2,3\n").unwrap();

        let output = run(dir.path(), &[*name]);

        assert!(output.status.success(), "{}: {:?}", name, output);
        assert!(is_png(&dir.path().join("p95.png")), "{}", name);
        assert!(is_png(&dir.path().join("rss.png")), "{}", name);
    }
}

#[test]
fn extreme_values_render() {
    for input in &[
        "ts,p95_ms,rss_mib\n0,1e308,1\n1,-1e308,2\n",
        "ts,p95_ms,rss_mib\n0,0,1\n1,1.79e308,2\n",
    ] {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("stats.csv"), input).unwrap();

        let output = run(dir.path(), &["stats.csv"]);

        assert!(output.status.success(), "{:?}", output);
        assert!(is_png(&dir.path().join("p95.png")));
        assert!(is_png(&dir.path().join("rss.png")));
    }
}
