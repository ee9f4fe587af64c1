use std::process::{Command, Output};

use spectral::prelude::*;

fn dnsslap(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dnsslap"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run dnsslap")
}

#[test]
fn missing_host_prints_usage() {
    let output = dnsslap(&[]);

    assert_that(&output.status.code()).is_equal_to(Some(2));
    assert_that(&String::from_utf8_lossy(&output.stderr).to_string()).contains("Usage:");
    assert_that(&output.stdout.is_empty()).is_true();
}

#[test]
fn superfluous_host_prints_usage() {
    let output = dnsslap(&["localhost", "example.com"]);

    assert_that(&output.status.code()).is_equal_to(Some(2));
}

#[test]
fn localhost_summary() {
    let output = dnsslap(&["--no-color", "-c", "2", "-n", "3", "--no-threshold", "localhost"]);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();

    assert_that(&output.status.code()).is_equal_to(Some(0));
    assert_that(&stdout).contains("Starting 2 workers with 3 lookups each ...");
    assert_that(&stdout).contains("Workers finished, calculating results");
    assert_that(&stdout).contains("Ran 6 lookups in an average time of");
    assert_that(&stdout).contains("Found 0 errors");
}

#[test]
fn localhost_json() {
    let output = dnsslap(&["-q", "-o", "json", "-c", "3", "-n", "2", "--no-threshold", "localhost"]);

    assert_that(&output.status.code()).is_equal_to(Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_that(&json["total"].as_u64()).is_equal_to(Some(6));
    assert_that(&json["errors"].as_u64()).is_equal_to(Some(0));
}

#[test]
fn zero_threshold_fails_every_lookup() {
    let output = dnsslap(&["-q", "-c", "1", "-n", "2", "-t", "0s", "localhost"]);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();

    assert_that(&output.status.code()).is_equal_to(Some(1));
    assert_that(&stdout).contains("Found 2 errors");
    assert_that(&stdout).contains("lookup exceeded threshold of 0s returned 2 times");
}
