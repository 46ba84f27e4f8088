/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */


//! These tests run the `ascii-table` binary, which must be built first. `cargo test`
//! takes care of this for integration tests in this folder.

use assert_cmd::Command;
use pretty_assertions::assert_eq;

fn run(args: &[&str]) -> String {
    let output = Command::cargo_bin("ascii-table")
        .unwrap()
        .args(args)
        .arg("--color")
        .arg("never")
        .ok()
        .unwrap();
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn default_prints_printable_characters_only() {
    let stdout = run(&[]);
    assert!(stdout.starts_with("\nPrintable Characters\n"));
    assert!(!stdout.contains("Control Codes"));
    assert!(stdout.contains("41h  065d  A"));
    assert!(stdout.contains("7Eh  126d  ~"));
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn full_prints_both_blocks_in_order() {
    let stdout = run(&["--full"]);
    let control = stdout.find("Control Codes").unwrap();
    let printable = stdout.find("Printable Characters").unwrap();
    assert!(control < printable);
    assert!(stdout.contains("00h  000d  NUL  Null character"));
}

#[test]
fn control_only_skips_printable_block() {
    let stdout = run(&["-c"]);
    assert!(stdout.starts_with("\nControl Codes\n"));
    assert!(!stdout.contains("Printable Characters"));
    // Sixteen rows, two codes each.
    assert_eq!(stdout.lines().filter(|it| it.starts_with(' ')).count(), 16);
}

#[test]
fn slim_hex_only() {
    let stdout = run(&["-csx"]);
    assert!(stdout.contains(" 00h NUL Null character"));
    assert!(!stdout.contains("000d"));
}

#[test]
fn always_color_emits_escape_codes() {
    let output = Command::cargo_bin("ascii-table")
        .unwrap()
        .args(["--color", "always"])
        .ok()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\x1b["));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    Command::cargo_bin("ascii-table")
        .unwrap()
        .arg("--wide")
        .assert()
        .code(2);
}

#[test]
fn enable_logging_writes_log_file() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("ascii-table")
        .unwrap()
        .current_dir(dir.path())
        .args(["-l", "--color", "never"])
        .assert()
        .success();
    let log = std::fs::read_to_string(dir.path().join("log.txt")).unwrap();
    assert!(log.contains("Start logging..."));
}
