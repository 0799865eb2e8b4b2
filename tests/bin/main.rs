// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Tests for the `parquet-tally` CLI binary.
//!
//! Fixtures are written into a temporary directory before each test, so the
//! exact compressed sizes are read back from the footers rather than
//! hard-coded.

#![cfg(feature = "cli")]

use std::fs::{self, File};
use std::path::Path;
use std::process::Command;

use parquet::file::metadata::ParquetMetaDataReader;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[path = "../../src/test_util.rs"]
mod test_util;

use test_util::write_parquet;

/// Sum of the compressed row group sizes recorded in the footer of `path`
fn compressed_size(path: &Path) -> i64 {
    let file = File::open(path).unwrap();
    let metadata = ParquetMetaDataReader::new().parse_and_finish(&file).unwrap();
    metadata.row_groups().iter().map(|rg| rg.compressed_size()).sum()
}

/// Build a dataset directory with two data files and a marker file
fn dataset() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_parquet(&dir.path().join("part-0.parquet"), &[100, 50]);
    write_parquet(&dir.path().join("part-1.parquet"), &[25]);
    fs::write(dir.path().join("_SUCCESS"), b"").unwrap();
    dir
}

/// Run parquet-tally with the given arguments
fn run_tally(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_parquet-tally"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (output.status.success(), stdout, stderr)
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

// =============================================================================
// Rowcount Subcommand Tests
// =============================================================================

#[test]
fn test_rowcount_single_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("data.parquet");
    write_parquet(&file, &[100, 50]);

    let (ok, stdout, _) = run_tally(&["rowcount", path_str(&file)]);
    assert!(ok, "parquet-tally rowcount failed");
    assert_eq!(stdout, "RowCount: 150\n");
}

#[test]
fn test_rowcount_dataset() {
    let dir = dataset();
    let (ok, stdout, _) = run_tally(&["rowcount", path_str(dir.path())]);
    assert!(ok, "parquet-tally rowcount on a directory failed");
    assert_eq!(stdout, "RowCount: 175\n");
}

#[test]
fn test_rowcount_detailed() {
    let dir = dataset();
    let (ok, stdout, _) = run_tally(&["rowcount", "--detailed", path_str(dir.path())]);
    assert!(ok, "parquet-tally rowcount --detailed failed");

    let part0 = dir.path().join("part-0.parquet");
    let part1 = dir.path().join("part-1.parquet");
    let expected = format!(
        "{}: RowCount: 150\n{}: RowCount: 25\nRowCount: 175\n",
        part0.display(),
        part1.display()
    );
    assert_eq!(stdout, expected);
}

#[test]
fn test_rowcount_empty_directory() {
    let dir = TempDir::new().unwrap();
    let (ok, stdout, _) = run_tally(&["rowcount", path_str(dir.path())]);
    assert!(ok, "parquet-tally rowcount on an empty directory failed");
    assert_eq!(stdout, "RowCount: 0\n");
}

// =============================================================================
// Size Subcommand Tests
// =============================================================================

#[test]
fn test_size_raw() {
    let dir = dataset();
    let expected = compressed_size(&dir.path().join("part-0.parquet"))
        + compressed_size(&dir.path().join("part-1.parquet"));

    let (ok, stdout, _) = run_tally(&["size", path_str(dir.path())]);
    assert!(ok, "parquet-tally size failed");
    assert_eq!(stdout, format!("Size: {expected} bytes\n"));
}

#[test]
fn test_size_pretty() {
    let dir = dataset();
    let expected = parquet_tally::format_size(
        compressed_size(&dir.path().join("part-0.parquet"))
            + compressed_size(&dir.path().join("part-1.parquet")),
        true,
    )
    .unwrap();

    for flag in ["-p", "--pretty"] {
        let (ok, stdout, _) = run_tally(&["size", flag, path_str(dir.path())]);
        assert!(ok, "parquet-tally size {flag} failed");
        assert_eq!(stdout, format!("Size: {expected}\n"));
    }
}

#[test]
fn test_size_uncompressed_not_smaller_than_compressed() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("data.parquet");
    write_parquet(&file, &[1000]);

    let (ok, stdout, _) = run_tally(&["size", "--uncompressed", path_str(&file)]);
    assert!(ok, "parquet-tally size --uncompressed failed");
    let bytes: i64 = stdout
        .trim()
        .strip_prefix("Size: ")
        .and_then(|s| s.strip_suffix(" bytes"))
        .unwrap()
        .parse()
        .unwrap();
    assert!(bytes >= compressed_size(&file));
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[test]
fn test_missing_path() {
    for command in ["rowcount", "size"] {
        let (ok, stdout, stderr) = run_tally(&[command, "/nonexistent/path/file.parquet"]);
        assert!(!ok, "{command} should fail for missing file");
        assert!(stdout.is_empty(), "{command} should not print a report");
        assert!(
            stderr.contains("Path not found"),
            "error should name the failure kind: {stderr}"
        );
    }
}

#[test]
fn test_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("bad.parquet");
    fs::write(&file, b"not a parquet file").unwrap();

    let (ok, stdout, stderr) = run_tally(&["size", path_str(&file)]);
    assert!(!ok, "size should fail for a corrupt file");
    assert!(stdout.is_empty());
    assert!(stderr.contains("Corrupt metadata"), "stderr: {stderr}");
}

#[test]
fn test_wrong_argument_count() {
    let dir = dataset();
    let input = path_str(dir.path());

    let (ok, stdout, stderr) = run_tally(&["rowcount"]);
    assert!(!ok, "rowcount without input should fail");
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid argument"), "stderr: {stderr}");

    let (ok, stdout, stderr) = run_tally(&["size", input, input]);
    assert!(!ok, "size with two inputs should fail");
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid argument"), "stderr: {stderr}");
}

#[test]
fn test_no_subcommand() {
    let output = Command::new(env!("CARGO_BIN_EXE_parquet-tally"))
        .output()
        .unwrap();
    let combined = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(!output.status.success());
    assert!(
        combined.contains("Usage:") || combined.contains("COMMAND"),
        "should show usage info when no subcommand given"
    );
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let dir = dataset();
    let (ok, stdout, stderr) = run_tally(&["-vv", "rowcount", path_str(dir.path())]);
    assert!(ok);
    assert_eq!(stdout, "RowCount: 175\n");
    assert!(stderr.contains("resolved 2 footer(s)"), "stderr: {stderr}");
}

// =============================================================================
// Version Test
// =============================================================================

#[test]
fn test_version() {
    let (ok, stdout, _) = run_tally(&["--version"]);
    assert!(ok, "parquet-tally --version failed");
    assert!(
        stdout.trim().starts_with("parquet-tally "),
        "version should start with 'parquet-tally '"
    );
}
