// Dweve benchlog - Benchmark Log Extraction
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI integration tests

use assert_cmd::Command;
use benchlog_test::fixtures::errors::invalid_logs;
use benchlog_test::fixtures::{compact_log, histogram_log, point_log};
use benchlog_test::{write_fixture, LogBuilder};
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const PROTOCOLS: [&str; 6] = [
    "base_histogram",
    "expand_histogram",
    "shuffle_histogram",
    "base_real",
    "expand_real",
    "shuffle_real",
];

// Test helper to create a benchlog command
fn benchlog_cmd() -> Command {
    Command::cargo_bin("benchlog").expect("Failed to find benchlog binary")
}

fn write_bench_logs(dir: &Path, run_id: &str, cycles: usize) {
    for (i, protocol) in PROTOCOLS.iter().enumerate() {
        let log = LogBuilder::new().warmup(1).cycles(cycles + i).build();
        write_fixture(dir, &format!("{}_bench_{}.txt", run_id, protocol), log.text());
    }
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    benchlog_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchmark log extraction"))
        .stdout(predicate::str::contains("bench"))
        .stdout(predicate::str::contains("smart-meter"));
}

#[test]
fn test_no_subcommand_fails() {
    benchlog_cmd().assert().failure();
}

// ===== Bench Command Tests =====

#[test]
fn test_bench_writes_all_tables() {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("raw");
    let parsed = dir.path().join("parsed").join("benches");
    write_bench_logs(&raw, "20240501", 2);

    benchlog_cmd()
        .args(["bench", "20240501", "-i"])
        .arg(&raw)
        .arg("-o")
        .arg(&parsed)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("20240501_medians.csv"));

    for (i, protocol) in PROTOCOLS.iter().enumerate() {
        let table =
            fs::read_to_string(parsed.join(format!("20240501_bench_{}.csv", protocol))).unwrap();
        assert_eq!(table.lines().count(), 1 + 2 + i, "{}", protocol);
    }

    let medians = fs::read_to_string(parsed.join("20240501_medians.csv")).unwrap();
    let lines: Vec<&str> = medians.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with("Datatype/Dataset,Scheme,Client | GenRand-1 (ms),"));
    assert!(lines[1].starts_with("Histogram/GPS,Base,"));
    assert!(lines[6].starts_with("Real/Smart meter,Shuffle,"));
    assert!(parsed.join("20240501_means.csv").exists());
}

#[test]
fn test_bench_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    write_bench_logs(dir.path(), "r", 3);
    let out_a = dir.path().join("a");
    let out_b = dir.path().join("b");

    for out in [&out_a, &out_b] {
        benchlog_cmd()
            .args(["bench", "r", "-i"])
            .arg(dir.path())
            .arg("-o")
            .arg(out)
            .assert()
            .success();
    }

    for name in ["r_medians.csv", "r_means.csv", "r_bench_base_real.csv"] {
        assert_eq!(
            fs::read(out_a.join(name)).unwrap(),
            fs::read(out_b.join(name)).unwrap(),
            "{}",
            name
        );
    }
}

#[test]
fn test_bench_full_projection() {
    let dir = tempfile::tempdir().unwrap();
    write_bench_logs(dir.path(), "r", 1);

    benchlog_cmd()
        .args(["bench", "r", "--projection", "full", "-i"])
        .arg(dir.path())
        .arg("-o")
        .arg(dir.path())
        .assert()
        .success();

    let table = fs::read_to_string(dir.path().join("r_bench_base_histogram.csv")).unwrap();
    assert!(table.starts_with("# constraints,|ek|,|vk|,"));
    assert_eq!(table.lines().next().unwrap().split(',').count(), 16);
}

#[test]
fn test_bench_unknown_projection() {
    benchlog_cmd()
        .args(["bench", "r", "--projection", "everything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown preset"));
}

#[test]
fn test_bench_malformed_log_fails_with_location() {
    let dir = tempfile::tempdir().unwrap();
    write_bench_logs(dir.path(), "r", 2);
    let (_, text, _) = invalid_logs()
        .into_iter()
        .find(|(name, _, _)| *name == "kilobyte_key_size")
        .unwrap();
    write_fixture(dir.path(), "r_bench_expand_histogram.txt", &text);

    benchlog_cmd()
        .args(["bench", "r", "-i"])
        .arg(dir.path())
        .arg("-o")
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("r_bench_expand_histogram.txt"))
        .stderr(predicate::str::contains("12kb"))
        .stderr(predicate::str::contains("Proving key size"));

    assert!(!dir.path().join("r_medians.csv").exists());
}

#[test]
fn test_bench_missing_log() {
    let dir = tempfile::tempdir().unwrap();
    benchlog_cmd()
        .args(["bench", "nothing", "-i"])
        .arg(dir.path())
        .arg("-o")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing_bench_base_histogram.txt"));
}

#[test]
fn test_bench_file_size_limit() {
    let dir = tempfile::tempdir().unwrap();
    write_bench_logs(dir.path(), "r", 1);

    benchlog_cmd()
        .env("BENCHLOG_MAX_FILE_SIZE", "10")
        .args(["bench", "r", "-i"])
        .arg(dir.path())
        .arg("-o")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_bench_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "r_bench_prove.txt", &compact_log(4));
    let config = write_fixture(
        dir.path(),
        "pipeline.json",
        r#"{
            "protocols": [ { "id": "prove" } ],
            "schema": [
                { "name": "Number of constraints", "kind": "size" },
                { "name": "Prove", "kind": "duration" },
                { "name": "Messages sent", "kind": "size" },
                { "name": "Proof", "kind": "size" }
            ],
            "projection": [
                { "source": 1, "label": "Prove (ms)" },
                { "source": 3, "label": "|proof|" }
            ],
            "assembler": { "leading_fields": 1 }
        }"#,
    );

    benchlog_cmd()
        .args(["bench", "r", "-c"])
        .arg(&config)
        .arg("-i")
        .arg(dir.path())
        .arg("-o")
        .arg(dir.path())
        .assert()
        .success();

    let table = fs::read_to_string(dir.path().join("r_bench_prove.csv")).unwrap();
    assert_eq!(
        table,
        "Prove (ms),|proof|\r\n1.00000,64\r\n2.00000,64\r\n3.00000,64\r\n4.00000,64\r\n"
    );
    let means = fs::read_to_string(dir.path().join("r_means.csv")).unwrap();
    assert_eq!(
        means,
        "Datatype/Dataset,Scheme,Prove (ms),|proof|\r\nprove,,2.50000,64.00000\r\n"
    );
}

#[test]
fn test_bench_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixture(dir.path(), "pipeline.json", r#"{ "protocols": "all" }"#);
    benchlog_cmd()
        .args(["bench", "r", "-c"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

// ===== Daily Commands =====

#[test]
fn test_geo_data() {
    let dir = tempfile::tempdir().unwrap();
    for p in ["base", "expand", "shuffle"] {
        write_fixture(dir.path(), &format!("d_geo_data_{}.txt", p), &histogram_log(4));
    }
    let out = dir.path().join("parsed");

    benchlog_cmd()
        .args(["geo-data", "d", "-i"])
        .arg(dir.path())
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("(4 days)"));

    let table = fs::read_to_string(out.join("d_geo_data_shuffle.csv")).unwrap();
    assert_eq!(table.lines().count(), 5);
}

#[test]
fn test_smart_meter() {
    let dir = tempfile::tempdir().unwrap();
    for p in ["base", "expand", "shuffle"] {
        write_fixture(dir.path(), &format!("d_smart_meter_{}.txt", p), &point_log(2));
    }

    benchlog_cmd()
        .args(["smart-meter", "d", "-i"])
        .arg(dir.path())
        .arg("-o")
        .arg(dir.path())
        .assert()
        .success();

    let table = fs::read_to_string(dir.path().join("d_smart_meter_base.csv")).unwrap();
    assert_eq!(table, "Day,Estimate\r\n1,0.125\r\n2,0.25\r\n");
}

// ===== Summarize =====

#[test]
fn test_summarize_parsed_table() {
    let dir = tempfile::tempdir().unwrap();
    let table = write_fixture(dir.path(), "t.csv", "a,b\n1,4\n2,5\n3,9\n");

    benchlog_cmd()
        .arg("summarize")
        .arg(&table)
        .assert()
        .success()
        .stdout(predicate::str::contains("t,median,2.00000,5.00000"))
        .stdout(predicate::str::contains("t,mean,2.00000,6.00000"));
}

#[test]
fn test_summarize_requires_files() {
    benchlog_cmd().arg("summarize").assert().failure();
}

// ===== Completion =====

#[test]
fn test_completion_bash() {
    benchlog_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("benchlog"));
}

#[test]
fn test_completion_unknown_shell() {
    benchlog_cmd()
        .args(["completion", "tcsh"])
        .assert()
        .failure();
}
