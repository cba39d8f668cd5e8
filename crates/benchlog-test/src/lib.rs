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

//! Shared test fixtures for the benchlog crates.
//!
//! The harness that produces benchmark logs is not available in tests, so
//! this crate writes logs in the same layout: a warmup preamble, the
//! start-of-measurements marker, then one trace block per measurement cycle.
//! Every generated cycle knows the row it should extract to.
//!
//! # Quick Start
//!
//! ```rust
//! use benchlog_test::fixtures::builders::LogBuilder;
//!
//! let log = LogBuilder::new().warmup(2).cycles(3).build();
//! assert!(log.text().contains("--- START MEASUREMENTS ---"));
//! assert_eq!(log.expected_rows().len(), 3);
//! ```

pub mod fixtures;

pub use fixtures::builders::{CycleValues, LogBuilder, SyntheticLog, Timing};

/// Write `contents` to `dir/name`, creating parent directories.
///
/// Panics on IO failure; only meant for test setup.
pub fn write_fixture(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create fixture directory");
    }
    std::fs::write(&path, contents).expect("write fixture");
    path
}
