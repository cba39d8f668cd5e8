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

//! benchlog CLI library.
//!
//! # Commands
//!
//! - **bench**: benchmark logs of one run to per-protocol tables plus
//!   median and mean summaries
//! - **geo-data**: daily histogram estimates to tables
//! - **smart-meter**: daily point estimates to tables
//! - **summarize**: statistics recomputed from parsed tables
//! - **completion**: shell completion scripts
//!
//! # Examples
//!
//! ```no_run
//! use benchlog_cli::config::PipelineConfig;
//! use benchlog_cli::runner::ProtocolRunner;
//!
//! # fn main() -> Result<(), benchlog_cli::error::CliError> {
//! let config = PipelineConfig::default();
//! let runner = ProtocolRunner::new(&config, "results/raw/benches", "results/parsed/benches")?;
//! let report = runner.run("2024-05-01_12-00")?;
//! println!("{}", report.medians.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! Input logs larger than `BENCHLOG_MAX_FILE_SIZE` bytes (default 1 GB)
//! are rejected before they are opened.
//!
//! # Logging
//!
//! Library code logs through `tracing`. The binary prints `info` and above
//! for the benchlog crates to stderr; set `RUST_LOG` (e.g.
//! `RUST_LOG=benchlog_core=debug`) for run-level detail.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod runner;
