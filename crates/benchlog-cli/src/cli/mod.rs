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

//! CLI command definitions and argument parsing.
//!
//! - [`extraction`]: log processing commands (bench, geo-data, smart-meter, summarize)
//! - [`utility`]: utility commands (completion)

mod extraction;
mod utility;

use crate::error::CliError;
use clap::{Parser, Subcommand};

pub use extraction::ExtractionCommands;
pub use utility::UtilityCommands;

/// benchlog - benchmark log extraction
///
/// Turns the trace output of the randomness benchmarks and end-to-end
/// examples into CSV tables, with per-column medians and means.
///
/// ```bash
/// # Parse the benchmark logs of one run
/// benchlog bench 2024-05-01_12-00
///
/// # Same, every column, custom directories
/// benchlog bench 2024-05-01_12-00 --projection full -i logs -o tables
/// ```
#[derive(Parser)]
#[command(name = "benchlog")]
#[command(author, version, about = "benchlog - benchmark log extraction", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Extraction (bench, geo-data, smart-meter, summarize)
/// └── Utility (completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Extraction commands - flattened to appear at top level
    #[command(flatten)]
    Extraction(ExtractionCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Extraction(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
