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

//! Bench command - benchmark logs to per-protocol tables and summaries

use crate::config::PipelineConfig;
use crate::error::CliError;
use crate::runner::ProtocolRunner;
use benchlog_core::ProjectionPreset;
use colored::Colorize;
use std::path::Path;

/// Process every benchmark log of one run.
///
/// `config` is an optional JSON pipeline file; `projection` overrides its
/// projection with a preset.
///
/// # Output
///
/// Prints one `✓` line per table written. On failure the offending input
/// is printed with `✗` and the error is returned.
pub fn bench(
    run_id: &str,
    input_dir: &Path,
    output_dir: &Path,
    config: Option<&Path>,
    projection: Option<ProjectionPreset>,
) -> Result<(), CliError> {
    let mut pipeline = match config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(preset) = projection {
        pipeline.projection = crate::config::ProjectionConfig::Preset(preset);
    }

    let runner = ProtocolRunner::new(&pipeline, input_dir, output_dir)?;
    let result = runner.run_with(run_id, |outcome| {
        println!(
            "{} {} ({} runs)",
            "✓".green().bold(),
            outcome.output.display(),
            outcome.rows
        );
    });

    match result {
        Ok(report) => {
            println!("{} {}", "✓".green().bold(), report.medians.display());
            println!("{} {}", "✓".green().bold(), report.means.display());
            Ok(())
        }
        Err(e) => {
            if let Some(path) = e.path() {
                println!("{} {}", "✗".red().bold(), path.display());
            }
            Err(e)
        }
    }
}
