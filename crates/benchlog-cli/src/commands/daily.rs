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

//! Geo data and smart meter commands - daily estimates to tables

use super::{ensure_dir, open_input};
use crate::config::DAILY_PROTOCOLS;
use crate::error::CliError;
use benchlog_core::daily::{read_histogram_estimates, read_point_estimates};
use benchlog_core::Table;
use benchlog_csv::write_table_file;
use colored::Colorize;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

/// Which end-to-end example produced the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyKind {
    /// Histogram over location bins.
    GeoData,
    /// Single aggregate value.
    SmartMeter,
}

impl DailyKind {
    /// File name infix, e.g. `geo_data` in `<run>_geo_data_base.txt`.
    pub fn infix(self) -> &'static str {
        match self {
            Self::GeoData => "geo_data",
            Self::SmartMeter => "smart_meter",
        }
    }

    fn read(self, path: &Path) -> Result<Table, CliError> {
        let reader = BufReader::new(open_input(path)?);
        match self {
            Self::GeoData => read_histogram_estimates(reader),
            Self::SmartMeter => read_point_estimates(reader),
        }
        .map_err(|e| CliError::extraction(path, e))
    }
}

/// Convert the daily logs of one run for each scheme.
///
/// Returns the written files.
pub fn convert_daily(
    kind: DailyKind,
    run_id: &str,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, CliError> {
    ensure_dir(output_dir)?;
    let mut written = Vec::with_capacity(DAILY_PROTOCOLS.len());

    for protocol in DAILY_PROTOCOLS {
        let name = format!("{}_{}_{}", run_id, kind.infix(), protocol);
        let input = input_dir.join(format!("{}.txt", name));
        let output = output_dir.join(format!("{}.csv", name));

        let table = match kind.read(&input) {
            Ok(table) => table,
            Err(e) => {
                println!("{} {}", "✗".red().bold(), input.display());
                return Err(e);
            }
        };
        write_table_file(&table, &output).map_err(|e| CliError::csv(&output, e))?;
        info!(protocol, days = table.len(), output = %output.display(), "daily estimates written");
        println!("{} {} ({} days)", "✓".green().bold(), output.display(), table.len());
        written.push(output);
    }

    Ok(written)
}

/// Convert geo data (histogram) logs.
pub fn geo_data(run_id: &str, input_dir: &Path, output_dir: &Path) -> Result<(), CliError> {
    convert_daily(DailyKind::GeoData, run_id, input_dir, output_dir).map(|_| ())
}

/// Convert smart meter (point estimate) logs.
pub fn smart_meter(run_id: &str, input_dir: &Path, output_dir: &Path) -> Result<(), CliError> {
    convert_daily(DailyKind::SmartMeter, run_id, input_dir, output_dir).map(|_| ())
}
