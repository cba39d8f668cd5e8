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

//! Log processing commands.

use crate::commands;
use crate::config::{
    BENCH_INPUT_DIR, BENCH_OUTPUT_DIR, GEO_DATA_INPUT_DIR, GEO_DATA_OUTPUT_DIR,
    SMART_METER_INPUT_DIR, SMART_METER_OUTPUT_DIR,
};
use crate::error::CliError;
use benchlog_core::ProjectionPreset;
use clap::Subcommand;
use std::path::PathBuf;

/// Log processing commands.
#[derive(Subcommand)]
pub enum ExtractionCommands {
    /// Parse the benchmark logs of one run
    ///
    /// Reads `<INPUT_DIR>/<RUN_ID>_bench_<protocol>.txt` for every protocol
    /// and writes one CSV per protocol plus `<RUN_ID>_medians.csv` and
    /// `<RUN_ID>_means.csv` to the output directory.
    Bench {
        /// Run identifier (date/time stamp prefix of the log files)
        #[arg(value_name = "RUN_ID")]
        run_id: String,

        /// Directory holding the raw logs
        #[arg(short, long, default_value = BENCH_INPUT_DIR)]
        input_dir: PathBuf,

        /// Directory for the parsed tables (created if missing)
        #[arg(short, long, default_value = BENCH_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// JSON pipeline configuration (protocols, schema, projection)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Projection preset (full, publication); overrides the configuration
        #[arg(short, long, value_name = "PRESET")]
        projection: Option<ProjectionPreset>,
    },

    /// Parse the geo data (histogram) logs of one run
    GeoData {
        /// Run identifier
        #[arg(value_name = "RUN_ID")]
        run_id: String,

        /// Directory holding the raw logs
        #[arg(short, long, default_value = GEO_DATA_INPUT_DIR)]
        input_dir: PathBuf,

        /// Directory for the parsed tables (created if missing)
        #[arg(short, long, default_value = GEO_DATA_OUTPUT_DIR)]
        output_dir: PathBuf,
    },

    /// Parse the smart meter (point estimate) logs of one run
    SmartMeter {
        /// Run identifier
        #[arg(value_name = "RUN_ID")]
        run_id: String,

        /// Directory holding the raw logs
        #[arg(short, long, default_value = SMART_METER_INPUT_DIR)]
        input_dir: PathBuf,

        /// Directory for the parsed tables (created if missing)
        #[arg(short, long, default_value = SMART_METER_OUTPUT_DIR)]
        output_dir: PathBuf,
    },

    /// Recompute median and mean from parsed CSV tables
    Summarize {
        /// Parsed tables sharing one header
        #[arg(value_name = "CSV", required = true)]
        files: Vec<PathBuf>,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl ExtractionCommands {
    /// Execute the extraction command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ExtractionCommands::Bench {
                run_id,
                input_dir,
                output_dir,
                config,
                projection,
            } => commands::bench(
                &run_id,
                &input_dir,
                &output_dir,
                config.as_deref(),
                projection,
            ),
            ExtractionCommands::GeoData {
                run_id,
                input_dir,
                output_dir,
            } => commands::geo_data(&run_id, &input_dir, &output_dir),
            ExtractionCommands::SmartMeter {
                run_id,
                input_dir,
                output_dir,
            } => commands::smart_meter(&run_id, &input_dir, &output_dir),
            ExtractionCommands::Summarize { files, output } => {
                commands::summarize(&files, output.as_deref())
            }
        }
    }
}
