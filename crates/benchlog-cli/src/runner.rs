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

//! Protocol runner.
//!
//! For each configured protocol, in order: extract runs from
//! `<input_dir>/<run_id>_bench_<id>.txt`, project them, write
//! `<output_dir>/<run_id>_bench_<id>.csv`, then summarize. After the last
//! protocol the labelled median and mean rows are written as
//! `<run_id>_medians.csv` and `<run_id>_means.csv`.
//!
//! Processing is sequential. The first failing protocol aborts the run;
//! tables already written for earlier protocols are left in place and no
//! summary files are written.

use crate::commands::{ensure_dir, open_input};
use crate::config::{PipelineConfig, ProtocolSpec};
use crate::error::CliError;
use benchlog_core::{
    extract_runs, summarize, ColumnProjection, Statistic, Summary, SummaryRow, Table,
};
use benchlog_csv::write_table_file;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Leading label columns of the summary tables.
pub const SUMMARY_LABELS: [&str; 2] = ["Datatype/Dataset", "Scheme"];

/// Result of one processed protocol.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolOutcome {
    pub id: String,
    pub rows: usize,
    pub output: PathBuf,
}

/// Files written by a complete run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub protocols: Vec<ProtocolOutcome>,
    pub medians: PathBuf,
    pub means: PathBuf,
}

/// Sequential driver over the configured protocol list.
pub struct ProtocolRunner<'a> {
    config: &'a PipelineConfig,
    projection: ColumnProjection,
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl<'a> ProtocolRunner<'a> {
    /// Validate the configuration and bind it to directories.
    pub fn new(
        config: &'a PipelineConfig,
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self, CliError> {
        config.validate()?;
        Ok(Self {
            config,
            projection: config.column_projection()?,
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        })
    }

    pub fn input_path(&self, run_id: &str, protocol: &str) -> PathBuf {
        self.input_dir
            .join(format!("{}_bench_{}.txt", run_id, protocol))
    }

    pub fn output_path(&self, run_id: &str, protocol: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_bench_{}.csv", run_id, protocol))
    }

    pub fn summary_path(&self, run_id: &str, statistic: Statistic) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}s.csv", run_id, statistic.as_str()))
    }

    /// Process every protocol, calling `on_protocol` after each table is
    /// written.
    pub fn run_with<F>(&self, run_id: &str, mut on_protocol: F) -> Result<RunReport, CliError>
    where
        F: FnMut(&ProtocolOutcome),
    {
        ensure_dir(&self.output_dir)?;

        let mut header: Vec<String> = SUMMARY_LABELS.iter().map(|s| s.to_string()).collect();
        header.extend(self.projection.labels().into_iter().map(String::from));
        let mut medians = Table::new(header.clone());
        let mut means = Table::new(header);
        let mut outcomes = Vec::with_capacity(self.config.protocols.len());

        for protocol in &self.config.protocols {
            let (outcome, summary) = self.process(run_id, protocol)?;
            for (table, statistic) in [(&mut medians, Statistic::Median), (&mut means, Statistic::Mean)] {
                let row = SummaryRow::new(protocol.label_cells(), &summary, statistic);
                table
                    .push_row(row.into_cells())
                    .map_err(|e| CliError::extraction(&outcome.output, e))?;
            }
            on_protocol(&outcome);
            outcomes.push(outcome);
        }

        let medians_path = self.summary_path(run_id, Statistic::Median);
        let means_path = self.summary_path(run_id, Statistic::Mean);
        write_table_file(&medians, &medians_path)
            .map_err(|e| CliError::csv(&medians_path, e))?;
        write_table_file(&means, &means_path).map_err(|e| CliError::csv(&means_path, e))?;
        info!(
            protocols = outcomes.len(),
            medians = %medians_path.display(),
            means = %means_path.display(),
            "summaries written"
        );

        Ok(RunReport {
            protocols: outcomes,
            medians: medians_path,
            means: means_path,
        })
    }

    /// [`run_with`](Self::run_with) without a progress callback.
    pub fn run(&self, run_id: &str) -> Result<RunReport, CliError> {
        self.run_with(run_id, |_| {})
    }

    fn process(
        &self,
        run_id: &str,
        protocol: &ProtocolSpec,
    ) -> Result<(ProtocolOutcome, Summary), CliError> {
        let input = self.input_path(run_id, &protocol.id);
        let output = self.output_path(run_id, &protocol.id);
        debug!(protocol = %protocol.id, input = %input.display(), "extracting");

        let table = extract_table(
            &input,
            &self.config.schema,
            &self.config.assembler,
            &self.projection,
        )?;
        write_table_file(&table, &output).map_err(|e| CliError::csv(&output, e))?;
        let summary =
            summarize(&table, &protocol.id).map_err(|e| CliError::extraction(&input, e))?;

        info!(protocol = %protocol.id, rows = table.len(), "protocol processed");
        Ok((
            ProtocolOutcome {
                id: protocol.id.clone(),
                rows: table.len(),
                output,
            },
            summary,
        ))
    }
}

/// Extract and project one log file.
pub fn extract_table(
    input: &Path,
    schema: &benchlog_core::MeasurementSchema,
    assembler: &benchlog_core::AssemblerConfig,
    projection: &ColumnProjection,
) -> Result<Table, CliError> {
    let file = open_input(input)?;
    let runs = extract_runs(BufReader::new(file), schema, assembler)
        .map_err(|e| CliError::extraction(input, e))?;
    Table::from_runs(&runs, projection).map_err(|e| CliError::extraction(input, e))
}
