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

//! Summarize command - statistics recomputed from persisted tables

use super::{check_size, write_output};
use crate::error::CliError;
use benchlog_core::{Statistic, SummaryRow, Table};
use benchlog_csv::{read_table_file, to_csv};
use std::path::{Path, PathBuf};

/// Median and mean of every column of each CSV table.
///
/// All tables must share one header. The result has the header
/// `["Table", "Statistic"] + columns` and two rows per input (median, then
/// mean), written as CSV to `output` or stdout.
pub fn summarize(files: &[PathBuf], output: Option<&Path>) -> Result<(), CliError> {
    let content = summarize_tables(files)?;
    write_output(&content, output)
}

/// Build the summary CSV text.
pub fn summarize_tables(files: &[PathBuf]) -> Result<String, CliError> {
    if files.is_empty() {
        return Err(CliError::invalid_input("no tables given"));
    }

    let mut result: Option<Table> = None;
    for path in files {
        check_size(path)?;
        let table = read_table_file(path).map_err(|e| CliError::csv(path, e))?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let summary = benchlog_core::summarize(&table, &name)
            .map_err(|e| CliError::extraction(path, e))?;

        let out = result.get_or_insert_with(|| {
            let mut header = vec!["Table".to_string(), "Statistic".to_string()];
            header.extend(table.headers().iter().cloned());
            Table::new(header)
        });
        if out.headers()[2..] != *table.headers() {
            return Err(CliError::invalid_input(format!(
                "'{}' has different columns than '{}'",
                path.display(),
                files[0].display()
            )));
        }

        for statistic in [Statistic::Median, Statistic::Mean] {
            let labels = vec![name.clone(), statistic.as_str().to_string()];
            out.push_row(SummaryRow::new(labels, &summary, statistic).into_cells())
                .map_err(|e| CliError::extraction(path, e))?;
        }
    }

    let table = result.unwrap_or_default();
    to_csv(&table).map_err(|e| CliError::csv("<summary>", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchlog_test::write_fixture;

    #[test]
    fn test_two_tables() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(dir.path(), "a.csv", "x,y\n1,10\n2,20\n3,60\n");
        let b = write_fixture(dir.path(), "b.csv", "x,y\n4,1\n");
        let text = summarize_tables(&[a, b]).unwrap();
        assert_eq!(
            text,
            "Table,Statistic,x,y\r\n\
             a,median,2.00000,20.00000\r\n\
             a,mean,2.00000,30.00000\r\n\
             b,median,4.00000,1.00000\r\n\
             b,mean,4.00000,1.00000\r\n"
        );
    }

    #[test]
    fn test_mismatched_headers() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(dir.path(), "a.csv", "x\n1\n");
        let b = write_fixture(dir.path(), "b.csv", "z\n1\n");
        assert!(matches!(
            summarize_tables(&[a, b]),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_non_numeric_cell() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(dir.path(), "a.csv", "x\n1\nn/a\n");
        let err = summarize_tables(&[a]).unwrap_err();
        assert!(err.to_string().contains("n/a"));
    }

    #[test]
    fn test_header_only_table_is_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(dir.path(), "a.csv", "x\n");
        let err = summarize_tables(&[a]).unwrap_err();
        assert!(err.to_string().contains("Empty dataset"));
    }
}
