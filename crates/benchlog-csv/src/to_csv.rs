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

//! Write tables as CSV.

use crate::error::{CsvError, Result};
use benchlog_core::Table;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub include_headers: bool,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
    /// Record terminator (default: `\r\n`)
    pub terminator: csv::Terminator,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            quote_style: csv::QuoteStyle::Necessary,
            terminator: csv::Terminator::CRLF,
        }
    }
}

/// Convert a table to a CSV string.
///
/// # Example
/// ```
/// use benchlog_core::Table;
/// use benchlog_csv::to_csv;
///
/// let mut table = Table::new(vec!["Day".to_string(), "Estimate".to_string()]);
/// table.push_row(vec!["1".to_string(), "0.5".to_string()]).unwrap();
/// assert_eq!(to_csv(&table).unwrap(), "Day,Estimate\r\n1,0.5\r\n");
/// ```
pub fn to_csv(table: &Table) -> Result<String> {
    to_csv_with_config(table, ToCsvConfig::default())
}

/// Convert a table to a CSV string with custom configuration.
pub fn to_csv_with_config(table: &Table, config: ToCsvConfig) -> Result<String> {
    let mut buffer = Vec::with_capacity(estimate_csv_size(table));
    write_table_with_config(table, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })
}

/// Write a table to `writer`.
pub fn write_table<W: Write>(table: &Table, writer: W) -> Result<()> {
    write_table_with_config(table, writer, ToCsvConfig::default())
}

/// Write a table to `writer` with custom configuration.
pub fn write_table_with_config<W: Write>(
    table: &Table,
    writer: W,
    config: ToCsvConfig,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .terminator(config.terminator)
        .from_writer(writer);

    if config.include_headers {
        wtr.write_record(table.headers())?;
    }
    for row in table.rows() {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the table to it.
///
/// The parent directory must exist.
pub fn write_table_file(table: &Table, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_table(table, BufWriter::new(file))
}

/// Rough output size for preallocation.
fn estimate_csv_size(table: &Table) -> usize {
    let header: usize = table.headers().iter().map(|h| h.len() + 1).sum();
    let first_row: usize = table
        .rows()
        .first()
        .map(|r| r.iter().map(|c| c.len() + 1).sum())
        .unwrap_or(0);
    header + first_row * table.len() + 2 * (table.len() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(cols: &[&str], rows: &[&[&str]]) -> Table {
        let mut t = Table::new(cols.iter().map(|s| s.to_string()).collect());
        for r in rows {
            t.push_row(r.iter().map(|s| s.to_string()).collect()).unwrap();
        }
        t
    }

    #[test]
    fn test_headers_then_rows() {
        let t = table(&["a", "b"], &[&["1", "2"], &["3", "4"]]);
        assert_eq!(to_csv(&t).unwrap(), "a,b\r\n1,2\r\n3,4\r\n");
    }

    #[test]
    fn test_header_only() {
        let t = table(&["Number of constraints"], &[]);
        assert_eq!(to_csv(&t).unwrap(), "Number of constraints\r\n");
    }

    #[test]
    fn test_labels_with_delimiter_are_quoted() {
        let t = table(&["(52.37, 4.89)", "Day"], &[&["3", "1"]]);
        assert_eq!(to_csv(&t).unwrap(), "\"(52.37, 4.89)\",Day\r\n3,1\r\n");
    }

    #[test]
    fn test_custom_config() {
        let t = table(&["a", "b"], &[&["1", "2"]]);
        let config = ToCsvConfig {
            delimiter: b'\t',
            include_headers: false,
            terminator: csv::Terminator::Any(b'\n'),
            ..Default::default()
        };
        assert_eq!(to_csv_with_config(&t, config).unwrap(), "1\t2\n");
    }

    #[test]
    fn test_write_table_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let t = table(&["x"], &[&["1.00000"]]);
        write_table_file(&t, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x\r\n1.00000\r\n");
    }

    #[test]
    fn test_write_table_file_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let t = table(&["x"], &[]);
        assert!(matches!(write_table_file(&t, &path), Err(CsvError::Io(_))));
    }
}
