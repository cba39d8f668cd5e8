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

//! Read CSV back into tables.
//!
//! Only the layout written by [`crate::to_csv`] is supported: one header
//! row followed by records of the same width. Cells stay text; numeric
//! interpretation is left to [`benchlog_core::summarize`].

use crate::error::{CsvError, Result};
use benchlog_core::Table;
use std::io::Read;
use std::path::Path;

/// Default maximum number of rows to read.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Configuration for CSV input.
#[derive(Debug, Clone)]
pub struct FromCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Trim whitespace around fields (default: true)
    pub trim: bool,
    /// Maximum number of data rows (default: 1,000,000)
    pub max_rows: usize,
}

impl Default for FromCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Parse a CSV string into a table.
///
/// # Example
/// ```
/// use benchlog_csv::from_csv;
///
/// let table = from_csv("Day,Estimate\n1,0.5\n2,0.75\n").unwrap();
/// assert_eq!(table.headers(), &["Day", "Estimate"]);
/// assert_eq!(table.len(), 2);
/// ```
pub fn from_csv(csv: &str) -> Result<Table> {
    read_table(csv.as_bytes())
}

/// Read a table from `reader`.
pub fn read_table<R: Read>(reader: R) -> Result<Table> {
    read_table_with_config(reader, FromCsvConfig::default())
}

/// Read a table from the file at `path`.
pub fn read_table_file(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path)?;
    read_table(std::io::BufReader::new(file))
}

/// Read a table from `reader` with custom configuration.
pub fn read_table_with_config<R: Read>(reader: R, config: FromCsvConfig) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        return Err(CsvError::MissingHeader);
    }

    let mut table = Table::new(headers);
    for (record_idx, result) in csv_reader.records().enumerate() {
        // Security: Limit row count to prevent memory exhaustion
        if record_idx >= config.max_rows {
            return Err(CsvError::SecurityLimit {
                limit: config.max_rows,
                actual: record_idx + 1,
            });
        }
        let record = result.map_err(parse_error)?;
        table.push_row(record.iter().map(str::to_string).collect())?;
    }

    Ok(table)
}

fn parse_error(e: csv::Error) -> CsvError {
    match e.position().map(|pos| pos.line() as usize) {
        Some(line) => CsvError::ParseError {
            line,
            message: e.to_string(),
        },
        None => CsvError::CsvLib(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_simple() {
        let t = from_csv("a,b\r\n1,2\r\n3,4\r\n").unwrap();
        assert_eq!(t.headers(), &["a", "b"]);
        assert_eq!(t.rows(), &[vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn test_read_quoted_header() {
        let t = from_csv("\"(52.37, 4.89)\",Day\n3,1\n").unwrap();
        assert_eq!(t.headers()[0], "(52.37, 4.89)");
    }

    #[test]
    fn test_trim() {
        let t = from_csv("a , b\n 1 ,2 \n").unwrap();
        assert_eq!(t.headers(), &["a", "b"]);
        assert_eq!(t.rows()[0], vec!["1", "2"]);
    }

    #[test]
    fn test_header_only() {
        let t = from_csv("a,b\n").unwrap();
        assert!(t.is_empty());
        assert_eq!(t.width(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(from_csv(""), Err(CsvError::MissingHeader)));
    }

    #[test]
    fn test_ragged_row() {
        let err = from_csv("a,b\n1,2\n3\n").unwrap_err();
        assert!(matches!(err, CsvError::ParseError { line: 3, .. }), "{:?}", err);
    }

    #[test]
    fn test_row_limit() {
        let config = FromCsvConfig {
            max_rows: 2,
            ..Default::default()
        };
        let err = read_table_with_config("a\n1\n2\n3\n".as_bytes(), config).unwrap_err();
        assert!(matches!(err, CsvError::SecurityLimit { limit: 2, actual: 3 }));
    }
}
