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

//! Rectangular tables of text cells.

use crate::assembler::Run;
use crate::error::{ExtractError, ExtractResult};
use crate::projection::ColumnProjection;

/// A header row plus data rows, all of the same width.
///
/// # Examples
///
/// ```rust
/// use benchlog_core::Table;
///
/// let mut table = Table::new(vec!["Day".to_string(), "Estimate".to_string()]);
/// table.push_row(vec!["1".to_string(), "0.25".to_string()]).unwrap();
/// assert_eq!(table.len(), 1);
/// assert!(table.push_row(vec!["2".to_string()]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Project `runs` into a table labelled by `projection`.
    pub fn from_runs<'r>(
        runs: impl IntoIterator<Item = &'r Run>,
        projection: &ColumnProjection,
    ) -> ExtractResult<Self> {
        let mut table = Self::new(projection.labels().into_iter().map(String::from).collect());
        for run in runs {
            table.rows.push(projection.project(run)?);
        }
        Ok(table)
    }

    /// Append a row. Its width must match the header.
    pub fn push_row(&mut self, row: Vec<String>) -> ExtractResult<()> {
        if row.len() != self.headers.len() {
            return Err(ExtractError::RowWidth {
                expected: self.headers.len(),
                actual: row.len(),
                row: self.rows.len() + 1,
            });
        }
        self.rows.push(row);
        Ok(())
    }

    #[inline]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of one column, top to bottom.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().filter_map(move |r| r.get(index).map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{MeasurementSchema, MeasurementStep};
    use crate::projection::ProjectedColumn;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_runs_projects_each_run() {
        let schema = MeasurementSchema::new(vec![MeasurementStep::size("a"); 3]).unwrap();
        let projection = ColumnProjection::new(
            vec![ProjectedColumn::new(2, "third"), ProjectedColumn::new(0, "first")],
            &schema,
        )
        .unwrap();
        let runs = vec![
            Run::from_values(strings(&["1", "2", "3"])),
            Run::from_values(strings(&["4", "5", "6"])),
        ];
        let table = Table::from_runs(&runs, &projection).unwrap();
        assert_eq!(table.headers(), &["third", "first"]);
        assert_eq!(table.rows(), &[strings(&["3", "1"]), strings(&["6", "4"])]);
    }

    #[test]
    fn test_row_width_checked() {
        let mut table = Table::new(strings(&["a", "b"]));
        table.push_row(strings(&["1", "2"])).unwrap();
        let err = table.push_row(strings(&["1", "2", "3"])).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::RowWidth {
                expected: 2,
                actual: 3,
                row: 2
            }
        ));
    }

    #[test]
    fn test_column_iter() {
        let mut table = Table::new(strings(&["a", "b"]));
        table.push_row(strings(&["1", "2"])).unwrap();
        table.push_row(strings(&["3", "4"])).unwrap();
        assert_eq!(table.column(1).collect::<Vec<_>>(), vec!["2", "4"]);
        assert_eq!(table.column(5).count(), 0);
    }
}
