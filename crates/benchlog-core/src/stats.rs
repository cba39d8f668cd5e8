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

//! Per-column summary statistics.
//!
//! Every column of a projected table is numeric by the time it is
//! summarized. Median and arithmetic mean are computed independently per
//! column and rendered with [`PRECISION`](crate::units::PRECISION) decimals.

use crate::error::{ExtractError, ExtractResult};
use crate::table::Table;
use crate::units::format_fixed;

/// Which statistic a summary row carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Median,
    Mean,
}

impl Statistic {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Median => "median",
            Self::Mean => "mean",
        }
    }
}

/// Median of `values`. Sorts in place. `None` for an empty slice.
///
/// An even count yields the mean of the two middle values.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median and mean of every column of one table.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    labels: Vec<String>,
    medians: Vec<f64>,
    means: Vec<f64>,
}

impl Summary {
    /// Column labels, in table order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// One statistic per column, formatted with fixed precision.
    pub fn formatted(&self, statistic: Statistic) -> Vec<String> {
        let values = match statistic {
            Statistic::Median => &self.medians,
            Statistic::Mean => &self.means,
        };
        values.iter().copied().map(format_fixed).collect()
    }
}

/// Summarize every column of `table`.
///
/// `name` identifies the table in errors.
///
/// # Examples
///
/// ```rust
/// use benchlog_core::{summarize, Statistic, Table};
///
/// let mut table = Table::new(vec!["ms".to_string()]);
/// for v in ["1", "2", "3", "4"] {
///     table.push_row(vec![v.to_string()]).unwrap();
/// }
/// let summary = summarize(&table, "example").unwrap();
/// assert_eq!(summary.formatted(Statistic::Median), vec!["2.50000"]);
/// assert_eq!(summary.formatted(Statistic::Mean), vec!["2.50000"]);
/// ```
pub fn summarize(table: &Table, name: &str) -> ExtractResult<Summary> {
    if table.is_empty() {
        return Err(ExtractError::EmptyDataset(name.to_string()));
    }

    let mut medians = Vec::with_capacity(table.width());
    let mut means = Vec::with_capacity(table.width());
    let mut column = Vec::with_capacity(table.len());

    for (index, label) in table.headers().iter().enumerate() {
        column.clear();
        for (row, cell) in table.column(index).enumerate() {
            let value = cell.trim().parse::<f64>().map_err(|_| ExtractError::NonNumeric {
                column: label.clone(),
                row: row + 1,
                value: cell.to_string(),
            })?;
            column.push(value);
        }
        // Width is enforced on insert, so every column is as long as the table.
        means.push(mean(&column).unwrap_or(f64::NAN));
        medians.push(median(&mut column).unwrap_or(f64::NAN));
    }

    Ok(Summary {
        labels: table.headers().to_vec(),
        medians,
        means,
    })
}

/// One labelled row of a cross-protocol summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    /// Identifying label columns, e.g. dataset and scheme.
    pub labels: Vec<String>,
    /// Formatted statistic per data column.
    pub values: Vec<String>,
}

impl SummaryRow {
    pub fn new(labels: Vec<String>, summary: &Summary, statistic: Statistic) -> Self {
        Self {
            labels,
            values: summary.formatted(statistic),
        }
    }

    /// Label columns followed by data columns.
    pub fn into_cells(self) -> Vec<String> {
        let mut cells = self.labels;
        cells.extend(self.values);
        cells
    }
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
    fn test_median_odd() {
        assert_eq!(median(&mut [3.0, 1.0, 2.0]), Some(2.0));
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn test_median_and_mean_empty() {
        assert_eq!(median(&mut []), None);
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_formatted_statistics() {
        let t = table(&["x"], &[&["1"], &["2"], &["3"]]);
        let s = summarize(&t, "t").unwrap();
        assert_eq!(s.formatted(Statistic::Median), vec!["2.00000"]);
        assert_eq!(s.formatted(Statistic::Mean), vec!["2.00000"]);

        let t = table(&["x"], &[&["1"], &["2"], &["3"], &["4"]]);
        let s = summarize(&t, "t").unwrap();
        assert_eq!(s.formatted(Statistic::Median), vec!["2.50000"]);
    }

    #[test]
    fn test_columns_independent() {
        let t = table(
            &["a", "b"],
            &[&["10", "0.00001"], &["20", "0.00002"], &["60", "0.00006"]],
        );
        let s = summarize(&t, "t").unwrap();
        assert_eq!(s.formatted(Statistic::Median), vec!["20.00000", "0.00002"]);
        assert_eq!(s.formatted(Statistic::Mean), vec!["30.00000", "0.00003"]);
        assert_eq!(s.labels(), &["a", "b"]);
    }

    #[test]
    fn test_empty_table_is_error() {
        let t = table(&["a"], &[]);
        assert!(matches!(
            summarize(&t, "base_real"),
            Err(ExtractError::EmptyDataset(name)) if name == "base_real"
        ));
    }

    #[test]
    fn test_non_numeric_cell() {
        let t = table(&["a"], &[&["1"], &["n/a"]]);
        let err = summarize(&t, "t").unwrap_err();
        assert!(matches!(
            err,
            ExtractError::NonNumeric { ref column, row: 2, ref value } if column == "a" && value == "n/a"
        ));
    }

    #[test]
    fn test_summary_row_cells() {
        let t = table(&["a"], &[&["1"], &["3"]]);
        let s = summarize(&t, "t").unwrap();
        let row = SummaryRow::new(vec!["Histogram/GPS".into(), "Base".into()], &s, Statistic::Mean);
        assert_eq!(row.into_cells(), vec!["Histogram/GPS", "Base", "2.00000"]);
    }
}
