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

//! Daily estimate logs.
//!
//! The end-to-end examples print one estimate per simulated day rather than
//! timings. Two layouts exist:
//!
//! - **Histogram** (geo data): a `Day N:` line, an `Estimate:` line and one
//!   `<bin>: <count>` line per bin. Each day's block is preceded by the list
//!   of participant ids starting at `0`.
//! - **Point** (smart meter): a `Day N:` line followed by `Estimate: <value>`.
//!
//! Both are single-pass and produce a [`Table`] with the day in the first
//! column.

use crate::error::ExtractResult;
use crate::reader::LineReader;
use crate::table::Table;
use std::io::Read;
use tracing::debug;

/// Separator between a bin label and its count.
const BIN_SEPARATOR: &str = ": ";

/// Day number from a `Day 12:` line: the last token without its final
/// character.
fn day_label(line: &str) -> String {
    let token = crate::classifier::trailing_token(line);
    let mut chars = token.chars();
    chars.next_back();
    chars.as_str().to_string()
}

/// Text after the last `": "`, without trailing whitespace.
fn after_last_separator(line: &str) -> &str {
    line.rsplit(BIN_SEPARATOR).next().unwrap_or(line).trim_end()
}

/// Read histogram estimates.
///
/// Bins are the distinct labels in front of `": "` anywhere in the input,
/// in first-seen order, so the input is buffered and scanned twice. A
/// participant line reading exactly `0` after a day has been seen closes
/// the current row; the last row is closed at end of input.
///
/// # Examples
///
/// ```rust
/// use benchlog_core::daily::read_histogram_estimates;
/// use std::io::Cursor;
///
/// let log = "0\n1\nDay 1:\nEstimate:\n1000: 1\n2000: 1\n0\n1\nDay 2:\nEstimate:\n1000: 2\n2000: 0\n";
/// let table = read_histogram_estimates(Cursor::new(log)).unwrap();
/// assert_eq!(table.headers(), &["Day", "1000", "2000"]);
/// assert_eq!(table.rows()[1], vec!["2", "2", "0"]);
/// ```
pub fn read_histogram_estimates<R: Read>(reader: R) -> ExtractResult<Table> {
    let lines: Vec<String> = LineReader::new(reader)
        .map(|l| l.map(|(_, line)| line))
        .collect::<ExtractResult<_>>()?;

    let mut bins: Vec<String> = Vec::new();
    for line in lines.iter().filter(|l| l.contains(BIN_SEPARATOR)) {
        let bin = line.split(BIN_SEPARATOR).next().unwrap_or("").trim_end();
        if !bins.iter().any(|b| b == bin) {
            bins.push(bin.to_string());
        }
    }
    debug!(bins = bins.len(), "histogram bins");

    let mut headers = Vec::with_capacity(bins.len() + 1);
    headers.push("Day".to_string());
    headers.extend(bins.iter().cloned());
    let mut table = Table::new(headers);

    let empty_row = || vec![String::new(); bins.len() + 1];
    let mut row = empty_row();
    let mut day_found = false;

    for line in &lines {
        if line.contains("Day") {
            day_found = true;
            row[0] = day_label(line);
        } else if line.trim_end() == "0" && day_found {
            table.push_row(std::mem::replace(&mut row, empty_row()))?;
        } else if let Some(i) = bins.iter().position(|b| line.contains(b.as_str())) {
            row[i + 1] = after_last_separator(line).to_string();
        }
    }
    table.push_row(row)?;

    Ok(table)
}

/// Decimals kept on a point estimate.
const ESTIMATE_PRECISION: usize = 6;

/// Magnitudes outside `[1e-4, 1e16)` print in exponent form.
const EXPONENT_BELOW: f64 = 1e-4;
const EXPONENT_FROM: f64 = 1e16;

/// Round to six decimals and print the shortest representation that reads
/// back as the rounded value.
///
/// Whole numbers keep a trailing `.0`. Very small or very large magnitudes
/// use exponent form with a signed, two-digit exponent (`5e-05`, `1e+16`).
fn format_estimate(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    // The formatter rounds the exact binary value; reading it back gives
    // the nearest float to the rounded decimal.
    let rounded: f64 = format!("{:.*}", ESTIMATE_PRECISION, value)
        .parse()
        .unwrap_or(value);
    if rounded.is_infinite() {
        return rounded.to_string();
    }

    let magnitude = rounded.abs();
    if magnitude != 0.0 && !(EXPONENT_BELOW..EXPONENT_FROM).contains(&magnitude) {
        let text = format!("{:e}", rounded);
        if let Some((mantissa, exponent)) = text.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
            }
        }
        return text;
    }

    let text = rounded.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

/// Read point estimates: one `(day, estimate)` row per `Estimate` line.
///
/// # Examples
///
/// ```rust
/// use benchlog_core::daily::read_point_estimates;
/// use std::io::Cursor;
///
/// let log = "7\nDay 1:\nEstimate: 0.1234567\nDay 2:\nEstimate: 3\n";
/// let table = read_point_estimates(Cursor::new(log)).unwrap();
/// assert_eq!(table.rows()[0], vec!["1", "0.123457"]);
/// assert_eq!(table.rows()[1], vec!["2", "3.0"]);
/// ```
pub fn read_point_estimates<R: Read>(reader: R) -> ExtractResult<Table> {
    let mut table = Table::new(vec!["Day".to_string(), "Estimate".to_string()]);
    let mut row: Vec<String> = Vec::with_capacity(2);

    for line in LineReader::new(reader) {
        let (line_num, line) = line?;
        if line.contains("Day") {
            row.push(day_label(&line));
        } else if line.contains("Estimate") {
            let text = after_last_separator(&line);
            let value: f64 = text.parse().map_err(|_| {
                crate::ExtractError::malformed_token(line_num, 1, "Estimate", text, "<number>")
            })?;
            row.push(format_estimate(value));
            table.push_row(std::mem::take(&mut row))?;
        }
    }

    Ok(table)
}
