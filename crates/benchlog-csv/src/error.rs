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

//! Error types for CSV persistence.

use thiserror::Error;

/// CSV read/write error types.
///
/// # Examples
///
/// ```
/// use benchlog_csv::CsvError;
///
/// let err = CsvError::ParseError {
///     line: 3,
///     message: "found record with 2 fields, but the previous record has 3 fields".to_string(),
/// };
/// assert!(err.to_string().contains("line 3"));
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// CSV parsing error at a specific line.
    #[error("CSV parse error at line {line}: {message}")]
    ParseError {
        /// Line number where the error occurred (1-based).
        line: usize,
        /// Detailed error message.
        message: String,
    },

    /// Header row missing or empty.
    ///
    /// ```
    /// use benchlog_csv::CsvError;
    ///
    /// let err = CsvError::MissingHeader;
    /// assert_eq!(err.to_string(), "Missing header row");
    /// ```
    #[error("Missing header row")]
    MissingHeader,

    /// Row count exceeded the configured limit.
    #[error("Security limit exceeded: row count {actual} exceeds maximum {limit}")]
    SecurityLimit {
        /// Maximum allowed rows.
        limit: usize,
        /// Actual row count encountered.
        actual: usize,
    },

    /// Output was not valid UTF-8.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// Where the invalid bytes were produced.
        context: String,
    },

    /// I/O error during CSV reading or writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// Table invariant broken while rebuilding a table.
    #[error(transparent)]
    Table(#[from] benchlog_core::ExtractError),
}

/// Result type for CSV operations.
pub type Result<T> = std::result::Result<T, CsvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_limit_display() {
        let err = CsvError::SecurityLimit {
            limit: 10,
            actual: 11,
        };
        assert_eq!(
            err.to_string(),
            "Security limit exceeded: row count 11 exceeds maximum 10"
        );
    }

    #[test]
    fn test_table_error_is_transparent() {
        let inner = benchlog_core::ExtractError::EmptyDataset("base".into());
        let msg = inner.to_string();
        let err: CsvError = inner.into();
        assert_eq!(err.to_string(), msg);
    }

    #[test]
    fn test_io_from() {
        let err: CsvError = std::io::Error::new(std::io::ErrorKind::NotFound, "nope").into();
        assert!(matches!(err, CsvError::Io(_)));
    }
}
