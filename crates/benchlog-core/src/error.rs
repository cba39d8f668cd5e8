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

//! Error types for log extraction.
//!
//! Every deviation from the expected measurement schema is fatal for the
//! file being processed: a log that does not line up with the schema is
//! treated as a version mismatch between the parser and the harness that
//! produced it, not as recoverable noise.
//!
//! # Error Categories
//!
//! - **Schema desynchronization**: an expected step name is absent where required
//! - **Malformed tokens**: a trailing value fails its numeric/byte-count/unit pattern
//! - **Unknown units**: a duration suffix outside `s`, `ms`, `µs`
//! - **Empty datasets**: statistics requested on a table with no rows
//! - **Configuration**: invalid schemas or projections
//!
//! # Examples
//!
//! ```rust
//! use benchlog_core::ExtractError;
//!
//! let err = ExtractError::malformed_token(12, 4, "Proving key size", "12kb", "<digits>b");
//! assert_eq!(err.line(), Some(12));
//! assert!(err.to_string().contains("line 12"));
//! assert!(err.to_string().contains("12kb"));
//! ```

use thiserror::Error;

/// Errors that can occur while extracting runs or summarizing tables.
///
/// Extraction errors carry the 1-based line number and the schema step
/// (position and name) that was being processed when the invariant broke.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be read, e.g. because it is not valid UTF-8.
    #[error("Read error at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// A line did not reference the step the schema expected at this point.
    #[error("Schema desynchronization at line {line}: expected step {position} ('{expected}'), got '{found}'")]
    SchemaDesynchronization {
        line: usize,
        position: usize,
        expected: String,
        found: String,
    },

    /// The schema index ran past the last step without wrapping.
    #[error("Schema desynchronization at line {line}: step index {position} is past the end of a {len}-step schema")]
    StepOutOfRange {
        line: usize,
        position: usize,
        len: usize,
    },

    /// A trailing value token failed its expected pattern.
    #[error("Malformed token at line {line}, step {position} ('{step}'): expected {expected}, got '{token}'")]
    MalformedToken {
        line: usize,
        position: usize,
        step: String,
        token: String,
        expected: &'static str,
    },

    /// A duration suffix outside the closed unit set.
    #[error("Unknown time unit '{unit}' at line {line}, step {position} ('{step}')")]
    UnknownUnit {
        line: usize,
        position: usize,
        step: String,
        unit: String,
    },

    /// A table cell could not be read as a number.
    #[error("Non-numeric value '{value}' in column '{column}', row {row}")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },

    /// A row does not match the table header.
    #[error("Row width mismatch: expected {expected} columns, got {actual} in row {row}")]
    RowWidth {
        expected: usize,
        actual: usize,
        row: usize,
    },

    /// Statistics were requested on a table with no rows.
    #[error("Empty dataset: no rows to summarize in '{0}'")]
    EmptyDataset(String),

    /// Invalid measurement schema.
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// Invalid column projection.
    #[error("Invalid projection: {0}")]
    InvalidProjection(String),
}

impl ExtractError {
    /// Create a schema desynchronization error.
    #[inline]
    pub fn desync(
        line: usize,
        position: usize,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::SchemaDesynchronization {
            line,
            position,
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a malformed token error.
    #[inline]
    pub fn malformed_token(
        line: usize,
        position: usize,
        step: impl Into<String>,
        token: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::MalformedToken {
            line,
            position,
            step: step.into(),
            token: token.into(),
            expected,
        }
    }

    /// Get the line number if available.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::SchemaDesynchronization { line, .. }
            | Self::StepOutOfRange { line, .. }
            | Self::MalformedToken { line, .. }
            | Self::UnknownUnit { line, .. }
            | Self::Read { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Get the schema position involved, if any.
    #[inline]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::SchemaDesynchronization { position, .. }
            | Self::StepOutOfRange { position, .. }
            | Self::MalformedToken { position, .. }
            | Self::UnknownUnit { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_accessor() {
        assert_eq!(ExtractError::desync(7, 3, "Client generation", "noise").line(), Some(7));
        assert_eq!(
            ExtractError::StepOutOfRange {
                line: 9,
                position: 16,
                len: 16
            }
            .line(),
            Some(9)
        );
        assert_eq!(ExtractError::EmptyDataset("base".into()).line(), None);
    }

    #[test]
    fn test_position_accessor() {
        let err = ExtractError::malformed_token(1, 2, "Verifying key size", "x", "<digits>b");
        assert_eq!(err.position(), Some(2));
        assert_eq!(ExtractError::InvalidSchema("empty".into()).position(), None);
    }

    #[test]
    fn test_display_names_step() {
        let err = ExtractError::desync(42, 12, "Generate randomness", "··Client message: 10b");
        let msg = err.to_string();
        assert!(msg.contains("line 42"));
        assert!(msg.contains("step 12"));
        assert!(msg.contains("Generate randomness"));
    }

    #[test]
    fn test_unknown_unit_display() {
        let err = ExtractError::UnknownUnit {
            line: 3,
            position: 4,
            step: "Server generation".into(),
            unit: "ns".into(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown time unit 'ns' at line 3, step 4 ('Server generation')"
        );
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ExtractError = io.into();
        assert!(matches!(err, ExtractError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }
}
