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

//! Line classification.
//!
//! Four extraction rules recognize measurement lines. They are evaluated in
//! a fixed priority order and are **not** mutually exclusive: a line that
//! satisfies one rule is still tested against the rules after it, against
//! the state as updated by the earlier ones. On well-formed harness output
//! at most one rule fires per line; the assembler logs the lines where more
//! than one does.
//!
//! The classifier itself is stateless. It reads the current
//! [`ParserState`] and reports what a rule would extract; applying the
//! extraction to the state is the assembler's job.

use crate::error::{ExtractError, ExtractResult};
use crate::schema::{MeasurementSchema, MeasurementStep};
use crate::units::{self, UnitError};
use regex::Regex;
use std::sync::LazyLock;

/// `<digits>b`, as printed for key and message sizes.
static BYTE_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<size>[0-9]+)b$").expect("valid byte count regex"));

/// `<number><unit>`, as printed at the end of a timer line.
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<value>[0-9.]+)(?P<unit>[^0-9.]+)$").expect("valid duration regex")
});

/// Bare integer, as printed for the constraint count.
static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid integer regex"));

/// Markers that drive the extraction state machine.
///
/// # Examples
///
/// ```rust
/// use benchlog_core::AssemblerConfig;
///
/// let config = AssemblerConfig::default();
/// assert_eq!(config.start_marker, "--- START MEASUREMENTS ---");
/// assert_eq!(config.leading_fields, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AssemblerConfig {
    /// Exact content of the line that opens the measurement phase.
    pub start_marker: String,

    /// Substring identifying a timer end line.
    pub end_marker: String,

    /// Substring identifying the message-count line that switches the
    /// rest of the cycle to byte counts.
    pub message_count_marker: String,

    /// Number of leading schema positions read as circuit statistics. The
    /// first is a bare integer, the rest are byte counts.
    pub leading_fields: usize,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            start_marker: "--- START MEASUREMENTS ---".to_string(),
            end_marker: "End:".to_string(),
            message_count_marker: "Messages sent:".to_string(),
            leading_fields: 3,
        }
    }
}

/// Position of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// Before the start-of-measurements marker; every line is discarded.
    AwaitingStart,
    /// Inside the measurement phase.
    InRun {
        /// Next expected schema position.
        step: usize,
        /// Set once the message-count line has been seen in this cycle.
        size_run: bool,
    },
}

/// Extraction rules in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    SizeRunContinuation,
    DurationEnd,
    MessageCount,
    LeadingSize,
}

impl Rule {
    /// Fixed evaluation priority.
    pub const PRIORITY: [Rule; 4] = [
        Rule::SizeRunContinuation,
        Rule::DurationEnd,
        Rule::MessageCount,
        Rule::LeadingSize,
    ];
}

/// A value a rule pulled out of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub rule: Rule,
    /// Schema position the value belongs to.
    pub position: usize,
    pub value: String,
}

/// Applies the extraction rules to single lines.
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier<'a> {
    schema: &'a MeasurementSchema,
    config: &'a AssemblerConfig,
}

impl<'a> LineClassifier<'a> {
    pub fn new(schema: &'a MeasurementSchema, config: &'a AssemblerConfig) -> Self {
        Self { schema, config }
    }

    /// True if `line` opens the measurement phase.
    #[inline]
    pub fn is_start_marker(&self, line: &str) -> bool {
        line == self.config.start_marker
    }

    /// Test one rule against `line` at position `step`.
    ///
    /// Returns `Ok(None)` when the rule does not apply. A rule that applies
    /// but finds a malformed value, or a size-run line that does not name
    /// the expected step, is an error.
    pub fn classify(
        &self,
        rule: Rule,
        line_num: usize,
        line: &str,
        step: usize,
        size_run: bool,
    ) -> ExtractResult<Option<Extraction>> {
        match rule {
            Rule::SizeRunContinuation => {
                if !size_run {
                    return Ok(None);
                }
                let expected = self.expect_step(line_num, step)?;
                if !line.contains(expected.name.as_str()) {
                    return Err(ExtractError::desync(line_num, step, &expected.name, line));
                }
                let value = self.byte_count(line_num, step, trailing_token(line))?;
                Ok(Some(Extraction {
                    rule,
                    position: step,
                    value,
                }))
            }
            Rule::DurationEnd => {
                if !line.contains(self.config.end_marker.as_str()) {
                    return Ok(None);
                }
                let expected = self.expect_step(line_num, step)?;
                if !line.contains(expected.name.as_str()) {
                    return Ok(None);
                }
                let token = trailing_token(line).trim_start_matches('.');
                let value = self.duration(line_num, step, token)?;
                Ok(Some(Extraction {
                    rule,
                    position: step,
                    value,
                }))
            }
            Rule::MessageCount => {
                if !line.contains(self.config.message_count_marker.as_str()) {
                    return Ok(None);
                }
                let value = self.byte_count(line_num, step, trailing_token(line))?;
                Ok(Some(Extraction {
                    rule,
                    position: step,
                    value,
                }))
            }
            Rule::LeadingSize => {
                if step >= self.config.leading_fields {
                    return Ok(None);
                }
                let Some(expected) = self.schema.step(step) else {
                    return Ok(None);
                };
                if !line.contains(expected.name.as_str()) {
                    return Ok(None);
                }
                let token = trailing_token(line);
                let value = if step == 0 {
                    if !INTEGER_RE.is_match(token) {
                        return Err(ExtractError::malformed_token(
                            line_num,
                            step,
                            &expected.name,
                            token,
                            "<digits>",
                        ));
                    }
                    token.to_string()
                } else {
                    self.byte_count(line_num, step, token)?
                };
                Ok(Some(Extraction {
                    rule,
                    position: step,
                    value,
                }))
            }
        }
    }

    fn expect_step(&self, line_num: usize, step: usize) -> ExtractResult<&'a MeasurementStep> {
        self.schema
            .step(step)
            .ok_or(ExtractError::StepOutOfRange {
                line: line_num,
                position: step,
                len: self.schema.len(),
            })
    }

    fn step_name(&self, step: usize) -> &str {
        self.schema.step(step).map_or("<past end>", |s| s.name.as_str())
    }

    fn byte_count(&self, line_num: usize, step: usize, token: &str) -> ExtractResult<String> {
        BYTE_COUNT_RE
            .captures(token)
            .map(|caps| caps["size"].to_string())
            .ok_or_else(|| {
                ExtractError::malformed_token(
                    line_num,
                    step,
                    self.step_name(step),
                    token,
                    "<digits>b",
                )
            })
    }

    fn duration(&self, line_num: usize, step: usize, token: &str) -> ExtractResult<String> {
        let caps = DURATION_RE.captures(token).ok_or_else(|| {
            ExtractError::malformed_token(
                line_num,
                step,
                self.step_name(step),
                token,
                "<number><unit>",
            )
        })?;
        match units::normalize(&caps["value"], &caps["unit"]) {
            Ok(millis) => Ok(units::format_fixed(millis)),
            Err(UnitError::UnknownUnit(unit)) => Err(ExtractError::UnknownUnit {
                line: line_num,
                position: step,
                step: self.step_name(step).to_string(),
                unit,
            }),
            Err(UnitError::BadNumber(_)) => Err(ExtractError::malformed_token(
                line_num,
                step,
                self.step_name(step),
                token,
                "<number><unit>",
            )),
        }
    }
}

/// Last space-separated token of a line, without trailing whitespace.
#[inline]
pub fn trailing_token(line: &str) -> &str {
    line.rsplit(' ').next().unwrap_or(line).trim_end()
}
