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

//! Run assembly.
//!
//! The [`RunAssembler`] is the extraction state machine. It discards every
//! line until the start-of-measurements marker, then feeds each line through
//! the classifier rules in priority order, appending extracted values to the
//! in-progress run. A run is sealed and handed out the moment the schema
//! position wraps back to zero; a partial run left at end of input is
//! dropped.
//!
//! One assembler instance processes one input file. There is no global
//! position state: `(step, size_run)` lives in [`ParserState`] and is reset
//! by creating a new assembler.
//!
//! # Examples
//!
//! ```rust
//! use benchlog_core::{extract_runs, AssemblerConfig, MeasurementSchema, MeasurementStep};
//! use std::io::Cursor;
//!
//! let schema = MeasurementSchema::new(vec![
//!     MeasurementStep::size("Number of constraints"),
//!     MeasurementStep::duration("Prove"),
//!     MeasurementStep::size("Messages sent"),
//!     MeasurementStep::size("Proof"),
//! ]).unwrap();
//!
//! let log = "\
//! noise before the marker
//! --- START MEASUREMENTS ---
//! Number of constraints: 100
//! End:     Prove ..........2.5ms
//! Messages sent: 64b
//! ··Proof: 64b
//! ";
//!
//! let config = AssemblerConfig {
//!     leading_fields: 1,
//!     ..Default::default()
//! };
//! let runs = extract_runs(Cursor::new(log), &schema, &config).unwrap();
//! assert_eq!(runs.len(), 1);
//! assert_eq!(runs[0].values(), &["100", "2.50000", "64", "64"]);
//! ```

use crate::classifier::{AssemblerConfig, LineClassifier, ParserState, Rule};
use crate::error::ExtractResult;
use crate::reader::LineReader;
use crate::schema::MeasurementSchema;
use std::io::Read;
use tracing::{debug, warn};

/// One completed measurement cycle: one value per schema step, in schema
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    values: Vec<String>,
}

impl Run {
    #[cfg(test)]
    pub(crate) fn from_values(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Values in schema order.
    #[inline]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a schema position.
    #[inline]
    pub fn get(&self, position: usize) -> Option<&str> {
        self.values.get(position).map(String::as_str)
    }

    pub fn into_values(self) -> Vec<String> {
        self.values
    }
}

/// Line-at-a-time extraction state machine.
pub struct RunAssembler<'a> {
    classifier: LineClassifier<'a>,
    schema_len: usize,
    state: ParserState,
    buffer: Vec<String>,
    completed: usize,
}

impl<'a> RunAssembler<'a> {
    pub fn new(schema: &'a MeasurementSchema, config: &'a AssemblerConfig) -> Self {
        Self {
            classifier: LineClassifier::new(schema, config),
            schema_len: schema.len(),
            state: ParserState::AwaitingStart,
            buffer: Vec::with_capacity(schema.len()),
            completed: 0,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Values collected for the run in progress.
    #[inline]
    pub fn pending(&self) -> &[String] {
        &self.buffer
    }

    /// Number of runs sealed so far.
    #[inline]
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Process one line. Returns the run sealed by this line, if any.
    ///
    /// Only the size-run continuation rule can complete a cycle and it is
    /// tested once per line, so a line seals at most one run.
    pub fn feed_line(&mut self, line_num: usize, line: &str) -> ExtractResult<Option<Run>> {
        let (mut step, mut size_run) = match self.state {
            ParserState::AwaitingStart => {
                if self.classifier.is_start_marker(line) {
                    debug!(line = line_num, "start of measurements");
                    self.state = ParserState::InRun {
                        step: 0,
                        size_run: false,
                    };
                }
                return Ok(None);
            }
            ParserState::InRun { step, size_run } => (step, size_run),
        };

        let mut sealed = None;
        let mut fired = 0usize;

        for rule in Rule::PRIORITY {
            let Some(extraction) = self
                .classifier
                .classify(rule, line_num, line, step, size_run)?
            else {
                continue;
            };
            fired += 1;
            debug_assert_eq!(extraction.position, step);
            debug_assert_eq!(extraction.rule, rule);
            self.buffer.push(extraction.value);

            match rule {
                Rule::SizeRunContinuation => {
                    step = (step + 1) % self.schema_len;
                    if step == 0 {
                        debug_assert_eq!(self.buffer.len(), self.schema_len);
                        sealed = Some(Run {
                            values: std::mem::replace(
                                &mut self.buffer,
                                Vec::with_capacity(self.schema_len),
                            ),
                        });
                        size_run = false;
                    }
                }
                Rule::MessageCount => {
                    size_run = true;
                    step += 1;
                }
                Rule::DurationEnd | Rule::LeadingSize => step += 1,
            }
        }

        self.state = ParserState::InRun { step, size_run };

        if fired > 1 {
            warn!(
                line = line_num,
                rules = fired,
                "line matched more than one extraction rule"
            );
        }
        if sealed.is_some() {
            self.completed += 1;
            debug!(line = line_num, run = self.completed, "run sealed");
        }

        Ok(sealed)
    }

    /// End of input. Drops any partial run and returns the number of
    /// completed runs.
    pub fn finish(self) -> usize {
        if !self.buffer.is_empty() {
            warn!(
                values = self.buffer.len(),
                expected = self.schema_len,
                "discarding partial run at end of input"
            );
        }
        if self.state == ParserState::AwaitingStart {
            warn!("start-of-measurements marker never seen");
        }
        self.completed
    }
}

/// Iterator over the runs in a log stream.
///
/// Stops at the first error; the remaining input is not read.
pub struct RunStream<'a, R: Read> {
    reader: LineReader<R>,
    assembler: Option<RunAssembler<'a>>,
}

impl<'a, R: Read> RunStream<'a, R> {
    pub fn new(reader: R, schema: &'a MeasurementSchema, config: &'a AssemblerConfig) -> Self {
        Self {
            reader: LineReader::new(reader),
            assembler: Some(RunAssembler::new(schema, config)),
        }
    }

    fn next_run(&mut self) -> ExtractResult<Option<Run>> {
        while let Some(assembler) = self.assembler.as_mut() {
            match self.reader.next_line() {
                Ok(Some((line_num, line))) => {
                    if let Some(run) = assembler.feed_line(line_num, &line)? {
                        return Ok(Some(run));
                    }
                }
                Ok(None) => {
                    if let Some(assembler) = self.assembler.take() {
                        assembler.finish();
                    }
                }
                Err(e) => {
                    self.assembler = None;
                    return Err(e);
                }
            }
        }
        Ok(None)
    }
}

impl<R: Read> Iterator for RunStream<'_, R> {
    type Item = ExtractResult<Run>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_run() {
            Ok(Some(run)) => Some(Ok(run)),
            Ok(None) => None,
            Err(e) => {
                self.assembler = None;
                Some(Err(e))
            }
        }
    }
}

/// Extract every completed run from a log stream.
pub fn extract_runs<R: Read>(
    reader: R,
    schema: &MeasurementSchema,
    config: &AssemblerConfig,
) -> ExtractResult<Vec<Run>> {
    RunStream::new(reader, schema, config).collect()
}
