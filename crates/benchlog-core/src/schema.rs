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

//! Measurement schema.
//!
//! A schema is the ordered, cyclic list of measurement steps one benchmark
//! run emits. After the last step the position wraps to zero and the next
//! run begins. Step names are not unique: the same label can appear as a
//! duration at one position and as a message size at a later one, so every
//! lookup goes through the position.

use crate::error::{ExtractError, ExtractResult};

/// What kind of value a step carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StepKind {
    /// Elapsed time, normalized to milliseconds.
    Duration,
    /// Byte count or plain integer.
    Size,
}

/// A single named step in a [`MeasurementSchema`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementStep {
    pub name: String,
    pub kind: StepKind,
}

impl MeasurementStep {
    pub fn duration(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: StepKind::Duration,
        }
    }

    pub fn size(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: StepKind::Size,
        }
    }
}

/// Ordered, fixed-length, cyclic sequence of measurement steps.
///
/// # Examples
///
/// ```rust
/// use benchlog_core::{MeasurementSchema, StepKind};
///
/// let schema = MeasurementSchema::randomness_protocol();
/// assert_eq!(schema.len(), 16);
/// assert_eq!(schema.step(0).unwrap().name, "Number of constraints");
///
/// // "Generate randomness" is a duration at 6 and a message size at 12
/// assert_eq!(schema.step(6).unwrap().kind, StepKind::Duration);
/// assert_eq!(schema.step(12).unwrap().kind, StepKind::Size);
/// assert_eq!(schema.step(6).unwrap().name, schema.step(12).unwrap().name);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<MeasurementStep>", into = "Vec<MeasurementStep>"))]
pub struct MeasurementSchema {
    steps: Vec<MeasurementStep>,
}

impl MeasurementSchema {
    /// Build a schema from its steps. The schema must not be empty.
    pub fn new(steps: Vec<MeasurementStep>) -> ExtractResult<Self> {
        if steps.is_empty() {
            return Err(ExtractError::InvalidSchema(
                "a schema needs at least one step".to_string(),
            ));
        }
        if let Some((position, _)) = steps
            .iter()
            .enumerate()
            .find(|(_, step)| step.name.trim().is_empty())
        {
            return Err(ExtractError::InvalidSchema(format!(
                "step {} has an empty name",
                position
            )));
        }
        Ok(Self { steps })
    }

    /// Steps emitted by one run of the zero-knowledge randomness protocols:
    /// circuit statistics, the two timed protocol phases and their message
    /// sizes.
    pub fn randomness_protocol() -> Self {
        use MeasurementStep as S;
        Self {
            steps: vec![
                // circuit statistics
                S::size("Number of constraints"),
                S::size("Proving key size"),
                S::size("Verifying key size"),
                // randomness generation
                S::duration("Client generation"),
                S::duration("Server generation"),
                S::duration("Client verification"),
                S::duration("Generate randomness"),
                S::duration("Trusted environment computation"),
                // verifiable randomization
                S::duration("Client generation"),
                S::duration("Server verification"),
                S::duration("Verifiable randomization"),
                // message sizes
                S::size("Messages sent"),
                S::size("Generate randomness"),
                S::size("Client message"),
                S::size("Server message"),
                S::size("Verifiable randomization"),
            ],
        }
    }

    /// Number of steps in one cycle.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `position`, if the position is inside the schema.
    #[inline]
    pub fn step(&self, position: usize) -> Option<&MeasurementStep> {
        self.steps.get(position)
    }

    /// Iterate steps in schema order.
    pub fn steps(&self) -> impl Iterator<Item = &MeasurementStep> {
        self.steps.iter()
    }

    /// Step names in schema order.
    pub fn names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name.as_str()).collect()
    }
}

impl Default for MeasurementSchema {
    fn default() -> Self {
        Self::randomness_protocol()
    }
}

impl TryFrom<Vec<MeasurementStep>> for MeasurementSchema {
    type Error = ExtractError;

    fn try_from(steps: Vec<MeasurementStep>) -> ExtractResult<Self> {
        Self::new(steps)
    }
}

impl From<MeasurementSchema> for Vec<MeasurementStep> {
    fn from(schema: MeasurementSchema) -> Self {
        schema.steps
    }
}
