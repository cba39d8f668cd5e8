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

//! Column projection.
//!
//! A projection is a declarative list of `(source position, label)` pairs:
//! target column `i` shows the run value at `columns[i].source`. Positions
//! may be reordered or left out, never computed. Projections are validated
//! against the schema length once, when they are built for a schema.

use crate::assembler::Run;
use crate::error::{ExtractError, ExtractResult};
use crate::schema::MeasurementSchema;

/// One visible output column.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectedColumn {
    /// Schema position the value is taken from.
    pub source: usize,
    /// Header label.
    pub label: String,
}

impl ProjectedColumn {
    pub fn new(source: usize, label: impl Into<String>) -> Self {
        Self {
            source,
            label: label.into(),
        }
    }
}

/// Display labels for every step of
/// [`MeasurementSchema::randomness_protocol`], in schema order.
pub const RANDOMNESS_LABELS: [&str; 16] = [
    "# constraints",
    "|ek|",
    "|vk|",
    "Client | GenRand-1 (ms)",
    "Server | GenRand (ms)",
    "Client | GenRand-2 (ms)",
    "Total | GenRand (ms)",
    "Trusted environment | create and sign value (ms)",
    "Client | Randomize (ms)",
    "Server | Verify (ms)",
    "Total | Randomize + Verify (ms)",
    "Communication | Total (b)",
    "Communication | GenRand | Total (b)",
    "Communication | GenRand-1 (b)",
    "Communication | GenRand-2 (b)",
    "Communication | Randomize (b)",
];

/// Curated subset for publication tables: per-party timings, per-message
/// sizes, then key sizes and the constraint count. Phase totals are left
/// out.
pub const PUBLICATION_ORDER: [usize; 11] = [3, 5, 8, 4, 9, 13, 14, 15, 1, 2, 0];

/// Named projection presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProjectionPreset {
    /// Every step, relabelled, in schema order.
    Full,
    /// The curated [`PUBLICATION_ORDER`] subset.
    #[default]
    Publication,
}

impl std::str::FromStr for ProjectionPreset {
    type Err = ExtractError;

    fn from_str(s: &str) -> ExtractResult<Self> {
        match s {
            "full" => Ok(Self::Full),
            "publication" => Ok(Self::Publication),
            other => Err(ExtractError::InvalidProjection(format!(
                "unknown preset '{}' (expected 'full' or 'publication')",
                other
            ))),
        }
    }
}

/// Validated positional projection.
///
/// # Examples
///
/// ```rust
/// use benchlog_core::{ColumnProjection, MeasurementSchema, ProjectedColumn};
///
/// let schema = MeasurementSchema::randomness_protocol();
/// let projection = ColumnProjection::new(
///     vec![ProjectedColumn::new(2, "|vk|"), ProjectedColumn::new(0, "# constraints")],
///     &schema,
/// ).unwrap();
/// assert_eq!(projection.labels(), vec!["|vk|", "# constraints"]);
///
/// // Positions must exist in the schema
/// assert!(ColumnProjection::new(vec![ProjectedColumn::new(16, "x")], &schema).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProjection {
    columns: Vec<ProjectedColumn>,
    schema_len: usize,
}

impl ColumnProjection {
    /// Validate `columns` against `schema`.
    pub fn new(columns: Vec<ProjectedColumn>, schema: &MeasurementSchema) -> ExtractResult<Self> {
        if columns.is_empty() {
            return Err(ExtractError::InvalidProjection(
                "a projection needs at least one column".to_string(),
            ));
        }
        if let Some(col) = columns.iter().find(|c| c.source >= schema.len()) {
            return Err(ExtractError::InvalidProjection(format!(
                "column '{}' reads position {} but the schema has {} steps",
                col.label,
                col.source,
                schema.len()
            )));
        }
        Ok(Self {
            columns,
            schema_len: schema.len(),
        })
    }

    /// Every schema position in order, labelled with the step name.
    pub fn identity(schema: &MeasurementSchema) -> Self {
        Self {
            columns: schema
                .steps()
                .enumerate()
                .map(|(i, step)| ProjectedColumn::new(i, step.name.clone()))
                .collect(),
            schema_len: schema.len(),
        }
    }

    /// Build a preset for the randomness protocol schema.
    ///
    /// Fails if `schema` is shorter than the preset expects.
    pub fn preset(preset: ProjectionPreset, schema: &MeasurementSchema) -> ExtractResult<Self> {
        let columns = match preset {
            ProjectionPreset::Full => RANDOMNESS_LABELS
                .iter()
                .enumerate()
                .map(|(i, label)| ProjectedColumn::new(i, *label))
                .collect(),
            ProjectionPreset::Publication => PUBLICATION_ORDER
                .iter()
                .map(|&i| ProjectedColumn::new(i, RANDOMNESS_LABELS[i]))
                .collect(),
        };
        Self::new(columns, schema)
    }

    /// Number of output columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Header labels in output order.
    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }

    /// Project one run into output order.
    pub fn project(&self, run: &Run) -> ExtractResult<Vec<String>> {
        if run.len() != self.schema_len {
            return Err(ExtractError::InvalidProjection(format!(
                "run has {} values but the projection was built for {} steps",
                run.len(),
                self.schema_len
            )));
        }
        Ok(self
            .columns
            .iter()
            .map(|c| run.values()[c.source].clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::MeasurementStep;

    fn run_of(values: &[&str]) -> Run {
        Run::from_values(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_preset_labels() {
        let schema = MeasurementSchema::default();
        let p = ColumnProjection::preset(ProjectionPreset::Publication, &schema).unwrap();
        assert_eq!(p.width(), 11);
        assert_eq!(p.labels()[0], "Client | GenRand-1 (ms)");
        assert_eq!(p.labels()[10], "# constraints");

        let full = ColumnProjection::preset(ProjectionPreset::Full, &schema).unwrap();
        assert_eq!(full.width(), 16);
        assert_eq!(full.labels(), RANDOMNESS_LABELS.to_vec());
    }

    #[test]
    fn test_preset_rejects_short_schema() {
        let schema = MeasurementSchema::new(vec![MeasurementStep::size("Messages sent")]).unwrap();
        assert!(ColumnProjection::preset(ProjectionPreset::Full, &schema).is_err());
    }

    #[test]
    fn test_empty_projection_rejected() {
        let schema = MeasurementSchema::default();
        assert!(matches!(
            ColumnProjection::new(vec![], &schema),
            Err(ExtractError::InvalidProjection(_))
        ));
    }

    #[test]
    fn test_project_reorders_and_drops() {
        let run = run_of(&["1", "2", "3", "4"]);
        let schema = MeasurementSchema::new(vec![MeasurementStep::size("x"); 4]).unwrap();
        let p = ColumnProjection::new(
            vec![ProjectedColumn::new(3, "d"), ProjectedColumn::new(1, "b")],
            &schema,
        )
        .unwrap();
        assert_eq!(p.project(&run).unwrap(), vec!["4", "2"]);
        // pure
        assert_eq!(p.project(&run).unwrap(), p.project(&run).unwrap());
    }

    #[test]
    fn test_project_same_values_under_any_order() {
        let run = run_of(&["1", "2", "3"]);
        let schema = MeasurementSchema::new(vec![MeasurementStep::size("x"); 3]).unwrap();
        let forward = ColumnProjection::identity(&schema);
        let reversed = ColumnProjection::new(
            (0..3).rev().map(|i| ProjectedColumn::new(i, "c")).collect(),
            &schema,
        )
        .unwrap();
        let mut a = forward.project(&run).unwrap();
        let mut b = reversed.project(&run).unwrap();
        assert_ne!(a, b);
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn test_project_rejects_wrong_width() {
        let run = run_of(&["1", "2"]);
        let schema = MeasurementSchema::default();
        let p = ColumnProjection::identity(&schema);
        assert!(p.project(&run).is_err());
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("full".parse::<ProjectionPreset>().unwrap(), ProjectionPreset::Full);
        assert_eq!(
            "publication".parse::<ProjectionPreset>().unwrap(),
            ProjectionPreset::Publication
        );
        assert!("tiny".parse::<ProjectionPreset>().is_err());
    }
}
