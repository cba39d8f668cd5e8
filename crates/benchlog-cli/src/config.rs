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

//! Pipeline configuration.
//!
//! The built-in configuration processes the six zero-knowledge randomness
//! benchmarks (three schemes over two datasets) with the publication
//! projection. A JSON file can replace any part of it:
//!
//! ```json
//! {
//!   "protocols": [
//!     { "id": "base_real", "label": { "dataset": "Real/Smart meter", "scheme": "Base" } }
//!   ],
//!   "projection": "full"
//! }
//! ```
//!
//! Missing fields keep their defaults. `schema` is a list of
//! `{ "name": ..., "kind": "duration" | "size" }` steps, `projection` is
//! either a preset name or a list of `{ "source": ..., "label": ... }`
//! columns, and `assembler` overrides the marker strings.

use crate::error::CliError;
use benchlog_core::{
    AssemblerConfig, ColumnProjection, MeasurementSchema, ProjectedColumn, ProjectionPreset,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default directory holding raw benchmark logs.
pub const BENCH_INPUT_DIR: &str = "./results/raw/benches";
/// Default directory for parsed benchmark tables.
pub const BENCH_OUTPUT_DIR: &str = "./results/parsed/benches";
/// Default directory holding raw geo data logs.
pub const GEO_DATA_INPUT_DIR: &str = "./results/raw/geo_data";
/// Default directory for parsed geo data tables.
pub const GEO_DATA_OUTPUT_DIR: &str = "./results/parsed/geo_data";
/// Default directory holding raw smart meter logs.
pub const SMART_METER_INPUT_DIR: &str = "./results/raw/smart_meter";
/// Default directory for parsed smart meter tables.
pub const SMART_METER_OUTPUT_DIR: &str = "./results/parsed/smart_meter";

/// Schemes run by the end-to-end examples.
pub const DAILY_PROTOCOLS: [&str; 3] = ["base", "expand", "shuffle"];

/// Human-readable label of one protocol in the summary tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolLabel {
    pub dataset: String,
    pub scheme: String,
}

/// One protocol to process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolSpec {
    /// Identifier used in file names.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<ProtocolLabel>,
}

impl ProtocolSpec {
    pub fn new(id: impl Into<String>, dataset: &str, scheme: &str) -> Self {
        Self {
            id: id.into(),
            label: Some(ProtocolLabel {
                dataset: dataset.to_string(),
                scheme: scheme.to_string(),
            }),
        }
    }

    /// `[dataset, scheme]`; an unlabelled protocol shows its id and an
    /// empty scheme.
    pub fn label_cells(&self) -> Vec<String> {
        match &self.label {
            Some(label) => vec![label.dataset.clone(), label.scheme.clone()],
            None => vec![self.id.clone(), String::new()],
        }
    }
}

/// Output projection: a preset name or an explicit column list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectionConfig {
    Preset(ProjectionPreset),
    Columns(Vec<ProjectedColumn>),
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self::Preset(ProjectionPreset::default())
    }
}

/// Everything the protocol runner needs besides directories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub protocols: Vec<ProtocolSpec>,
    pub schema: MeasurementSchema,
    pub projection: ProjectionConfig,
    pub assembler: AssemblerConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            protocols: vec![
                ProtocolSpec::new("base_histogram", "Histogram/GPS", "Base"),
                ProtocolSpec::new("expand_histogram", "Histogram/GPS", "Expand"),
                ProtocolSpec::new("shuffle_histogram", "Histogram/GPS", "Shuffle"),
                ProtocolSpec::new("base_real", "Real/Smart meter", "Base"),
                ProtocolSpec::new("expand_real", "Real/Smart meter", "Expand"),
                ProtocolSpec::new("shuffle_real", "Real/Smart meter", "Shuffle"),
            ],
            schema: MeasurementSchema::randomness_protocol(),
            projection: ProjectionConfig::default(),
            assembler: AssemblerConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Parse a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, CliError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CliError::config(format!("invalid pipeline configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = crate::commands::read_file(path)?;
        Self::from_json(&content)
    }

    /// Check the parts that do not depend on input files.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.protocols.is_empty() {
            return Err(CliError::config("protocol list is empty"));
        }
        if let Some(p) = self.protocols.iter().find(|p| p.id.trim().is_empty()) {
            return Err(CliError::config(format!(
                "protocol with empty id (label {:?})",
                p.label
            )));
        }
        self.column_projection()?;
        Ok(())
    }

    /// Build the projection against the configured schema.
    pub fn column_projection(&self) -> Result<ColumnProjection, CliError> {
        let projection = match &self.projection {
            ProjectionConfig::Preset(preset) => ColumnProjection::preset(*preset, &self.schema),
            ProjectionConfig::Columns(columns) => {
                ColumnProjection::new(columns.clone(), &self.schema)
            }
        };
        projection.map_err(|e| CliError::config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PipelineConfig::default();
        config.validate().unwrap();
        assert_eq!(config.protocols.len(), 6);
        assert_eq!(config.column_projection().unwrap().width(), 11);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PipelineConfig::from_json(r#"{ "projection": "full" }"#).unwrap();
        assert_eq!(config.protocols.len(), 6);
        assert_eq!(config.column_projection().unwrap().width(), 16);
    }

    #[test]
    fn test_explicit_columns() {
        let json = r#"{ "projection": [ { "source": 0, "label": "constraints" } ] }"#;
        let config = PipelineConfig::from_json(json).unwrap();
        assert_eq!(config.column_projection().unwrap().labels(), vec!["constraints"]);
    }

    #[test]
    fn test_column_out_of_range() {
        let json = r#"{ "projection": [ { "source": 40, "label": "nope" } ] }"#;
        assert!(matches!(
            PipelineConfig::from_json(json),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_custom_schema_needs_matching_projection() {
        let json = r#"{
            "schema": [
                { "name": "Number of constraints", "kind": "size" },
                { "name": "Prove", "kind": "duration" }
            ]
        }"#;
        // The publication preset reads positions past a two-step schema.
        assert!(PipelineConfig::from_json(json).is_err());

        let json = r#"{
            "schema": [
                { "name": "Number of constraints", "kind": "size" },
                { "name": "Prove", "kind": "duration" }
            ],
            "projection": [ { "source": 1, "label": "Prove (ms)" } ],
            "assembler": { "leading_fields": 1 }
        }"#;
        let config = PipelineConfig::from_json(json).unwrap();
        assert_eq!(config.schema.len(), 2);
        assert_eq!(config.assembler.leading_fields, 1);
        assert_eq!(config.assembler.start_marker, "--- START MEASUREMENTS ---");
    }

    #[test]
    fn test_empty_protocols_rejected() {
        assert!(PipelineConfig::from_json(r#"{ "protocols": [] }"#).is_err());
    }

    #[test]
    fn test_label_cells() {
        let labelled = ProtocolSpec::new("base_real", "Real/Smart meter", "Base");
        assert_eq!(labelled.label_cells(), vec!["Real/Smart meter", "Base"]);
        let bare = ProtocolSpec {
            id: "custom".into(),
            label: None,
        };
        assert_eq!(bare.label_cells(), vec!["custom", ""]);
    }

    #[test]
    fn test_unknown_schema_kind() {
        let json = r#"{ "schema": [ { "name": "x", "kind": "bytes" } ] }"#;
        assert!(PipelineConfig::from_json(json).is_err());
    }
}
